//! Shared classification types for vehicle sourcing

use serde::{Deserialize, Serialize};

/// Rental market segment a vehicle competes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Economy,
    Compact,
    Midsize,
    Luxury,
    Suv,
    Truck,
}

impl VehicleClass {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Economy => "economy",
            VehicleClass::Compact => "compact",
            VehicleClass::Midsize => "midsize",
            VehicleClass::Luxury => "luxury",
            VehicleClass::Suv => "SUV",
            VehicleClass::Truck => "truck",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Competition intensity within a market segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            CompetitionLevel::Low => "low",
            CompetitionLevel::Medium => "medium",
            CompetitionLevel::High => "high",
        }
    }
}

/// Investment tier derived from a 0-10 ROI score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityTier {
    /// Score above 6: strong candidate
    Strong,
    /// Score above 3: worth a closer look
    Moderate,
    /// Everything else, including non-viable vehicles scored 0
    Weak,
}

impl OpportunityTier {
    /// Classify an ROI score into a tier
    pub fn from_score(score: f64) -> Self {
        if score > 6.0 {
            OpportunityTier::Strong
        } else if score > 3.0 {
            OpportunityTier::Moderate
        } else {
            OpportunityTier::Weak
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            OpportunityTier::Strong => "strong opportunity",
            OpportunityTier::Moderate => "moderate opportunity",
            OpportunityTier::Weak => "weak opportunity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(OpportunityTier::from_score(0.0), OpportunityTier::Weak);
        assert_eq!(OpportunityTier::from_score(3.0), OpportunityTier::Weak);
        assert_eq!(OpportunityTier::from_score(3.1), OpportunityTier::Moderate);
        assert_eq!(OpportunityTier::from_score(6.0), OpportunityTier::Moderate);
        assert_eq!(OpportunityTier::from_score(6.1), OpportunityTier::Strong);
        assert_eq!(OpportunityTier::from_score(10.0), OpportunityTier::Strong);
    }

    #[test]
    fn test_labels() {
        assert_eq!(VehicleClass::Suv.label(), "SUV");
        assert_eq!(CompetitionLevel::High.label(), "high");
        assert_eq!(OpportunityTier::Strong.label(), "strong opportunity");
    }
}
