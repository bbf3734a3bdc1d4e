//! Portfolio-level statistics over stored vehicles

use serde::{Deserialize, Serialize};

use crate::model::VehicleRecord;
use fleetscout_types::OpportunityTier;

/// Aggregate view of every vehicle currently tracked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub vehicle_count: usize,
    /// Mean ROI score across the portfolio
    pub average_score: f64,
    /// Sum of asking prices in whole currency units
    pub total_investment: u64,
    /// Vehicles classified as strong opportunities
    pub strong_count: usize,
}

impl PortfolioSummary {
    pub fn from_records(records: &[VehicleRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let score_sum: f64 = records.iter().map(|record| record.roi_score).sum();
        let total_investment = records.iter().map(|record| u64::from(record.price)).sum();
        let strong_count = records
            .iter()
            .filter(|record| OpportunityTier::from_score(record.roi_score) == OpportunityTier::Strong)
            .count();

        Self {
            vehicle_count: records.len(),
            average_score: score_sum / records.len() as f64,
            total_investment,
            strong_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: i64, price: u32, roi_score: f64) -> VehicleRecord {
        VehicleRecord {
            id,
            make: "Toyota".to_string(),
            model: format!("Model {}", id),
            year: 2019,
            price,
            mileage: 40_000,
            location: "Los Angeles".to_string(),
            url: "#".to_string(),
            estimated_daily_rate: 55.0,
            roi_score,
            date_added: Utc::now(),
        }
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioSummary::from_records(&[]);
        assert_eq!(summary, PortfolioSummary::default());
    }

    #[test]
    fn test_portfolio_aggregates() {
        let records = vec![
            record(1, 18_000, 2.25),
            record(2, 12_000, 7.5),
            record(3, 1000, 0.0),
        ];
        let summary = PortfolioSummary::from_records(&records);
        assert_eq!(summary.vehicle_count, 3);
        assert_eq!(summary.total_investment, 31_000);
        assert_eq!(summary.strong_count, 1);
        assert!((summary.average_score - (2.25 + 7.5) / 3.0).abs() < 1e-9);
    }
}
