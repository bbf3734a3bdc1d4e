//! Vehicle listing and stored record types

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use fleetscout_types::{Error, Result};

/// Oldest model year accepted at the intake boundary
pub const MIN_MODEL_YEAR: i32 = 1980;

/// Candidate vehicle supplied by a listing source
///
/// Carries no score; scoring happens when the listing is saved. Price and
/// mileage are unsigned, so negative values are unrepresentable; the
/// remaining intake rules live in [`VehicleListing::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleListing {
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Asking price in whole currency units
    pub price: u32,
    pub mileage: u32,
    /// Free-form city name
    pub location: String,
    /// Listing URL, may be a placeholder
    #[serde(default)]
    pub url: String,
    /// Daily rate the vehicle is expected to earn on the rental platform
    pub estimated_daily_rate: f64,
}

impl VehicleListing {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        price: u32,
        mileage: u32,
        location: impl Into<String>,
        estimated_daily_rate: f64,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            price,
            mileage,
            location: location.into(),
            url: String::new(),
            estimated_daily_rate,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Check the intake rules; listings failing them never reach the store
    pub fn validate(&self) -> Result<()> {
        if self.make.trim().is_empty() || self.model.trim().is_empty() {
            return Err(Error::InvalidInput(
                "make and model must be non-empty".to_string(),
            ));
        }
        let max_year = Utc::now().year() + 1;
        if self.year < MIN_MODEL_YEAR || self.year > max_year {
            return Err(Error::InvalidInput(format!(
                "model year {} outside plausible range {}..={}",
                self.year, MIN_MODEL_YEAR, max_year
            )));
        }
        if !self.estimated_daily_rate.is_finite() || self.estimated_daily_rate < 0.0 {
            return Err(Error::InvalidInput(format!(
                "estimated daily rate must be a non-negative number, got {}",
                self.estimated_daily_rate
            )));
        }
        Ok(())
    }

    /// Display name like "2019 Toyota Camry"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Scored vehicle as persisted in the store
///
/// `roi_score` is derived: the store recomputes it through the scoring
/// service on every save and never accepts it from caller input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Surrogate id assigned by the store on insert; stable across replaces
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: u32,
    pub mileage: u32,
    pub location: String,
    pub url: String,
    pub estimated_daily_rate: f64,
    /// Derived 0-10 score
    pub roi_score: f64,
    /// When the row was written; refreshed when a replace occurs
    pub date_added: DateTime<Utc>,
}

impl VehicleRecord {
    /// Display name like "2019 Toyota Camry"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camry() -> VehicleListing {
        VehicleListing::new("Toyota", "Camry", 2019, 18_000, 45_000, "Los Angeles", 55.0)
    }

    #[test]
    fn test_valid_listing_passes() {
        assert!(camry().validate().is_ok());
    }

    #[test]
    fn test_blank_make_rejected() {
        let mut listing = camry();
        listing.make = "  ".to_string();
        assert!(matches!(
            listing.validate(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_implausible_year_rejected() {
        let mut listing = camry();
        listing.year = 1975;
        assert!(listing.validate().is_err());

        listing.year = Utc::now().year() + 2;
        assert!(listing.validate().is_err());

        // Next model year is a legitimate listing
        listing.year = Utc::now().year() + 1;
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn test_bad_daily_rate_rejected() {
        let mut listing = camry();
        listing.estimated_daily_rate = -5.0;
        assert!(listing.validate().is_err());

        listing.estimated_daily_rate = f64::NAN;
        assert!(listing.validate().is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(camry().display_name(), "2019 Toyota Camry");
    }
}
