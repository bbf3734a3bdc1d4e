//! Sourcing use cases - intake, ranking, portfolio and market views
//!
//! A sourcing run takes candidate listings from a feed, drops the ones
//! the options exclude, scores the survivors, and persists them. The
//! read side answers ranked and aggregate queries over the stored rows.

use serde::{Deserialize, Serialize};

use fleetscout_domain::model::{VehicleListing, VehicleRecord};
use fleetscout_domain::repository::VehicleRepository;
use fleetscout_domain::service::{financial_breakdown, FinancialBreakdown, PortfolioSummary};
use fleetscout_types::{OpportunityTier, Result};

pub use fleetscout_domain::service::{assess_market, MarketAssessment, MarketOutlook};

/// Filters applied to a sourcing run
#[derive(Debug, Clone, Default)]
pub struct SourcingOptions {
    /// Maximum asking price; pricier listings are skipped
    pub max_price: Option<u32>,

    /// Keep only listings from this market (case-insensitive)
    pub location: Option<String>,
}

impl SourcingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    fn matches(&self, listing: &VehicleListing) -> bool {
        if let Some(max_price) = self.max_price {
            if listing.price > max_price {
                return false;
            }
        }
        if let Some(ref location) = self.location {
            if !listing.location.eq_ignore_ascii_case(location) {
                return false;
            }
        }
        true
    }
}

/// Outcome of one sourcing run
#[derive(Debug, Clone)]
pub struct IntakeSummary {
    /// Records stored this run, in feed order
    pub stored: Vec<VehicleRecord>,

    /// Candidates dropped by the filters
    pub skipped: usize,
}

/// Score and persist every candidate that passes the filters
pub fn source_vehicles<R: VehicleRepository>(
    repo: &mut R,
    candidates: &[VehicleListing],
    options: &SourcingOptions,
) -> Result<IntakeSummary> {
    let mut stored = Vec::new();
    let mut skipped = 0;

    for candidate in candidates {
        if !options.matches(candidate) {
            skipped += 1;
            continue;
        }
        stored.push(repo.save(candidate)?);
    }

    log::info!(
        "sourcing run stored {} vehicles, skipped {}",
        stored.len(),
        skipped
    );
    Ok(IntakeSummary { stored, skipped })
}

/// Stored vehicle with its tier and monthly financials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedVehicle {
    pub record: VehicleRecord,
    pub tier: OpportunityTier,
    pub financials: FinancialBreakdown,
}

/// Every stored vehicle, highest score first, with derived detail
pub fn ranked_vehicles<R: VehicleRepository>(repo: &R) -> Result<Vec<RankedVehicle>> {
    repo.find_all()?
        .into_iter()
        .map(|record| {
            let financials =
                financial_breakdown(f64::from(record.price), record.estimated_daily_rate)?;
            Ok(RankedVehicle {
                tier: OpportunityTier::from_score(record.roi_score),
                financials,
                record,
            })
        })
        .collect()
}

/// Aggregate view of the stored portfolio
pub fn portfolio_summary<R: VehicleRepository>(repo: &R) -> Result<PortfolioSummary> {
    Ok(PortfolioSummary::from_records(&repo.find_all()?))
}
