//! Market segment observations

use serde::{Deserialize, Serialize};

use fleetscout_types::{CompetitionLevel, VehicleClass};

/// Observed rental-market conditions for one vehicle segment
///
/// Supplied by an external market-data collaborator; nothing in the core
/// fabricates these figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSegment {
    pub class: VehicleClass,
    /// Average daily rental rate across active listings
    pub avg_daily_rate: f64,
    /// Renter demand on a 0-10 scale
    pub demand_score: u8,
    pub competition: CompetitionLevel,
}
