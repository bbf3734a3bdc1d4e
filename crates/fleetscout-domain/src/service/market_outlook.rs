//! Market outlook assessment for rental segments

use serde::{Deserialize, Serialize};

use crate::model::MarketSegment;
use fleetscout_types::CompetitionLevel;

/// Demand score a segment must exceed to be attractive
const FAVORABLE_DEMAND_THRESHOLD: u8 = 7;

/// Demand score above which a crowded segment is still worth flagging
const CONTESTED_DEMAND_THRESHOLD: u8 = 8;

/// Recommendation for one market segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketOutlook {
    /// Strong demand without heavy competition
    Favorable,
    /// Strong demand, but the segment is crowded
    Contested,
    /// Nothing actionable yet; keep watching
    Watch,
}

impl MarketOutlook {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            MarketOutlook::Favorable => "favorable",
            MarketOutlook::Contested => "contested",
            MarketOutlook::Watch => "watch",
        }
    }
}

/// Assessment of a single segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAssessment {
    pub segment: MarketSegment,
    pub outlook: MarketOutlook,
}

/// Classify caller-supplied market segments
pub fn assess_market(segments: &[MarketSegment]) -> Vec<MarketAssessment> {
    segments
        .iter()
        .map(|segment| MarketAssessment {
            segment: segment.clone(),
            outlook: classify(segment),
        })
        .collect()
}

fn classify(segment: &MarketSegment) -> MarketOutlook {
    if segment.demand_score > FAVORABLE_DEMAND_THRESHOLD
        && segment.competition != CompetitionLevel::High
    {
        MarketOutlook::Favorable
    } else if segment.demand_score > CONTESTED_DEMAND_THRESHOLD {
        MarketOutlook::Contested
    } else {
        MarketOutlook::Watch
    }
}
