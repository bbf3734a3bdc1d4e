//! Domain services

pub mod market_outlook;
pub mod portfolio;
pub mod roi_calculator;

pub use market_outlook::{assess_market, MarketAssessment, MarketOutlook};
pub use portfolio::PortfolioSummary;
pub use roi_calculator::{calculate_roi, financial_breakdown, FinancialBreakdown};
