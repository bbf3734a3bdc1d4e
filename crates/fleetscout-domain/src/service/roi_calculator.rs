//! ROI scoring for candidate rental vehicles
//!
//! Fixed monthly model: 20 rental days, flat insurance and maintenance,
//! a proportional platform commission, and 1% monthly depreciation.
//! Everything here is pure; no I/O, no hidden state.

use serde::{Deserialize, Serialize};

use fleetscout_types::{Error, Result};

/// Rental days assumed per month (conservative)
pub const MONTHLY_RENTAL_DAYS: f64 = 20.0;

/// Flat monthly insurance cost in whole currency units
pub const MONTHLY_INSURANCE: f64 = 200.0;

/// Flat monthly maintenance cost in whole currency units
pub const MONTHLY_MAINTENANCE: f64 = 150.0;

/// Platform commission as a fraction of revenue
pub const PLATFORM_FEE_RATE: f64 = 0.15;

/// Depreciation per month as a fraction of purchase price
pub const MONTHLY_DEPRECIATION_RATE: f64 = 0.01;

/// Upper bound of the ROI score scale
pub const MAX_ROI_SCORE: f64 = 10.0;

/// Monthly financials for one vehicle at a given price and daily rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialBreakdown {
    pub monthly_revenue: f64,
    pub monthly_costs: f64,
    pub monthly_profit: f64,
    /// Months until cumulative profit covers the purchase price.
    /// None when the vehicle never pays itself back.
    pub payback_months: Option<f64>,
    /// Monthly profit as a percentage of purchase price, capped to 0-10
    pub roi_score: f64,
}

/// Compute the full monthly model for a purchase price and estimated
/// daily rate.
///
/// A vehicle whose monthly profit is zero or negative is simply
/// non-viable: it scores exactly 0 and has no payback period. Negative,
/// non-finite, or zero prices are rejected as invalid input; ROI on a
/// zero investment is undefined in this model.
pub fn financial_breakdown(purchase_price: f64, daily_rate: f64) -> Result<FinancialBreakdown> {
    validate_inputs(purchase_price, daily_rate)?;

    let monthly_revenue = daily_rate * MONTHLY_RENTAL_DAYS;
    let platform_fee = monthly_revenue * PLATFORM_FEE_RATE;
    let depreciation = purchase_price * MONTHLY_DEPRECIATION_RATE;
    let monthly_costs = MONTHLY_INSURANCE + MONTHLY_MAINTENANCE + platform_fee + depreciation;
    let monthly_profit = monthly_revenue - monthly_costs;

    if monthly_profit <= 0.0 {
        return Ok(FinancialBreakdown {
            monthly_revenue,
            monthly_costs,
            monthly_profit,
            payback_months: None,
            roi_score: 0.0,
        });
    }

    Ok(FinancialBreakdown {
        monthly_revenue,
        monthly_costs,
        monthly_profit,
        payback_months: Some(purchase_price / monthly_profit),
        roi_score: ((monthly_profit / purchase_price) * 100.0).clamp(0.0, MAX_ROI_SCORE),
    })
}

/// ROI score in [0, 10] for a purchase price and estimated daily rate
pub fn calculate_roi(purchase_price: f64, daily_rate: f64) -> Result<f64> {
    financial_breakdown(purchase_price, daily_rate).map(|breakdown| breakdown.roi_score)
}

fn validate_inputs(purchase_price: f64, daily_rate: f64) -> Result<()> {
    if !purchase_price.is_finite() || purchase_price < 0.0 {
        return Err(Error::InvalidInput(format!(
            "purchase price must be a non-negative number, got {}",
            purchase_price
        )));
    }
    if purchase_price == 0.0 {
        return Err(Error::InvalidInput(
            "purchase price must be positive".to_string(),
        ));
    }
    if !daily_rate.is_finite() || daily_rate < 0.0 {
        return Err(Error::InvalidInput(format!(
            "daily rate must be a non-negative number, got {}",
            daily_rate
        )));
    }
    Ok(())
}
