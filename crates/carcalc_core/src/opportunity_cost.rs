//! Opportunity cost of immobilized capital
//!
//! Money sunk into a car could have been compounding at a reference rate instead.
//! The cost is the interest that capital would have earned, principal excluded.

use crate::config::DEFAULT_OPPORTUNITY_RATE;

/// Foregone compound earnings on `capital` over `years` at `annual_rate`
///
/// `years` may be fractional. Yields exactly zero when any of capital, years or
/// rate is zero.
pub fn opportunity_cost(capital: f64, years: f64, annual_rate: f64) -> f64 {
    capital * (1.0 + annual_rate).powf(years) - capital
}

/// Opportunity cost calculator bound to a reference rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpportunityCostCalculator {
    pub annual_rate: f64,
}

impl Default for OpportunityCostCalculator {
    fn default() -> Self {
        Self {
            annual_rate: DEFAULT_OPPORTUNITY_RATE,
        }
    }
}

impl OpportunityCostCalculator {
    #[must_use]
    pub fn new(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    pub fn calculate(&self, capital: f64, years: f64) -> f64 {
        opportunity_cost(capital, years, self.annual_rate)
    }
}
