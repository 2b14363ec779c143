//! Calculation input builder
//!
//! Fluent construction of [`CalculationInput`] with the documented defaults.
//!
//! # Example
//!
//! ```ignore
//! use carcalc_core::config::CalculationInput;
//!
//! let input = CalculationInput::builder(100_000.0, 3_000.0)
//!     .interest_rate_month(0.015)
//!     .financing_term_months(60)
//!     .analysis_period_months(36)
//!     .down_payment_percent(0.4)
//!     .build();
//! ```

use super::{
    CalculationInput, DEFAULT_DEPRECIATION_RATES, DEFAULT_DOWN_PAYMENT_PERCENT,
    DEFAULT_INSURANCE_RATE_ANNUAL, DEFAULT_IPVA_RATE, DEFAULT_MAINTENANCE_ANNUAL,
};

/// Loan term and horizon used when the builder is not told otherwise
const BUILDER_DEFAULT_MONTHS: u32 = 48;

/// Builder for [`CalculationInput`]
///
/// Unset loan parameters start at an interest-free 48-month loan analysed over
/// 48 months; optional costs start at the crate defaults.
#[derive(Debug, Clone)]
pub struct CalculationInputBuilder {
    input: CalculationInput,
}

impl CalculationInputBuilder {
    /// Create a builder for the given car price and monthly rent
    #[must_use]
    pub fn new(car_value: f64, monthly_rent: f64) -> Self {
        Self {
            input: CalculationInput {
                car_value,
                monthly_rent,
                interest_rate_month: 0.0,
                financing_term_months: BUILDER_DEFAULT_MONTHS,
                analysis_period_months: BUILDER_DEFAULT_MONTHS,
                down_payment_percent: DEFAULT_DOWN_PAYMENT_PERCENT,
                maintenance_annual: DEFAULT_MAINTENANCE_ANNUAL,
                insurance_rate_annual: DEFAULT_INSURANCE_RATE_ANNUAL,
                ipva_rate: DEFAULT_IPVA_RATE,
                depreciation_rate: DEFAULT_DEPRECIATION_RATES.to_vec(),
            },
        }
    }

    // =========================================================================
    // Loan
    // =========================================================================

    /// Monthly loan interest rate
    #[must_use]
    pub fn interest_rate_month(mut self, rate: f64) -> Self {
        self.input.interest_rate_month = rate;
        self
    }

    /// Loan duration in months
    #[must_use]
    pub fn financing_term_months(mut self, months: u32) -> Self {
        self.input.financing_term_months = months;
        self
    }

    /// Fraction of the price paid up front
    #[must_use]
    pub fn down_payment_percent(mut self, percent: f64) -> Self {
        self.input.down_payment_percent = percent;
        self
    }

    // =========================================================================
    // Horizon and ownership costs
    // =========================================================================

    /// Horizon in months
    #[must_use]
    pub fn analysis_period_months(mut self, months: u32) -> Self {
        self.input.analysis_period_months = months;
        self
    }

    #[must_use]
    pub fn maintenance_annual(mut self, amount: f64) -> Self {
        self.input.maintenance_annual = amount;
        self
    }

    #[must_use]
    pub fn insurance_rate_annual(mut self, rate: f64) -> Self {
        self.input.insurance_rate_annual = rate;
        self
    }

    #[must_use]
    pub fn ipva_rate(mut self, rate: f64) -> Self {
        self.input.ipva_rate = rate;
        self
    }

    /// Per-year depreciation factors; the last one is reused for later years
    #[must_use]
    pub fn depreciation_rate(mut self, rates: Vec<f64>) -> Self {
        self.input.depreciation_rate = rates;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> CalculationInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let input = CalculationInputBuilder::new(50_000.0, 2_200.0).build();

        assert_eq!(input.car_value, 50_000.0);
        assert_eq!(input.monthly_rent, 2_200.0);
        assert_eq!(input.interest_rate_month, 0.0);
        assert_eq!(input.financing_term_months, 48);
        assert_eq!(input.analysis_period_months, 48);
        assert_eq!(input.down_payment_percent, 0.25);
        assert_eq!(input.maintenance_annual, 2000.0);
        assert_eq!(input.insurance_rate_annual, 0.06);
        assert_eq!(input.ipva_rate, 0.04);
        assert_eq!(input.depreciation_rate, vec![0.20, 0.15, 0.15, 0.10, 0.10]);
    }

    #[test]
    fn builder_overrides() {
        let input = CalculationInputBuilder::new(80_000.0, 3_000.0)
            .interest_rate_month(0.02)
            .financing_term_months(36)
            .analysis_period_months(24)
            .down_payment_percent(0.5)
            .maintenance_annual(1500.0)
            .insurance_rate_annual(0.05)
            .ipva_rate(0.03)
            .depreciation_rate(vec![0.1])
            .build();

        assert_eq!(input.interest_rate_month, 0.02);
        assert_eq!(input.financing_term_months, 36);
        assert_eq!(input.analysis_period_months, 24);
        assert_eq!(input.down_payment_percent, 0.5);
        assert_eq!(input.maintenance_annual, 1500.0);
        assert_eq!(input.insurance_rate_annual, 0.05);
        assert_eq!(input.ipva_rate, 0.03);
        assert_eq!(input.depreciation_rate, vec![0.1]);
    }
}
