//! Calculation input
//!
//! `CalculationInput` carries everything the evaluators need. It is an immutable
//! value: analyses that need a shorter horizon derive a copy with
//! [`CalculationInput::with_analysis_period`] instead of mutating a shared instance.
//!
//! Optional parameters fall back to the module-level defaults below, both when
//! deserializing and when using [`CalculationInputBuilder`].

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

pub mod builder;

pub use builder::CalculationInputBuilder;

// ============================================================================
// Defaults
// ============================================================================

/// Share of the car price paid up front when financing
pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 0.25;
/// Yearly maintenance spend
pub const DEFAULT_MAINTENANCE_ANNUAL: f64 = 2000.0;
/// Yearly insurance premium as a fraction of the car's value
pub const DEFAULT_INSURANCE_RATE_ANNUAL: f64 = 0.06;
/// Yearly IPVA (ownership tax) as a fraction of the car's value
pub const DEFAULT_IPVA_RATE: f64 = 0.04;
/// Per-year depreciation factors; the last one repeats past the end
pub const DEFAULT_DEPRECIATION_RATES: [f64; 5] = [0.20, 0.15, 0.15, 0.10, 0.10];
/// Reference annual yield for opportunity cost (Selic, 13.75%)
pub const DEFAULT_OPPORTUNITY_RATE: f64 = 0.1375;

fn default_down_payment_percent() -> f64 {
    DEFAULT_DOWN_PAYMENT_PERCENT
}

fn default_maintenance_annual() -> f64 {
    DEFAULT_MAINTENANCE_ANNUAL
}

fn default_insurance_rate_annual() -> f64 {
    DEFAULT_INSURANCE_RATE_ANNUAL
}

fn default_ipva_rate() -> f64 {
    DEFAULT_IPVA_RATE
}

fn default_depreciation_rates() -> Vec<f64> {
    DEFAULT_DEPRECIATION_RATES.to_vec()
}

/// Parameters shared by every scenario evaluator
///
/// Callers are expected to hand in validated values: positive prices and month
/// counts, rates within `[0, 1]` and a non-empty depreciation sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct CalculationInput {
    /// Vehicle price
    pub car_value: f64,
    /// Monthly rental fee
    pub monthly_rent: f64,
    /// Monthly loan interest rate (0.015 = 1.5%)
    pub interest_rate_month: f64,
    /// Loan duration in months
    pub financing_term_months: u32,
    /// Horizon over which all costs are accumulated
    pub analysis_period_months: u32,
    #[serde(default = "default_down_payment_percent")]
    pub down_payment_percent: f64,
    #[serde(default = "default_maintenance_annual")]
    pub maintenance_annual: f64,
    #[serde(default = "default_insurance_rate_annual")]
    pub insurance_rate_annual: f64,
    #[serde(default = "default_ipva_rate")]
    pub ipva_rate: f64,
    /// Depreciation factor for each year of ownership
    #[serde(default = "default_depreciation_rates")]
    pub depreciation_rate: Vec<f64>,
}

impl CalculationInput {
    /// Start a builder with the two prices; everything else takes its default
    #[must_use]
    pub fn builder(car_value: f64, monthly_rent: f64) -> CalculationInputBuilder {
        CalculationInputBuilder::new(car_value, monthly_rent)
    }

    /// Copy of this input evaluated over `months` instead of the original horizon
    #[must_use]
    pub fn with_analysis_period(&self, months: u32) -> Self {
        Self {
            analysis_period_months: months,
            ..self.clone()
        }
    }

    /// Horizon expressed in (possibly fractional) years
    pub fn analysis_years(&self) -> f64 {
        f64::from(self.analysis_period_months) / 12.0
    }
}
