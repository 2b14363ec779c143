//! Evaluation results
//!
//! Output types of the scenario evaluators and the analyses built on them.
//! All of them serialize with camelCase field names.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

/// Where the money goes when buying with cash
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct CashPurchaseBreakdown {
    pub depreciation: f64,
    pub ipva: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub opportunity_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct CashPurchaseResult {
    pub total_cost: f64,
    pub breakdown: CashPurchaseBreakdown,
}

/// Where the money goes when buying through a loan
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct FinancedPurchaseBreakdown {
    /// Sum of installments paid within the horizon
    pub total_installments: f64,
    pub total_interest: f64,
    pub ipva: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub depreciation: f64,
    /// Opportunity cost of the down payment only
    pub opportunity_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct FinancedPurchaseResult {
    pub total_cost: f64,
    /// Fixed monthly installment
    pub installment: f64,
    pub total_interest: f64,
    pub breakdown: FinancedPurchaseBreakdown,
}

/// Renting has no ownership structure, so there is no breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct RentalResult {
    pub total_cost: f64,
    pub monthly_cost: f64,
}

/// First months at which renting costs at least as much as each purchase option
///
/// `None` (JSON `null`) when the crossover is not reached within the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct BreakEvenResult {
    pub break_even_cash_months: Option<u32>,
    pub break_even_financed_months: Option<u32>,
}

impl BreakEvenResult {
    pub fn is_complete(&self) -> bool {
        self.break_even_cash_months.is_some() && self.break_even_financed_months.is_some()
    }
}

/// Cumulative cost of every option at a given month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct TimelineDataPoint {
    pub month: u32,
    pub cash_cost: f64,
    pub financed_cost: f64,
    pub rental_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct TimelineResponse {
    /// One point per month, 1 through the horizon
    pub timeline: Vec<TimelineDataPoint>,
}

/// Full comparison of the three options over the original horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct CalculationResponse {
    pub cash_purchase: CashPurchaseResult,
    pub financed_purchase: FinancedPurchaseResult,
    pub rental: RentalResult,
    pub break_even: BreakEvenResult,
}
