//! Rent vs. buy comparison engine for vehicles
//!
//! This crate evaluates three ways of getting a car over a fixed horizon:
//! - Cash purchase (depreciation, ownership taxes, insurance, maintenance, opportunity cost)
//! - Financed purchase (fixed-installment "Price system" loan on top of ownership costs)
//! - Rental (flat monthly fee)
//!
//! On top of the evaluators sit the month-by-month analyses: the break-even search
//! (first month where renting costs at least as much as buying) and the cost timeline.
//!
//! # Example
//!
//! ```ignore
//! use carcalc_core::config::CalculationInput;
//! use carcalc_core::analysis::DefaultComparison;
//!
//! let input = CalculationInput::builder(50_000.0, 2_200.0)
//!     .interest_rate_month(0.015)
//!     .financing_term_months(48)
//!     .analysis_period_months(48)
//!     .build();
//!
//! let response = DefaultComparison::default().execute(&input);
//! println!("{:?}", response.break_even);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod depreciation;
pub mod evaluate;
pub mod opportunity_cost;
pub mod scenarios;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{BreakEvenSearch, Comparison, DefaultComparison, TimelineBuilder};
pub use config::{CalculationInput, CalculationInputBuilder};
pub use evaluate::{Evaluator, TotalCost};
pub use scenarios::{CashPurchaseEvaluator, FinancedPurchaseEvaluator, RentalEvaluator};
