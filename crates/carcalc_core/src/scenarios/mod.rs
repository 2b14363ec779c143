//! Scenario evaluators
//!
//! One evaluator per way of getting the car. Each is a pure function of a
//! [`CalculationInput`](crate::config::CalculationInput).

mod cash;
mod financed;
mod rental;

pub use cash::{CashPurchaseEvaluator, calculate_cash_purchase};
pub use financed::{FinancedPurchaseEvaluator, calculate_financed_purchase, price_installment};
pub use rental::{RentalEvaluator, calculate_rental};
