//! Evaluator seam
//!
//! The month-by-month analyses only need a total cost out of each scenario, so
//! they are generic over these traits rather than over concrete evaluators.

use crate::config::CalculationInput;
use crate::model::{CashPurchaseResult, FinancedPurchaseResult, RentalResult};

/// Anything that reports a total cost over its horizon
pub trait TotalCost {
    fn total_cost(&self) -> f64;
}

impl TotalCost for f64 {
    fn total_cost(&self) -> f64 {
        *self
    }
}

impl TotalCost for CashPurchaseResult {
    fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

impl TotalCost for FinancedPurchaseResult {
    fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

impl TotalCost for RentalResult {
    fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

/// A pure scenario evaluator
///
/// Implementations must be referentially transparent: the same input always
/// yields the same output and nothing outside the result is touched.
pub trait Evaluator: Send + Sync {
    type Output: TotalCost;

    fn evaluate(&self, input: &CalculationInput) -> Self::Output;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    type Output = E::Output;

    fn evaluate(&self, input: &CalculationInput) -> Self::Output {
        (**self).evaluate(input)
    }
}
