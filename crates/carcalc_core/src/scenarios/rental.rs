use crate::config::CalculationInput;
use crate::evaluate::Evaluator;
use crate::model::RentalResult;

/// Rent paid over the horizon. No depreciation, taxes or opportunity cost apply.
pub fn calculate_rental(input: &CalculationInput) -> RentalResult {
    RentalResult {
        total_cost: input.monthly_rent * f64::from(input.analysis_period_months),
        monthly_cost: input.monthly_rent,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RentalEvaluator;

impl Evaluator for RentalEvaluator {
    type Output = RentalResult;

    fn evaluate(&self, input: &CalculationInput) -> RentalResult {
        calculate_rental(input)
    }
}
