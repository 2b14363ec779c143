use crate::config::CalculationInput;
use crate::evaluate::Evaluator;
use crate::model::{
    CalculationResponse, CashPurchaseResult, FinancedPurchaseResult, RentalResult,
    TimelineResponse,
};
use crate::opportunity_cost::OpportunityCostCalculator;
use crate::scenarios::{CashPurchaseEvaluator, FinancedPurchaseEvaluator, RentalEvaluator};

use super::{BreakEvenSearch, TimelineBuilder};

/// Runs every scenario on the original horizon and bundles the results
///
/// No computation of its own: cash, financed, rental and the break-even search are
/// each evaluated once on the untouched input.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<C, F, R> {
    cash: C,
    financed: F,
    rental: R,
}

pub type DefaultComparison =
    Comparison<CashPurchaseEvaluator, FinancedPurchaseEvaluator, RentalEvaluator>;

impl Default for DefaultComparison {
    fn default() -> Self {
        Self::with_opportunity_rate(crate::config::DEFAULT_OPPORTUNITY_RATE)
    }
}

impl DefaultComparison {
    /// Real evaluators with opportunity cost measured against `annual_rate`
    #[must_use]
    pub fn with_opportunity_rate(annual_rate: f64) -> Self {
        let opportunity = OpportunityCostCalculator::new(annual_rate);
        Self::new(
            CashPurchaseEvaluator::new(opportunity),
            FinancedPurchaseEvaluator::new(opportunity),
            RentalEvaluator,
        )
    }
}

impl<C, F, R> Comparison<C, F, R>
where
    C: Evaluator<Output = CashPurchaseResult>,
    F: Evaluator<Output = FinancedPurchaseResult>,
    R: Evaluator<Output = RentalResult>,
{
    pub fn new(cash: C, financed: F, rental: R) -> Self {
        Self {
            cash,
            financed,
            rental,
        }
    }

    pub fn execute(&self, input: &CalculationInput) -> CalculationResponse {
        let break_even =
            BreakEvenSearch::new(&self.cash, &self.financed, &self.rental).calculate(input);

        CalculationResponse {
            cash_purchase: self.cash.evaluate(input),
            financed_purchase: self.financed.evaluate(input),
            rental: self.rental.evaluate(input),
            break_even,
        }
    }

    /// Cost timeline using the same evaluators
    pub fn timeline(&self, input: &CalculationInput) -> TimelineResponse {
        TimelineBuilder::new(&self.cash, &self.financed, &self.rental).build(input)
    }
}
