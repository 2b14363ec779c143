use crate::config::CalculationInput;
use crate::depreciation::ownership_costs;
use crate::evaluate::Evaluator;
use crate::model::{CashPurchaseBreakdown, CashPurchaseResult};
use crate::opportunity_cost::OpportunityCostCalculator;

/// Total cost of buying the car outright
///
/// The whole price is immobilized, so opportunity cost runs on the full car value
/// over the fractional horizon. Total = residual value + running costs + foregone yield.
pub fn calculate_cash_purchase(
    input: &CalculationInput,
    opportunity: &OpportunityCostCalculator,
) -> CashPurchaseResult {
    let costs = ownership_costs(input);
    let opportunity_cost = opportunity.calculate(input.car_value, input.analysis_years());

    let total_cost = input.car_value - costs.depreciation
        + costs.ipva
        + costs.insurance
        + costs.maintenance
        + opportunity_cost;

    CashPurchaseResult {
        total_cost,
        breakdown: CashPurchaseBreakdown {
            depreciation: costs.depreciation,
            ipva: costs.ipva,
            insurance: costs.insurance,
            maintenance: costs.maintenance,
            opportunity_cost,
        },
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CashPurchaseEvaluator {
    pub opportunity: OpportunityCostCalculator,
}

impl CashPurchaseEvaluator {
    #[must_use]
    pub fn new(opportunity: OpportunityCostCalculator) -> Self {
        Self { opportunity }
    }
}

impl Evaluator for CashPurchaseEvaluator {
    type Output = CashPurchaseResult;

    fn evaluate(&self, input: &CalculationInput) -> CashPurchaseResult {
        calculate_cash_purchase(input, &self.opportunity)
    }
}
