use crate::config::CalculationInput;
use crate::depreciation::ownership_costs;
use crate::evaluate::Evaluator;
use crate::model::{FinancedPurchaseBreakdown, FinancedPurchaseResult};
use crate::opportunity_cost::OpportunityCostCalculator;

/// Fixed monthly installment of a Price-system loan
///
/// `principal * i(1+i)^n / ((1+i)^n - 1)`, or plain `principal / n` when the
/// rate is zero.
///
/// Evaluated as `principal * i / (1 - (1+i)^-n)` so that `(1+i)^n` never has to
/// be formed; long terms approach `principal * i` instead of overflowing.
pub fn price_installment(principal: f64, monthly_rate: f64, term_months: u32) -> f64 {
    let n = f64::from(term_months);
    if monthly_rate == 0.0 {
        return principal / n;
    }

    let discount = (1.0 + monthly_rate).powf(-n);
    principal * monthly_rate / (1.0 - discount)
}

/// Total cost of buying the car with a down payment and a loan
///
/// Installments stop at the loan term even when the horizon is longer. Interest is
/// what was paid beyond a linear share of the principal, not a per-period
/// amortization split. Opportunity cost applies to the down payment only.
pub fn calculate_financed_purchase(
    input: &CalculationInput,
    opportunity: &OpportunityCostCalculator,
) -> FinancedPurchaseResult {
    let down_payment = input.car_value * input.down_payment_percent;
    let financed_amount = input.car_value - down_payment;

    let installment = price_installment(
        financed_amount,
        input.interest_rate_month,
        input.financing_term_months,
    );

    let installments_paid = input
        .analysis_period_months
        .min(input.financing_term_months);
    let total_installments = installment * f64::from(installments_paid);
    let principal_paid = financed_amount
        * (f64::from(installments_paid) / f64::from(input.financing_term_months));
    let total_interest = total_installments - principal_paid;

    let costs = ownership_costs(input);
    let opportunity_cost = opportunity.calculate(down_payment, input.analysis_years());

    let total_cost = down_payment
        + total_installments
        + costs.ipva
        + costs.insurance
        + costs.maintenance
        + costs.depreciation
        + opportunity_cost;

    FinancedPurchaseResult {
        total_cost,
        installment,
        total_interest,
        breakdown: FinancedPurchaseBreakdown {
            total_installments,
            total_interest,
            ipva: costs.ipva,
            insurance: costs.insurance,
            maintenance: costs.maintenance,
            depreciation: costs.depreciation,
            opportunity_cost,
        },
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FinancedPurchaseEvaluator {
    pub opportunity: OpportunityCostCalculator,
}

impl FinancedPurchaseEvaluator {
    #[must_use]
    pub fn new(opportunity: OpportunityCostCalculator) -> Self {
        Self { opportunity }
    }
}

impl Evaluator for FinancedPurchaseEvaluator {
    type Output = FinancedPurchaseResult;

    fn evaluate(&self, input: &CalculationInput) -> FinancedPurchaseResult {
        calculate_financed_purchase(input, &self.opportunity)
    }
}
