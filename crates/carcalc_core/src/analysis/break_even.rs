use crate::config::CalculationInput;
use crate::evaluate::{Evaluator, TotalCost};
use crate::model::BreakEvenResult;
use crate::scenarios::{CashPurchaseEvaluator, FinancedPurchaseEvaluator, RentalEvaluator};

/// Sequential search for the rent-vs-buy crossover months
///
/// Walks months 1..=horizon in order and stops as soon as both crossovers are
/// known, so scenarios are never evaluated past the later of the two months.
#[derive(Debug, Clone, Copy)]
pub struct BreakEvenSearch<C, F, R> {
    cash: C,
    financed: F,
    rental: R,
}

impl Default
    for BreakEvenSearch<CashPurchaseEvaluator, FinancedPurchaseEvaluator, RentalEvaluator>
{
    fn default() -> Self {
        Self::new(
            CashPurchaseEvaluator::default(),
            FinancedPurchaseEvaluator::default(),
            RentalEvaluator,
        )
    }
}

impl<C, F, R> BreakEvenSearch<C, F, R>
where
    C: Evaluator,
    F: Evaluator,
    R: Evaluator,
{
    pub fn new(cash: C, financed: F, rental: R) -> Self {
        Self {
            cash,
            financed,
            rental,
        }
    }

    /// Find the first month where rent is at least the cost of each purchase option
    ///
    /// Ties count as break-even. A crossover not reached within
    /// `input.analysis_period_months` stays `None`.
    pub fn calculate(&self, input: &CalculationInput) -> BreakEvenResult {
        let mut result = BreakEvenResult::default();

        for month in 1..=input.analysis_period_months {
            let at_month = input.with_analysis_period(month);

            let cash_cost = self.cash.evaluate(&at_month).total_cost();
            let financed_cost = self.financed.evaluate(&at_month).total_cost();
            let rental_cost = self.rental.evaluate(&at_month).total_cost();

            tracing::trace!(month, cash_cost, financed_cost, rental_cost, "break-even step");

            if result.break_even_cash_months.is_none() && rental_cost >= cash_cost {
                tracing::debug!(month, "rental caught up with cash purchase");
                result.break_even_cash_months = Some(month);
            }

            if result.break_even_financed_months.is_none() && rental_cost >= financed_cost {
                tracing::debug!(month, "rental caught up with financed purchase");
                result.break_even_financed_months = Some(month);
            }

            if result.is_complete() {
                break;
            }
        }

        result
    }
}
