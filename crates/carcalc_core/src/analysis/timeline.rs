#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::CalculationInput;
use crate::evaluate::{Evaluator, TotalCost};
use crate::model::{TimelineDataPoint, TimelineResponse};
use crate::scenarios::{CashPurchaseEvaluator, FinancedPurchaseEvaluator, RentalEvaluator};

/// Cumulative cost of every option for each month of the horizon
///
/// Months are independent of each other, so with the `parallel` feature they are
/// evaluated on the rayon pool. Output is always ordered month 1..=horizon.
#[derive(Debug, Clone, Copy)]
pub struct TimelineBuilder<C, F, R> {
    cash: C,
    financed: F,
    rental: R,
}

impl Default
    for TimelineBuilder<CashPurchaseEvaluator, FinancedPurchaseEvaluator, RentalEvaluator>
{
    fn default() -> Self {
        Self::new(
            CashPurchaseEvaluator::default(),
            FinancedPurchaseEvaluator::default(),
            RentalEvaluator,
        )
    }
}

impl<C, F, R> TimelineBuilder<C, F, R>
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

    /// Costs at a single month
    pub fn point(&self, input: &CalculationInput, month: u32) -> TimelineDataPoint {
        let at_month = input.with_analysis_period(month);

        TimelineDataPoint {
            month,
            cash_cost: self.cash.evaluate(&at_month).total_cost(),
            financed_cost: self.financed.evaluate(&at_month).total_cost(),
            rental_cost: self.rental.evaluate(&at_month).total_cost(),
        }
    }

    /// One point per month, exactly `input.analysis_period_months` long
    pub fn calculate(&self, input: &CalculationInput) -> Vec<TimelineDataPoint> {
        let months = 1..=input.analysis_period_months;

        #[cfg(feature = "parallel")]
        let timeline = months
            .into_par_iter()
            .map(|month| self.point(input, month))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let timeline = months.map(|month| self.point(input, month)).collect();

        timeline
    }

    pub fn build(&self, input: &CalculationInput) -> TimelineResponse {
        TimelineResponse {
            timeline: self.calculate(input),
        }
    }
}
