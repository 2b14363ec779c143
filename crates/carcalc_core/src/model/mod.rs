mod results;

pub use results::{
    BreakEvenResult, CalculationResponse, CashPurchaseBreakdown, CashPurchaseResult,
    FinancedPurchaseBreakdown, FinancedPurchaseResult, RentalResult, TimelineDataPoint,
    TimelineResponse,
};
