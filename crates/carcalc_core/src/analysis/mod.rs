//! Month-by-month analyses
//!
//! Both analyses re-run every scenario at truncated horizons (month 1, 2, ...),
//! each time on a derived copy of the input:
//! - `break_even` - first month where renting has cost at least as much as buying
//! - `timeline` - cumulative cost of every option for every month
//!
//! `comparison` bundles the scenarios and the break-even search into one response.

mod break_even;
mod comparison;
mod timeline;

pub use break_even::BreakEvenSearch;
pub use comparison::{Comparison, DefaultComparison};
pub use timeline::TimelineBuilder;
