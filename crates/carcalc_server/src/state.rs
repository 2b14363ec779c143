use std::sync::Arc;

use carcalc_core::analysis::DefaultComparison;

/// Shared across all requests
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub comparison: DefaultComparison,
}

impl AppState {
    pub fn new(opportunity_rate: f64) -> Self {
        Self {
            comparison: DefaultComparison::with_opportunity_rate(opportunity_rate),
        }
    }
}

pub type SharedState = Arc<AppState>;
