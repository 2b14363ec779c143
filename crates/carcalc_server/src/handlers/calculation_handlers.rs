use axum::{Json, extract::State};
use carcalc_core::model::{CalculationResponse, TimelineResponse};
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::SharedState;
use crate::validation::{self, CalculationRequest};

// ============================================================================
// Calculation Handlers
// ============================================================================

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn calculate(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<CalculationRequest>,
) -> ApiResult<Json<CalculationResponse>> {
    let input = validation::validate_calculation_request(&request)?;

    tracing::debug!(
        car_value = input.car_value,
        months = input.analysis_period_months,
        "Running comparison"
    );

    let response = tokio::task::spawn_blocking(move || state.comparison.execute(&input)).await?;

    Ok(Json(response))
}

pub async fn calculate_timeline(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<CalculationRequest>,
) -> ApiResult<Json<TimelineResponse>> {
    let input = validation::validate_calculation_request(&request)?;

    tracing::debug!(
        car_value = input.car_value,
        months = input.analysis_period_months,
        "Building timeline"
    );

    let response = tokio::task::spawn_blocking(move || state.comparison.timeline(&input)).await?;

    Ok(Json(response))
}
