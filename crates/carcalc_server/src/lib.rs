//! HTTP API for the carcalc comparison engine
//!
//! Thin transport over `carcalc_core`: requests are validated into a
//! `CalculationInput`, the CPU work runs on the blocking pool, and results are
//! returned as camelCase JSON.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Args, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use logging::init_logging;
pub use state::{AppState, SharedState};

/// Build the full application router for `config`
pub fn build_router(config: &ServerConfig) -> Router {
    let state: SharedState = Arc::new(AppState::new(config.opportunity_rate));

    routes::calculation_routes()
        .with_state(state)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// No configured origins means any origin is accepted
fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
