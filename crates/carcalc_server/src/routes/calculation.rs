use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::SharedState;

pub fn calculation_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/calculate", post(handlers::calculate))
        .route(
            "/api/calculate-timeline",
            post(handlers::calculate_timeline),
        )
}
