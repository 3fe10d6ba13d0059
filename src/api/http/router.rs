// src/api/http/router.rs
// HTTP router composition

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{get_code_handler, health_handler, index_handler, journey_data_handler};
use crate::state::AppState;

/// Main HTTP router: the page, the dataset, and the code solution endpoint.
pub fn http_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Page
        .route("/", get(index_handler))

        // Journey dataset (verbatim passthrough)
        .route("/api/journey-data", get(journey_data_handler))

        // AI code solution
        .route("/api/get-code", post(get_code_handler))

        // Health
        .route("/api/health", get(health_handler))

        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
