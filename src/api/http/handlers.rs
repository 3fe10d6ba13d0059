// src/api/http/handlers.rs

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{GetCodeRequest, GetCodeResponse};
use crate::parse::parse_reply;
use crate::prompt::code_solution_prompt;
use crate::state::AppState;

/// Health check handler
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.gemini_model,
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Serve the single HTML page.
pub async fn index_handler(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let page = tokio::fs::read_to_string(state.config.index_path())
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to read index page: {}", e)))?;
    Ok(Html(page))
}

/// Serve the bundled journey dataset verbatim.
pub async fn journey_data_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let data = tokio::fs::read(state.config.journey_data_path())
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to read journey data: {}", e)))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], data))
}

/// Ask the model for a code solution and split the reply into code and
/// explanation. Exactly one upstream call; validation failures never reach
/// the model.
pub async fn get_code_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetCodeRequest>,
) -> ApiResult<Json<GetCodeResponse>> {
    let problem_name = request
        .problem_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("Problem name and language are required.".into()))?;
    let language = request
        .language
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("Problem name and language are required.".into()))?;

    info!("Code solution requested: '{}' in {}", problem_name, language);

    let prompt = code_solution_prompt(problem_name, language);

    let raw = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    let reply = parse_reply(&raw);

    Ok(Json(GetCodeResponse {
        code_solution: reply.code,
        explanation: reply.explanation,
    }))
}
