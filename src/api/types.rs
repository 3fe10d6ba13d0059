// src/api/types.rs
// Wire types for the code solution endpoint.

use serde::{Deserialize, Serialize};

/// Body of POST /api/get-code. Fields are optional so a missing field is a
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct GetCodeRequest {
    pub problem_name: Option<String>,
    pub language: Option<String>,
}

/// Successful response: the extracted code block (null when the model
/// replied without one) plus the surrounding explanation.
#[derive(Debug, Serialize)]
pub struct GetCodeResponse {
    pub code_solution: Option<String>,
    pub explanation: String,
}
