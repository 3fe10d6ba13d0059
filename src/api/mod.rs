// src/api/mod.rs
// API module with clean, organized structure

pub mod error;
pub mod http;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use types::*;
