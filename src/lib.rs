// src/lib.rs

pub mod api;
pub mod config;
pub mod llm;
pub mod parse;
pub mod prompt;
pub mod state;

pub use config::Config;
pub use state::AppState;
