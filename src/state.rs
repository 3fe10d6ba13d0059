// src/state.rs

use std::sync::Arc;

use crate::config::Config;
use crate::llm::TextGenerator;

/// Shared application state, read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(config: Arc<Config>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { config, generator }
    }
}
