// src/llm/mod.rs
// External text-generation boundary.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiClient;

use anyhow::Result;
use async_trait::async_trait;

/// The single outbound seam to the hosted generative model.
///
/// One call per incoming request; no retries, no streaming, no multi-turn
/// state. Implementations are process-wide and read-only after construction.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` and return the model's raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
