//! Scripted generator for tests. Records how many times it was invoked.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::TextGenerator;

/// What the mock hands back on each call.
enum MockReply {
    Text(String),
    Failure(String),
}

pub struct MockGenerator {
    reply: MockReply,
    calls: AtomicUsize,
}

impl MockGenerator {
    /// A mock that always replies with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Text(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A mock that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Failure(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Failure(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}
