//! Completion provider abstraction for recipe generation.
//!
//! A trait-based seam over the external text-generation API so the server
//! can run against the real endpoint or a deterministic fake.

mod fake;
mod openai;

pub use fake::FakeProvider;
pub use openai::OpenAiProvider;

use crate::config::LlmConfig;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error type for completion calls.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Trait for completion providers.
///
/// Implementations should be stateless and thread-safe; the provider owns
/// its credential and HTTP client.
#[async_trait]
pub trait CompletionProvider: Send + Sync + fmt::Debug {
    /// Send a prompt and get the generated text back.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Model name (e.g. "gpt-3.5-turbo-instruct").
    fn model_name(&self) -> &str;
}

/// Construct the provider named by the configuration.
pub fn provider_from_config(config: &LlmConfig) -> Arc<dyn CompletionProvider> {
    match config {
        LlmConfig::OpenAi {
            api_key,
            model,
            base_url,
        } => Arc::new(OpenAiProvider::new(
            api_key.clone(),
            model.clone(),
            base_url.clone(),
        )),
        LlmConfig::Fake => Arc::new(FakeProvider::default()),
    }
}
