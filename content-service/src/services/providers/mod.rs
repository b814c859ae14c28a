//! Text-generation provider abstraction.
//!
//! The content service only needs single-shot text completion, so the trait is
//! deliberately narrow: one prompt in, one complete text out.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiTextProvider};
pub use mock::MockTextProvider;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for single-shot text generation backends (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Submit `prompt` and wait for the complete text answer.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
