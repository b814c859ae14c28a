//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock text provider returning a canned answer or a canned failure.
///
/// Every prompt it receives is recorded so callers can assert on the number
/// of upstream calls and on the prompt text.
pub struct MockTextProvider {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of `generate` calls received so far.
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.reply {
            Ok(_) => Ok(()),
            Err(message) => Err(ProviderError::NotConfigured(message.clone())),
        }
    }
}
