//! Article generation: validation, prompt, one model call, fence stripping.

use super::formatting::strip_code_fences;
use super::prompt::build_prompt;
use super::providers::TextProvider;
use crate::error::ContentError;
use crate::models::{ContentRequest, GeneratedContent};
use std::sync::Arc;

/// Stateless generator shared by all requests.
#[derive(Clone)]
pub struct ContentService {
    provider: Arc<dyn TextProvider>,
}

impl ContentService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    /// Generate the article for `request`.
    ///
    /// The provider is not called when validation fails. No retries.
    pub async fn generate(
        &self,
        request: &ContentRequest,
    ) -> Result<GeneratedContent, ContentError> {
        request.validate()?;

        let prompt = build_prompt(request.country(), request.topic());
        let raw = self.provider.generate(&prompt).await?;

        tracing::debug!(
            model = %self.provider.model(),
            raw_len = raw.len(),
            "Received model output"
        );

        Ok(GeneratedContent(strip_code_fences(&raw)))
    }
}
