//! Card text generation on top of the text provider.
//!
//! Carries the product's fixed generation settings and the per-operation
//! cleanup the card client expects.

use crate::services::prompts;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;

/// Writes card phrases and letters via the configured text model.
#[derive(Clone)]
pub struct CardWriter {
    provider: Arc<dyn TextProvider>,
}

impl CardWriter {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    fn params() -> GenerationParams {
        GenerationParams {
            temperature: Some(1.0),
            candidate_count: Some(1),
            stop_sequences: vec!["x".to_string()],
            ..GenerationParams::default()
        }
    }

    async fn generate(&self, prompt: String) -> Result<String, ProviderError> {
        let response = self.provider.generate(&prompt, &Self::params()).await?;
        response
            .text
            .ok_or_else(|| ProviderError::ApiError("Model returned no text".to_string()))
    }

    /// Short card phrase addressed to `target`, written as `text_type`.
    pub async fn phrase(
        &self,
        target: &str,
        sentiment: &str,
        text_type: &str,
    ) -> Result<String, ProviderError> {
        let text = self
            .generate(prompts::card_phrase(target, sentiment, text_type))
            .await?;
        Ok(text.trim().to_string())
    }

    /// Letter composed by the model from free-form context.
    ///
    /// The card renders the letter as a single block; double newlines from
    /// the model are collapsed to spaces.
    pub async fn ai_letter(&self, context: &str) -> Result<String, ProviderError> {
        let text = self.generate(prompts::ai_letter(context)).await?;
        Ok(text.trim().replace("\n\n", " "))
    }

    /// The user's own phrase, rewritten by the model.
    pub async fn polish_letter(&self, context: &str) -> Result<String, ProviderError> {
        let text = self.generate(prompts::polish_letter(context)).await?;
        Ok(text.trim().trim_matches('"').to_string())
    }
}
