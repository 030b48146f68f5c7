//! Summaries from a text-completion service.
//!
//! [`SummaryComposer`] sends exactly one prompt per call to a
//! [`CompletionService`] and turns an empty reply into
//! [`DigestError::Generation`].

pub mod openai;
pub mod prompt;

pub use openai::OpenAiClient;

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::{DigestError, Result};
use crate::config::Model;
use crate::domain::FeedItemSummary;

/// Substituted for an empty completion where a best-effort result is wanted.
pub const FALLBACK_SUMMARY: &str = "No summary generated.";

/// A chat-style text completion API.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Single-turn completion. `Ok(None)` when the service answered without content.
    async fn complete(&self, model: Model, prompt: &str) -> Result<Option<String>>;
}

#[derive(Clone)]
pub struct SummaryComposer {
    service: Arc<dyn CompletionService>,
}

impl SummaryComposer {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    pub async fn summarize(&self, prompt: &str, model: Model) -> Result<String> {
        match self.service.complete(model, prompt).await? {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(DigestError::Generation),
        }
    }

    /// Like [`summarize`](Self::summarize), but an empty completion becomes
    /// [`FALLBACK_SUMMARY`]. Transport and API errors still propagate.
    pub async fn summarize_or_fallback(&self, prompt: &str, model: Model) -> Result<String> {
        match self.summarize(prompt, model).await {
            Err(DigestError::Generation) => {
                tracing::warn!("Completion service returned no content, using fallback text");
                Ok(FALLBACK_SUMMARY.to_string())
            }
            other => other,
        }
    }

    pub async fn summarize_category(
        &self,
        category: &str,
        items: &[FeedItemSummary],
        instructions: &str,
        model: Model,
    ) -> Result<String> {
        let prompt = prompt::category_prompt(category, &prompt::bullets(items), instructions);
        self.summarize_or_fallback(&prompt, model).await
    }

    pub async fn summarize_document(&self, content: &str, model: Model) -> Result<String> {
        self.summarize_or_fallback(&prompt::document_prompt(content), model)
            .await
    }
}
