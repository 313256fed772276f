use std::sync::Arc;

use crate::backend::BackendApi;
use crate::error::SummarizeError;

/// Requests AI summaries, with or without a user-supplied style prompt.
#[derive(Clone)]
pub struct SummarizerService {
    backend: Arc<dyn BackendApi>,
}

impl SummarizerService {
    #[must_use]
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }

    /// Summarize the given text.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::EmptyInput` without a network call when
    /// the text is blank, or `SummarizeError::Failed` when the backend
    /// call fails.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        self.backend
            .summarize(text)
            .await
            .map_err(SummarizeError::Failed)
    }

    /// Summarize with a custom prompt guiding the style, e.g.
    /// "Summarize in 5 bullet points". A blank prompt falls back to the
    /// plain summarize endpoint.
    ///
    /// # Errors
    ///
    /// Same failure modes as `summarize`.
    pub async fn summarize_with_prompt(
        &self,
        text: &str,
        prompt: &str,
    ) -> Result<String, SummarizeError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return self.summarize(text).await;
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        self.backend
            .custom_summarize(text, prompt)
            .await
            .map_err(SummarizeError::Failed)
    }
}
