use async_trait::async_trait;
use reqwest::{Client, Response, multipart};
use serde_json::json;

use asked_core::model::{AuthSession, CardId, Flashcard};

use super::{
    BackendApi, BackendConfig, BackendError, LoginRequest, RegisterRequest, decode_flashcards,
};

/// `reqwest`-backed implementation of the backend contract.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn check(response: Response) -> Result<Response, BackendError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status { status, body })
    }

    async fn generated_cards(response: Response) -> Result<Vec<Flashcard>, BackendError> {
        // The generation endpoints pass the model output through as-is,
        // so the array sometimes arrives JSON-encoded inside a string.
        let text = Self::check(response).await?.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|err| BackendError::Decode(err.to_string()))?;
        decode_flashcards(value)
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint("/auth/login"))
            .json(request)
            .send()
            .await?;
        let session = Self::check(response).await?.json().await?;
        Ok(session)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint("/auth/register"))
            .json(request)
            .send()
            .await?;
        let session = Self::check(response).await?.json().await?;
        Ok(session)
    }

    async fn summarize(&self, input_text: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint("/ai/summarize"))
            .json(&json!({ "inputText": input_text }))
            .send()
            .await?;
        let summary = Self::check(response).await?.text().await?;
        Ok(summary)
    }

    async fn custom_summarize(
        &self,
        input_text: &str,
        prompt: &str,
    ) -> Result<String, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint("/ai/custom-summarize"))
            .json(&json!({ "inputText": input_text, "prompt": prompt }))
            .send()
            .await?;
        let summary = Self::check(response).await?.text().await?;
        Ok(summary)
    }

    async fn flashcards_from_text(
        &self,
        input_text: &str,
    ) -> Result<Vec<Flashcard>, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint("/ai/flashcards-from-text"))
            .json(&json!({ "inputText": input_text }))
            .send()
            .await?;
        Self::generated_cards(response).await
    }

    async fn flashcards_from_file(&self, filename: &str) -> Result<Vec<Flashcard>, BackendError> {
        let response = self
            .client
            .get(self.config.endpoint("/ai/flashcards"))
            .query(&[("filename", filename)])
            .send()
            .await?;
        Self::generated_cards(response).await
    }

    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<(), BackendError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(self.config.endpoint("/upload"))
            .multipart(form)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn extract(&self, filename: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .get(self.config.endpoint("/extract"))
            .query(&[("filename", filename)])
            .send()
            .await?;
        let text = Self::check(response).await?.text().await?;
        Ok(text)
    }

    async fn list_saved(&self, token: &str) -> Result<Vec<Flashcard>, BackendError> {
        let response = self
            .client
            .get(self.config.endpoint("/db/flashcards"))
            .bearer_auth(token)
            .send()
            .await?;
        let cards = Self::check(response).await?.json().await?;
        Ok(cards)
    }

    async fn save_cards(
        &self,
        token: &str,
        cards: &[Flashcard],
    ) -> Result<Vec<Flashcard>, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint("/db/flashcards"))
            .bearer_auth(token)
            .json(&cards)
            .send()
            .await?;
        let saved = Self::check(response).await?.json().await?;
        Ok(saved)
    }

    async fn delete_card(&self, token: &str, id: CardId) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(self.config.endpoint(&format!("/db/flashcards/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
