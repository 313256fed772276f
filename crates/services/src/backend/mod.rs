//! HTTP contract with the remote backend.
//!
//! Every piece of "real" functionality (auth, summarization, flashcard
//! generation, PDF extraction, saved-card persistence) lives behind these
//! endpoints; the client only reflects their responses.

use std::env;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use asked_core::model::{AuthSession, CardId, Flashcard};

mod http;

pub use http::HttpBackend;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the backend lives. Host configurable via `ASKED_API_URL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendConfigError {
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl BackendConfig {
    /// Validate and normalize a base URL.
    ///
    /// # Errors
    ///
    /// Returns `BackendConfigError` if the URL does not parse.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/').to_string();
        if Url::parse(&trimmed).is_err() {
            return Err(BackendConfigError::InvalidUrl(raw));
        }
        Ok(Self { base_url: trimmed })
    }

    /// Read `ASKED_API_URL`, falling back to the localhost default.
    ///
    /// # Errors
    ///
    /// Returns `BackendConfigError` if the configured URL does not parse.
    pub fn from_env() -> Result<Self, BackendConfigError> {
        match env::var("ASKED_API_URL") {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Errors surfaced by backend calls. Services map these onto the fixed
/// user-facing messages; only auth flows look inside `Status` for the
/// raw backend payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("backend returned status {status}")]
    Status { status: u16, body: String },
    #[error("backend response could not be decoded: {0}")]
    Decode(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The backend endpoints the app consumes, one method per route.
///
/// Implemented by `HttpBackend` in production and by scripted fakes in
/// tests.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// POST /auth/login
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, BackendError>;

    /// POST /auth/register
    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, BackendError>;

    /// POST /ai/summarize
    async fn summarize(&self, input_text: &str) -> Result<String, BackendError>;

    /// POST /ai/custom-summarize
    async fn custom_summarize(&self, input_text: &str, prompt: &str)
    -> Result<String, BackendError>;

    /// POST /ai/flashcards-from-text
    async fn flashcards_from_text(&self, input_text: &str)
    -> Result<Vec<Flashcard>, BackendError>;

    /// GET /ai/flashcards?filename=
    async fn flashcards_from_file(&self, filename: &str) -> Result<Vec<Flashcard>, BackendError>;

    /// POST /upload (multipart)
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<(), BackendError>;

    /// GET /extract?filename=
    async fn extract(&self, filename: &str) -> Result<String, BackendError>;

    /// GET /db/flashcards (authenticated)
    async fn list_saved(&self, token: &str) -> Result<Vec<Flashcard>, BackendError>;

    /// POST /db/flashcards (authenticated)
    async fn save_cards(
        &self,
        token: &str,
        cards: &[Flashcard],
    ) -> Result<Vec<Flashcard>, BackendError>;

    /// DELETE /db/flashcards/{id} (authenticated)
    async fn delete_card(&self, token: &str, id: CardId) -> Result<(), BackendError>;
}

/// Decodes a flashcard-generation response leniently: the backend returns
/// either a JSON array of cards or that same array JSON-encoded inside a
/// string (the raw model output is passed through unparsed).
pub(crate) fn decode_flashcards(value: serde_json::Value) -> Result<Vec<Flashcard>, BackendError> {
    match value {
        serde_json::Value::Array(_) => {
            serde_json::from_value(value).map_err(|err| BackendError::Decode(err.to_string()))
        }
        serde_json::Value::String(inner) => {
            serde_json::from_str(&inner).map_err(|err| BackendError::Decode(err.to_string()))
        }
        other => Err(BackendError::Decode(format!(
            "expected an array or string, got {other}"
        ))),
    }
}
