//! Shared error types for the services crate.
//!
//! Every failure a view can see carries its fixed user-facing message in
//! the `Display` impl; the underlying cause rides along as `source` for
//! diagnostics.

use thiserror::Error;

use asked_core::model::CredentialError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

use crate::backend::{BackendConfigError, BackendError};

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// Local form validation failed; nothing was sent to the backend.
    #[error("{0}")]
    Invalid(#[from] CredentialError),
    /// The backend rejected the credentials; its error payload is shown raw.
    #[error("{0}")]
    Rejected(String),
    #[error("Login failed. Please try again.")]
    LoginFailed(#[source] BackendError),
    #[error("Registration failed. Please try again.")]
    RegistrationFailed(#[source] BackendError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SummarizerService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SummarizeError {
    #[error("Please provide text or upload and extract from a PDF.")]
    EmptyInput,
    #[error("Failed to summarize.")]
    Failed(#[source] BackendError),
}

/// Errors emitted by `FlashcardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("Please provide text content or upload a PDF")]
    EmptyInput,
    #[error("Failed to generate flashcards from text")]
    TextGeneration(#[source] BackendError),
    #[error("Failed to fetch flashcards")]
    FileGeneration(#[source] BackendError),
    #[error("Failed to load saved flashcards")]
    Load(#[source] BackendError),
    #[error("Failed to save flashcards")]
    Save(#[source] BackendError),
    #[error("Failed to delete flashcards")]
    Delete(#[source] BackendError),
    #[error("generated-set state is unavailable")]
    SetState,
}

/// Errors emitted by `DocumentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("Failed to upload PDF")]
    Upload(#[source] BackendError),
    #[error("Failed to extract text from PDF")]
    Extract(#[source] BackendError),
}

/// Errors emitted by `PreferencesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferencesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] BackendConfigError),
}
