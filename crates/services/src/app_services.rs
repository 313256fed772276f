use std::sync::Arc;

use asked_core::Clock;
use storage::repository::Storage;

use crate::auth_service::AuthService;
use crate::backend::{BackendApi, BackendConfig, HttpBackend};
use crate::document_service::DocumentService;
use crate::error::AppServicesError;
use crate::flashcard_service::FlashcardService;
use crate::preferences_service::PreferencesService;
use crate::summarizer_service::SummarizerService;

/// Assembles the app-facing services over one backend and one local store.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    summarizer: Arc<SummarizerService>,
    flashcards: Arc<FlashcardService>,
    documents: Arc<DocumentService>,
    preferences: Arc<PreferencesService>,
}

impl AppServices {
    /// Build services backed by `SQLite` local storage and the HTTP
    /// backend at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the backend URL is invalid or local
    /// storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        api_url: &str,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let config = BackendConfig::new(api_url)?;
        let backend: Arc<dyn BackendApi> = Arc::new(HttpBackend::new(config));
        Ok(Self::new_with(backend, &storage, clock))
    }

    /// Build services over an existing backend and storage. Used by
    /// tests and the UI harness.
    #[must_use]
    pub fn new_with(backend: Arc<dyn BackendApi>, storage: &Storage, clock: Clock) -> Self {
        let auth = Arc::new(AuthService::new(
            Arc::clone(&backend),
            Arc::clone(&storage.sessions),
        ));
        let summarizer = Arc::new(SummarizerService::new(Arc::clone(&backend)));
        let flashcards = Arc::new(FlashcardService::new(Arc::clone(&backend), clock));
        let documents = Arc::new(DocumentService::new(Arc::clone(&backend)));
        let preferences = Arc::new(PreferencesService::new(Arc::clone(&storage.preferences)));

        Self {
            auth,
            summarizer,
            flashcards,
            documents,
            preferences,
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn summarizer(&self) -> Arc<SummarizerService> {
        Arc::clone(&self.summarizer)
    }

    #[must_use]
    pub fn flashcards(&self) -> Arc<FlashcardService> {
        Arc::clone(&self.flashcards)
    }

    #[must_use]
    pub fn documents(&self) -> Arc<DocumentService> {
        Arc::clone(&self.documents)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }
}
