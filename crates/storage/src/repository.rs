use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use asked_core::model::{AuthSession, Preferences};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted auth session. The desktop
/// analog of the browser's `token` / `username` local-storage keys:
/// at most one session exists at a time.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetch the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn get_session(&self) -> Result<Option<AuthSession>, StorageError>;

    /// Persist the session, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn save_session(&self, session: &AuthSession) -> Result<(), StorageError>;

    /// Remove the persisted session. A no-op when none exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn clear_session(&self) -> Result<(), StorageError>;
}

/// Repository contract for display preferences (the `darkMode` flag).
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Fetch persisted preferences, if any were ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError>;

    /// Persist preferences, replacing any existing row.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preferences cannot be stored.
    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError>;
}

/// Aggregate of the local-store repositories an app instance needs.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    /// Build a `Storage` backed by in-memory repositories, for tests and
    /// prototyping.
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        Self {
            sessions: Arc::clone(&repo) as Arc<dyn SessionRepository>,
            preferences: repo,
        }
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Default)]
pub struct InMemoryRepository {
    session: Mutex<Option<AuthSession>>,
    preferences: Mutex<Option<Preferences>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn get_session(&self) -> Result<Option<AuthSession>, StorageError> {
        let guard = self
            .session
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_session(&self, session: &AuthSession) -> Result<(), StorageError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryRepository {
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError> {
        let guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(*preferences);
        Ok(())
    }
}
