use std::sync::Arc;

use asked_core::model::Preferences;
use storage::repository::PreferencesRepository;

use crate::error::PreferencesError;

/// Loads and persists display preferences.
#[derive(Clone)]
pub struct PreferencesService {
    repo: Arc<dyn PreferencesRepository>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferencesRepository>) -> Self {
        Self { repo }
    }

    /// Load persisted preferences (or defaults if never saved).
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` on storage failures.
    pub async fn load(&self) -> Result<Preferences, PreferencesError> {
        let preferences = self.repo.get_preferences().await?;
        Ok(preferences.unwrap_or_default())
    }

    /// Persist the dark-mode flag.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` on storage failures.
    pub async fn set_dark_mode(&self, dark_mode: bool) -> Result<(), PreferencesError> {
        self.repo
            .save_preferences(&Preferences::with_dark_mode(dark_mode))
            .await?;
        Ok(())
    }
}
