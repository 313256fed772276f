use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use asked_core::model::Preferences;

use crate::repository::{PreferencesRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl PreferencesRepository for SqliteRepository {
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT dark_mode
            FROM preferences
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let dark_mode: i64 = row
            .try_get("dark_mode")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(Some(Preferences {
            dark_mode: dark_mode != 0,
        }))
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (id, dark_mode, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                dark_mode = excluded.dark_mode,
                updated_at = excluded.updated_at
            ",
        )
        .bind(1_i64)
        .bind(i64::from(preferences.dark_mode))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
