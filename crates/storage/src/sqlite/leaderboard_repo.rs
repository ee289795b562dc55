use async_trait::async_trait;
use chrono::Utc;
use prep_core::model::ScoreEntry;
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{
    LEADERBOARD_KEY, LeaderboardRepository, StorageError, decode_entries, encode_entries,
};

impl SqliteRepository {
    async fn read_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.map(|row| {
            row.try_get::<String, _>("value")
                .map_err(|e| StorageError::Serialization(e.to_string()))
        })
        .transpose()
    }

    async fn write_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO kv_store (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(self.pool())
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl LeaderboardRepository for SqliteRepository {
    async fn load_entries(&self) -> Result<Vec<ScoreEntry>, StorageError> {
        match self.read_value(LEADERBOARD_KEY).await? {
            Some(raw) => decode_entries(&raw),
            None => Ok(Vec::new()),
        }
    }

    async fn save_entries(&self, entries: &[ScoreEntry]) -> Result<(), StorageError> {
        let raw = encode_entries(entries)?;
        self.write_value(LEADERBOARD_KEY, &raw).await
    }

    async fn clear_entries(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(LEADERBOARD_KEY)
            .execute(self.pool())
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}
