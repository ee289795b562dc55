use async_trait::async_trait;
use prep_core::model::ScoreEntry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Fixed key under which the leaderboard is stored.
pub const LEADERBOARD_KEY: &str = "pmp-leaderboard";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Encodes leaderboard entries as the JSON document kept under [`LEADERBOARD_KEY`].
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_entries(entries: &[ScoreEntry]) -> Result<String, StorageError> {
    serde_json::to_string(entries).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decodes the JSON document kept under [`LEADERBOARD_KEY`].
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the stored value is not a valid entry list.
pub fn decode_entries(raw: &str) -> Result<Vec<ScoreEntry>, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Repository contract for the local high-score list.
///
/// Implementations store the whole list as one value; ordering and the size bound
/// are owned by the caller.
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Load all stored entries in stored order. A missing key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or the value is corrupt.
    async fn load_entries(&self) -> Result<Vec<ScoreEntry>, StorageError>;

    /// Replace the stored list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be written.
    async fn save_entries(&self, entries: &[ScoreEntry]) -> Result<(), StorageError>;

    /// Remove the stored list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn clear_entries(&self) -> Result<(), StorageError>;
}

/// Simple in-memory key-value repository for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value for `key`, as a durable store would hold it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn raw_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    /// Overwrite the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw_value(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}

#[async_trait]
impl LeaderboardRepository for InMemoryRepository {
    async fn load_entries(&self) -> Result<Vec<ScoreEntry>, StorageError> {
        match self.raw_value(LEADERBOARD_KEY)? {
            Some(raw) => decode_entries(&raw),
            None => Ok(Vec::new()),
        }
    }

    async fn save_entries(&self, entries: &[ScoreEntry]) -> Result<(), StorageError> {
        let raw = encode_entries(entries)?;
        self.put_raw_value(LEADERBOARD_KEY, raw)
    }

    async fn clear_entries(&self) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(LEADERBOARD_KEY);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub leaderboard: Arc<dyn LeaderboardRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let leaderboard: Arc<dyn LeaderboardRepository> = Arc::new(repo);
        Self { leaderboard }
    }
}
