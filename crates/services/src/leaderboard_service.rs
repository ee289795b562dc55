use std::sync::Arc;

use chrono::{DateTime, Utc};
use prep_core::Clock;
use prep_core::model::{QuizResult, ScoreEntry};
use storage::repository::{LeaderboardRepository, StorageError};

use crate::config::{DEFAULT_LEADERBOARD_LIMIT, QuizConfig};
use crate::error::LeaderboardError;

/// One leaderboard row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardItem {
    pub rank: usize,
    pub name: String,
    pub score_percent: u8,
    pub recorded_at: DateTime<Utc>,
    pub quiz_type: String,
}

/// Keeps the bounded, newest-first list of recent scores.
#[derive(Clone)]
pub struct LeaderboardService {
    clock: Clock,
    repo: Arc<dyn LeaderboardRepository>,
    player_name: String,
    limit: usize,
}

impl LeaderboardService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn LeaderboardRepository>) -> Self {
        let defaults = QuizConfig::default();
        Self {
            clock,
            repo,
            player_name: defaults.player_name,
            limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }

    /// Applies the player name and list bound from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &QuizConfig) -> Self {
        self.player_name.clone_from(&config.player_name);
        self.limit = config.leaderboard_limit.max(1);
        self
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Prepend an entry for `result` and keep only the most recent entries.
    ///
    /// A stored list that no longer decodes is replaced by one holding only this entry.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError` if the store is unreachable or cannot be written.
    pub async fn record_result(&self, result: &QuizResult) -> Result<ScoreEntry, LeaderboardError> {
        let entry = ScoreEntry::from_result(result, self.player_name.clone(), self.clock.now());

        let mut entries = self.load_entries().await?;
        entries.insert(0, entry.clone());
        entries.truncate(self.limit);
        self.repo.save_entries(&entries).await?;

        tracing::info!(
            quiz = %result.quiz_id,
            score = entry.score_percent,
            "recorded leaderboard entry"
        );
        Ok(entry)
    }

    /// Records `result`, logging instead of failing when storage is unavailable.
    ///
    /// Returns whether the entry was stored.
    pub async fn record_best_effort(&self, result: &QuizResult) -> bool {
        match self.record_result(result).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(quiz = %result.quiz_id, error = %err, "failed to record score");
                false
            }
        }
    }

    /// Stored entries, newest first. A list that no longer decodes reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError` if the store is unreachable.
    pub async fn list(&self) -> Result<Vec<LeaderboardItem>, LeaderboardError> {
        let entries = self.load_entries().await?;
        Ok(entries
            .into_iter()
            .take(self.limit)
            .enumerate()
            .map(|(idx, entry)| LeaderboardItem {
                rank: idx + 1,
                name: entry.name,
                score_percent: entry.score_percent,
                recorded_at: entry.recorded_at,
                quiz_type: entry.quiz_type,
            })
            .collect())
    }

    /// # Errors
    ///
    /// Returns `LeaderboardError` if the stored list cannot be removed.
    pub async fn clear(&self) -> Result<(), LeaderboardError> {
        self.repo.clear_entries().await?;
        Ok(())
    }

    async fn load_entries(&self) -> Result<Vec<ScoreEntry>, LeaderboardError> {
        match self.repo.load_entries().await {
            Ok(entries) => Ok(entries),
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%reason, "stored leaderboard is unreadable; starting over");
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }
}
