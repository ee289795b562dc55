//! Tunables for quiz sessions and the leaderboard.

use std::time::Duration;

use prep_core::DEFAULT_QUIZ_SECONDS;
use prep_core::model::DEFAULT_PLAYER_NAME;
use serde::Deserialize;

/// Number of leaderboard entries kept by default.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 5;

/// What happens when the countdown reaches zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPolicy {
    /// Stop the countdown at zero; the learner may still finish the quiz.
    #[default]
    KeepOpen,
    /// Complete the session and report the score as soon as time runs out.
    AutoSubmit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub duration_secs: u32,
    #[serde(rename = "tick_period_ms", with = "duration_ms")]
    pub tick_period: Duration,
    pub expiry_policy: ExpiryPolicy,
    pub leaderboard_limit: usize,
    pub player_name: String,
    pub shuffle_questions: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_QUIZ_SECONDS,
            tick_period: Duration::from_secs(1),
            expiry_policy: ExpiryPolicy::KeepOpen,
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            shuffle_questions: false,
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn with_duration_secs(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Sets the timer period. A zero period is replaced by one millisecond.
    #[must_use]
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period.max(Duration::from_millis(1));
        self
    }

    #[must_use]
    pub fn with_expiry_policy(mut self, expiry_policy: ExpiryPolicy) -> Self {
        self.expiry_policy = expiry_policy;
        self
    }

    #[must_use]
    pub fn with_leaderboard_limit(mut self, limit: usize) -> Self {
        self.leaderboard_limit = limit.max(1);
        self
    }

    /// Sets the leaderboard display name. Blank names keep the guest default.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.player_name = name.trim().to_string();
        }
        self
    }

    #[must_use]
    pub fn with_shuffle_questions(mut self, shuffle: bool) -> Self {
        self.shuffle_questions = shuffle;
        self
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms.max(1)))
    }
}
