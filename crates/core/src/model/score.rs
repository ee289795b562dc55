use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::QuizId;

/// Display name used for leaderboard entries when none is configured.
pub const DEFAULT_PLAYER_NAME: &str = "Guest User";
/// Quiz label for entries persisted without one.
pub const DEFAULT_QUIZ_TYPE: &str = "General";

/// How a quiz session reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// The learner advanced past the last question.
    Finished,
    /// The countdown reached zero with auto-submit enabled.
    TimeExpired,
}

/// Final raw outcome of a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub quiz_id: QuizId,
    pub raw_score: u32,
    pub total_questions: u32,
    pub remaining_seconds: u32,
    pub completion: CompletionReason,
}

impl QuizResult {
    /// Score as a whole percentage of the actual question count, rounded half-up.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        percentage(self.raw_score, self.total_questions)
    }
}

/// `round(score / total * 100)` with round-half-up, computed without floats.
///
/// Returns 0 for an empty quiz and clamps scores above `total` to 100.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score.min(total));
    let total = u64::from(total);
    let pct = (200 * score + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}

//
// ─── LEADERBOARD ENTRY ─────────────────────────────────────────────────────────
//

/// One row of the local high-score list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub name: String,
    #[serde(rename = "score")]
    pub score_percent: u8,
    #[serde(rename = "date")]
    pub recorded_at: DateTime<Utc>,
    #[serde(default = "default_quiz_type")]
    pub quiz_type: String,
}

fn default_quiz_type() -> String {
    DEFAULT_QUIZ_TYPE.to_string()
}

impl ScoreEntry {
    #[must_use]
    pub fn from_result(
        result: &QuizResult,
        name: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name
        };
        Self {
            name,
            score_percent: result.percentage(),
            recorded_at,
            quiz_type: result.quiz_id.to_string(),
        }
    }
}
