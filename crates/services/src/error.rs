//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::CatalogError;
use prep_core::model::QuizId;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

use crate::sessions::{SessionAction, SessionPhase};

/// Errors emitted by quiz session operations.
///
/// An operation that returns an error leaves the session unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("unknown quiz: {id}")]
    UnknownQuiz { id: QuizId },
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: SessionAction,
        state: SessionPhase,
    },
    #[error("option {index} is out of range for {options} options")]
    OutOfRangeSelection { index: usize, options: usize },
    #[error("session lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors emitted by `LeaderboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LeaderboardError {
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
    Catalog(#[from] CatalogError),
}
