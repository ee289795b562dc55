#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod config;
pub mod error;
pub mod leaderboard_service;
pub mod sessions;

pub use prep_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::{CatalogService, QuizListItem};
pub use config::{DEFAULT_LEADERBOARD_LIMIT, ExpiryPolicy, QuizConfig};
pub use error::{AppServicesError, LeaderboardError, SessionError};
pub use leaderboard_service::{LeaderboardItem, LeaderboardService};

pub use sessions::{
    ActiveQuiz, Advance, AdvanceResult, CheckOutcome, OptionState, QuizLoopService, QuizSession,
    ResultReporter, SessionSnapshot, SessionTimer, TickOutcome,
};
