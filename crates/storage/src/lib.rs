#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, LEADERBOARD_KEY, LeaderboardRepository, Storage, StorageError,
};
