use std::sync::Arc;

use prep_core::{Catalog, Clock};
use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::leaderboard_service::LeaderboardService;
use crate::sessions::QuizLoopService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    config: QuizConfig,
    catalog: Arc<CatalogService>,
    leaderboard: Arc<LeaderboardService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the bundled
    /// catalog is malformed.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: QuizConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let catalog = Catalog::bundled()?;
        Ok(Self::from_parts(&storage, catalog, clock, config))
    }

    /// Build services over in-memory storage and the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled catalog is malformed.
    pub fn new_in_memory(clock: Clock, config: QuizConfig) -> Result<Self, AppServicesError> {
        let catalog = Catalog::bundled()?;
        Ok(Self::from_parts(&Storage::in_memory(), catalog, clock, config))
    }

    #[must_use]
    pub fn from_parts(storage: &Storage, catalog: Catalog, clock: Clock, config: QuizConfig) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::new(catalog), config.duration_secs));
        let leaderboard = Arc::new(
            LeaderboardService::new(clock, Arc::clone(&storage.leaderboard)).with_config(&config),
        );
        let quiz_loop = Arc::new(QuizLoopService::new(
            Arc::clone(&catalog),
            Arc::clone(&leaderboard),
            config.clone(),
        ));

        Self {
            config,
            catalog,
            leaderboard,
            quiz_loop,
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn leaderboard(&self) -> Arc<LeaderboardService> {
        Arc::clone(&self.leaderboard)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
