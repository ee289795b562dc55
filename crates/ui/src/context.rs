use std::sync::Arc;

use prep_core::model::Language;
use services::{CatalogService, LeaderboardService, QuizLoopService};

pub trait UiApp: Send + Sync {
    fn language(&self) -> Language;

    fn catalog(&self) -> Arc<CatalogService>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
    fn leaderboard(&self) -> Arc<LeaderboardService>;
}

#[derive(Clone)]
pub struct AppContext {
    language: Language,
    catalog: Arc<CatalogService>,
    quiz_loop: Arc<QuizLoopService>,
    leaderboard: Arc<LeaderboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            language: app.language(),
            catalog: app.catalog(),
            quiz_loop: app.quiz_loop(),
            leaderboard: app.leaderboard(),
        }
    }

    /// Language the window opens in; the header toggle switches it afterwards.
    #[must_use]
    pub fn initial_language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn leaderboard(&self) -> Arc<LeaderboardService> {
        Arc::clone(&self.leaderboard)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
