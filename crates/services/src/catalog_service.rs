use std::sync::Arc;

use prep_core::Catalog;
use prep_core::model::{DomainInfo, Flashcard, QuizDefinition, QuizId};

/// Summary of a quiz for list screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizListItem {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub question_count: usize,
    pub duration_secs: u32,
}

/// Read-only access to the bundled study catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    duration_secs: u32,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, duration_secs: u32) -> Self {
        Self {
            catalog,
            duration_secs,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quizzes(&self) -> Vec<QuizListItem> {
        self.catalog
            .quizzes()
            .iter()
            .map(|quiz| QuizListItem {
                id: quiz.id().clone(),
                title: quiz.title().to_string(),
                description: quiz.description().to_string(),
                question_count: quiz.question_count(),
                duration_secs: self.duration_secs,
            })
            .collect()
    }

    #[must_use]
    pub fn quiz(&self, id: &QuizId) -> Option<&QuizDefinition> {
        self.catalog.find_quiz(id)
    }

    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        self.catalog.flashcards()
    }

    #[must_use]
    pub fn domains(&self) -> &[DomainInfo] {
        self.catalog.domains()
    }

    #[must_use]
    pub fn bank_categories(&self) -> &[String] {
        self.catalog.bank_categories()
    }
}
