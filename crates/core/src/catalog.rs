//! Read-only study catalog: quizzes, flashcards, exam domains and bank categories.
//!
//! The catalog is bundled data, so it is parsed once and never mutated. Raw JSON
//! records are converted through the domain constructors, so a loaded catalog
//! only contains valid questions and quizzes.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    DomainInfo, Flashcard, FlashcardId, ParseIdError, Question, QuestionError, QuestionId,
    QuizDefinition, QuizError, QuizId,
};

/// Catalog shipped with the application.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no quizzes")]
    Empty,

    #[error(transparent)]
    Id(#[from] ParseIdError),

    #[error("duplicate quiz id: {id}")]
    DuplicateQuiz { id: QuizId },

    #[error("duplicate flashcard id: {id}")]
    DuplicateFlashcard { id: FlashcardId },

    #[error("domain weights must sum to 100, got {sum}")]
    DomainWeights { sum: u32 },

    #[error("invalid quiz {id}: {source}")]
    Quiz {
        id: QuizId,
        #[source]
        source: QuizError,
    },

    #[error("invalid question {question} in quiz {quiz}: {source}")]
    Question {
        quiz: QuizId,
        question: QuestionId,
        #[source]
        source: QuestionError,
    },
}

//
// ─── RAW RECORDS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    #[serde(default)]
    domains: Vec<RawDomain>,
    #[serde(default)]
    flashcards: Vec<RawFlashcard>,
    quizzes: Vec<RawQuiz>,
    #[serde(default)]
    bank_categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawDomain {
    name: String,
    weight: u8,
    #[serde(default)]
    topics: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawFlashcard {
    id: String,
    term: String,
    definition: String,
}

#[derive(Debug, Deserialize)]
struct RawQuiz {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    id: String,
    text: String,
    options: Vec<String>,
    correct_answer: usize,
    #[serde(default)]
    explanation: String,
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    quizzes: Vec<QuizDefinition>,
    flashcards: Vec<Flashcard>,
    domains: Vec<DomainInfo>,
    bank_categories: Vec<String>,
}

impl Catalog {
    /// Parses the catalog bundled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled document is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and the other variants for
    /// content that fails domain validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        if raw.quizzes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut quiz_ids = HashSet::new();
        let mut quizzes = Vec::with_capacity(raw.quizzes.len());
        for raw_quiz in raw.quizzes {
            let quiz = build_quiz(raw_quiz)?;
            if !quiz_ids.insert(quiz.id().clone()) {
                return Err(CatalogError::DuplicateQuiz {
                    id: quiz.id().clone(),
                });
            }
            quizzes.push(quiz);
        }

        let mut card_ids = HashSet::new();
        let mut flashcards = Vec::with_capacity(raw.flashcards.len());
        for card in raw.flashcards {
            let id = FlashcardId::new(card.id)?;
            if !card_ids.insert(id.clone()) {
                return Err(CatalogError::DuplicateFlashcard { id });
            }
            flashcards.push(Flashcard {
                id,
                term: card.term,
                definition: card.definition,
            });
        }

        let domains: Vec<DomainInfo> = raw
            .domains
            .into_iter()
            .map(|d| DomainInfo {
                name: d.name,
                weight_percent: d.weight,
                topics: d.topics,
            })
            .collect();
        if !domains.is_empty() {
            let sum: u32 = domains.iter().map(|d| u32::from(d.weight_percent)).sum();
            if sum != 100 {
                return Err(CatalogError::DomainWeights { sum });
            }
        }

        Ok(Self {
            quizzes,
            flashcards,
            domains,
            bank_categories: raw.bank_categories,
        })
    }

    #[must_use]
    pub fn quizzes(&self) -> &[QuizDefinition] {
        &self.quizzes
    }

    #[must_use]
    pub fn find_quiz(&self, id: &QuizId) -> Option<&QuizDefinition> {
        self.quizzes.iter().find(|quiz| quiz.id() == id)
    }

    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    #[must_use]
    pub fn domains(&self) -> &[DomainInfo] {
        &self.domains
    }

    #[must_use]
    pub fn bank_categories(&self) -> &[String] {
        &self.bank_categories
    }
}

fn build_quiz(raw: RawQuiz) -> Result<QuizDefinition, CatalogError> {
    let quiz_id = QuizId::new(raw.id)?;
    let mut questions = Vec::with_capacity(raw.questions.len());
    for q in raw.questions {
        let question_id = QuestionId::new(q.id)?;
        let question = Question::new(
            question_id.clone(),
            q.text,
            q.options,
            q.correct_answer,
            q.explanation,
        )
        .map_err(|source| CatalogError::Question {
            quiz: quiz_id.clone(),
            question: question_id,
            source,
        })?;
        questions.push(question);
    }

    QuizDefinition::new(quiz_id.clone(), raw.title, raw.description, questions).map_err(
        |source| CatalogError::Quiz {
            id: quiz_id,
            source,
        },
    )
}
