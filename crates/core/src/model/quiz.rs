use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("quiz must contain at least one question")]
    NoQuestions,

    #[error("duplicate question id in quiz: {id}")]
    DuplicateQuestion { id: QuestionId },
}

/// An immutable quiz: title, description and an ordered, non-empty question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDefinition {
    id: QuizId,
    title: String,
    description: String,
    questions: Vec<Question>,
}

impl QuizDefinition {
    /// # Errors
    ///
    /// Returns `QuizError` for a blank title, an empty question list, or repeated
    /// question ids.
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuizError::DuplicateQuestion {
                    id: question.id().clone(),
                });
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            "Prompt",
            vec!["a".into(), "b".into()],
            0,
            "",
        )
        .unwrap()
    }

    #[test]
    fn quiz_requires_questions() {
        let err = QuizDefinition::new(QuizId::new("q1").unwrap(), "Quiz", "", Vec::new())
            .unwrap_err();
        assert_eq!(err, QuizError::NoQuestions);
    }

    #[test]
    fn quiz_rejects_duplicate_question_ids() {
        let err = QuizDefinition::new(
            QuizId::new("q1").unwrap(),
            "Quiz",
            "",
            vec![question("a"), question("a")],
        )
        .unwrap_err();
        assert!(matches!(err, QuizError::DuplicateQuestion { .. }));
    }

    #[test]
    fn quiz_rejects_blank_title() {
        let err = QuizDefinition::new(QuizId::new("q1").unwrap(), " ", "", vec![question("a")])
            .unwrap_err();
        assert_eq!(err, QuizError::EmptyTitle);
    }

    #[test]
    fn quiz_keeps_question_order() {
        let quiz = QuizDefinition::new(
            QuizId::new("q1").unwrap(),
            "Quiz 1: People",
            "Leadership",
            vec![question("b"), question("a")],
        )
        .unwrap();
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.questions()[0].id().as_str(), "b");
        assert_eq!(quiz.title(), "Quiz 1: People");
    }
}
