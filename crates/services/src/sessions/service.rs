use std::fmt;

use prep_core::Countdown;
use prep_core::model::{CompletionReason, Question, QuizId, QuizResult};

use super::progress::{SessionAction, SessionPhase, SessionSnapshot, option_states};
use super::reporter::ResultReporter;
use crate::config::ExpiryPolicy;
use crate::error::SessionError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Feedback for a checked answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub correct: bool,
    pub selected: usize,
    pub correct_option: usize,
    pub explanation: String,
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The session moved on to the question at `index`.
    Next { index: usize },
    /// The last question was passed; the session is complete.
    Completed(QuizResult),
}

/// Result of one countdown step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Ticked { remaining: u32 },
    /// This tick brought the countdown to zero; the session stays open.
    Expired,
    /// This tick brought the countdown to zero and the session was auto-submitted.
    Submitted(QuizResult),
    /// Nothing to do: the session is complete or the countdown already sits at zero.
    Idle,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One timed attempt at a quiz.
///
/// Steps through the questions in order: select an option, check it, advance. The
/// score only changes in `check`, and the result is handed to the reporter exactly
/// once when the session completes.
pub struct QuizSession {
    quiz_id: QuizId,
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    answered: bool,
    score: u32,
    countdown: Countdown,
    expiry_policy: ExpiryPolicy,
    result: Option<QuizResult>,
    reporter: Option<Box<dyn ResultReporter>>,
}

impl QuizSession {
    /// Create a session over `questions` with a countdown of `duration_secs`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(
        quiz_id: QuizId,
        questions: Vec<Question>,
        duration_secs: u32,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            quiz_id,
            questions,
            current: 0,
            selected: None,
            answered: false,
            score: 0,
            countdown: Countdown::new(duration_secs),
            expiry_policy: ExpiryPolicy::default(),
            result: None,
            reporter: None,
        })
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: impl ResultReporter + 'static) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    #[must_use]
    pub fn with_expiry_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.expiry_policy = policy;
        self
    }

    #[must_use]
    pub fn quiz_id(&self) -> &QuizId {
        &self.quiz_id
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Final result, once the session is complete.
    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_complete() {
            SessionPhase::Complete
        } else if self.answered {
            SessionPhase::Answered
        } else if self.selected.is_some() {
            SessionPhase::Selected
        } else {
            SessionPhase::AwaitingSelection
        }
    }

    /// Choose an option for the current question, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` once the question is answered or the
    /// session is complete, and `SessionError::OutOfRangeSelection` for an index past
    /// the last option.
    pub fn select(&mut self, option_index: usize) -> Result<(), SessionError> {
        self.ensure_open(SessionAction::Select)?;
        if self.answered {
            return Err(self.invalid(SessionAction::Select));
        }

        let options = self.current_question().option_count();
        if option_index >= options {
            return Err(SessionError::OutOfRangeSelection {
                index: option_index,
                options,
            });
        }

        self.selected = Some(option_index);
        tracing::debug!(quiz = %self.quiz_id, index = self.current, option_index, "option selected");
        Ok(())
    }

    /// Grade the current selection. The score increases by one on a correct answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` without a selection, after the
    /// question was already checked, or once the session is complete.
    pub fn check(&mut self) -> Result<CheckOutcome, SessionError> {
        self.ensure_open(SessionAction::Check)?;
        let selected = match (self.answered, self.selected) {
            (false, Some(selected)) => selected,
            _ => return Err(self.invalid(SessionAction::Check)),
        };

        let question = &self.questions[self.current];
        let correct = question.is_correct(selected);
        let outcome = CheckOutcome {
            correct,
            selected,
            correct_option: question.correct_option(),
            explanation: question.explanation().to_string(),
        };

        if correct {
            self.score += 1;
        }
        self.answered = true;
        tracing::debug!(
            quiz = %self.quiz_id,
            index = self.current,
            correct,
            score = self.score,
            "answer checked"
        );
        Ok(outcome)
    }

    /// Move past the answered question, completing the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` if the current question has not been
    /// checked or the session is already complete.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        self.ensure_open(SessionAction::Advance)?;
        if !self.answered {
            return Err(self.invalid(SessionAction::Advance));
        }

        if self.is_last_question() {
            let result = self.complete(CompletionReason::Finished);
            return Ok(Advance::Completed(result));
        }

        self.current += 1;
        self.selected = None;
        self.answered = false;
        tracing::debug!(quiz = %self.quiz_id, index = self.current, "advanced to next question");
        Ok(Advance::Next {
            index: self.current,
        })
    }

    /// Remove one second from the countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_complete() {
            return TickOutcome::Idle;
        }

        if !self.countdown.tick() {
            // A zero-length countdown never ticks, so it still needs submitting.
            if self.expiry_policy == ExpiryPolicy::AutoSubmit {
                return TickOutcome::Submitted(self.complete(CompletionReason::TimeExpired));
            }
            return TickOutcome::Idle;
        }

        if !self.countdown.is_expired() {
            return TickOutcome::Ticked {
                remaining: self.countdown.remaining(),
            };
        }

        match self.expiry_policy {
            ExpiryPolicy::KeepOpen => {
                tracing::warn!(quiz = %self.quiz_id, "quiz time expired; session left open");
                TickOutcome::Expired
            }
            ExpiryPolicy::AutoSubmit => {
                tracing::warn!(quiz = %self.quiz_id, "quiz time expired; submitting");
                TickOutcome::Submitted(self.complete(CompletionReason::TimeExpired))
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let question = self.current_question();
        let complete = self.is_complete();
        SessionSnapshot {
            quiz_id: self.quiz_id.clone(),
            index: self.current,
            total: self.questions.len(),
            question: question.clone(),
            selected: self.selected,
            answered: self.answered,
            score: self.score,
            remaining_seconds: self.countdown.remaining(),
            is_complete: complete,
            can_check: !complete && !self.answered && self.selected.is_some(),
            can_advance: !complete && self.answered,
            is_last_question: self.is_last_question(),
            option_states: option_states(question, self.selected, self.answered),
        }
    }

    fn ensure_open(&self, action: SessionAction) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(self.invalid(action));
        }
        Ok(())
    }

    fn invalid(&self, action: SessionAction) -> SessionError {
        SessionError::InvalidTransition {
            action,
            state: self.phase(),
        }
    }

    fn complete(&mut self, completion: CompletionReason) -> QuizResult {
        let result = QuizResult {
            quiz_id: self.quiz_id.clone(),
            raw_score: self.score,
            total_questions: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
            remaining_seconds: self.countdown.remaining(),
            completion,
        };
        self.result = Some(result.clone());
        tracing::info!(
            quiz = %self.quiz_id,
            score = result.raw_score,
            total = result.total_questions,
            ?completion,
            "quiz session completed"
        );

        if let Some(mut reporter) = self.reporter.take() {
            reporter.report(&result);
        }
        result
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("quiz_id", &self.quiz_id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("answered", &self.answered)
            .field("score", &self.score)
            .field("countdown", &self.countdown)
            .field("expiry_policy", &self.expiry_policy)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
