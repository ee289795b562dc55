use std::fmt;

use prep_core::model::{Question, QuizId};

/// Learner intents that move a session forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Select,
    Check,
    Advance,
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionAction::Select => "select",
            SessionAction::Check => "check",
            SessionAction::Advance => "advance",
        };
        f.write_str(name)
    }
}

/// Where the current question sits in its select/check/advance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingSelection,
    Selected,
    Answered,
    Complete,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::AwaitingSelection => "awaiting a selection",
            SessionPhase::Selected => "an option is selected",
            SessionPhase::Answered => "the question is answered",
            SessionPhase::Complete => "the session is complete",
        };
        f.write_str(name)
    }
}

/// Highlight applied to one option of the current question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionState {
    #[default]
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

/// Read-only view of a session, published after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub quiz_id: QuizId,
    pub index: usize,
    pub total: usize,
    pub question: Question,
    pub selected: Option<usize>,
    pub answered: bool,
    pub score: u32,
    pub remaining_seconds: u32,
    pub is_complete: bool,
    pub can_check: bool,
    pub can_advance: bool,
    pub is_last_question: bool,
    pub option_states: Vec<OptionState>,
}

impl SessionSnapshot {
    /// Explanation for the current question, only once it has been answered.
    #[must_use]
    pub fn visible_explanation(&self) -> Option<&str> {
        if self.answered && !self.question.explanation().is_empty() {
            Some(self.question.explanation())
        } else {
            None
        }
    }
}

pub(crate) fn option_states(
    question: &Question,
    selected: Option<usize>,
    answered: bool,
) -> Vec<OptionState> {
    (0..question.option_count())
        .map(|index| {
            if answered {
                if question.is_correct(index) {
                    OptionState::Correct
                } else if selected == Some(index) {
                    OptionState::Incorrect
                } else {
                    OptionState::Neutral
                }
            } else if selected == Some(index) {
                OptionState::Selected
            } else {
                OptionState::Neutral
            }
        })
        .collect()
}
