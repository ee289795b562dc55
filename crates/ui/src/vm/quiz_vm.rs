use prep_core::model::{Question, QuizResult, percentage};
use services::{OptionState, SessionSnapshot};

use crate::vm::labels::Labels;
use crate::vm::time_fmt::format_countdown;

/// One answer button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.state {
            OptionState::Neutral => "option",
            OptionState::Selected => "option option--selected",
            OptionState::Correct => "option option--correct",
            OptionState::Incorrect => "option option--incorrect",
        }
    }
}

/// Everything the quiz screen renders for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub counter: String,
    pub countdown: String,
    pub time_is_up: bool,
    pub progress_percent: u32,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub can_select: bool,
    pub can_check: bool,
    pub show_advance: bool,
    pub advance_label: &'static str,
    pub explanation: Option<String>,
}

impl QuizVm {
    #[must_use]
    pub fn from_snapshot(snapshot: &SessionSnapshot, labels: &Labels) -> Self {
        Self {
            counter: labels.question_counter(snapshot.index + 1, snapshot.total),
            countdown: format_countdown(snapshot.remaining_seconds),
            time_is_up: snapshot.remaining_seconds == 0 && !snapshot.is_complete,
            progress_percent: progress_percent(snapshot.index, snapshot.total),
            prompt: snapshot.question.prompt().to_string(),
            options: map_options(&snapshot.question, &snapshot.option_states),
            can_select: !snapshot.answered && !snapshot.is_complete,
            can_check: snapshot.can_check,
            show_advance: snapshot.can_advance,
            advance_label: labels.advance_label(snapshot.is_last_question),
            explanation: snapshot.visible_explanation().map(str::to_string),
        }
    }
}

/// Share of the quiz reached, counting the current question: `(index + 1) / total`.
#[must_use]
pub fn progress_percent(index: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let reached = (index + 1).min(total);
    u32::try_from(reached * 100 / total).unwrap_or(100)
}

fn map_options(question: &Question, states: &[OptionState]) -> Vec<OptionVm> {
    question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionVm {
            index,
            letter: Question::option_letter(index),
            text: text.clone(),
            state: states.get(index).copied().unwrap_or_default(),
        })
        .collect()
}

/// Final screen after the last question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub headline: &'static str,
    pub percentage_label: String,
    pub summary: String,
    pub recorded: bool,
}

impl QuizResultVm {
    #[must_use]
    pub fn new(result: &QuizResult, recorded: bool, labels: &Labels) -> Self {
        Self {
            headline: labels.quiz_completed,
            percentage_label: format!("{}%", result.percentage()),
            summary: labels.result_summary(result.raw_score, result.total_questions),
            recorded,
        }
    }

    /// Result screen for a session the countdown submitted.
    #[must_use]
    pub fn from_snapshot(snapshot: &SessionSnapshot, labels: &Labels) -> Self {
        let total = u32::try_from(snapshot.total).unwrap_or(u32::MAX);
        Self {
            headline: labels.quiz_completed,
            percentage_label: format!("{}%", percentage(snapshot.score, total)),
            summary: labels.result_summary(snapshot.score, total),
            recorded: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{CompletionReason, Language, QuestionId, QuizId};
    use services::QuizSession;

    fn session() -> QuizSession {
        let questions = vec![
            Question::new(
                QuestionId::new("a").unwrap(),
                "Who leads?",
                vec!["PM".into(), "Sponsor".into(), "Team".into()],
                2,
                "Servant leadership.",
            )
            .unwrap(),
            Question::new(
                QuestionId::new("b").unwrap(),
                "Which chart?",
                vec!["Burnup".into(), "Gantt".into()],
                0,
                "",
            )
            .unwrap(),
        ];
        QuizSession::new(QuizId::new("q1").unwrap(), questions, 900).unwrap()
    }

    #[test]
    fn progress_counts_current_question() {
        assert_eq!(progress_percent(0, 2), 50);
        assert_eq!(progress_percent(1, 2), 100);
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn fresh_question_hides_feedback() {
        let labels = Labels::for_language(Language::En);
        let vm = QuizVm::from_snapshot(&session().snapshot(), labels);
        assert_eq!(vm.counter, "Question 1 of 2");
        assert_eq!(vm.countdown, "15:00");
        assert!(vm.can_select);
        assert!(!vm.can_check);
        assert!(!vm.show_advance);
        assert!(vm.explanation.is_none());
        assert_eq!(vm.options[1].letter, 'B');
        assert_eq!(vm.options[1].class(), "option");
    }

    #[test]
    fn answered_question_shows_feedback() {
        let labels = Labels::for_language(Language::En);
        let mut session = session();
        session.select(0).unwrap();
        session.check().unwrap();

        let vm = QuizVm::from_snapshot(&session.snapshot(), labels);
        assert!(!vm.can_select);
        assert!(vm.show_advance);
        assert_eq!(vm.advance_label, "Next");
        assert_eq!(vm.explanation.as_deref(), Some("Servant leadership."));
        assert_eq!(vm.options[0].state, OptionState::Incorrect);
        assert_eq!(vm.options[2].class(), "option option--correct");
    }

    #[test]
    fn last_question_offers_finish() {
        let labels = Labels::for_language(Language::Es);
        let mut session = session();
        session.select(2).unwrap();
        session.check().unwrap();
        session.advance().unwrap();
        session.select(0).unwrap();
        session.check().unwrap();

        let vm = QuizVm::from_snapshot(&session.snapshot(), labels);
        assert_eq!(vm.counter, "Pregunta 2 de 2");
        assert_eq!(vm.advance_label, "Finalizar");
        assert_eq!(vm.progress_percent, 100);
        assert!(vm.explanation.is_none());
    }

    #[test]
    fn result_screen_text() {
        let result = QuizResult {
            quiz_id: QuizId::new("q1").unwrap(),
            raw_score: 1,
            total_questions: 2,
            remaining_seconds: 10,
            completion: CompletionReason::Finished,
        };
        let vm = QuizResultVm::new(&result, true, Labels::for_language(Language::En));
        assert_eq!(vm.headline, "Quiz Completed!");
        assert_eq!(vm.percentage_label, "50%");
        assert_eq!(vm.summary, "You answered 1 out of 2 questions correctly.");
    }
}
