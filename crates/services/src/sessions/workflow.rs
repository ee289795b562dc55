use std::sync::{Arc, Mutex};

use prep_core::model::QuizId;
use rand::rng;
use rand::seq::SliceRandom;
use tokio::sync::watch;

use super::progress::SessionSnapshot;
use super::reporter::ResultReporter;
use super::service::{Advance, CheckOutcome, QuizSession};
use super::timer::SessionTimer;
use crate::catalog_service::CatalogService;
use crate::config::QuizConfig;
use crate::error::SessionError;
use crate::leaderboard_service::LeaderboardService;

/// Result of advancing an active quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceResult {
    pub advance: Advance,
    pub snapshot: SessionSnapshot,
    /// Whether a completed result reached the leaderboard.
    pub recorded: bool,
}

/// Starts quiz sessions from the catalog.
#[derive(Clone)]
pub struct QuizLoopService {
    catalog: Arc<CatalogService>,
    leaderboard: Arc<LeaderboardService>,
    config: QuizConfig,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        catalog: Arc<CatalogService>,
        leaderboard: Arc<LeaderboardService>,
        config: QuizConfig,
    ) -> Self {
        Self {
            catalog,
            leaderboard,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Start a timed session for the given quiz.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuiz` if the catalog has no such quiz.
    pub async fn start_quiz(&self, quiz_id: &QuizId) -> Result<ActiveQuiz, SessionError> {
        let session = self.build_session(quiz_id)?;
        Ok(self.activate(session))
    }

    /// Start a session whose final result is also handed to `reporter`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuiz` if the catalog has no such quiz.
    pub async fn start_quiz_with_reporter(
        &self,
        quiz_id: &QuizId,
        reporter: impl ResultReporter + 'static,
    ) -> Result<ActiveQuiz, SessionError> {
        let session = self.build_session(quiz_id)?.with_reporter(reporter);
        Ok(self.activate(session))
    }

    fn build_session(&self, quiz_id: &QuizId) -> Result<QuizSession, SessionError> {
        let quiz = self
            .catalog
            .quiz(quiz_id)
            .ok_or_else(|| SessionError::UnknownQuiz {
                id: quiz_id.clone(),
            })?;

        let mut questions = quiz.questions().to_vec();
        if self.config.shuffle_questions {
            questions.as_mut_slice().shuffle(&mut rng());
        }

        let session = QuizSession::new(quiz_id.clone(), questions, self.config.duration_secs)?
            .with_expiry_policy(self.config.expiry_policy);
        tracing::info!(
            quiz = %quiz_id,
            questions = session.total_questions(),
            duration_secs = self.config.duration_secs,
            "quiz started"
        );
        Ok(session)
    }

    fn activate(&self, session: QuizSession) -> ActiveQuiz {
        let (sender, _) = watch::channel(session.snapshot());
        let snapshots = Arc::new(sender);
        let session = Arc::new(Mutex::new(session));
        let timer = SessionTimer::start(
            Arc::clone(&session),
            Arc::clone(&snapshots),
            self.config.tick_period,
            Arc::clone(&self.leaderboard),
        );

        ActiveQuiz {
            session,
            snapshots,
            timer,
            leaderboard: Arc::clone(&self.leaderboard),
        }
    }
}

/// A running quiz: the session, its countdown task and its snapshot channel.
///
/// All mutation goes through `select`, `check` and `advance`; each publishes a
/// fresh snapshot to subscribers.
pub struct ActiveQuiz {
    session: Arc<Mutex<QuizSession>>,
    snapshots: Arc<watch::Sender<SessionSnapshot>>,
    timer: SessionTimer,
    leaderboard: Arc<LeaderboardService>,
}

impl ActiveQuiz {
    /// # Errors
    ///
    /// Returns the engine's `SessionError` for an illegal or out-of-range selection.
    pub fn select(&self, option_index: usize) -> Result<SessionSnapshot, SessionError> {
        self.apply(|session| session.select(option_index))
            .map(|((), snapshot)| snapshot)
    }

    /// # Errors
    ///
    /// Returns the engine's `SessionError` when there is nothing to check.
    pub fn check(&self) -> Result<CheckOutcome, SessionError> {
        self.apply(QuizSession::check).map(|(outcome, _)| outcome)
    }

    /// Move to the next question, recording the score when the quiz completes.
    ///
    /// Recording is best-effort: a storage failure is logged and reported through
    /// `AdvanceResult::recorded`.
    ///
    /// # Errors
    ///
    /// Returns the engine's `SessionError` if the current question is unanswered or
    /// the quiz is already complete.
    pub async fn advance(&self) -> Result<AdvanceResult, SessionError> {
        let (advance, snapshot) = self.apply(QuizSession::advance)?;

        let recorded = match &advance {
            Advance::Completed(result) => {
                self.timer.cancel();
                self.leaderboard.record_best_effort(result).await
            }
            Advance::Next { .. } => false,
        };

        Ok(AdvanceResult {
            advance,
            snapshot,
            recorded,
        })
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Stop the countdown. Takes effect immediately even while other handles to
    /// this quiz are still alive.
    pub fn close(&self) {
        self.timer.cancel();
        tracing::debug!("quiz closed");
    }

    fn apply<T>(
        &self,
        op: impl FnOnce(&mut QuizSession) -> Result<T, SessionError>,
    ) -> Result<(T, SessionSnapshot), SessionError> {
        let (value, snapshot) = {
            let mut guard = self.session.lock().map_err(|_| SessionError::Poisoned)?;
            let value = op(&mut *guard)?;
            (value, guard.snapshot())
        };
        self.snapshots.send_replace(snapshot.clone());
        Ok((value, snapshot))
    }
}
