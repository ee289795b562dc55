use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::progress::SessionSnapshot;
use super::service::{QuizSession, TickOutcome};
use crate::leaderboard_service::LeaderboardService;

/// Handle to the task that drives a session's countdown.
///
/// The task ticks once per period, publishing a snapshot after every tick, and
/// stops on its own once the session is complete or the countdown is at zero.
/// Cancelling or dropping the handle aborts the task.
#[derive(Debug)]
pub struct SessionTimer {
    handle: JoinHandle<()>,
}

impl SessionTimer {
    /// Spawn the countdown task. Must be called from within a Tokio runtime.
    ///
    /// When a tick auto-submits the session, the result is recorded on `leaderboard`
    /// best-effort before the task exits.
    #[must_use]
    pub fn start(
        session: Arc<Mutex<QuizSession>>,
        snapshots: Arc<watch::Sender<SessionSnapshot>>,
        period: Duration,
        leaderboard: Arc<LeaderboardService>,
    ) -> Self {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let (outcome, snapshot, done) = {
                    let Ok(mut guard) = session.lock() else {
                        tracing::warn!("session lock poisoned; stopping timer");
                        return;
                    };
                    let outcome = guard.tick();
                    let done = guard.is_complete() || guard.remaining_seconds() == 0;
                    (outcome, guard.snapshot(), done)
                };
                snapshots.send_replace(snapshot);

                if let TickOutcome::Submitted(result) = &outcome {
                    leaderboard.record_best_effort(result).await;
                }
                if done {
                    tracing::debug!("session timer finished");
                    return;
                }
            }
        });
        Self { handle }
    }

    /// Stop the countdown task.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
