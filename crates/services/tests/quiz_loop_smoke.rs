use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use prep_core::model::{CompletionReason, QuizId, QuizResult, ScoreEntry};
use prep_core::time::fixed_now;
use services::{
    Advance, AppServices, Clock, ExpiryPolicy, QuizConfig, SessionError,
};
use storage::repository::{LeaderboardRepository, Storage, StorageError};

fn services_with(config: QuizConfig) -> AppServices {
    AppServices::new_in_memory(Clock::fixed(fixed_now()), config).unwrap()
}

fn q1() -> QuizId {
    QuizId::new("q1").unwrap()
}

#[tokio::test]
async fn quiz_loop_records_score_on_completion() {
    let services = services_with(QuizConfig::default());
    let seen = Arc::new(Mutex::new(Vec::<QuizResult>::new()));
    let sink = Arc::clone(&seen);

    let active = services
        .quiz_loop()
        .start_quiz_with_reporter(&q1(), move |result: &QuizResult| {
            sink.lock().unwrap().push(result.clone());
        })
        .await
        .unwrap();

    active.select(2).unwrap();
    assert!(active.check().unwrap().correct);
    let step = active.advance().await.unwrap();
    assert_eq!(step.advance, Advance::Next { index: 1 });
    assert!(!step.recorded);

    active.select(0).unwrap();
    assert!(!active.check().unwrap().correct);
    let step = active.advance().await.unwrap();
    let Advance::Completed(result) = &step.advance else {
        panic!("expected completion");
    };
    assert_eq!(result.raw_score, 1);
    assert_eq!(result.total_questions, 2);
    assert_eq!(result.percentage(), 50);
    assert!(step.recorded);
    assert!(step.snapshot.is_complete);

    assert_eq!(seen.lock().unwrap().len(), 1);

    let board = services.leaderboard().list().await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].score_percent, 50);
    assert_eq!(board[0].name, "Guest User");
    assert_eq!(board[0].quiz_type, "q1");
    assert_eq!(board[0].recorded_at, fixed_now());

    let err = active.advance().await.unwrap_err();
    assert!(matches!(err, SessionError::InvalidTransition { .. }));
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(services.leaderboard().list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_quiz_is_rejected() {
    let services = services_with(QuizConfig::default());
    let err = services
        .quiz_loop()
        .start_quiz(&QuizId::new("q99").unwrap())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, SessionError::UnknownQuiz { .. }));
}

#[tokio::test]
async fn subscribers_see_each_transition() {
    let services = services_with(QuizConfig::default());
    let active = services.quiz_loop().start_quiz(&q1()).await.unwrap();
    let mut rx = active.subscribe();

    active.select(1).unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().selected, Some(1));

    active.check().unwrap();
    assert!(rx.borrow_and_update().answered);
    assert_eq!(active.snapshot().option_states.len(), 4);
    active.close();
}

#[tokio::test]
async fn shuffled_quiz_keeps_all_questions() {
    let services = services_with(QuizConfig::default().with_shuffle_questions(true));
    let active = services.quiz_loop().start_quiz(&q1()).await.unwrap();
    let snapshot = active.snapshot();
    assert_eq!(snapshot.total, 2);
    assert!(["q1-1", "q1-2"].contains(&snapshot.question.id().as_str()));
    active.close();
}

//
// ─── BEST-EFFORT RECORDING ─────────────────────────────────────────────────────
//

struct FailingRepo;

#[async_trait]
impl LeaderboardRepository for FailingRepo {
    async fn load_entries(&self) -> Result<Vec<ScoreEntry>, StorageError> {
        Err(StorageError::Connection("disk unavailable".into()))
    }

    async fn save_entries(&self, _entries: &[ScoreEntry]) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk unavailable".into()))
    }

    async fn clear_entries(&self) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk unavailable".into()))
    }
}

#[tokio::test]
async fn storage_failure_does_not_block_completion() {
    let storage = Storage {
        leaderboard: Arc::new(FailingRepo),
    };
    let services = AppServices::from_parts(
        &storage,
        prep_core::Catalog::bundled().unwrap(),
        Clock::fixed(fixed_now()),
        QuizConfig::default(),
    );
    let reported = Arc::new(Mutex::new(0_u32));
    let counter = Arc::clone(&reported);

    let active = services
        .quiz_loop()
        .start_quiz_with_reporter(&q1(), move |_: &QuizResult| {
            *counter.lock().unwrap() += 1;
        })
        .await
        .unwrap();

    for choice in [2, 1] {
        active.select(choice).unwrap();
        active.check().unwrap();
        let step = active.advance().await.unwrap();
        if let Advance::Completed(result) = step.advance {
            assert_eq!(result.raw_score, 2);
            assert!(!step.recorded);
        }
    }

    assert!(active.snapshot().is_complete);
    assert_eq!(*reported.lock().unwrap(), 1);
}

//
// ─── TIMER ─────────────────────────────────────────────────────────────────────
//

#[tokio::test(start_paused = true)]
async fn timer_counts_down_and_stops_at_zero() {
    let services = services_with(QuizConfig::default().with_duration_secs(3));
    let active = services.quiz_loop().start_quiz(&q1()).await.unwrap();
    assert_eq!(active.snapshot().remaining_seconds, 3);

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(active.snapshot().remaining_seconds, 2);

    tokio::time::sleep(Duration::from_secs(5)).await;
    let snapshot = active.snapshot();
    assert_eq!(snapshot.remaining_seconds, 0);
    assert!(!snapshot.is_complete);
    assert!(!active.is_timer_running());

    // Time is up but the learner can still finish.
    active.select(2).unwrap();
    active.check().unwrap();
    active.advance().await.unwrap();
    active.select(1).unwrap();
    active.check().unwrap();
    let step = active.advance().await.unwrap();
    let Advance::Completed(result) = step.advance else {
        panic!("expected completion");
    };
    assert_eq!(result.remaining_seconds, 0);
    assert_eq!(result.completion, CompletionReason::Finished);
}

#[tokio::test(start_paused = true)]
async fn timer_stops_after_completion() {
    let services = services_with(QuizConfig::default());
    let active = services.quiz_loop().start_quiz(&q1()).await.unwrap();
    assert!(active.is_timer_running());

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    for choice in [2, 1] {
        active.select(choice).unwrap();
        active.check().unwrap();
        active.advance().await.unwrap();
    }
    let frozen = active.snapshot().remaining_seconds;
    assert_eq!(frozen, 898);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(!active.is_timer_running());
    assert_eq!(active.snapshot().remaining_seconds, frozen);
}

#[tokio::test(start_paused = true)]
async fn close_stops_ticking() {
    let services = services_with(QuizConfig::default());
    let active = services.quiz_loop().start_quiz(&q1()).await.unwrap();
    let rx = active.subscribe();

    active.close();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(rx.borrow().remaining_seconds, 900);
}

#[tokio::test(start_paused = true)]
async fn close_through_shared_handle_stops_ticking() {
    let services = services_with(QuizConfig::default());
    let active = Arc::new(services.quiz_loop().start_quiz(&q1()).await.unwrap());
    let in_flight = Arc::clone(&active);
    let rx = active.subscribe();

    active.close();
    drop(active);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(rx.borrow().remaining_seconds, 900);
    assert!(!in_flight.is_timer_running());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_quiz_stops_ticking() {
    let services = services_with(QuizConfig::default());
    let active = services.quiz_loop().start_quiz(&q1()).await.unwrap();
    let rx = active.subscribe();

    drop(active);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(rx.borrow().remaining_seconds, 900);
}

#[tokio::test(start_paused = true)]
async fn auto_submit_records_on_expiry() {
    let config = QuizConfig::default()
        .with_duration_secs(2)
        .with_expiry_policy(ExpiryPolicy::AutoSubmit);
    let services = services_with(config);
    let active = services.quiz_loop().start_quiz(&q1()).await.unwrap();

    active.select(2).unwrap();
    active.check().unwrap();

    tokio::time::sleep(Duration::from_secs(3)).await;
    let snapshot = active.snapshot();
    assert!(snapshot.is_complete);
    assert_eq!(snapshot.remaining_seconds, 0);
    assert!(!active.is_timer_running());

    let board = services.leaderboard().list().await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].score_percent, 50);
    assert!(active.advance().await.is_err());
}
