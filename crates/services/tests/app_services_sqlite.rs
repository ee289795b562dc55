use prep_core::model::QuizId;
use prep_core::time::fixed_now;
use services::{Advance, AppServices, Clock, QuizConfig};

#[tokio::test]
async fn sqlite_services_persist_leaderboard() {
    let config = QuizConfig::default().with_player_name("Ana");
    let services = AppServices::new_sqlite(
        "sqlite:file:memdb_app_services?mode=memory&cache=shared",
        Clock::fixed(fixed_now()),
        config,
    )
    .await
    .expect("connect sqlite");

    assert_eq!(services.catalog().quizzes().len(), 3);

    let active = services
        .quiz_loop()
        .start_quiz(&QuizId::new("q2").unwrap())
        .await
        .unwrap();
    let mut completed = None;
    while completed.is_none() {
        let correct = active.snapshot().question.correct_option();
        active.select(correct).unwrap();
        active.check().unwrap();
        let step = active.advance().await.unwrap();
        if let Advance::Completed(result) = step.advance {
            assert!(step.recorded);
            completed = Some(result);
        }
    }
    assert_eq!(completed.unwrap().percentage(), 100);

    let board = services.leaderboard().list().await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "Ana");
    assert_eq!(board[0].score_percent, 100);

    services.leaderboard().clear().await.unwrap();
    assert!(services.leaderboard().list().await.unwrap().is_empty());
}
