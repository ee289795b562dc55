use prep_core::model::{CompletionReason, Language, QuizId, QuizResult};

use super::test_harness::{ViewKind, setup_view_harness};

async fn settle(harness: &mut super::test_harness::ViewHarness) -> String {
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_renders_catalog() {
    let mut harness = setup_view_harness(ViewKind::Home, Language::En);
    let html = settle(&mut harness).await;

    assert!(html.contains("Practice Exams"), "missing heading in {html}");
    assert!(html.contains("Quiz 1: People"), "missing quiz title in {html}");
    assert!(html.contains("15 min • 2 MCQ"), "missing quiz meta in {html}");
    assert!(html.contains("Stewardship"), "missing flashcard in {html}");
    assert!(html.contains("33%"), "missing domain weight in {html}");
    assert!(html.contains("No records yet."), "missing empty leaderboard in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_uses_spanish_labels() {
    let mut harness = setup_view_harness(ViewKind::Home, Language::Es);
    let html = settle(&mut harness).await;

    assert!(html.contains("Exámenes de Práctica"), "missing heading in {html}");
    assert!(html.contains("No hay registros todavía."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_recorded_scores() {
    let mut harness = setup_view_harness(ViewKind::Home, Language::En);
    let result = QuizResult {
        quiz_id: QuizId::new("q1").unwrap(),
        raw_score: 1,
        total_questions: 2,
        remaining_seconds: 100,
        completion: CompletionReason::Finished,
    };
    harness
        .services
        .leaderboard()
        .record_result(&result)
        .await
        .expect("record result");

    let html = settle(&mut harness).await;
    assert!(html.contains("Guest User"), "missing player in {html}");
    assert!(html.contains("50%"), "missing score in {html}");
    assert!(html.contains("2023-11-14"), "missing date in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("q1".into()), Language::En);
    let html = settle(&mut harness).await;

    assert!(html.contains("Question 1 of 2"), "missing counter in {html}");
    assert!(html.contains("Time: 15:00"), "missing countdown in {html}");
    assert!(html.contains("Check"), "missing check button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reports_unknown_quiz() {
    let mut harness = setup_view_harness(ViewKind::Quiz("nope".into()), Language::En);
    let html = settle(&mut harness).await;

    assert!(html.contains("Quiz not found."), "missing error in {html}");
}
