use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::model::Language;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{Labels, map_domain_rows, map_flashcards, map_leaderboard_rows, map_quiz_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_context::<Signal<Language>>();
    let labels = Labels::for_language(language());
    let mut flipped = use_signal(HashSet::<String>::new);

    let catalog = ctx.catalog();
    let quizzes = map_quiz_cards(&catalog.quizzes());
    let domains = map_domain_rows(catalog.domains());
    let flashcards = map_flashcards(catalog.flashcards());
    let categories = catalog.bank_categories().to_vec();
    let first_quiz = quizzes.first().map(|quiz| quiz.id.to_string());

    let leaderboard = ctx.leaderboard();
    let board = use_resource(move || {
        let leaderboard = leaderboard.clone();
        async move {
            let items = leaderboard.list().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_leaderboard_rows(&items))
        }
    });
    let board_state = view_state_from_resource(&board);

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h1 { "{labels.hero_title}" }
                p { "{labels.hero_subtitle}" }
                if let Some(quiz_id) = first_quiz {
                    Link { class: "btn btn-primary", to: Route::Quiz { quiz_id }, "{labels.start_quiz}" }
                }
            }

            section { class: "domains",
                h2 { "{labels.domains_title}" }
                table {
                    thead {
                        tr {
                            for heading in labels.domains_header {
                                th { "{heading}" }
                            }
                        }
                    }
                    tbody {
                        for row in domains {
                            tr { key: "{row.name}",
                                td { "{row.name}" }
                                td { "{row.weight}" }
                                td { "{row.topics}" }
                            }
                        }
                    }
                }
            }

            section { class: "quizzes",
                h2 { "{labels.practice_exams_title}" }
                div { class: "quiz-grid",
                    for quiz in quizzes {
                        div { class: "quiz-card", key: "{quiz.id}",
                            h3 { "{quiz.title}" }
                            p { "{quiz.description}" }
                            span { class: "meta", "{quiz.meta}" }
                            Link {
                                class: "btn",
                                to: Route::Quiz { quiz_id: quiz.id.to_string() },
                                "{labels.start}"
                            }
                        }
                    }
                }
            }

            section { class: "bank",
                h2 { "{labels.question_bank_title}" }
                p { "{labels.question_bank_subtitle}" }
                ul { class: "bank-grid",
                    for category in categories {
                        li { key: "{category}", "{category}" }
                    }
                }
            }

            section { class: "flashcards",
                h2 { "{labels.flashcards_title}" }
                div { class: "flashcard-grid",
                    for card in flashcards {
                        {
                            let id = card.id.clone();
                            let is_flipped = flipped.read().contains(&card.id);
                            let class = if is_flipped { "flashcard flipped" } else { "flashcard" };
                            rsx! {
                                button {
                                    key: "{card.id}",
                                    class,
                                    onclick: move |_| {
                                        let mut set = flipped.write();
                                        if !set.remove(&id) {
                                            set.insert(id.clone());
                                        }
                                    },
                                    if is_flipped {
                                        span { class: "definition", "{card.definition}" }
                                    } else {
                                        span { class: "term", "{card.term}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "leaderboard",
                h2 { "{labels.top_scores_title}" }
                match board_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "…" }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                    },
                    ViewState::Ready(rows) if rows.is_empty() => rsx! {
                        p { class: "empty", "{labels.no_records}" }
                    },
                    ViewState::Ready(rows) => rsx! {
                        table {
                            thead {
                                tr {
                                    for heading in labels.leaderboard_header {
                                        th { "{heading}" }
                                    }
                                }
                            }
                            tbody {
                                for row in rows {
                                    tr { key: "{row.rank}",
                                        td { "{row.name}" }
                                        td { "{row.score_label}" }
                                        td { "{row.date_label}" }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
