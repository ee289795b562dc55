use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use prep_core::model::{Language, QuizId, QuizResult};
use services::{ActiveQuiz, Advance, SessionSnapshot};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{Labels, QuizResultVm, QuizVm};

#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Loading,
    Failed(ViewError),
    Question(QuizVm),
    Finished(QuizResultVm),
}

fn screen_for(
    error: Option<ViewError>,
    snapshot: Option<&SessionSnapshot>,
    finished: Option<&(QuizResult, bool)>,
    labels: &Labels,
) -> Screen {
    if let Some(err) = error {
        return Screen::Failed(err);
    }
    if let Some((result, recorded)) = finished {
        return Screen::Finished(QuizResultVm::new(result, *recorded, labels));
    }
    match snapshot {
        Some(snapshot) if snapshot.is_complete => {
            Screen::Finished(QuizResultVm::from_snapshot(snapshot, labels))
        }
        Some(snapshot) => Screen::Question(QuizVm::from_snapshot(snapshot, labels)),
        None => Screen::Loading,
    }
}

#[component]
pub fn QuizView(quiz_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_context::<Signal<Language>>();
    let labels = Labels::for_language(language());
    let navigator = use_navigator();

    let mut active = use_signal(|| None::<Arc<ActiveQuiz>>);
    let mut snapshot = use_signal(|| None::<SessionSnapshot>);
    let mut finished = use_signal(|| None::<(QuizResult, bool)>);
    let mut error = use_signal(|| None::<ViewError>);

    let quiz_loop = ctx.quiz_loop();
    let _session = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let quiz_id = quiz_id.clone();
        async move {
            let Ok(quiz_id) = QuizId::new(quiz_id) else {
                error.set(Some(ViewError::UnknownQuiz));
                return;
            };
            let quiz = match quiz_loop.start_quiz(&quiz_id).await {
                Ok(quiz) => quiz,
                Err(err) => {
                    error.set(Some(ViewError::from(err)));
                    return;
                }
            };

            let mut updates = quiz.subscribe();
            snapshot.set(Some(quiz.snapshot()));
            active.set(Some(Arc::new(quiz)));

            // Timer ticks arrive here; ends once the quiz is closed or dropped.
            while updates.changed().await.is_ok() {
                let latest = updates.borrow_and_update().clone();
                snapshot.set(Some(latest));
            }
        }
    });

    let mut on_select = move |index: usize| {
        if let Some(quiz) = active() {
            if let Ok(latest) = quiz.select(index) {
                snapshot.set(Some(latest));
            }
        }
    };

    let on_check = move |_: MouseEvent| {
        if let Some(quiz) = active() {
            if quiz.check().is_ok() {
                snapshot.set(Some(quiz.snapshot()));
            }
        }
    };

    let on_advance = move |_: MouseEvent| {
        if let Some(quiz) = active() {
            spawn(async move {
                if let Ok(step) = quiz.advance().await {
                    snapshot.set(Some(step.snapshot));
                    if let Advance::Completed(result) = step.advance {
                        finished.set(Some((result, step.recorded)));
                    }
                }
            });
        }
    };

    let on_close = move |_: MouseEvent| {
        // An in-flight advance may still hold a handle; stop the timer regardless.
        if let Some(quiz) = active.write().take() {
            quiz.close();
        }
        navigator.push(Route::Home {});
    };

    let screen = screen_for(
        error(),
        snapshot.read().as_ref(),
        finished.read().as_ref(),
        labels,
    );

    rsx! {
        div { class: "page quiz",
            match screen {
                Screen::Loading => rsx! {
                    p { "…" }
                },
                Screen::Failed(err) => rsx! {
                    p { class: "error",
                        if err == ViewError::UnknownQuiz { "{labels.unknown_quiz}" } else { "{err.message()}" }
                    }
                    button { class: "btn", onclick: on_close, "{labels.close}" }
                },
                Screen::Finished(vm) => rsx! {
                    div { class: "result",
                        h2 { "{vm.headline}" }
                        div { class: "result-percentage", "{vm.percentage_label}" }
                        p { "{vm.summary}" }
                        if !vm.recorded {
                            p { class: "warning", "{labels.score_not_saved}" }
                        }
                        button { class: "btn btn-primary", onclick: on_close, "{labels.close}" }
                    }
                },
                Screen::Question(vm) => rsx! {
                    div { class: "quiz-header",
                        span { class: "counter", "{vm.counter}" }
                        span { class: "timer", "{labels.timer_label}: {vm.countdown}" }
                        button { class: "close", onclick: on_close, "×" }
                    }
                    div { class: "progress",
                        div { class: "progress-bar", style: "width: {vm.progress_percent}%" }
                    }
                    if vm.time_is_up {
                        p { class: "warning", "{labels.time_up}" }
                    }
                    h3 { class: "prompt", "{vm.prompt}" }
                    div { class: "options",
                        for option in vm.options {
                            {
                                let index = option.index;
                                rsx! {
                                    button {
                                        key: "{index}",
                                        class: option.class(),
                                        disabled: !vm.can_select,
                                        onclick: move |_| on_select(index),
                                        span { class: "letter", "{option.letter}" }
                                        "{option.text}"
                                    }
                                }
                            }
                        }
                    }
                    if let Some(explanation) = vm.explanation {
                        div { class: "explanation",
                            p { class: "label", "{labels.explanation}" }
                            p { "{explanation}" }
                        }
                    }
                    div { class: "actions",
                        if vm.show_advance {
                            button { class: "btn btn-primary", onclick: on_advance, "{vm.advance_label}" }
                        } else {
                            button {
                                class: "btn btn-primary",
                                disabled: !vm.can_check,
                                onclick: on_check,
                                "{labels.check}"
                            }
                        }
                    }
                },
            }
        }
    }
}
