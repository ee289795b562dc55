use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use prep_core::model::Language;

use crate::views::{HomeView, QuizView};
use crate::vm::Labels;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:quiz_id", QuizView)] Quiz { quiz_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    let mut language = use_context::<Signal<Language>>();
    let labels = Labels::for_language(language());
    let other = language().toggle();

    rsx! {
        header { class: "header",
            Link { class: "brand", to: Route::Home {}, "PMP Prep" }
            span { class: "byline", "{labels.by} Patricio Cordero, PMP" }
            button {
                class: "lang-toggle",
                onclick: move |_| language.set(other),
                "{other}"
            }
        }
    }
}
