use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(#[props(default = vec![])] segments: Vec<String>) -> Element {
    rsx! {
        div { class: "page not-found",
            h1 { "404 – Page Not Found" }
            p { "Sorry, the page you're looking for doesn't exist." }
            p { class: "not-found-path", "Attempted path: /{segments.join(\"/\")}" }
            Link { to: Route::Home {}, class: "not-found-link", "Return Home" }
        }
    }
}
