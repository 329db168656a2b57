use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "PDF Q&A" }
            span { class: "app-subtitle", "Upload a PDF, then ask questions about it" }
        }
    }
}
