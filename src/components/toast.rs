use dioxus::prelude::*;

/// Non-blocking notice shown above the chat input, used for validation
/// messages that previously would have been a modal alert.
#[component]
pub fn Toast(notice: Option<String>) -> Element {
    match notice {
        Some(message) => rsx! {
            div { class: "toast", "{message}" }
        },
        None => rsx! {},
    }
}
