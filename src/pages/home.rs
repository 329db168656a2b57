use crate::api;
use crate::components::chat_bubble::{ChatMessage, MessageRole};
use crate::components::{ChatBubble, LoadingBubble, Toast, UploadPanel};
use crate::format::{message_timestamp, normalize_question};
use crate::monitoring::Logger;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

const QUESTION_INPUT_ID: &str = "question-input";
const CHAT_HISTORY_ID: &str = "chat-history";
const TOAST_MILLIS: u32 = 4_000;

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn scroll_chat_to_bottom() {
    if let Some(container) = element_by_id(CHAT_HISTORY_ID) {
        container.set_scroll_top(container.scroll_height());
    }
}

fn focus_question_input() {
    if let Some(element) = element_by_id(QUESTION_INPUT_ID) {
        if let Ok(input) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = input.focus();
        }
    }
}

fn push_message(mut messages: Signal<Vec<ChatMessage>>, role: MessageRole, content: String) {
    messages.write().push(ChatMessage {
        role,
        content,
        timestamp: message_timestamp(),
    });
}

/// The ask workflow. Validates the question, appends it to the
/// transcript, calls the backend and appends the answer or the error.
/// The loading flag doubles as the transcript's placeholder bubble and
/// is cleared on every path.
fn submit_question(
    messages: Signal<Vec<ChatMessage>>,
    mut input_text: Signal<String>,
    mut is_loading: Signal<bool>,
    mut notice: Signal<Option<String>>,
) {
    let Some(question) = normalize_question(&input_text()) else {
        notice.set(Some("Please enter a question.".to_string()));
        spawn(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            notice.set(None);
        });
        return;
    };
    if is_loading() {
        return;
    }

    push_message(messages, MessageRole::User, question.clone());
    input_text.set(String::new());
    is_loading.set(true);

    spawn(async move {
        match api::ask(&question).await {
            Ok(resp) => {
                is_loading.set(false);
                push_message(messages, MessageRole::Assistant, resp.answer);
            }
            Err(e) => {
                Logger::error(&format!("Ask failed: {}", e));
                is_loading.set(false);
                push_message(messages, MessageRole::Error, format!("Error: {}", e));
            }
        }
        focus_question_input();
    });
}

#[component]
pub fn Home() -> Element {
    let messages = use_signal(Vec::<ChatMessage>::new);
    let mut input_text = use_signal(String::new);
    let is_loading = use_signal(|| false);
    let notice = use_signal(|| Option::<String>::None);

    // Effects run after the DOM is updated, so the newest entry is in
    // the container by the time we scroll.
    use_effect(move || {
        let _ = messages.read().len();
        let _ = is_loading();
        scroll_chat_to_bottom();
    });

    let has_text = normalize_question(&input_text()).is_some();

    rsx! {
        div { class: "page",
            UploadPanel {}

            section { class: "chat-panel",
                div { id: CHAT_HISTORY_ID, class: "chat-history",
                    if messages().is_empty() && !is_loading() {
                        div { class: "chat-empty",
                            "Upload a PDF and ask a question to get started."
                        }
                    }
                    for (idx , message) in messages().into_iter().enumerate() {
                        ChatBubble { key: "{idx}", message }
                    }
                    if is_loading() {
                        LoadingBubble {}
                    }
                }

                Toast { notice: notice() }

                div { class: "chat-input-row",
                    input {
                        id: QUESTION_INPUT_ID,
                        class: "question-input",
                        r#type: "text",
                        placeholder: "Ask a question about the PDF...",
                        value: "{input_text}",
                        oninput: move |evt| input_text.set(evt.value()),
                        onkeypress: move |evt: Event<KeyboardData>| {
                            if evt.key() == Key::Enter && !evt.modifiers().shift() {
                                evt.prevent_default();
                                submit_question(messages, input_text, is_loading, notice);
                            }
                        },
                    }
                    button {
                        class: "send-btn",
                        disabled: is_loading() || !has_text,
                        onclick: move |_| submit_question(messages, input_text, is_loading, notice),
                        if is_loading() {
                            span { class: "loading-dots",
                                span {}
                                span {}
                                span {}
                            }
                        } else if has_text {
                            "Send ↗"
                        } else {
                            "Send"
                        }
                    }
                }
            }
        }
    }
}
