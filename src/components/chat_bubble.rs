use crate::format::{format_message, Segment};
use dioxus::prelude::*;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    Error,
}

impl MessageRole {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Assistant => "assistant-message",
            Self::Error => "error-message",
        }
    }
}

/// One transcript entry. Entries are append-only; the transcript never
/// reorders or merges them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: String,
}

#[component]
pub fn ChatBubble(message: ChatMessage) -> Element {
    rsx! {
        div { class: "chat-message {message.role.css_class()}",
            div { class: "message-bubble",
                div { class: "message-content",
                    {format_message(&message.content).into_iter().map(render_segment)}
                }
                div { class: "message-time", "{message.timestamp}" }
            }
        }
    }
}

fn render_segment(segment: Segment) -> Element {
    match segment {
        Segment::Text(text) => rsx! { span { "{text}" } },
        Segment::Bold(text) => rsx! { strong { "{text}" } },
        Segment::Emphasis(text) => rsx! { em { "{text}" } },
        Segment::Code(text) => rsx! { code { "{text}" } },
        Segment::LineBreak => rsx! { br {} },
    }
}

/// Transcript placeholder shown while an answer is pending. At most one
/// exists at a time because the ask workflow is serialized behind a
/// single loading flag.
#[component]
pub fn LoadingBubble() -> Element {
    rsx! {
        div { class: "chat-message assistant-message",
            div { class: "message-bubble",
                div { class: "message-content",
                    span { class: "loading-dots",
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
    }
}
