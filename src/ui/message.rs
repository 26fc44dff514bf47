use dioxus::prelude::*;

use crate::message::{Message, Sender};
use crate::utils::format_clock;

#[component]
pub fn MessageEl(msg: Message, on_pick: Callback<String, ()>) -> Element {
    let (row, bubble) = match msg.sender {
        Sender::User => ("message-row user", "message human-message"),
        Sender::Bot => ("message-row bot", "message ai-message"),
    };
    let clock = format_clock(&msg.timestamp);
    let suggestions = msg.suggestions.clone().unwrap_or_default();
    rsx! {
        div { class: "{row}",
            div { class: "{bubble}",
                p { class: "message-text", "{msg.text}" }
                span { class: "message-time", "{clock}" }
            }
        }
        if !suggestions.is_empty() {
            div { class: "suggestions",
                for s in suggestions {
                    SuggestionChip { text: s, on_pick }
                }
            }
        }
    }
}

/// Pre-written follow-up question; clicking submits it as the next message.
#[component]
fn SuggestionChip(text: String, on_pick: Callback<String, ()>) -> Element {
    let label = text.clone();
    rsx! {
        button {
            class: "chip",
            onclick: move |_e: Event<MouseData>| {
                on_pick(text.clone());
            },
            "{label}"
        }
    }
}
