//! Chat screen.
//!
//! Owns the message list and the busy flag. Every mutation happens in
//! response to a discrete event: submit, response received, response
//! failed, clear history. The busy flag keeps at most one chat request in
//! flight; the input area and chips are inert while it is set.

use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    Route,
    api::ChatClient,
    app_settings::{AppSettings, default_api_url},
    message::Message,
    storage::{Storage, get_storage},
    topics::Topic,
    ui::{chat_input::ChatInput, message::MessageEl},
};

/// Opening bot message for a fresh conversation.
pub const GREETING: &str = "Halo! 👋 Saya ChatBot dengan NLP. Ada yang bisa saya bantu?";

/// Builds a bot message with suggestion chips. Suggestions are computed
/// from the reply text itself, not the question that prompted it.
fn bot_message(text: impl Into<String>) -> Message {
    let text = text.into();
    let suggestions = Topic::detect(&text)
        .suggestions()
        .iter()
        .map(|s| s.to_string())
        .collect();
    Message::bot(text, suggestions)
}

fn greeting_message() -> Message {
    bot_message(GREETING)
}

#[component]
pub fn Chat() -> Element {
    let mut messages: Signal<Vec<Message>> = use_signal(Vec::new);
    let mut busy = use_signal(|| false);

    // Restore the persisted conversation; fall back to the greeting.
    let _ = use_resource(move || async move {
        let storage = match get_storage().await {
            Ok(s) => Some(s),
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                None
            }
        };
        let restored = match &storage {
            Some(st) => match st.load_history().await {
                Ok(h) => h,
                Err(e) => {
                    warn!("Could not load history: {e:?}");
                    None
                }
            },
            None => None,
        };
        match restored {
            Some(h) if !h.is_empty() => messages.set(h),
            _ => messages.set(vec![greeting_message()]),
        }
    });

    let persist = move || async move {
        let storage = match get_storage().await {
            Ok(s) => s,
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                return;
            }
        };
        if let Err(e) = storage.save_history(&messages()).await {
            warn!("Could not save history: {e:?}");
        }
    };

    let api_url = move || {
        let settings = consume_context::<Signal<Option<AppSettings>>>();
        let settings = settings.read().clone();
        settings.map(|s| s.api_url).unwrap_or_else(default_api_url)
    };

    // Submit path shared by the input box and the suggestion chips.
    let send_msg = move |text: String| async move {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        messages.with_mut(|m| m.push(Message::user(text.clone())));
        persist().await;

        let api_url = api_url();
        let client = ChatClient::new(api_url.clone());
        let reply = match client.send(&text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chat request failed: {e:?}");
                format!("Maaf, error. Backend di: {api_url}")
            }
        };
        messages.with_mut(|m| m.push(bot_message(reply)));
        persist().await;
    };

    let submit = Callback::new(move |s: String| async move {
        // Drop submissions while a request is outstanding.
        {
            if busy() {
                return;
            }
        }
        {
            busy.set(true);
            send_msg(s).await;
            busy.set(false);
        }
    });

    let clear = move |_e: Event<MouseData>| async move {
        if busy() {
            return;
        }
        messages.set(vec![greeting_message()]);
        match get_storage().await {
            Ok(st) => {
                if let Err(e) = st.clear_history().await {
                    warn!("Could not clear history: {e:?}");
                }
            }
            Err(e) => warn!("Could not get storage: {e:?}"),
        }
    };

    rsx! {
        div { class: "chat-screen",
            header { class: "chat-header",
                div {
                    h1 { "🤖 ChatBot NLP" }
                    p { "Natural Language Processing AI" }
                }
                div { class: "chat-header-actions",
                    button {
                        class: "icon-button",
                        title: "Hapus riwayat",
                        onclick: clear,
                        "🗑"
                    }
                    Link { class: "icon-button", to: Route::Settings {}, "⚙" }
                }
            }
            div { class: "message-list",
                for m in messages.read().iter() {
                    MessageEl { msg: m.clone(), on_pick: submit }
                }
                if busy() {
                    div { class: "message ai-message typing", "Mengetik..." }
                }
            }
            div { class: "chat-input-area",
                ChatInput { disabled: busy(), on_send: submit }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;

    #[test]
    fn greeting_is_a_bot_message_with_default_suggestions() {
        let msg = greeting_message();
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.text, GREETING);
        let suggestions = msg.suggestions.unwrap();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0], "Apa pengertian wakaf?");
    }

    #[test]
    fn bot_message_suggestions_follow_the_reply_text() {
        let msg = bot_message("Hukum wakaf adalah sunnah yang dianjurkan.");
        let suggestions = msg.suggestions.unwrap();
        assert_eq!(suggestions[0], "Apa dalil yang mendasari wakaf?");
    }
}
