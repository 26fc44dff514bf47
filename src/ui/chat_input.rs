use std::rc::Rc;

use dioxus::prelude::*;

const SEND_ICON: Asset = asset!("/assets/send.svg");

#[component]
pub fn ChatInput(disabled: bool, on_send: Callback<String, ()>) -> Element {
    let mut text = use_signal(|| "".to_string());
    let set_text = move |e: Event<FormData>| {
        if disabled {
            return;
        }
        text.set(e.value());
    };
    let mut _send = move || {
        if disabled {
            return;
        }
        if text.read().trim().is_empty() {
            return;
        }
        on_send(text.cloned());
        text.set("".to_string());
    };
    let send = move |_e: Event<MouseData>| {
        _send();
    };
    let disabled = if disabled { Some(true) } else { None };
    rsx! {
        div { class: "chat-input",
            textarea {
                placeholder: "Ketik pesan...",
                disabled,
                oninput: set_text,
                onkeydown: move |e: Event<KeyboardData>| {
                    let k: Rc<KeyboardData> = e.data.clone();
                    // Enter sends, Shift+Enter inserts a newline.
                    if k.code() == Code::Enter && !k.modifiers().shift() {
                        e.prevent_default();
                        _send();
                    }
                },
                value: text,
            }
            button { class: "send-button", onclick: send, disabled,
                img { src: SEND_ICON, alt: "Kirim" }
            }
        }
    }
}
