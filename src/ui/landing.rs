use dioxus::prelude::*;

use crate::Route;
use crate::ui::particles::ParticleField;

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "landing",
            ParticleField {}
            div { class: "hero",
                h1 { "🤖 ChatBot NLP" }
                p { class: "tagline", "Natural Language Processing AI" }
                p { class: "blurb",
                    "Tanya apa saja seputar wakaf: pengertian, hukum, tata cara, sampai wakaf digital."
                }
                Link { class: "cta", to: Route::Chat {}, "Mulai Chat" }
            }
        }
    }
}
