use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    Route,
    app_settings::AppSettings,
    storage::{Storage, get_storage},
};

#[component]
pub fn Settings() -> Element {
    let mut api_url = use_signal(String::new);
    let mut saved = use_signal(|| false);
    let settings = use_resource(move || async move {
        let storage = match get_storage().await {
            Ok(s) => Some(s),
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                None
            }
        };
        let stored = if let Some(st) = storage {
            st.load_settings().await.unwrap_or_else(|e| {
                warn!("Could not load settings: {e:?}");
                None
            })
        } else {
            None
        };
        let s = stored.unwrap_or_default();
        api_url.set(s.api_url.clone());
        s
    });

    let save = move |_e: Event<MouseData>| async move {
        let Some(current) = settings() else { return };
        let s = AppSettings {
            api_url: api_url().trim().trim_end_matches('/').to_string(),
            ..current
        };
        match get_storage().await {
            Ok(st) => {
                if let Err(e) = st.save_settings(&s).await {
                    warn!("Could not save settings: {e:?}");
                }
            }
            Err(e) => warn!("Could not get storage: {e:?}"),
        }
        let mut settings_ctx = consume_context::<Signal<Option<AppSettings>>>();
        settings_ctx.set(Some(s));
        saved.set(true);
    };

    if settings().is_none() {
        return rsx! { "Loading..." };
    }

    rsx! {
        div { class: "settings",
            h3 { "Pengaturan" }
            label { r#for: "api-url", "Alamat backend" }
            input {
                id: "api-url",
                value: api_url,
                oninput: move |e: Event<FormData>| {
                    saved.set(false);
                    api_url.set(e.value());
                },
            }
            div { class: "settings-actions",
                button { onclick: save, "Simpan" }
                Link { to: Route::Chat {}, "Kembali ke chat" }
            }
            if saved() {
                p { class: "saved-note", "Tersimpan." }
            }
        }
    }
}
