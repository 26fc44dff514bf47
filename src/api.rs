//! HTTP client for the chat backend.
//!
//! The backend is an external collaborator reached over plain JSON:
//! `POST {api_url}/api/chat` with `{"message": ...}` in, `{"message": ...}`
//! out. One request per submit, no streaming, no retry.

use anyhow::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

pub struct ChatClient {
    api_url: String,
}

impl ChatClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.api_url.trim_end_matches('/'))
    }

    /// Sends one user message and returns the bot reply text.
    ///
    /// Non-success statuses and transport failures both surface as errors;
    /// the chat screen turns either into its fixed fallback bubble.
    pub async fn send(&self, message: &str) -> anyhow::Result<String> {
        let body = ChatRequest {
            message: message.to_string(),
        };
        post_chat(self.endpoint(), body).await
    }
}

/// Posts the chat request (native version).
#[cfg(not(target_arch = "wasm32"))]
async fn post_chat(url: String, body: ChatRequest) -> anyhow::Result<String> {
    let res = reqwest::Client::new().post(&url).json(&body).send().await?;
    if !res.status().is_success() {
        bail!("chat endpoint returned {}", res.status());
    }
    let reply: ChatResponse = res.json().await?;
    Ok(reply.message)
}

/// Posts the chat request (WASM version).
///
/// The request runs in a spawned local task and the result comes back
/// through a oneshot channel, since gloo futures are not `Send`.
#[cfg(target_arch = "wasm32")]
async fn post_chat(url: String, body: ChatRequest) -> anyhow::Result<String> {
    use anyhow::anyhow;
    use dioxus::logger::tracing::warn;
    use gloo_net::http::Request;
    use tokio::sync::oneshot;

    let (tx, rx) = oneshot::channel::<anyhow::Result<String>>();

    wasm_bindgen_futures::spawn_local(async move {
        let result = async {
            let res = Request::post(&url)
                .json(&body)
                .map_err(|e| anyhow!("{e:?}"))?
                .send()
                .await
                .map_err(|e| anyhow!("{e:?}"))?;
            if !res.ok() {
                bail!("chat endpoint returned {}", res.status());
            }
            let reply: ChatResponse = res.json().await.map_err(|e| anyhow!("{e:?}"))?;
            Ok(reply.message)
        }
        .await;

        if tx.send(result).is_err() {
            warn!("Receiver dropped before reply was sent");
        }
    });

    rx.await
        .unwrap_or_else(|_| Err(anyhow!("chat request task dropped")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_format() {
        let body = ChatRequest {
            message: "Apa itu wakaf?".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"Apa itu wakaf?"}"#);
    }

    #[test]
    fn response_body_parses_from_wire_format() {
        let reply: ChatResponse =
            serde_json::from_str(r#"{"message":"Wakaf adalah..."}"#).unwrap();
        assert_eq!(reply.message, "Wakaf adalah...");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let a = ChatClient::new("http://localhost:5000");
        let b = ChatClient::new("http://localhost:5000/");
        assert_eq!(a.endpoint(), "http://localhost:5000/api/chat");
        assert_eq!(a.endpoint(), b.endpoint());
    }
}
