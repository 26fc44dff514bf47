use serde::{Deserialize, Serialize};

/// Base URL of the chat backend when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub id: Option<u32>,
    pub api_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            id: Some(1),
            api_url: default_api_url(),
        }
    }
}

impl AppSettings {
    pub fn is_configured(&self) -> bool {
        !self.api_url.is_empty()
    }
}

/// Build-time override via `CHATBOT_API_URL`, else the localhost default.
pub fn default_api_url() -> String {
    option_env!("CHATBOT_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_localhost() {
        let s = AppSettings::default();
        assert!(s.is_configured());
        assert!(s.api_url.starts_with("http"));
    }
}
