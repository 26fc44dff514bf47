//! Chat message data model.
//!
//! Messages are created on send/receive and never mutated afterwards. The
//! whole conversation is serialized as one JSON sequence when persisted;
//! timestamps go over the wire as ISO-8601 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Follow-up questions rendered as chips; only bot messages carry them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            text: text.into(),
            sender: Sender::User,
            timestamp: now,
            suggestions: None,
        }
    }

    pub fn bot(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            text: text.into(),
            sender: Sender::Bot,
            timestamp: now,
            suggestions: Some(suggestions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_round_trips_through_json() {
        let history = vec![
            Message::user("Apa hukum wakaf?"),
            Message::bot("Wakaf hukumnya sunnah.", vec!["Apa dalil wakaf?".into()]),
        ];
        let json = serde_json::to_string(&history).unwrap();
        let back: Vec<Message> = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), back.len());
        for (a, b) in history.iter().zip(back.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.text, b.text);
            assert_eq!(a.sender, b.sender);
            assert_eq!(a.timestamp, b.timestamp);
            assert_eq!(a.suggestions, b.suggestions);
        }
    }

    #[test]
    fn sender_serializes_lowercase() {
        let user = serde_json::to_string(&Sender::User).unwrap();
        let bot = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(user, "\"user\"");
        assert_eq!(bot, "\"bot\"");
    }

    #[test]
    fn timestamp_serializes_as_iso_8601() {
        let msg = Message::user("halo");
        let value = serde_json::to_value(&msg).unwrap();
        let ts = value["timestamp"].as_str().unwrap();
        assert!(ts.contains('T'), "expected ISO-8601 string, got {ts}");
        assert!(ts.parse::<DateTime<Utc>>().is_ok());
    }

    #[test]
    fn user_messages_carry_no_suggestions() {
        let msg = Message::user("halo");
        assert_eq!(msg.sender, Sender::User);
        assert!(msg.suggestions.is_none());
        // ...and the field is omitted from the serialized form entirely.
        let value = serde_json::to_value(&msg).unwrap();
        assert!(value.get("suggestions").is_none());
    }
}
