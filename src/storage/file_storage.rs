use anyhow::Result;
use std::path::PathBuf;
use tokio::fs;

use super::{HISTORY_KEY, Storage};
use crate::app_settings::AppSettings;
use crate::message::Message;

pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn settings_path(&self) -> PathBuf {
        self.base.join("settings.json")
    }

    fn history_path(&self) -> PathBuf {
        self.base.join(format!("{HISTORY_KEY}.json"))
    }

    async fn ensure_base(&self) -> Result<()> {
        fs::create_dir_all(&self.base).await?;
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl Storage for FileStorage {
    async fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        self.ensure_base().await?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(self.settings_path(), json).await?;
        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<AppSettings>> {
        match fs::read_to_string(self.settings_path()).await {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(_) => Ok(None),
        }
    }

    async fn save_history(&self, history: &[Message]) -> Result<()> {
        self.ensure_base().await?;
        let json = serde_json::to_string(history)?;
        fs::write(self.history_path(), json).await?;
        Ok(())
    }

    async fn load_history(&self) -> Result<Option<Vec<Message>>> {
        match fs::read_to_string(self.history_path()).await {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(_) => Ok(None),
        }
    }

    async fn clear_history(&self) -> Result<()> {
        match fs::remove_file(self.history_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wakaf-chat-{tag}-{}", std::process::id()))
    }

    #[tokio::test]
    async fn history_round_trips_and_clears() {
        let base = temp_base("history");
        let storage = FileStorage::new(&base);

        assert!(storage.load_history().await.unwrap().is_none());

        let history = vec![
            Message::user("Apa hukum wakaf?"),
            Message::bot("Sunnah.", vec!["Apa dalilnya?".into()]),
        ];
        storage.save_history(&history).await.unwrap();

        let loaded = storage.load_history().await.unwrap().unwrap();
        assert_eq!(loaded, history);

        storage.clear_history().await.unwrap();
        assert!(storage.load_history().await.unwrap().is_none());
        // Clearing twice must stay quiet.
        storage.clear_history().await.unwrap();

        let _ = fs::remove_dir_all(&base).await;
    }

    #[tokio::test]
    async fn settings_round_trip() {
        let base = temp_base("settings");
        let storage = FileStorage::new(&base);

        assert!(storage.load_settings().await.unwrap().is_none());

        let settings = AppSettings {
            id: Some(1),
            api_url: "http://example.com:5000".into(),
        };
        storage.save_settings(&settings).await.unwrap();
        let loaded = storage.load_settings().await.unwrap().unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(&base).await;
    }
}
