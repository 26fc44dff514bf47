use async_trait::async_trait;

use crate::app_settings::AppSettings;
use crate::message::Message;

#[cfg(target_arch = "wasm32")]
mod browser_storage;
#[cfg(not(target_arch = "wasm32"))]
mod file_storage;

#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub type AppStorage = browser_storage::IdbStorage;

/// Fixed key under which the serialized message sequence lives: the
/// IndexedDB entry id on wasm, the file stem natively.
pub const HISTORY_KEY: &str = "wakaf_chat_history";

#[async_trait(?Send)]
pub trait Storage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()>;
    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>>;
    async fn save_history(&self, history: &[Message]) -> anyhow::Result<()>;
    async fn load_history(&self) -> anyhow::Result<Option<Vec<Message>>>;
    async fn clear_history(&self) -> anyhow::Result<()>;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    use directories_next::ProjectDirs;
    use std::path::PathBuf;

    let base = if let Some(proj_dirs) = ProjectDirs::from("id", "Wakaf", "wakaf-chat") {
        proj_dirs.config_dir().to_path_buf()
        // Lin: /home/alice/.config/wakaf-chat
        // Win: C:\Users\Alice\AppData\Roaming\Wakaf\wakaf-chat\config
        // Mac: /Users/Alice/Library/Application Support/id.Wakaf.wakaf-chat
    } else {
        PathBuf::from(".")
    };
    Ok(AppStorage::new(base))
}

#[cfg(target_arch = "wasm32")]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    let storage = AppStorage::new().await?;
    Ok(storage)
}
