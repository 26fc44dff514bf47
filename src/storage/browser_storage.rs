use anyhow::anyhow;
use idb::{Database, DatabaseEvent, Factory, KeyPath, ObjectStoreParams, TransactionMode};
use js_sys::wasm_bindgen::JsValue;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::Serializer;

use super::{HISTORY_KEY, Storage};
use crate::app_settings::AppSettings;
use crate::message::Message;

/// Wrapper document for the message sequence; IndexedDB entries need an
/// in-band `id` because the object stores are keyed by that path.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryDoc {
    id: String,
    messages: Vec<Message>,
}

#[derive(Debug)]
pub struct IdbStorage {
    db: Database,
}

impl IdbStorage {
    pub async fn new() -> anyhow::Result<Self> {
        let db = Self::create_db().await?;
        Ok(Self { db })
    }

    async fn create_db() -> anyhow::Result<Database> {
        // Get a factory instance from global scope
        let factory = Factory::new().map_err(|e| anyhow!("{e:?}"))?;

        let mut open_request = factory
            .open("wakaf_chat", Some(1))
            .map_err(|e| anyhow!("{e:?}"))?;

        // First-open upgrade: one store for settings, one for the single
        // history entry, both keyed by the in-band `id` field.
        open_request.on_upgrade_needed(|event| {
            let database = event.database().unwrap();

            let mut store_params = ObjectStoreParams::new();
            store_params.auto_increment(false);
            store_params.key_path(Some(KeyPath::new_single("id")));
            let _store = database
                .create_object_store("settings", store_params.clone())
                .unwrap();
            let _store = database
                .create_object_store("history", store_params)
                .unwrap();
        });

        let db = open_request.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(db)
    }

    async fn put_doc<T: Serialize>(&self, store_name: &str, doc: &T) -> anyhow::Result<()> {
        let transaction = self
            .db
            .transaction(&[store_name], TransactionMode::ReadWrite)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store(store_name)
            .map_err(|e| anyhow!("{e:?}"))?;

        let doc = doc
            .serialize(&Serializer::json_compatible())
            .map_err(|e| anyhow!("{e:?}"))?;
        store
            .put(&doc, None)
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        transaction
            .commit()
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        Ok(())
    }

    async fn get_doc<T: for<'de> Deserialize<'de>>(
        &self,
        store_name: &str,
        key: JsValue,
    ) -> anyhow::Result<Option<T>> {
        let transaction = self
            .db
            .transaction(&[store_name], TransactionMode::ReadOnly)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store(store_name)
            .map_err(|e| anyhow!("{e:?}"))?;

        let stored: Option<JsValue> = store
            .get(key)
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        let stored = stored
            .map(|v| serde_wasm_bindgen::from_value(v).map_err(|e| anyhow!("{e:?}")))
            .transpose()?;

        transaction.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(stored)
    }
}

#[async_trait::async_trait(?Send)]
impl Storage for IdbStorage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()> {
        self.put_doc("settings", settings).await
    }

    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>> {
        self.get_doc("settings", JsValue::from_f64(1.)).await
    }

    async fn save_history(&self, history: &[Message]) -> anyhow::Result<()> {
        let doc = HistoryDoc {
            id: HISTORY_KEY.to_string(),
            messages: history.to_vec(),
        };
        self.put_doc("history", &doc).await
    }

    async fn load_history(&self) -> anyhow::Result<Option<Vec<Message>>> {
        let doc: Option<HistoryDoc> = self
            .get_doc("history", JsValue::from_str(HISTORY_KEY))
            .await?;
        Ok(doc.map(|d| d.messages))
    }

    async fn clear_history(&self) -> anyhow::Result<()> {
        let transaction = self
            .db
            .transaction(&["history"], TransactionMode::ReadWrite)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store("history")
            .map_err(|e| anyhow!("{e:?}"))?;

        store
            .delete(JsValue::from_str(HISTORY_KEY))
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;

        transaction.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(())
    }
}
