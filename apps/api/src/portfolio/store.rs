//! Flat-file portfolio persistence.
//!
//! The portfolio is a schema-less JSON document under the data directory.
//! Reads fall back to an empty default document; writes stamp timestamps and
//! serialize with last-write-wins semantics.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use tokio::sync::Mutex;

use crate::errors::AppError;

const PORTFOLIO_FILE: &str = "portfolio.json";

#[derive(Clone)]
pub struct PortfolioStore {
    data_dir: PathBuf,
    /// Serializes writers so concurrent saves cannot interleave.
    write_lock: Arc<Mutex<()>>,
}

impl PortfolioStore {
    pub fn new(data_dir: PathBuf) -> Self {
        PortfolioStore {
            data_dir,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn file_path(&self) -> PathBuf {
        self.data_dir.join(PORTFOLIO_FILE)
    }

    /// Loads the stored document. A missing or unreadable file yields the
    /// default empty portfolio rather than an error.
    pub async fn load(&self) -> Result<Value, AppError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        match tokio::fs::read_to_string(self.file_path()).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(doc) => Ok(doc),
                Err(_) => Ok(default_portfolio()),
            },
            Err(_) => Ok(default_portfolio()),
        }
    }

    /// Stamps `updated_at` (and `created_at` when absent) and persists the
    /// document, returning it as written.
    pub async fn save(&self, mut doc: Map<String, Value>) -> Result<Value, AppError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let now = timestamp();
        doc.insert("updated_at".to_string(), Value::String(now.clone()));
        let created_missing = match doc.get("created_at") {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            _ => false,
        };
        if created_missing {
            doc.insert("created_at".to_string(), Value::String(now));
        }

        let doc = Value::Object(doc);
        let pretty = serde_json::to_string_pretty(&doc)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("portfolio serialization: {e}")))?;

        let _guard = self.write_lock.lock().await;
        tokio::fs::write(self.file_path(), pretty).await?;
        Ok(doc)
    }
}

fn default_portfolio() -> Value {
    let now = timestamp();
    json!({
        "id": "portfolio_default",
        "problems": [],
        "risk": "",
        "created_at": now,
        "updated_at": now,
        "last_reviewed_at": null,
    })
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PortfolioStore {
        PortfolioStore::new(dir.path().join("data"))
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let doc = store_in(&dir).load().await.unwrap();

        assert_eq!(doc["id"], "portfolio_default");
        assert_eq!(doc["problems"], json!([]));
        assert_eq!(doc["risk"], "");
        assert_eq!(doc["last_reviewed_at"], Value::Null);
        assert_eq!(doc["created_at"], doc["updated_at"]);
    }

    #[tokio::test]
    async fn test_save_stamps_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = Map::new();
        doc.insert("id".to_string(), json!("portfolio_default"));
        doc.insert("problems".to_string(), json!([{"title": "Churn analysis"}]));
        let saved = store.save(doc).await.unwrap();

        assert!(saved["updated_at"].is_string());
        assert_eq!(saved["created_at"], saved["updated_at"]);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded["problems"][0]["title"], "Churn analysis");
    }

    #[tokio::test]
    async fn test_save_preserves_explicit_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = Map::new();
        doc.insert("created_at".to_string(), json!("2024-01-01T00:00:00.000Z"));
        let saved = store.save(doc).await.unwrap();

        assert_eq!(saved["created_at"], "2024-01-01T00:00:00.000Z");
        assert_ne!(saved["updated_at"], saved["created_at"]);
    }

    #[tokio::test]
    async fn test_save_restamps_empty_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = Map::new();
        doc.insert("created_at".to_string(), json!(""));
        let saved = store.save(doc).await.unwrap();
        assert_eq!(saved["created_at"], saved["updated_at"]);
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        tokio::fs::create_dir_all(dir.path().join("data")).await.unwrap();
        tokio::fs::write(dir.path().join("data").join(PORTFOLIO_FILE), "{not json")
            .await
            .unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc["id"], "portfolio_default");
    }

    #[tokio::test]
    async fn test_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(Map::new()).await.unwrap();
        let raw = tokio::fs::read_to_string(dir.path().join("data").join(PORTFOLIO_FILE))
            .await
            .unwrap();
        assert!(raw.contains("\n  \""));
    }
}
