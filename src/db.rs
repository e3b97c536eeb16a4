//! Durable key-value persistence for user preferences.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One-key-one-string persistence boundary.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// SQLite-backed preference store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the preference database at `path`.
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect(options).await
    }

    /// A private in-memory database, discarded when the store is dropped.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect(SqliteConnectOptions::from_str("sqlite::memory:")?).await
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self, StoreError> {
        // A single connection keeps writes ordered and in-memory databases shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Close the underlying pool, flushing pending writes.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PreferenceStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM preferences WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!("Stored preference {} = {}", key, value);
        Ok(())
    }
}

/// Volatile in-process store, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== Helper Functions ====================

    /// Create a temporary database for testing
    async fn create_test_db() -> (SqliteStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test_preferences.db");
        let store = SqliteStore::open(db_path.to_str().unwrap())
            .await
            .expect("Failed to create database");
        (store, temp_dir)
    }

    // ==================== Database Initialization Tests ====================

    #[tokio::test]
    async fn test_database_creation() {
        let (store, _temp_dir) = create_test_db().await;
        assert_eq!(store.get("selectedLanguage").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_database_reopening() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let path_str = db_path.to_str().unwrap();

        {
            let store = SqliteStore::open(path_str).await.expect("Failed to create");
            store.set("selectedLanguage", "tamil").await.expect("Should set");
            store.close().await;
        }

        {
            let store = SqliteStore::open(path_str).await.expect("Failed to reopen");
            let value = store.get("selectedLanguage").await.expect("Should get");
            assert_eq!(value.as_deref(), Some("tamil"), "Value should persist");
        }
    }

    #[tokio::test]
    async fn test_invalid_database_path() {
        let result = SqliteStore::open("/non/existent/path/db.db").await;
        assert!(result.is_err());
    }

    // ==================== get/set Tests ====================

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let (store, _temp_dir) = create_test_db().await;

        store.set("selectedLanguage", "hindi").await.unwrap();
        store.set("selectedLanguage", "bengali").await.unwrap();

        let value = store.get("selectedLanguage").await.unwrap();
        assert_eq!(value.as_deref(), Some("bengali"));
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let (store, _temp_dir) = create_test_db().await;

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_unicode_value() {
        let (store, _temp_dir) = create_test_db().await;

        store.set("label", "മലയാളം").await.unwrap();
        assert_eq!(store.get("label").await.unwrap().as_deref(), Some("മലയാളം"));
    }

    #[tokio::test]
    async fn test_sql_injection_prevention_key() {
        let (store, _temp_dir) = create_test_db().await;

        let malicious = "x'; DROP TABLE preferences; --";
        store.set(malicious, "v").await.unwrap();

        assert_eq!(store.get(malicious).await.unwrap().as_deref(), Some("v"));
        store.set("still", "works").await.unwrap();
    }

    #[tokio::test]
    async fn test_set_stamps_updated_at() {
        let (store, _temp_dir) = create_test_db().await;
        store.set("selectedLanguage", "hindi").await.unwrap();

        let stamp = sqlx::query_scalar::<_, String>(
            "SELECT updated_at FROM preferences WHERE key = 'selectedLanguage'",
        )
        .fetch_one(&store.pool)
        .await
        .unwrap();

        let parsed = chrono::DateTime::parse_from_rfc3339(&stamp).expect("Should be RFC 3339");
        let age = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
        assert!(age.num_seconds() < 60);
    }

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = SqliteStore::in_memory().await.expect("Should open");
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_clone_shares_pool() {
        let (store, _temp_dir) = create_test_db().await;
        let clone = store.clone();

        store.set("k", "v").await.unwrap();
        assert_eq!(clone.get("k").await.unwrap().as_deref(), Some("v"));
    }

    // ==================== MemoryStore Tests ====================

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "v1").await.unwrap();
        store.set("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_store_as_trait_object() {
        let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
