//! SQLite-backed storage adapter.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use tokio::task;

use super::Storage;
use crate::error::{GlamError, Result, StorageResultExt};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Durable key/value storage in a single SQLite file.
///
/// Every call opens its own connection on the blocking thread pool, so the
/// adapter can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop)).await??;

        Ok(Self { db_path })
    }

    /// Location of the backing database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get(&key)
        })
        .await?
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set(&key, &value)
        })
        .await?
    }
}

/// A single connection to the key/value database.
struct Database {
    connection: Connection,
}

impl Database {
    fn new(path: &Path) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .storage_context("Failed to initialize database schema")
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read value")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .storage_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(UPSERT_VALUE_SQL, params![key, value, &now])
            .map_err(|e| GlamError::storage("Failed to write value").with_source(e))?;

        tx.commit().storage_context("Failed to commit transaction")
    }
}
