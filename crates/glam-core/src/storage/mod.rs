//! Persistence port and its adapters.
//!
//! The planner only needs asynchronous get/set of JSON values by string key.
//! [`Storage`] is the object-safe port working on raw JSON text; the
//! [`StorageExt`] blanket extension adds typed access on top of it.
//!
//! Two adapters ship with the crate:
//!
//! - [`SqliteStorage`]: durable key/value table in a SQLite file
//! - [`MemoryStorage`]: in-process map with failure injection for tests

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Storage key holding the full plan-events collection.
pub const EVENTS_KEY: &str = "plan-events";

/// Storage key holding the bookmarked portfolio item ids.
pub const SAVED_ITEMS_KEY: &str = "saved-portfolio-items";

/// Asynchronous key/value storage. Last writer wins.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the raw JSON stored under `key`, or `None` if absent.
    async fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the raw JSON stored under `key`.
    async fn set_raw(&self, key: &str, value: String) -> Result<()>;
}

/// Typed JSON access for any [`Storage`].
#[async_trait]
pub trait StorageExt: Storage {
    /// Reads and deserializes the value under `key`.
    async fn get_item<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.get_raw(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serializes and stores `value` under `key`.
    async fn set_item<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, raw).await
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}
