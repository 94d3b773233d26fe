//! In-memory storage adapter with failure injection.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex, PoisonError,
    },
};

use async_trait::async_trait;

use super::Storage;
use crate::error::{GlamError, Result};

/// Process-local storage. Nothing survives a restart.
///
/// Reads and writes can be made to fail on demand, which is how the rollback
/// behaviour of the stores is exercised.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    failing_writes_left: AtomicUsize,
    writes: AtomicUsize,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent read fail (or succeed again).
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes only the next `count` writes fail.
    pub fn fail_next_writes(&self, count: usize) {
        self.failing_writes_left.store(count, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Seeds a raw value directly, bypassing failure injection.
    pub fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.into());
    }

    /// Reads a raw value directly, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn take_write_failure(&self) -> bool {
        if self.fail_writes.load(Ordering::SeqCst) {
            return true;
        }
        self.failing_writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(GlamError::Unavailable(format!("read of '{key}' refused")));
        }
        Ok(self.raw(key))
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        if self.take_write_failure() {
            return Err(GlamError::Unavailable(format!("write of '{key}' refused")));
        }
        self.insert_raw(key, value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
