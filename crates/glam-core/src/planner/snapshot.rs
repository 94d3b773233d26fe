//! Optimistic snapshot cell shared by the planner and saved-items stores.
//!
//! Every mutation runs under one async writer lock:
//!
//! 1. capture the current snapshot
//! 2. compute and publish the next snapshot
//! 3. await the durable write
//! 4. on failure, publish the captured snapshot again
//!
//! Readers never take the writer lock, so during step 3 they observe the
//! optimistic value. Because writers are serialized, a rollback can only
//! ever undo its own change.

use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, error};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use super::outcome::{Mutation, SaveOutcome};
use crate::{
    error::Result,
    storage::{Storage, StorageExt},
};

pub(crate) struct SnapshotCell<T> {
    key: &'static str,
    storage: Arc<dyn Storage>,
    current: RwLock<T>,
    writer: Mutex<()>,
}

impl<T> SnapshotCell<T>
where
    T: Clone + Default + Serialize + DeserializeOwned + Send + Sync,
{
    pub(crate) fn new(key: &'static str, storage: Arc<dyn Storage>) -> Self {
        Self {
            key,
            storage,
            current: RwLock::new(T::default()),
            writer: Mutex::new(()),
        }
    }

    /// Runs `f` against the current (possibly not yet durable) snapshot.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn publish(&self, value: T) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = value;
    }

    /// Replaces the snapshot with the stored value, or the default if the
    /// key is absent. A failed read also resets to the default and reports
    /// the error.
    pub(crate) async fn load(&self) -> Result<()> {
        let _writer = self.writer.lock().await;

        match self.storage.get_item::<T>(self.key).await {
            Ok(value) => {
                self.publish(value.unwrap_or_default());
                Ok(())
            }
            Err(e) => {
                self.publish(T::default());
                Err(e)
            }
        }
    }

    /// Applies `change` optimistically and persists the result.
    ///
    /// `change` returns `None` when there is nothing to do; the snapshot is
    /// then left alone, nothing is written and the outcome is
    /// [`SaveOutcome::Unchanged`].
    pub(crate) async fn apply<R, F>(&self, change: F) -> Mutation<Option<R>>
    where
        F: FnOnce(&T) -> Option<(T, R)> + Send,
        R: Send,
    {
        let _writer = self.writer.lock().await;

        let previous = self.read(T::clone);
        let Some((next, value)) = change(&previous) else {
            return Mutation::new(None, SaveOutcome::Unchanged);
        };
        self.publish(next.clone());

        match self.storage.set_item(self.key, &next).await {
            Ok(()) => {
                debug!("Persisted '{}'", self.key);
                Mutation::new(Some(value), SaveOutcome::Saved)
            }
            Err(e) => {
                error!("Failed to persist '{}', rolling back: {e}", self.key);
                self.publish(previous);
                Mutation::new(Some(value), SaveOutcome::RolledBack)
            }
        }
    }
}
