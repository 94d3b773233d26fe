//! Bookmarked portfolio items.

use std::sync::Arc;

use log::debug;

use super::{snapshot::SnapshotCell, Mutation};
use crate::{
    error::Result,
    storage::{Storage, SAVED_ITEMS_KEY},
};

/// Ordered set of saved portfolio item ids, persisted with the same
/// optimistic protocol as plan events.
pub struct SavedItems {
    ids: SnapshotCell<Vec<String>>,
}

impl SavedItems {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            ids: SnapshotCell::new(SAVED_ITEMS_KEY, storage),
        }
    }

    /// Replaces in-memory ids with the persisted ones. On error the set is
    /// left empty.
    pub async fn load(&self) -> Result<usize> {
        self.ids.load().await?;
        let count = self.ids.read(Vec::len);
        debug!("Loaded {count} saved items");
        Ok(count)
    }

    /// Saves the item if it was not saved, unsaves it otherwise. The value is
    /// true when the item is saved afterwards.
    pub async fn toggle(&self, item_id: &str) -> Mutation<bool> {
        self.ids
            .apply(|ids| {
                let mut next = ids.clone();
                let saved = match next.iter().position(|id| id == item_id) {
                    Some(index) => {
                        next.remove(index);
                        false
                    }
                    None => {
                        next.push(item_id.to_string());
                        true
                    }
                };
                Some((next, saved))
            })
            .await
            .map(|saved| saved.unwrap_or(false))
    }

    pub fn is_saved(&self, item_id: &str) -> bool {
        self.ids.read(|ids| ids.iter().any(|id| id == item_id))
    }

    /// Saved ids, oldest first.
    pub fn ids(&self) -> Vec<String> {
        self.ids.read(Clone::clone)
    }
}
