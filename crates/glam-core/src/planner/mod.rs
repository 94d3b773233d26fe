//! The planner store: single source of truth for plan events.
//!
//! A [`Planner`] owns the collection of [`PlanEvent`]s and the active-event
//! pointer. Every mutation follows the same protocol: the change is applied
//! to in-memory state first, the whole collection is written to the
//! persistence port, and the in-memory state is rolled back if that write
//! fails. Persistence failures are logged and reported through
//! [`SaveOutcome`] rather than as errors; unknown ids are silent no-ops
//! reported as [`SaveOutcome::Unchanged`].
//!
//! ## Submodules
//!
//! - [`builder`]: configures storage and catalog, then loads saved state
//! - [`event_ops`]: event CRUD and the active-event pointer
//! - [`task_ops`]: tasks within an event
//! - [`checklist_ops`]: checklist items and suggestions
//! - [`saved`]: bookmarked portfolio items
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use glam_core::{
//!     catalog::PortfolioCatalog, params::CreateEvent, storage::MemoryStorage, Planner,
//! };
//! use jiff::civil::date;
//!
//! # async fn example() {
//! let catalog = Arc::new(PortfolioCatalog::bundled());
//! let planner = Planner::new(Arc::new(MemoryStorage::new()), Arc::clone(&catalog));
//!
//! let created = planner
//!     .create_event(&CreateEvent::new("Summer Wedding", date(2026, 7, 4)))
//!     .await;
//! assert!(created.outcome.is_saved());
//!
//! let item = catalog.item("pf-007").expect("bundled item");
//! planner.add_task(&created.value.id, item).await;
//! assert_eq!(planner.suggest_checklist_items(&created.value.id).len(), 4);
//! # }
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    catalog::PortfolioCatalog,
    models::PlanEvent,
    storage::{Storage, EVENTS_KEY},
};

pub mod builder;
pub mod checklist_ops;
pub mod event_ops;
pub mod outcome;
pub mod saved;
mod snapshot;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use outcome::{Mutation, SaveOutcome};
pub use saved::SavedItems;
pub use task_ops::TransitionPolicy;

use snapshot::SnapshotCell;

/// Planning state for one user: events, active pointer and saved items.
///
/// Construct one per process (or per test) and share it by reference.
pub struct Planner {
    events: SnapshotCell<Vec<PlanEvent>>,
    active_event_id: RwLock<Option<String>>,
    catalog: Arc<PortfolioCatalog>,
    saved: SavedItems,
}

impl Planner {
    /// Creates an empty planner over the given storage and catalog.
    ///
    /// Nothing is read from storage until [`Planner::load_events`] is
    /// called; [`PlannerBuilder::build`] does that for you.
    pub fn new(storage: Arc<dyn Storage>, catalog: Arc<PortfolioCatalog>) -> Self {
        Self {
            events: SnapshotCell::new(EVENTS_KEY, Arc::clone(&storage)),
            active_event_id: RwLock::new(None),
            catalog,
            saved: SavedItems::new(storage),
        }
    }

    /// Catalog used to resolve providers for new tasks.
    pub fn catalog(&self) -> &Arc<PortfolioCatalog> {
        &self.catalog
    }

    /// The bookmarked-items store sharing this planner's storage.
    pub fn saved_items(&self) -> &SavedItems {
        &self.saved
    }

    fn active_id(&self) -> Option<String> {
        self.active_event_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace_active_id(&self, id: Option<String>) -> Option<String> {
        let mut guard = self
            .active_event_id
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, id)
    }

    /// Restores `previous` as the active id, but only if the pointer still
    /// holds `expected` (nobody moved it in the meantime).
    fn restore_active_id(&self, expected: Option<&str>, previous: Option<String>) {
        let mut guard = self
            .active_event_id
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if guard.as_deref() == expected {
            *guard = previous;
        }
    }
}

/// Clones `events`, runs `edit` on the event with `event_id`, and returns
/// the edited collection. `None` if the event is missing or `edit` declines.
pub(crate) fn edit_event<R>(
    events: &[PlanEvent],
    event_id: &str,
    edit: impl FnOnce(&mut PlanEvent) -> Option<R>,
) -> Option<(Vec<PlanEvent>, R)> {
    let index = events.iter().position(|e| e.id == event_id)?;
    let mut next = events.to_vec();
    let value = edit(&mut next[index])?;
    Some((next, value))
}
