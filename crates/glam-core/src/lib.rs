//! Core library for the glam event planner.
//!
//! This crate owns the client-side planning state: plan events with their
//! service tasks and prep checklists, the bookmarked portfolio items, a
//! date-seeded feed over the bundled portfolio catalog, and checklist
//! suggestions derived from the tasks already planned.
//!
//! # Architecture
//!
//! - [`storage`]: the asynchronous key/value persistence port and its
//!   SQLite and in-memory adapters
//! - [`catalog`]: the immutable provider/portfolio catalog
//! - [`feed`]: deterministic, session-stable shuffle of the catalog
//! - [`suggestions`]: keyword-driven "you might also need" items
//! - [`planner`]: the store itself, applying every mutation optimistically
//!   and rolling back when persistence fails
//! - [`display`]: markdown formatting for front ends
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use glam_core::{params::CreateEvent, storage::MemoryStorage, PlannerBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_storage(Arc::new(MemoryStorage::new()))
//!     .build()
//!     .await?;
//!
//! let created = planner
//!     .create_event(&CreateEvent::new("Summer Wedding", date(2026, 7, 4)))
//!     .await;
//! println!("{}", created.value);
//!
//! assert_eq!(planner.active_event(), Some(created.value));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod feed;
pub mod models;
pub mod params;
pub mod planner;
pub mod storage;
pub mod suggestions;

// Re-export commonly used types
pub use catalog::PortfolioCatalog;
pub use display::{
    Checklist, CreateResult, Events, OperationStatus, PortfolioItems, Suggestions, Tasks,
};
pub use error::{GlamError, Result};
pub use feed::Feed;
pub use models::{
    ChecklistItem, PlanEvent, PlanTask, PortfolioItem, ProviderProfile, ServiceCategory,
    TaskStatus, UpdateEventRequest, UpdateTaskRequest,
};
pub use params::{CreateEvent, NewChecklistItem};
pub use planner::{
    Mutation, Planner, PlannerBuilder, SaveOutcome, SavedItems, TransitionPolicy,
};
pub use storage::{MemoryStorage, SqliteStorage, Storage, StorageExt};
pub use suggestions::suggest_checklist_items;
