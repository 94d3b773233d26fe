//! Data models for plan events, their tasks and checklists, and the
//! portfolio catalog entries they reference.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! All persisted models serialize with camelCase field names, matching the
//! JSON written to the `plan-events` storage key.
//!
//! # Examples
//!
//! ```rust
//! use glam_core::models::{ChecklistItem, PlanEvent, ServiceCategory};
//! use jiff::civil::date;
//!
//! let mut event = PlanEvent::new("Summer Wedding", date(2026, 7, 4), None);
//! event
//!     .checklist
//!     .push(ChecklistItem::new("Mirror", Some(ServiceCategory::Mua)));
//! assert!(event.tasks.is_empty());
//! assert_eq!(event.checklist.len(), 1);
//! ```

pub mod checklist;
pub mod event;
pub mod portfolio;
pub mod requests;
pub mod status;
pub mod task;


pub use checklist::ChecklistItem;
pub use event::PlanEvent;
pub use portfolio::{PortfolioItem, ProviderProfile, ServiceCategory};
pub use requests::{UpdateEventRequest, UpdateTaskRequest};
pub use status::TaskStatus;
pub use task::{sort_tasks_by_schedule, PlanTask};

/// Generates a fresh opaque identifier for events, tasks and checklist items.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
