//! Display formatting for models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation results are wrapped in newtypes so each context
//! can format them differently. All output is markdown, rendered by the
//! CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (PlanEvent, …)  │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers (Events, Tasks, Checklist, …)
//! - [`results`]: creation results
//! - [`status`]: success/failure lines, including reverted mutations
//! - [`datetime`]: timestamp and countdown formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use glam_core::{display::OperationStatus, planner::SaveOutcome};
//!
//! let status = OperationStatus::from_outcome(SaveOutcome::RolledBack, "Toggled checklist item");
//! assert!(format!("{status}").starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Checklist, Events, PortfolioItems, Suggestions, Tasks};
pub use datetime::{Countdown, LocalDateTime};
pub use results::CreateResult;
pub use status::OperationStatus;
