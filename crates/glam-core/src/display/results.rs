//! Result wrapper types for displaying creation outcomes.

use std::fmt;

use crate::models::{ChecklistItem, PlanEvent, PlanTask};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use glam_core::{display::CreateResult, models::PlanEvent};
/// use jiff::civil::date;
///
/// let event = PlanEvent::new("Summer Wedding", date(2026, 7, 4), None);
/// let output = CreateResult::new(event.clone()).to_string();
/// assert!(output.starts_with(&format!("Created event with ID: {}", event.id)));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PlanEvent> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created event with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<PlanTask> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ChecklistItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created checklist item with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
