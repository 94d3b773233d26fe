//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles its own empty state so callers never special-case
//! an empty list.

use std::fmt;

use crate::models::{sort_tasks_by_schedule, ChecklistItem, PlanEvent, PlanTask, PortfolioItem};

/// Compact listing of plan events.
///
/// # Examples
///
/// ```rust
/// use glam_core::{display::Events, models::PlanEvent};
/// use jiff::civil::date;
///
/// let events = Events(vec![PlanEvent::new("Birthday Trip", date(2026, 3, 14), None)]);
/// let output = events.to_string();
/// assert!(output.contains("Birthday Trip"));
/// assert!(output.contains("- Tasks: 0"));
///
/// assert_eq!(Events(vec![]).to_string(), "No events found.\n");
/// ```
pub struct Events(pub Vec<PlanEvent>);

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No events found.");
        }
        for event in &self.0 {
            writeln!(f, "## {}", event.name)?;
            writeln!(f)?;
            writeln!(f, "- ID: {}", event.id)?;
            writeln!(f, "- Date: {}", event.date)?;
            writeln!(f, "- Tasks: {}", event.tasks.len())?;
            writeln!(
                f,
                "- Checklist: {}/{}",
                event.completed_checklist_count(),
                event.checklist.len()
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tasks in display order: scheduled first by date, unscheduled last.
pub struct Tasks(pub Vec<PlanTask>);

impl Tasks {
    /// Wraps `tasks` after sorting them by scheduled date.
    pub fn sorted(mut tasks: Vec<PlanTask>) -> Self {
        sort_tasks_by_schedule(&mut tasks);
        Self(tasks)
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks in this event.");
        }
        for task in &self.0 {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

pub struct Checklist(pub Vec<ChecklistItem>);

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Checklist is empty.");
        }
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// "You might also need" list.
pub struct Suggestions(pub Vec<ChecklistItem>);

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No suggestions.");
        }
        writeln!(f, "You might also need:")?;
        writeln!(f)?;
        for item in &self.0 {
            match item.category {
                Some(category) => writeln!(f, "- {} ({category})", item.text)?,
                None => writeln!(f, "- {}", item.text)?,
            }
        }
        Ok(())
    }
}

pub struct PortfolioItems(pub Vec<PortfolioItem>);

impl fmt::Display for PortfolioItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No portfolio items found.");
        }
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
