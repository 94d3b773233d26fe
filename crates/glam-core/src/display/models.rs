//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation logic. Everything renders as markdown.

use std::fmt;

use super::{collections::Tasks, datetime::LocalDateTime};
use crate::models::{
    ChecklistItem, PlanEvent, PlanTask, PortfolioItem, ProviderProfile, ServiceCategory,
    TaskStatus,
};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Date: {}", self.date)?;
        if let Some(goal) = &self.goal_image_id {
            writeln!(f, "- Goal image: {goal}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        write!(f, "{}", Tasks::sorted(self.tasks.clone()))?;

        writeln!(
            f,
            "\n## Checklist ({}/{})",
            self.completed_checklist_count(),
            self.checklist.len()
        )?;
        writeln!(f)?;
        if self.checklist.is_empty() {
            writeln!(f, "Checklist is empty.")?;
        } else {
            for item in &self.checklist {
                write!(f, "{item}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.service_name, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Portfolio item: {}", self.portfolio_item_id)?;
        if let Some(provider) = &self.provider_name {
            writeln!(f, "- Provider: {provider}")?;
        }
        match self.scheduled_date {
            Some(date) => writeln!(f, "- Scheduled: {date}")?,
            None => writeln!(f, "- Scheduled: not yet")?,
        }
        if let Some(notes) = &self.notes {
            writeln!(f, "- Notes: {notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        writeln!(f, "- [{mark}] {} `{}`", self.text, self.id)
    }
}

impl fmt::Display for PortfolioItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.caption, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Provider: {}", self.provider_id)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if let Some(price) = self.price {
            writeln!(f, "- From: ${price}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProviderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} ({location})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
