//! Plan event model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{new_id, ChecklistItem, PlanTask};

/// A named occasion with a target date, grouping service tasks and a prep
/// checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanEvent {
    /// Opaque unique identifier, fixed at creation
    pub id: String,

    /// User supplied label
    pub name: String,

    /// Target occasion date (not required to be in the future)
    pub date: Date,

    /// Portfolio item used as the event's hero image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_image_id: Option<String>,

    /// Service tasks owned by this event
    #[serde(default)]
    pub tasks: Vec<PlanTask>,

    /// Prep checklist owned by this event
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    /// Timestamp when the event was created (UTC)
    pub created_at: Timestamp,
}

impl PlanEvent {
    /// Builds a new event with a fresh id, empty tasks and checklist, and
    /// `created_at` set to now.
    pub fn new(name: impl Into<String>, date: Date, goal_image_id: Option<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            date,
            goal_image_id,
            tasks: Vec::new(),
            checklist: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Looks up a task by id.
    pub fn task(&self, task_id: &str) -> Option<&PlanTask> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Looks up a checklist item by id.
    pub fn checklist_item(&self, item_id: &str) -> Option<&ChecklistItem> {
        self.checklist.iter().find(|c| c.id == item_id)
    }

    /// Number of checklist items marked completed.
    pub fn completed_checklist_count(&self) -> usize {
        self.checklist.iter().filter(|c| c.completed).count()
    }
}
