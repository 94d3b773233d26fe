//! Checklist item model definition.

use serde::{Deserialize, Serialize};

use super::{new_id, ServiceCategory};

/// A free-text prep todo belonging to an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Unique identifier within the parent event
    pub id: String,

    pub text: String,

    #[serde(default)]
    pub completed: bool,

    /// Category the item was suggested for; only used to track where
    /// suggestions came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ServiceCategory>,
}

impl ChecklistItem {
    /// Creates an incomplete checklist item with a fresh id.
    pub fn new(text: impl Into<String>, category: Option<ServiceCategory>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            completed: false,
            category,
        }
    }
}
