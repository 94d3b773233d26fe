//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::planner::SaveOutcome;

/// One-line success or failure message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Status for a store mutation. `action` describes what was attempted,
    /// e.g. "Deleted event".
    pub fn from_outcome(outcome: SaveOutcome, action: &str) -> Self {
        match outcome {
            SaveOutcome::Saved => Self::success(action.to_string()),
            SaveOutcome::RolledBack => {
                Self::failure(format!("{action}: could not be saved, change reverted"))
            }
            SaveOutcome::Unchanged => Self::failure(format!("{action}: nothing found to change")),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
