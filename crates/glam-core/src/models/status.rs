//! Status enumeration for plan tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses, ordered by booking progress.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Added to the event, nothing arranged yet
    #[default]
    Planned,

    /// A date has been picked
    Scheduled,

    /// The provider has confirmed the appointment
    Booked,

    /// The service has happened
    Completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("done") {
            return Ok(TaskStatus::Completed);
        }
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid task status: {s}"))
    }
}

impl TaskStatus {
    /// All statuses in progress order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Planned,
        TaskStatus::Scheduled,
        TaskStatus::Booked,
        TaskStatus::Completed,
    ];

    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "planned",
            TaskStatus::Scheduled => "scheduled",
            TaskStatus::Booked => "booked",
            TaskStatus::Completed => "completed",
        }
    }

    /// Whether moving to `next` keeps or advances progress.
    ///
    /// Direct task updates accept any status; this is the check used by the
    /// validated transition path.
    ///
    /// ```rust
    /// use glam_core::models::TaskStatus;
    ///
    /// assert!(TaskStatus::Planned.can_advance_to(TaskStatus::Booked));
    /// assert!(TaskStatus::Booked.can_advance_to(TaskStatus::Booked));
    /// assert!(!TaskStatus::Completed.can_advance_to(TaskStatus::Planned));
    /// ```
    pub fn can_advance_to(&self, next: TaskStatus) -> bool {
        next >= *self
    }

    /// Get status with a consistent icon for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "○ Planned",
            TaskStatus::Scheduled => "◔ Scheduled",
            TaskStatus::Booked => "◑ Booked",
            TaskStatus::Completed => "✓ Completed",
        }
    }
}
