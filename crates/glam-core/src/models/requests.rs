//! Partial-update request types for events and tasks.
//!
//! Every field is optional; `None` leaves the target untouched. Fields that
//! can be cleared use `Option<Option<T>>`, where `Some(None)` clears.

use jiff::civil::Date;

use super::{PlanEvent, PlanTask, TaskStatus};

/// Shallow merge of event fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub date: Option<Date>,
    pub goal_image_id: Option<Option<String>>,
}

impl UpdateEventRequest {
    /// Returns true when the request would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.goal_image_id.is_none()
    }

    /// Merges the set fields into `event`.
    pub fn apply_to(&self, event: &mut PlanEvent) {
        if let Some(name) = &self.name {
            event.name.clone_from(name);
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(goal) = &self.goal_image_id {
            event.goal_image_id.clone_from(goal);
        }
    }
}

/// Shallow merge of task fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTaskRequest {
    pub service_name: Option<String>,
    pub scheduled_date: Option<Option<Date>>,
    pub status: Option<TaskStatus>,
    pub notes: Option<Option<String>>,
}

impl UpdateTaskRequest {
    /// Request that sets the appointment date and marks the task scheduled.
    ///
    /// ```rust
    /// use glam_core::models::{TaskStatus, UpdateTaskRequest};
    /// use jiff::civil::date;
    ///
    /// let request = UpdateTaskRequest::schedule(date(2026, 7, 1));
    /// assert_eq!(request.status, Some(TaskStatus::Scheduled));
    /// assert_eq!(request.scheduled_date, Some(Some(date(2026, 7, 1))));
    /// ```
    pub fn schedule(date: Date) -> Self {
        Self {
            scheduled_date: Some(Some(date)),
            status: Some(TaskStatus::Scheduled),
            ..Default::default()
        }
    }

    /// Request that only changes the status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Returns true when the request would change nothing.
    pub fn is_empty(&self) -> bool {
        self.service_name.is_none()
            && self.scheduled_date.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }

    /// Merges the set fields into `task`.
    pub fn apply_to(&self, task: &mut PlanTask) {
        if let Some(name) = &self.service_name {
            task.service_name.clone_from(name);
        }
        if let Some(date) = self.scheduled_date {
            task.scheduled_date = date;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(notes) = &self.notes {
            task.notes.clone_from(notes);
        }
    }
}
