//! Task operations for the Planner.

use log::{debug, warn};

use super::{edit_event, Mutation, Planner, SaveOutcome};
use crate::{
    error::{GlamError, Result},
    models::{PlanTask, PortfolioItem, TaskStatus, UpdateTaskRequest},
};

/// Whether a task update may move its status backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Reject updates whose status precedes the current one
    ForwardOnly,
    /// Accept any status, logging backwards moves
    AllowBackwards,
}

impl Planner {
    /// Adds a `planned` task for a portfolio item to an event.
    ///
    /// Service and provider names are copied from the item and its catalog
    /// provider. Returns `None` as the value if the event does not exist.
    pub async fn add_task(
        &self,
        event_id: &str,
        item: &PortfolioItem,
    ) -> Mutation<Option<PlanTask>> {
        let provider = self.catalog.provider_for_item(item);
        let task = PlanTask::from_portfolio_item(item, provider);

        let mutation = self
            .events
            .apply(|events| {
                edit_event(events, event_id, |event| {
                    event.tasks.push(task.clone());
                    Some(task.clone())
                })
            })
            .await;

        match mutation.outcome {
            SaveOutcome::Unchanged => warn!("Ignoring task for unknown plan event {event_id}"),
            SaveOutcome::Saved => debug!("Added task {} to plan event {event_id}", task.id),
            SaveOutcome::RolledBack => {}
        }
        mutation
    }

    /// Shallow-merges `request` into a task.
    ///
    /// Any status may be set here, including moving backwards; such moves
    /// are logged. Use [`Planner::advance_task`] to reject them.
    pub async fn update_task(
        &self,
        event_id: &str,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> SaveOutcome {
        self.events
            .apply(|events| {
                edit_event(events, event_id, |event| {
                    let task = event.tasks.iter_mut().find(|t| t.id == task_id)?;
                    if let Some(next) = request.status {
                        if !task.status.can_advance_to(next) {
                            warn!("Task {task_id} moved back from {} to {next}", task.status);
                        }
                    }
                    request.apply_to(task);
                    Some(())
                })
            })
            .await
            .outcome
    }

    /// Sets a task's status, refusing moves that go backwards.
    ///
    /// # Errors
    ///
    /// Returns `GlamError::InvalidTransition` if `status` precedes the
    /// task's current status. Unknown ids yield `Ok(SaveOutcome::Unchanged)`.
    pub async fn advance_task(
        &self,
        event_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<SaveOutcome> {
        self.revise_task(
            event_id,
            task_id,
            &UpdateTaskRequest::status(status),
            TransitionPolicy::ForwardOnly,
        )
        .await
    }

    /// Applies `request` to a task as one mutation, checking the status
    /// change against `policy` first.
    ///
    /// Unlike [`UpdateTaskRequest::schedule`], a new date here only lifts a
    /// `planned` task to `scheduled`, and only when the request names no
    /// status; a task that is already further along keeps its status. A
    /// rejected request changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `GlamError::InvalidTransition` if the policy is
    /// [`TransitionPolicy::ForwardOnly`] and the requested status precedes
    /// the current one. Unknown ids yield `Ok(SaveOutcome::Unchanged)`.
    pub async fn revise_task(
        &self,
        event_id: &str,
        task_id: &str,
        request: &UpdateTaskRequest,
        policy: TransitionPolicy,
    ) -> Result<SaveOutcome> {
        let mut rejected = None;

        let outcome = self
            .events
            .apply(|events| {
                edit_event(events, event_id, |event| {
                    let task = event.tasks.iter_mut().find(|t| t.id == task_id)?;
                    if let Some(next) = request.status {
                        if !task.status.can_advance_to(next) {
                            if policy == TransitionPolicy::ForwardOnly {
                                rejected = Some((task.status, next));
                                return None;
                            }
                            warn!("Task {task_id} moved back from {} to {next}", task.status);
                        }
                    }

                    let newly_dated = matches!(request.scheduled_date, Some(Some(_)));
                    let lift = request.status.is_none()
                        && newly_dated
                        && task.status == TaskStatus::Planned;
                    request.apply_to(task);
                    if lift {
                        task.status = TaskStatus::Scheduled;
                    }
                    Some(())
                })
            })
            .await
            .outcome;

        match rejected {
            Some((from, to)) => Err(GlamError::InvalidTransition { from, to }),
            None => Ok(outcome),
        }
    }

    /// Removes a task from an event.
    pub async fn remove_task(&self, event_id: &str, task_id: &str) -> SaveOutcome {
        self.events
            .apply(|events| {
                edit_event(events, event_id, |event| {
                    let before = event.tasks.len();
                    event.tasks.retain(|t| t.id != task_id);
                    (event.tasks.len() != before).then_some(())
                })
            })
            .await
            .outcome
    }
}
