//! Event operations for the Planner.

use log::{debug, error, warn};

use super::{Mutation, Planner, SaveOutcome};
use crate::{
    models::{PlanEvent, UpdateEventRequest},
    params::CreateEvent,
};

impl Planner {
    /// Reads the persisted events collection and replaces in-memory state.
    ///
    /// A failed read resets the store to no events instead of failing.
    /// Returns the number of events loaded.
    pub async fn load_events(&self) -> usize {
        match self.events.load().await {
            Ok(()) => {
                let count = self.events.read(Vec::len);
                debug!("Loaded {count} plan events");
                count
            }
            Err(e) => {
                error!("Failed to load plan events, starting empty: {e}");
                0
            }
        }
    }

    /// Snapshot of every event, in creation order.
    pub fn events(&self) -> Vec<PlanEvent> {
        self.events.read(Clone::clone)
    }

    /// Snapshot of one event.
    pub fn event(&self, event_id: &str) -> Option<PlanEvent> {
        self.events
            .read(|events| events.iter().find(|e| e.id == event_id).cloned())
    }

    /// Creates an event, makes it the active event and persists.
    ///
    /// The created event is returned whatever the outcome. If persistence
    /// fails, both the collection and the active pointer are restored.
    pub async fn create_event(&self, params: &CreateEvent) -> Mutation<PlanEvent> {
        let event = PlanEvent::new(
            params.name.clone(),
            params.date,
            params.goal_image_id.clone(),
        );
        let event_id = event.id.clone();
        let mut previous_active = None;

        let mutation = self
            .events
            .apply(|events| {
                let mut next = events.clone();
                next.push(event.clone());
                previous_active = self.replace_active_id(Some(event_id.clone()));
                Some((next, ()))
            })
            .await;

        match mutation.outcome {
            SaveOutcome::RolledBack => {
                self.restore_active_id(Some(&event_id), previous_active);
            }
            _ => debug!("Created plan event {event_id}"),
        }

        Mutation::new(event, mutation.outcome)
    }

    /// Shallow-merges `request` into the event. Unknown ids are a no-op.
    pub async fn update_event(&self, event_id: &str, request: &UpdateEventRequest) -> SaveOutcome {
        let outcome = self
            .events
            .apply(|events| {
                super::edit_event(events, event_id, |event| {
                    request.apply_to(event);
                    Some(())
                })
            })
            .await
            .outcome;

        if outcome == SaveOutcome::Unchanged {
            warn!("Ignoring update for unknown plan event {event_id}");
        }
        outcome
    }

    /// Removes the event together with its tasks and checklist. Clears the
    /// active pointer if it referenced this event.
    pub async fn delete_event(&self, event_id: &str) -> SaveOutcome {
        let mut was_active = false;

        let outcome = self
            .events
            .apply(|events| {
                if !events.iter().any(|e| e.id == event_id) {
                    return None;
                }
                let next: Vec<PlanEvent> =
                    events.iter().filter(|e| e.id != event_id).cloned().collect();
                if self.active_id().as_deref() == Some(event_id) {
                    self.replace_active_id(None);
                    was_active = true;
                }
                Some((next, ()))
            })
            .await
            .outcome;

        match outcome {
            SaveOutcome::Unchanged => warn!("Ignoring delete for unknown plan event {event_id}"),
            SaveOutcome::RolledBack if was_active => {
                self.restore_active_id(None, Some(event_id.to_string()));
            }
            _ => debug!("Deleted plan event {event_id}"),
        }
        outcome
    }

    /// Points the active event at `event_id` (or clears it). In-memory only.
    pub fn set_active_event(&self, event_id: Option<&str>) {
        self.replace_active_id(event_id.map(String::from));
    }

    /// The active event, resolved against the current collection.
    pub fn active_event(&self) -> Option<PlanEvent> {
        self.active_id().and_then(|id| self.event(&id))
    }
}
