//! Checklist operations for the Planner.

use super::{edit_event, Mutation, Planner, SaveOutcome};
use crate::{
    models::{ChecklistItem, ServiceCategory},
    suggestions,
};

impl Planner {
    /// Appends an incomplete checklist item to an event.
    pub async fn add_checklist_item(
        &self,
        event_id: &str,
        text: &str,
        category: Option<ServiceCategory>,
    ) -> Mutation<Option<ChecklistItem>> {
        let item = ChecklistItem::new(text, category);

        self.events
            .apply(|events| {
                edit_event(events, event_id, |event| {
                    event.checklist.push(item.clone());
                    Some(item.clone())
                })
            })
            .await
    }

    /// Flips a checklist item's `completed` flag.
    pub async fn toggle_checklist_item(&self, event_id: &str, item_id: &str) -> SaveOutcome {
        self.events
            .apply(|events| {
                edit_event(events, event_id, |event| {
                    let item = event.checklist.iter_mut().find(|c| c.id == item_id)?;
                    item.completed = !item.completed;
                    Some(())
                })
            })
            .await
            .outcome
    }

    /// Removes a checklist item from an event.
    pub async fn remove_checklist_item(&self, event_id: &str, item_id: &str) -> SaveOutcome {
        self.events
            .apply(|events| {
                edit_event(events, event_id, |event| {
                    let before = event.checklist.len();
                    event.checklist.retain(|c| c.id != item_id);
                    (event.checklist.len() != before).then_some(())
                })
            })
            .await
            .outcome
    }

    /// Prep items the event's tasks call for that are not on its checklist
    /// yet. Empty for unknown events.
    pub fn suggest_checklist_items(&self, event_id: &str) -> Vec<ChecklistItem> {
        self.event(event_id)
            .map(|event| suggestions::suggest_checklist_items(&event))
            .unwrap_or_default()
    }

    /// Appends every current suggestion to the event's checklist in one
    /// mutation. Returns the items added; `Unchanged` if there was nothing to
    /// add or the event does not exist.
    pub async fn add_suggested_items(&self, event_id: &str) -> Mutation<Vec<ChecklistItem>> {
        self.events
            .apply(|events| {
                edit_event(events, event_id, |event| {
                    let added = suggestions::suggest_checklist_items(event);
                    if added.is_empty() {
                        return None;
                    }
                    event.checklist.extend(added.iter().cloned());
                    Some(added)
                })
            })
            .await
            .map(Option::unwrap_or_default)
    }
}
