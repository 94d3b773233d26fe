//! Tests for the planner module.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::civil::date;
use tokio::sync::Notify;

use super::*;
use crate::{
    error::{GlamError, Result},
    models::{ServiceCategory, TaskStatus, UpdateEventRequest, UpdateTaskRequest},
    params::CreateEvent,
    storage::{MemoryStorage, Storage},
};

/// Storage whose writes wait until the test opens the gate.
struct GatedStorage {
    inner: MemoryStorage,
    gate: Notify,
}

#[async_trait]
impl Storage for GatedStorage {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_raw(key).await
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        self.gate.notified().await;
        self.inner.set_raw(key, value).await
    }
}

/// Helper function to create a test planner over in-memory storage
fn create_test_planner() -> (Arc<MemoryStorage>, Planner) {
    let storage = Arc::new(MemoryStorage::new());
    let planner = Planner::new(storage.clone(), Arc::new(PortfolioCatalog::bundled()));
    (storage, planner)
}

async fn create_wedding(planner: &Planner) -> PlanEvent {
    planner
        .create_event(&CreateEvent::new("Summer Wedding", date(2026, 7, 4)))
        .await
        .value
}

fn bridal_glam(planner: &Planner) -> crate::models::PortfolioItem {
    planner
        .catalog()
        .item("pf-007")
        .cloned()
        .expect("bundled catalog has pf-007")
}

#[tokio::test]
async fn test_create_event_becomes_active() {
    let (storage, planner) = create_test_planner();

    let created = planner
        .create_event(&CreateEvent::new("Summer Wedding", date(2026, 7, 4)))
        .await;

    assert_eq!(created.outcome, SaveOutcome::Saved);
    assert!(created.value.tasks.is_empty());
    assert!(created.value.checklist.is_empty());
    assert_eq!(planner.active_event(), Some(created.value.clone()));
    assert_eq!(storage.write_count(), 1);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let (_storage, planner) = create_test_planner();

    for i in 0..20 {
        planner
            .create_event(&CreateEvent::new(format!("Event {i}"), date(2026, 1, 1)))
            .await;
    }

    let mut ids: Vec<String> = planner.events().into_iter().map(|e| e.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_wedding_scenario() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;

    let added = planner.add_task(&event.id, &bridal_glam(&planner)).await;
    assert_eq!(added.outcome, SaveOutcome::Saved);
    let task = added.value.expect("task should be created");
    assert_eq!(task.status, TaskStatus::Planned);
    assert_eq!(task.service_name, "Bridal glam — soft smokey eye");
    assert_eq!(task.provider_name.as_deref(), Some("The Glow Bar"));

    let suggestions = planner.suggest_checklist_items(&event.id);
    let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
    for expected in ["Setting spray", "Makeup wipes", "Blotting papers", "Mirror"] {
        assert_eq!(texts.iter().filter(|t| **t == expected).count(), 1, "{expected}");
    }
    assert!(suggestions
        .iter()
        .all(|s| s.category == Some(ServiceCategory::Mua)));
}

#[tokio::test]
async fn test_delete_active_event_clears_pointer() {
    let (_storage, planner) = create_test_planner();
    let first = create_wedding(&planner).await;
    let second = create_wedding(&planner).await;

    // deleting a non-active event leaves the pointer alone
    assert_eq!(planner.delete_event(&first.id).await, SaveOutcome::Saved);
    assert_eq!(planner.active_event().map(|e| e.id), Some(second.id.clone()));

    assert_eq!(planner.delete_event(&second.id).await, SaveOutcome::Saved);
    assert!(planner.active_event().is_none());
    assert!(planner.events().is_empty());
}

#[tokio::test]
async fn test_set_active_event_is_in_memory_only() {
    let (storage, planner) = create_test_planner();
    let first = create_wedding(&planner).await;
    create_wedding(&planner).await;
    let writes = storage.write_count();

    planner.set_active_event(Some(&first.id));
    assert_eq!(planner.active_event().map(|e| e.id), Some(first.id));

    planner.set_active_event(None);
    assert!(planner.active_event().is_none());

    planner.set_active_event(Some("unknown"));
    assert!(planner.active_event().is_none());
    assert_eq!(storage.write_count(), writes);
}

#[tokio::test]
async fn test_checklist_double_toggle() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;

    let item = planner
        .add_checklist_item(&event.id, "Steam the dress", None)
        .await
        .value
        .expect("item should be created");
    assert!(!item.completed);

    planner.toggle_checklist_item(&event.id, &item.id).await;
    let toggled = planner.event(&event.id).unwrap();
    assert!(toggled.checklist_item(&item.id).unwrap().completed);

    planner.toggle_checklist_item(&event.id, &item.id).await;
    let back = planner.event(&event.id).unwrap();
    assert!(!back.checklist_item(&item.id).unwrap().completed);
}

#[tokio::test]
async fn test_unknown_ids_are_silent_noops() {
    let (storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let writes = storage.write_count();
    let before = planner.events();

    let request = UpdateEventRequest {
        name: Some("x".to_string()),
        ..Default::default()
    };
    assert_eq!(planner.update_event("nope", &request).await, SaveOutcome::Unchanged);
    assert_eq!(planner.delete_event("nope").await, SaveOutcome::Unchanged);
    assert!(planner.add_task("nope", &bridal_glam(&planner)).await.value.is_none());
    assert_eq!(
        planner
            .update_task(&event.id, "nope", &UpdateTaskRequest::status(TaskStatus::Booked))
            .await,
        SaveOutcome::Unchanged
    );
    assert_eq!(planner.remove_task(&event.id, "nope").await, SaveOutcome::Unchanged);
    assert!(planner.add_checklist_item("nope", "x", None).await.value.is_none());
    assert_eq!(
        planner.toggle_checklist_item(&event.id, "nope").await,
        SaveOutcome::Unchanged
    );
    assert_eq!(
        planner.remove_checklist_item(&event.id, "nope").await,
        SaveOutcome::Unchanged
    );
    assert!(planner.suggest_checklist_items("nope").is_empty());

    assert_eq!(planner.events(), before);
    assert_eq!(storage.write_count(), writes);
}

#[tokio::test]
async fn test_update_event_and_task() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();

    let outcome = planner
        .update_event(
            &event.id,
            &UpdateEventRequest {
                date: Some(date(2026, 8, 1)),
                goal_image_id: Some(Some("pf-003".to_string())),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(outcome, SaveOutcome::Saved);

    planner
        .update_task(&event.id, &task.id, &UpdateTaskRequest::schedule(date(2026, 7, 30)))
        .await;

    let stored = planner.event(&event.id).unwrap();
    assert_eq!(stored.name, "Summer Wedding");
    assert_eq!(stored.date, date(2026, 8, 1));
    assert_eq!(stored.goal_image_id.as_deref(), Some("pf-003"));
    let stored_task = stored.task(&task.id).unwrap();
    assert_eq!(stored_task.status, TaskStatus::Scheduled);
    assert_eq!(stored_task.scheduled_date, Some(date(2026, 7, 30)));
    assert_eq!(stored_task.service_name, task.service_name);
}

#[tokio::test]
async fn test_update_task_allows_backwards_status() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();

    planner
        .update_task(&event.id, &task.id, &UpdateTaskRequest::status(TaskStatus::Completed))
        .await;
    let outcome = planner
        .update_task(&event.id, &task.id, &UpdateTaskRequest::status(TaskStatus::Planned))
        .await;

    assert_eq!(outcome, SaveOutcome::Saved);
    let stored = planner.event(&event.id).unwrap();
    assert_eq!(stored.task(&task.id).unwrap().status, TaskStatus::Planned);
}

#[tokio::test]
async fn test_advance_task_rejects_backwards_status() {
    let (storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();

    let booked = planner
        .advance_task(&event.id, &task.id, TaskStatus::Booked)
        .await
        .expect("forward move is allowed");
    assert_eq!(booked, SaveOutcome::Saved);
    let writes = storage.write_count();

    let err = planner
        .advance_task(&event.id, &task.id, TaskStatus::Scheduled)
        .await
        .expect_err("backward move is rejected");
    assert!(matches!(
        err,
        GlamError::InvalidTransition {
            from: TaskStatus::Booked,
            to: TaskStatus::Scheduled
        }
    ));
    assert_eq!(storage.write_count(), writes);

    let stored = planner.event(&event.id).unwrap();
    assert_eq!(stored.task(&task.id).unwrap().status, TaskStatus::Booked);

    let missing = planner
        .advance_task(&event.id, "nope", TaskStatus::Completed)
        .await
        .expect("unknown task is not an error");
    assert_eq!(missing, SaveOutcome::Unchanged);
}

#[tokio::test]
async fn test_revise_task_keeps_booked_status_when_rescheduled() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();
    planner
        .advance_task(&event.id, &task.id, TaskStatus::Booked)
        .await
        .unwrap();

    let reschedule = UpdateTaskRequest {
        scheduled_date: Some(Some(date(2026, 7, 2))),
        ..Default::default()
    };
    let outcome = planner
        .revise_task(&event.id, &task.id, &reschedule, TransitionPolicy::ForwardOnly)
        .await
        .expect("rescheduling is not a status change");

    assert_eq!(outcome, SaveOutcome::Saved);
    let stored = planner.event(&event.id).unwrap();
    let stored_task = stored.task(&task.id).unwrap();
    assert_eq!(stored_task.status, TaskStatus::Booked);
    assert_eq!(stored_task.scheduled_date, Some(date(2026, 7, 2)));
}

#[tokio::test]
async fn test_revise_task_lifts_planned_task_when_dated() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();

    let request = UpdateTaskRequest {
        scheduled_date: Some(Some(date(2026, 7, 1))),
        notes: Some(Some("trial run first".to_string())),
        ..Default::default()
    };
    planner
        .revise_task(&event.id, &task.id, &request, TransitionPolicy::ForwardOnly)
        .await
        .unwrap();

    let stored = planner.event(&event.id).unwrap();
    let stored_task = stored.task(&task.id).unwrap();
    assert_eq!(stored_task.status, TaskStatus::Scheduled);
    assert_eq!(stored_task.notes.as_deref(), Some("trial run first"));
}

#[tokio::test]
async fn test_rejected_revision_changes_nothing() {
    let (storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();
    planner
        .advance_task(&event.id, &task.id, TaskStatus::Scheduled)
        .await
        .unwrap();
    let before = planner.events();
    let writes = storage.write_count();

    let request = UpdateTaskRequest {
        scheduled_date: Some(Some(date(2026, 7, 1))),
        status: Some(TaskStatus::Planned),
        notes: Some(Some("moved".to_string())),
        ..Default::default()
    };
    let err = planner
        .revise_task(&event.id, &task.id, &request, TransitionPolicy::ForwardOnly)
        .await
        .expect_err("backward move is rejected");

    assert!(matches!(err, GlamError::InvalidTransition { .. }));
    assert_eq!(planner.events(), before);
    assert_eq!(storage.write_count(), writes);
}

#[tokio::test]
async fn test_revise_task_allowing_backwards() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();
    planner
        .advance_task(&event.id, &task.id, TaskStatus::Completed)
        .await
        .unwrap();

    let outcome = planner
        .revise_task(
            &event.id,
            &task.id,
            &UpdateTaskRequest::status(TaskStatus::Booked),
            TransitionPolicy::AllowBackwards,
        )
        .await
        .unwrap();

    assert!(outcome.is_saved());
    let stored = planner.event(&event.id).unwrap();
    assert_eq!(stored.task(&task.id).unwrap().status, TaskStatus::Booked);
}

#[tokio::test]
async fn test_remove_task_and_checklist_item() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();
    let item = planner
        .add_checklist_item(&event.id, "Mirror", Some(ServiceCategory::Mua))
        .await
        .value
        .unwrap();

    assert_eq!(planner.remove_task(&event.id, &task.id).await, SaveOutcome::Saved);
    assert_eq!(
        planner.remove_checklist_item(&event.id, &item.id).await,
        SaveOutcome::Saved
    );

    let stored = planner.event(&event.id).unwrap();
    assert!(stored.tasks.is_empty());
    assert!(stored.checklist.is_empty());
}

#[tokio::test]
async fn test_add_suggested_items_then_nothing_left() {
    let (_storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    planner.add_task(&event.id, &bridal_glam(&planner)).await;

    let applied = planner.add_suggested_items(&event.id).await;
    assert_eq!(applied.outcome, SaveOutcome::Saved);
    assert_eq!(applied.value.len(), 4);
    assert!(planner.suggest_checklist_items(&event.id).is_empty());

    let again = planner.add_suggested_items(&event.id).await;
    assert_eq!(again.outcome, SaveOutcome::Unchanged);
    assert!(again.value.is_empty());
}

#[tokio::test]
async fn test_every_mutation_rolls_back_on_write_failure() {
    let (storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    let task = planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .value
        .unwrap();
    let item = planner
        .add_checklist_item(&event.id, "Mirror", None)
        .await
        .value
        .unwrap();
    let before = planner.events();

    storage.fail_writes(true);

    let created = planner
        .create_event(&CreateEvent::new("Birthday Trip", date(2026, 3, 14)))
        .await;
    assert_eq!(created.outcome, SaveOutcome::RolledBack);
    assert_eq!(created.value.name, "Birthday Trip");
    assert_eq!(planner.events(), before);

    let rename = UpdateEventRequest {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    assert!(planner.update_event(&event.id, &rename).await.is_rolled_back());
    assert_eq!(planner.events(), before);

    assert!(planner
        .add_task(&event.id, &bridal_glam(&planner))
        .await
        .outcome
        .is_rolled_back());
    assert_eq!(planner.events(), before);

    let booked = UpdateTaskRequest::status(TaskStatus::Booked);
    assert!(planner
        .update_task(&event.id, &task.id, &booked)
        .await
        .is_rolled_back());
    assert_eq!(planner.events(), before);

    assert!(planner
        .advance_task(&event.id, &task.id, TaskStatus::Completed)
        .await
        .unwrap()
        .is_rolled_back());
    assert_eq!(planner.events(), before);

    assert!(planner.remove_task(&event.id, &task.id).await.is_rolled_back());
    assert_eq!(planner.events(), before);

    assert!(planner
        .add_checklist_item(&event.id, "Durag", None)
        .await
        .outcome
        .is_rolled_back());
    assert_eq!(planner.events(), before);

    assert!(planner
        .toggle_checklist_item(&event.id, &item.id)
        .await
        .is_rolled_back());
    assert_eq!(planner.events(), before);

    assert!(planner
        .remove_checklist_item(&event.id, &item.id)
        .await
        .is_rolled_back());
    assert_eq!(planner.events(), before);

    assert!(planner
        .add_suggested_items(&event.id)
        .await
        .outcome
        .is_rolled_back());
    assert_eq!(planner.events(), before);

    assert!(planner.delete_event(&event.id).await.is_rolled_back());
    assert_eq!(planner.events(), before);
}

#[tokio::test]
async fn test_failed_create_restores_active_pointer() {
    let (storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;

    storage.fail_next_writes(1);
    let failed = planner
        .create_event(&CreateEvent::new("Birthday Trip", date(2026, 3, 14)))
        .await;

    assert!(failed.outcome.is_rolled_back());
    assert_eq!(planner.active_event().map(|e| e.id), Some(event.id));
}

#[tokio::test]
async fn test_failed_delete_restores_active_pointer() {
    let (storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;

    storage.fail_next_writes(1);
    assert!(planner.delete_event(&event.id).await.is_rolled_back());
    assert_eq!(planner.active_event().map(|e| e.id), Some(event.id));
}

#[tokio::test]
async fn test_rollback_does_not_undo_concurrent_mutation() {
    let (storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;

    // first of the two writes fails, the second succeeds
    storage.fail_next_writes(1);
    let (first, second) = tokio::join!(
        planner.add_checklist_item(&event.id, "Durag", None),
        planner.add_checklist_item(&event.id, "Mirror", None),
    );

    assert!(first.outcome.is_rolled_back());
    assert!(second.outcome.is_saved());

    let stored = planner.event(&event.id).unwrap();
    let texts: Vec<&str> = stored.checklist.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["Mirror"]);
}

#[tokio::test]
async fn test_optimistic_state_visible_during_write() {
    let storage = Arc::new(GatedStorage {
        inner: MemoryStorage::new(),
        gate: Notify::new(),
    });
    storage.inner.fail_writes(true);
    let planner = Planner::new(storage.clone(), Arc::new(PortfolioCatalog::bundled()));

    let observe = async {
        // the create is parked on the gate; its event is already visible
        let seen = planner.events().len();
        let active = planner.active_event().map(|e| e.name);
        storage.gate.notify_one();
        (seen, active)
    };
    let params = CreateEvent::new("Summer Wedding", date(2026, 7, 4));
    let (created, (seen, active)) = tokio::join!(planner.create_event(&params), observe);

    assert_eq!(seen, 1);
    assert_eq!(active.as_deref(), Some("Summer Wedding"));
    assert!(created.outcome.is_rolled_back());
    assert!(planner.events().is_empty());
    assert!(planner.active_event().is_none());
}

#[tokio::test]
async fn test_load_events_round_trip() {
    let (storage, planner) = create_test_planner();
    let event = create_wedding(&planner).await;
    planner.add_task(&event.id, &bridal_glam(&planner)).await;

    let reloaded = Planner::new(storage.clone(), Arc::new(PortfolioCatalog::bundled()));
    assert_eq!(reloaded.load_events().await, 1);
    assert_eq!(reloaded.events(), planner.events());
    assert!(reloaded.active_event().is_none());
}

#[tokio::test]
async fn test_load_failure_degrades_to_empty() {
    let (storage, planner) = create_test_planner();
    create_wedding(&planner).await;

    storage.fail_reads(true);
    assert_eq!(planner.load_events().await, 0);
    assert!(planner.events().is_empty());
}

#[tokio::test]
async fn test_saved_items_toggle_and_rollback() {
    let (storage, planner) = create_test_planner();
    let saved = planner.saved_items();

    let first = saved.toggle("pf-004").await;
    assert!(first.value);
    assert!(first.outcome.is_saved());
    assert!(saved.is_saved("pf-004"));

    storage.fail_next_writes(1);
    let failed = saved.toggle("pf-004").await;
    assert!(!failed.value);
    assert!(failed.outcome.is_rolled_back());
    assert!(saved.is_saved("pf-004"));

    assert!(!saved.toggle("pf-004").await.value);
    assert!(saved.ids().is_empty());
}
