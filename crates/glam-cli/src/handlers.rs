//! Command handlers
//!
//! Each handler calls into the planner, then prints the result through the
//! terminal renderer. Mutations report their [`SaveOutcome`]: a reverted or
//! no-op change becomes an error so the process exits non-zero.

use anyhow::{anyhow, bail, Context, Result};
use glam_core::{
    display::{Countdown, CreateResult, OperationStatus},
    params::{CreateEvent, NewChecklistItem},
    Checklist, Events, Feed, Planner, PortfolioItem, PortfolioItems, SaveOutcome, Suggestions,
    UpdateEventRequest, UpdateTaskRequest,
};
use jiff::Zoned;
use log::debug;

use crate::{
    cli::{
        ChecklistCommands, EventCommands, FeedArgs, FeedCommands, SavedCommands, TaskCommands,
        UpdateTaskArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: Planner,
    feed: Feed,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        let feed = Feed::new(planner.catalog().clone());
        Self {
            planner,
            feed,
            renderer,
        }
    }

    /// Prints a success line, or turns a failed mutation into an error.
    fn report(&self, outcome: SaveOutcome, action: &str) -> Result<()> {
        let status = OperationStatus::from_outcome(outcome, action);
        if !status.success {
            bail!(status.message);
        }
        self.renderer.print(&status);
        Ok(())
    }

    fn portfolio_item(&self, item_id: &str) -> Result<PortfolioItem> {
        self.planner
            .catalog()
            .item(item_id)
            .cloned()
            .ok_or_else(|| anyhow!("Portfolio item '{item_id}' not found"))
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub async fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::Create(args) => self.create_event(&args.into()).await,
            EventCommands::List => {
                self.list_events();
                Ok(())
            }
            EventCommands::Show(args) => self.show_event(&args.id),
            EventCommands::Update(args) => {
                let request = UpdateEventRequest::from(&args);
                if request.is_empty() {
                    bail!("Nothing to update: pass --name, --date or a goal image option");
                }
                let outcome = self.planner.update_event(&args.id, &request).await;
                self.report(outcome, &format!("Updated event {}", args.id))
            }
            EventCommands::Delete(args) => {
                let outcome = self.planner.delete_event(&args.id).await;
                self.report(outcome, &format!("Deleted event {}", args.id))
            }
        }
    }

    async fn create_event(&self, params: &CreateEvent) -> Result<()> {
        params.validate().context("Invalid event")?;
        if let Some(goal) = &params.goal_image_id {
            self.portfolio_item(goal)?;
        }

        let created = self.planner.create_event(params).await;
        if !created.outcome.is_saved() {
            bail!(OperationStatus::from_outcome(created.outcome, "Created event").message);
        }
        self.renderer.print(&CreateResult::new(created.value));
        Ok(())
    }

    pub fn list_events(&self) {
        self.renderer.print(&Events(self.planner.events()));
    }

    fn show_event(&self, event_id: &str) -> Result<()> {
        let event = self
            .planner
            .event(event_id)
            .ok_or_else(|| anyhow!("Event '{event_id}' not found"))?;

        let countdown = Countdown {
            date: event.date,
            today: Zoned::now().date(),
        };
        self.renderer.print(&event);
        self.renderer.render(&format!("\nEvent is {countdown}.\n"));
        Ok(())
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let item = self.portfolio_item(&args.item_id)?;
                let added = self.planner.add_task(&args.event_id, &item).await;
                match added.value {
                    Some(task) if added.outcome.is_saved() => {
                        self.renderer.print(&CreateResult::new(task));
                        Ok(())
                    }
                    _ => self.report(added.outcome, &format!("Added task to event {}", args.event_id)),
                }
            }
            TaskCommands::Update(args) => self.update_task(&args).await,
            TaskCommands::Remove(args) => {
                let outcome = self.planner.remove_task(&args.event_id, &args.task_id).await;
                self.report(outcome, &format!("Removed task {}", args.task_id))
            }
        }
    }

    async fn update_task(&self, args: &UpdateTaskArgs) -> Result<()> {
        let request = UpdateTaskRequest::from(args);
        if request.is_empty() {
            bail!("Nothing to update: pass --status, --scheduled-date or --notes");
        }

        debug!("Updating task {} with {request:?}", args.task_id);
        let outcome = self
            .planner
            .revise_task(&args.event_id, &args.task_id, &request, args.policy())
            .await
            .context("Use --force to move a task back")?;
        let action = match request.status {
            Some(status) => format!("Task {} is now {status}", args.task_id),
            None => format!("Updated task {}", args.task_id),
        };
        self.report(outcome, &action)
    }

    // ========================================================================
    // Checklist
    // ========================================================================

    pub async fn handle_checklist_command(&self, command: ChecklistCommands) -> Result<()> {
        match command {
            ChecklistCommands::Add(args) => {
                let params = NewChecklistItem::from(args);
                params.validate().context("Invalid checklist item")?;

                let added = self
                    .planner
                    .add_checklist_item(&params.event_id, &params.text, params.category)
                    .await;
                match added.value {
                    Some(item) if added.outcome.is_saved() => {
                        self.renderer.print(&CreateResult::new(item));
                        Ok(())
                    }
                    _ => self.report(
                        added.outcome,
                        &format!("Added checklist item to event {}", params.event_id),
                    ),
                }
            }
            ChecklistCommands::Toggle(args) => {
                let outcome = self
                    .planner
                    .toggle_checklist_item(&args.event_id, &args.item_id)
                    .await;
                self.report(outcome, &format!("Toggled checklist item {}", args.item_id))
            }
            ChecklistCommands::Remove(args) => {
                let outcome = self
                    .planner
                    .remove_checklist_item(&args.event_id, &args.item_id)
                    .await;
                self.report(outcome, &format!("Removed checklist item {}", args.item_id))
            }
            ChecklistCommands::Suggest(args) => {
                if self.planner.event(&args.event_id).is_none() {
                    bail!("Event '{}' not found", args.event_id);
                }
                if !args.apply {
                    let suggestions = self.planner.suggest_checklist_items(&args.event_id);
                    self.renderer.print(&Suggestions(suggestions));
                    return Ok(());
                }

                let applied = self.planner.add_suggested_items(&args.event_id).await;
                match applied.outcome {
                    SaveOutcome::Unchanged => self.renderer.print(&Suggestions(Vec::new())),
                    outcome => {
                        self.report(
                            outcome,
                            &format!("Added {} suggested items", applied.value.len()),
                        )?;
                        self.renderer.print(&Checklist(applied.value));
                    }
                }
                Ok(())
            }
        }
    }

    // ========================================================================
    // Feed and saved items
    // ========================================================================

    pub fn handle_feed_command(&self, args: FeedArgs) -> Result<()> {
        if let Some(FeedCommands::Show(show)) = args.command {
            let item = self
                .feed
                .get(&show.item_id)
                .ok_or_else(|| anyhow!("Portfolio item '{}' not found", show.item_id))?;
            self.renderer.print(item);
            if let Some(provider) = self.feed.catalog().provider_for_item(item) {
                self.renderer.render(&format!("By {provider}\n"));
            }
            let saved = self.planner.saved_items().is_saved(&item.id);
            self.renderer
                .render(if saved { "Saved.\n" } else { "Not saved.\n" });
            return Ok(());
        }

        let mut items: Vec<&PortfolioItem> = match &args.search {
            Some(query) => self.feed.search(query),
            None => self.feed.all_items().iter().collect(),
        };
        if let Some(category) = args.category {
            keep_only(&mut items, &self.feed.by_category(category));
        }
        if let Some(provider) = &args.provider {
            keep_only(&mut items, &self.feed.by_provider(provider));
        }

        self.renderer
            .print(&PortfolioItems(items.into_iter().cloned().collect()));
        Ok(())
    }

    pub async fn handle_saved_command(&self, command: SavedCommands) -> Result<()> {
        let saved = self.planner.saved_items();
        match command {
            SavedCommands::Toggle(args) => {
                self.portfolio_item(&args.item_id)?;
                let toggled = saved.toggle(&args.item_id).await;
                let action = if toggled.value {
                    format!("Saved {}", args.item_id)
                } else {
                    format!("Unsaved {}", args.item_id)
                };
                self.report(toggled.outcome, &action)
            }
            SavedCommands::List => {
                let items: Vec<PortfolioItem> = saved
                    .ids()
                    .iter()
                    .filter_map(|id| self.planner.catalog().item(id).cloned())
                    .collect();
                self.renderer.print(&PortfolioItems(items));
                Ok(())
            }
        }
    }
}

/// Narrows `items` to those also present in `filtered`. Both borrow from the
/// same feed cache, so identity is enough.
fn keep_only(items: &mut Vec<&PortfolioItem>, filtered: &[&PortfolioItem]) {
    items.retain(|item| filtered.iter().any(|other| std::ptr::eq(*item, *other)));
}
