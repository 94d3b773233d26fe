//! Command-line argument definitions using clap
//!
//! Every subcommand has its own clap `Args` struct which converts into the
//! core parameter or request type, so `glam-core` never sees clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Dates, statuses and categories are parsed with the core types' `FromStr`
//! impls, so anything malformed is rejected before a command runs.

use clap::{Args, Subcommand};
use glam_core::{
    params::{CreateEvent, NewChecklistItem},
    ServiceCategory, TaskStatus, TransitionPolicy, UpdateEventRequest, UpdateTaskRequest,
};
use jiff::civil::Date;

// ============================================================================
// Events
// ============================================================================

/// Create a new event
///
/// The new event becomes the active event for the rest of the process.
#[derive(Args)]
pub struct CreateEventArgs {
    /// Name of the event, e.g. "Summer Wedding"
    pub name: String,
    /// Date of the event (YYYY-MM-DD)
    pub date: Date,
    #[arg(short, long, help = "Portfolio item to use as the goal look")]
    pub goal_image: Option<String>,
}

impl From<CreateEventArgs> for CreateEvent {
    fn from(val: CreateEventArgs) -> Self {
        CreateEvent {
            name: val.name,
            date: val.date,
            goal_image_id: val.goal_image,
        }
    }
}

#[derive(Args)]
pub struct EventIdArgs {
    #[arg(help = "Identifier of the event")]
    pub id: String,
}

/// Rename, reschedule or change the goal look of an event
#[derive(Args)]
pub struct UpdateEventArgs {
    #[arg(help = "Identifier of the event to update")]
    pub id: String,
    #[arg(short, long, help = "New name for the event")]
    pub name: Option<String>,
    #[arg(short, long, help = "New date for the event (YYYY-MM-DD)")]
    pub date: Option<Date>,
    #[arg(short, long, conflicts_with = "clear_goal_image")]
    pub goal_image: Option<String>,
    #[arg(long, help = "Remove the goal look")]
    pub clear_goal_image: bool,
}

impl From<&UpdateEventArgs> for UpdateEventRequest {
    fn from(val: &UpdateEventArgs) -> Self {
        let goal_image_id = if val.clear_goal_image {
            Some(None)
        } else {
            val.goal_image.clone().map(Some)
        };
        UpdateEventRequest {
            name: val.name.clone(),
            date: val.date,
            goal_image_id,
        }
    }
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Create a new event
    #[command(alias = "c")]
    Create(CreateEventArgs),
    /// List all events
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show an event with its tasks and checklist
    #[command(alias = "s")]
    Show(EventIdArgs),
    /// Update an event
    #[command(alias = "u")]
    Update(UpdateEventArgs),
    /// Delete an event together with its tasks and checklist
    #[command(aliases = ["d", "rm"])]
    Delete(EventIdArgs),
}

// ============================================================================
// Tasks
// ============================================================================

/// Book a service from the portfolio into an event
#[derive(Args)]
pub struct AddTaskArgs {
    #[arg(help = "Identifier of the event")]
    pub event_id: String,
    #[arg(help = "Portfolio item to plan, e.g. pf-007")]
    pub item_id: String,
}

/// Update a task's status, schedule or notes
///
/// Status changes may only move forward (planned, scheduled, booked,
/// completed) unless `--force` is given. Setting a date on a planned task
/// marks it scheduled; tasks further along keep their status.
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "Identifier of the event")]
    pub event_id: String,
    #[arg(help = "Identifier of the task")]
    pub task_id: String,
    #[arg(short, long, help = "planned, scheduled, booked or completed")]
    pub status: Option<TaskStatus>,
    #[arg(
        short = 'd',
        long,
        conflicts_with = "clear_scheduled_date",
        help = "Appointment date (YYYY-MM-DD)"
    )]
    pub scheduled_date: Option<Date>,
    #[arg(long)]
    pub clear_scheduled_date: bool,
    #[arg(short, long)]
    pub notes: Option<String>,
    #[arg(long, help = "Allow moving the status backwards")]
    pub force: bool,
}

impl UpdateTaskArgs {
    pub fn policy(&self) -> TransitionPolicy {
        if self.force {
            TransitionPolicy::AllowBackwards
        } else {
            TransitionPolicy::ForwardOnly
        }
    }
}

impl From<&UpdateTaskArgs> for UpdateTaskRequest {
    fn from(val: &UpdateTaskArgs) -> Self {
        let scheduled_date = if val.clear_scheduled_date {
            Some(None)
        } else {
            val.scheduled_date.map(Some)
        };
        UpdateTaskRequest {
            service_name: None,
            scheduled_date,
            status: val.status,
            notes: val.notes.clone().map(Some),
        }
    }
}

#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "Identifier of the event")]
    pub event_id: String,
    #[arg(help = "Identifier of the task")]
    pub task_id: String,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task for a portfolio item
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Update a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Remove a task
    #[command(aliases = ["d", "rm"])]
    Remove(TaskIdArgs),
}

// ============================================================================
// Checklist
// ============================================================================

#[derive(Args)]
pub struct AddChecklistItemArgs {
    #[arg(help = "Identifier of the event")]
    pub event_id: String,
    #[arg(help = "What to bring or prepare")]
    pub text: String,
    #[arg(short, long, help = "Service category, e.g. hair or mua")]
    pub category: Option<ServiceCategory>,
}

impl From<AddChecklistItemArgs> for NewChecklistItem {
    fn from(val: AddChecklistItemArgs) -> Self {
        NewChecklistItem {
            event_id: val.event_id,
            text: val.text,
            category: val.category,
        }
    }
}

#[derive(Args)]
pub struct ChecklistItemIdArgs {
    #[arg(help = "Identifier of the event")]
    pub event_id: String,
    #[arg(help = "Identifier of the checklist item")]
    pub item_id: String,
}

/// Show prep items the event's services call for
#[derive(Args)]
pub struct SuggestArgs {
    #[arg(help = "Identifier of the event")]
    pub event_id: String,
    #[arg(short, long, help = "Add every suggestion to the checklist")]
    pub apply: bool,
}

#[derive(Subcommand)]
pub enum ChecklistCommands {
    /// Add a checklist item
    #[command(alias = "a")]
    Add(AddChecklistItemArgs),
    /// Mark a checklist item done, or not done
    #[command(alias = "t")]
    Toggle(ChecklistItemIdArgs),
    /// Remove a checklist item
    #[command(aliases = ["d", "rm"])]
    Remove(ChecklistItemIdArgs),
    /// Suggest checklist items
    #[command(alias = "s")]
    Suggest(SuggestArgs),
}

// ============================================================================
// Feed and saved items
// ============================================================================

/// Browse today's portfolio feed
#[derive(Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct FeedArgs {
    #[command(subcommand)]
    pub command: Option<FeedCommands>,
    #[arg(short, long, help = "Only show one service category, e.g. nails")]
    pub category: Option<ServiceCategory>,
    #[arg(short, long, help = "Only show one provider's work")]
    pub provider: Option<String>,
    #[arg(short, long, help = "Search captions, tags and provider names")]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum FeedCommands {
    /// Show a single portfolio item
    #[command(alias = "s")]
    Show(ItemIdArgs),
}

#[derive(Args)]
pub struct ItemIdArgs {
    #[arg(help = "Portfolio item identifier, e.g. pf-007")]
    pub item_id: String,
}

#[derive(Subcommand)]
pub enum SavedCommands {
    /// Save a portfolio item, or unsave it if already saved
    #[command(alias = "t")]
    Toggle(ItemIdArgs),
    /// List saved portfolio items
    #[command(aliases = ["l", "ls"])]
    List,
}
