use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ChecklistCommands, EventCommands, FeedArgs, SavedCommands, TaskCommands};

/// Plan the beauty services for an upcoming event
///
/// Create an event, add services you found in the portfolio feed as tasks,
/// track them from planned to completed, and keep a checklist of what to
/// bring. Running `glam` without a command lists your events.
#[derive(Parser)]
#[command(version, about, name = "glam")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/glam/glam.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage events
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Manage services planned for an event
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage an event's prep checklist
    #[command(alias = "c")]
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommands,
    },
    /// Browse the portfolio feed
    #[command(alias = "f")]
    Feed(FeedArgs),
    /// Manage saved portfolio items
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
}
