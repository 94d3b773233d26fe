//! Glam CLI Application
//!
//! Command-line front end for the glam event planner.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use glam_core::PlannerBuilder;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Glam started");

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));
    match command {
        Some(Event { command }) => cli.handle_event_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Checklist { command }) => cli.handle_checklist_command(command).await,
        Some(Feed(args)) => cli.handle_feed_command(args),
        Some(Saved { command }) => cli.handle_saved_command(command).await,
        None => {
            cli.list_events();
            Ok(())
        }
    }
}
