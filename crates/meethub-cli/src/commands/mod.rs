use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use meethub_core::MeetHub;
use tracing::debug;

use crate::cli::Commands;

mod handlers;
mod support;


use self::handlers::{
    handle_attach, handle_item, handle_kb, handle_meeting, handle_notes, handle_url,
};
use self::support::print_json;

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    let app = MeetHub::open(root)
        .with_context(|| format!("failed to open meeting hub at {}", root.display()))?;
    run(&app, command)
}

fn run(app: &MeetHub, command: Commands) -> Result<()> {
    // Seeding is a no-op once the catalog has rows, so every command bootstraps.
    let seeded = app.initialize().context("failed to initialize")?;
    match command {
        Commands::Init => {
            print_json(&serde_json::json!({
                "status": "ok",
                "root": app.root().display().to_string(),
                "seeded_articles": seeded,
            }))?;
        }
        Commands::Meeting(args) => handle_meeting(app, args.command)?,
        Commands::Notes(args) => handle_notes(app, args.command)?,
        Commands::Item(args) => handle_item(app, args.command)?,
        Commands::Attach(args) => handle_attach(app, args.command)?,
        Commands::Url(args) => handle_url(app, args.command)?,
        Commands::Kb(args) => handle_kb(app, args.command)?,
        Commands::Ask(args) => {
            let query = args.query_text();
            debug!(query = %query, "ask");
            let response = app.ask(&query)?;
            print_json(&response)?;
        }
        Commands::Dashboard(args) => {
            let today = args.today.unwrap_or_else(|| Local::now().date_naive());
            let summary = app.dashboard(today)?;
            print_json(&summary)?;
        }
    }
    Ok(())
}
