//! athlete: plan and log morning and evening training sessions.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use athlete_core::TrackerBuilder;
use clap::Parser;
use cli::{today, Cli};
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize session store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("athlete started");

    let mut cli = Cli::new(tracker, renderer);
    match command {
        Some(command) => cli.handle_command(command),
        None => cli.show_day(today()),
    }
}
