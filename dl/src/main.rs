//! Daily List - terminal daily task list
//!
//! CLI entry point: wires logging, configuration, the persistence store,
//! and the TUI together.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use dailylist::cli::Cli;
use dailylist::config::Config;
use dailylist::controller::TaskController;
use dailylist::store::TaskStore;
use dailylist::tui;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dailylist")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, never stdout (it would
    // corrupt the TUI)
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("dailylist.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // CLI override wins over config
    let data_dir = cli.data_dir.unwrap_or_else(|| config.storage.data_dir.clone());
    info!(data_dir = %data_dir.display(), "Daily List starting");

    let store = TaskStore::spawn(&data_dir);
    let controller = TaskController::new(store.clone());

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let result = tui::run(controller, tick_rate).await;

    // Drain queued writes before the process exits, even on a TUI error
    store.flush().await;
    info!("Daily List exiting");

    result
}
