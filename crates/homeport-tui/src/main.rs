//! `homeport-tui` — Terminal browser for a Homeport property-listing backend.
//!
//! Built on [ratatui](https://ratatui.rs) over the read-only HTTP API served
//! by the Homeport backend. Screens are navigable via number keys (1-3):
//! Home (featured listings), Listings (full set with filters), and Agents.
//!
//! Logs are written to a file (default `/tmp/homeport-tui.log`) to avoid
//! corrupting the terminal UI. Startup fires four independent fetches
//! (featured listings, full listing set, agents, house types); each one
//! fills its own screen region when it lands.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod detail;
mod event;
mod loader;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use homeport_api::ApiClient;

use crate::app::App;

/// Terminal UI for browsing property listings.
#[derive(Parser, Debug)]
#[command(name = "homeport-tui", version, about)]
struct Cli {
    /// Backend URL (e.g., http://localhost:8080)
    #[arg(short = 'u', long, default_value = "http://localhost:8080", env = "HOMEPORT_API_URL")]
    api_url: String,

    /// How many featured listings to request for the Home screen
    #[arg(short = 'l', long, default_value_t = 6)]
    limit: u32,

    /// Request timeout in seconds (single attempt, no retries)
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Log file path (defaults to /tmp/homeport-tui.log)
    #[arg(long, default_value = "/tmp/homeport-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("homeport_tui={log_level},homeport_api={log_level}"))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("homeport-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(url = %cli.api_url, limit = cli.limit, "starting homeport-tui");

    let client = ApiClient::new(&cli.api_url, Duration::from_secs(cli.timeout_secs))?;
    let mut app = App::new(Arc::new(client), cli.limit);
    app.run().await?;

    Ok(())
}
