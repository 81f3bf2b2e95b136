//! `starmart-tui` — Terminal storefront consoles.
//!
//! Two screens over one reconciliation engine: a vending machine face
//! (search-filtered slot list with live fallback pricing) and a
//! shipyard console (categorized, name-sorted vessel listings with a
//! purchase and sell flow). Catalog and initial state come from a TOML
//! or JSON file; a built-in demo catalog runs out of the box.
//!
//! Logs are written to a file (default `/tmp/starmart-tui.log`) to avoid
//! corrupting the terminal UI. A background depot task settles purchase
//! commands against the store and pushes fresh snapshots into the TUI
//! action loop.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod catalog_file;
mod component;
mod data_bridge;
mod event;
mod loc;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use starmart_core::{Depot, StorefrontStore};

use crate::app::App;

/// Terminal storefront consoles: vending machine and shipyard panels.
#[derive(Parser, Debug)]
#[command(name = "starmart-tui", version, about)]
struct Cli {
    /// Catalog file (TOML or JSON). Runs the built-in demo catalog if omitted.
    #[arg(short = 'c', long, env = "STARMART_CATALOG")]
    catalog: Option<PathBuf>,

    /// Override the starting wallet balance on both storefronts.
    #[arg(short = 'b', long)]
    balance: Option<u64>,

    /// Advertise shipyard listings as free of charge.
    #[arg(long)]
    free_listings: bool,

    /// Log file path (defaults to /tmp/starmart-tui.log)
    #[arg(long, default_value = "/tmp/starmart-tui.log")]
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
        EnvFilter::new(format!(
            "starmart_core={log_level},starmart_tui={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("starmart-tui.log"));

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

    let mut loaded = match &cli.catalog {
        Some(path) => catalog_file::load(path)?,
        None => catalog_file::demo(),
    };

    if let Some(balance) = cli.balance {
        loaded.vending.balance = balance;
        loaded.shipyard.balance = balance;
    }
    if cli.free_listings {
        loaded.shipyard.free_listings = true;
    }

    info!(
        catalog = %cli.catalog
            .as_deref()
            .map_or_else(|| "(built-in demo)".into(), |p| p.display().to_string()),
        kinds = loaded.catalog.len(),
        "starting starmart-tui"
    );

    let store = Arc::new(StorefrontStore::new(
        loaded.catalog,
        loaded.vending,
        loaded.shipyard,
    ));
    let depot = Depot::new(Arc::clone(&store)).spawn();

    let mut app = App::new(store, depot);
    app.run().await?;

    Ok(())
}
