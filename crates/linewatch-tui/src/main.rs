//! `linewatch`: terminal monitor for a small production-line demo plant.
//!
//! Built on [ratatui](https://ratatui.rs). The default `monitor` command
//! shows a device tree, stacked Overview / Device Detail pages, and a dock
//! of events and alarms backed by a `linewatch_core::Session`. The `keypad`
//! command runs a small inline numeric keypad that echoes each pressed key.
//!
//! Logs are written to a file (default `$TMPDIR/linewatch.log`) to avoid
//! corrupting the terminal UI.

mod action;
mod app;
mod component;
mod dialog;
mod event;
mod keypad;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use linewatch_config::Config;

use crate::app::App;
use crate::keypad::KeypadApp;

/// Terminal monitor for the linewatch demo plant.
#[derive(Parser, Debug)]
#[command(name = "linewatch", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true, env = "LINEWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Log file path (defaults to $TMPDIR/linewatch.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Device tree, threshold gauges, and the events dock (default)
    Monitor,
    /// Inline numeric keypad that prints each pressed key
    Keypad,
    /// Print the effective configuration as TOML
    Config,
}

/// Set up file-based tracing. Logging to stdout/stderr would corrupt the
/// TUI. The returned guard must live until exit so logs flush.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "linewatch={log_level},linewatch_core={log_level},linewatch_config={log_level}"
        ))
    });

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("linewatch.log"));
    let log_dir = log_file
        .parent()
        .map_or_else(std::env::temp_dir, Path::to_path_buf);
    let log_filename = log_file
        .file_name()
        .map_or_else(|| "linewatch.log".into(), ToOwned::to_owned);

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => linewatch_config::load_config_from(path)?,
        None => linewatch_config::load_config()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal is touched.
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let config = load_config(&cli)?;
    let command = cli.command.unwrap_or(Command::Monitor);
    info!(?command, "starting linewatch");

    match command {
        Command::Monitor => App::new(&config).run().await?,
        Command::Keypad => KeypadApp::new().run(&config.ui).await?,
        Command::Config => print!("{}", config.to_toml_string()?),
    }

    Ok(())
}
