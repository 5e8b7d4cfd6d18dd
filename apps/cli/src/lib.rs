//! # tabsplit CLI
//!
//! Command-line front end for `tabsplit-core`.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────┐
//! │  CliConfig   │──► │  BillFile    │──► │ ReceiptStore │──► │  stdout  │
//! │ toml + env   │    │ json / toml  │    │  + TipPolicy │    │ text/json│
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────┘
//!                        logs ──► stderr (RUST_LOG)
//! ```
//!
//! ## Usage
//! ```text
//! tabsplit split dinner.json --tip 18 --detail
//! tabsplit demo --tip 5 --tip-mode fixed --json
//! tabsplit --config ./tabsplit.toml split dinner.toml
//! ```

pub mod bill;
pub mod commands;
pub mod config;
pub mod error;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::{demo::DemoArgs, split::SplitArgs};
use config::CliConfig;
pub use error::{CliError, CliResult};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,tabsplit=info";

#[derive(Parser, Debug)]
#[command(name = "tabsplit", version)]
#[command(about = "Split a restaurant bill by who shared what")]
pub struct Cli {
    /// Config file (default: tabsplit.toml in the platform config directory).
    #[arg(long, global = true, env = "TABSPLIT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a bill file.
    Split(SplitArgs),

    /// Split the built-in sample dinner.
    Demo(DemoArgs),
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout stays clean for share text and JSON.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a parsed command line and returns what should be printed.
pub fn execute(cli: Cli) -> CliResult<String> {
    let config = CliConfig::load(cli.config.as_deref())?;
    debug!(?config, "configuration resolved");

    dispatch(&cli.command, &config)
}

/// Runs one command against an already resolved configuration.
pub fn dispatch(command: &Command, config: &CliConfig) -> CliResult<String> {
    match command {
        Command::Split(args) => commands::split::run(args, config),
        Command::Demo(args) => commands::demo::run(args, config),
    }
}
