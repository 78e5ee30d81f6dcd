//! # shelf-cli: Interactive Shell for Shelf
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Shell                                      │
//! │                                                                         │
//! │  main.rs ─────► Parses flags, maps errors to the exit code             │
//! │                                                                         │
//! │  lib.rs ──────► Config, logging, catalog load, session start           │
//! │                                                                         │
//! │  config.rs ───► ShellConfig (flags > SHELF_* env > defaults)           │
//! │                                                                         │
//! │  commands.rs ─► Line → Command parsing                                 │
//! │                                                                         │
//! │  session.rs ──► Command → Store call → printed result                  │
//! │                                                                         │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  shelf-catalog (load) ──► shelf-core (Store, Cart, ranking)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod session;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use shelf_catalog::load_catalog;
use shelf_core::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use commands::{Command, ParseError};
pub use config::ShellConfig;
pub use error::CliError;
pub use session::{Flow, Session};

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "shelf", version, about = "Browse a store catalog and fill a shopping cart")]
pub struct Args {
    /// Catalog file (.json, .toml, .yaml or .yml); overrides SHELF_CATALOG
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log store activity at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs the shell.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Resolve Config ──────────────────────────────────────────────────► │
/// │     • flags > SHELF_* environment > defaults                            │
/// │                                                                         │
/// │  2. Initialize Logging ──────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • RUST_LOG overrides the configured filter                          │
/// │                                                                         │
/// │  3. Load Catalog ────────────────────────────────────────────────────► │
/// │     • JSON, TOML or YAML, every record validated                        │
/// │                                                                         │
/// │  4. Run Session ─────────────────────────────────────────────────────► │
/// │     • stdin → commands, stdout ← results                                │
/// │     • prompt only when stdin is a terminal                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(args: Args) -> Result<(), CliError> {
    let config = ShellConfig::from_env().with_args(&args);
    init_tracing(&config.log_filter);

    info!(catalog = %config.catalog_path.display(), "Starting Shelf");

    let items = load_catalog(&config.catalog_path)?;
    let mut session = Session::new(Store::new(items), config.store_name);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout, interactive)?;

    info!(total = %session.store().checkout(), "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shelf=trace` - Show trace for shelf crates only
/// - Default: the configured filter (`warn` unless `--verbose`)
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
