//! # Shelf Shell Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Resolve configuration (flags > `SHELF_*` env > defaults)
//! 3. Initialize tracing (logging)
//! 4. Load the catalog
//! 5. Run the session on stdin/stdout

use std::process::ExitCode;

use clap::Parser;
use shelf_cli::Args;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shelf_cli::run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
