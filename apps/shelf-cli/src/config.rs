//! # Shell Configuration
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`, `--verbose`)
//! 2. Environment variables (`SHELF_*`)
//! 3. Defaults (this file)
//!
//! `RUST_LOG`, when set, replaces the log filter entirely.

use std::env;
use std::path::PathBuf;

use crate::Args;

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "info,shelf=debug";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Catalog document to load (.json, .toml, .yaml or .yml).
    pub catalog_path: PathBuf,

    /// Store name shown in the greeting.
    pub store_name: String,

    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for ShellConfig {
    /// ## Default Values
    /// - Catalog: `catalog.json` in the working directory
    /// - Store: "Shelf"
    /// - Logging: warnings only
    fn default() -> Self {
        ShellConfig {
            catalog_path: PathBuf::from("catalog.json"),
            store_name: "Shelf".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl ShellConfig {
    /// Creates a ShellConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHELF_CATALOG`: Catalog file path
    /// - `SHELF_STORE_NAME`: Store name
    /// - `SHELF_LOG`: Log filter (e.g. "debug")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ShellConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShellConfig::default();

        if let Some(path) = lookup("SHELF_CATALOG").filter(|v| !v.is_empty()) {
            config.catalog_path = PathBuf::from(path);
        }

        if let Some(name) = lookup("SHELF_STORE_NAME").filter(|v| !v.is_empty()) {
            config.store_name = name;
        }

        if let Some(filter) = lookup("SHELF_LOG").filter(|v| !v.is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    /// Applies command-line flags on top.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(path) = &args.catalog {
            self.catalog_path = path.clone();
        }

        if args.verbose {
            self.log_filter = VERBOSE_LOG_FILTER.to_string();
        }

        self
    }
}
