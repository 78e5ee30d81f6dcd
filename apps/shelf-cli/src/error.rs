//! # Shell Error Type
//!
//! Failures that stop the shell before or outside a session. Errors from
//! individual commands never get here; the session prints them and moves on.

use shelf_catalog::CatalogError;
use thiserror::Error;

/// Startup and terminal I/O failures.
#[derive(Debug, Error)]
pub enum CliError {
    /// The catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Reading stdin or writing stdout failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_catalog_error_is_shown_as_is() {
        let err: CliError = CatalogError::UnsupportedFormat {
            path: PathBuf::from("stock.csv"),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Unsupported catalog format for stock.csv (expected .json, .toml, .yaml or .yml)"
        );
    }
}
