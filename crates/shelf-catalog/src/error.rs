//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io / serde_json / toml / serde_yaml errors, ValidationError      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds path / record context               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in shell) ← Startup failure, non-zero exit                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use shelf_core::ValidationError;
use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension maps to no known catalog format.
    ///
    /// ## When This Occurs
    /// - `catalog.csv`, `catalog.txt`, or a file without extension
    #[error("Unsupported catalog format for {} (expected .json, .toml, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The JSON document is malformed or has the wrong shape.
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document is malformed or has the wrong shape.
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// The YAML document is malformed or has the wrong shape.
    #[error("Invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A record parsed but broke an item rule.
    ///
    /// `index` is the zero-based position in the `items` list.
    #[error("Catalog record #{index} ('{name}') is invalid: {source}")]
    InvalidRecord {
        index: usize,
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::UnsupportedFormat {
            path: PathBuf::from("items.csv"),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported catalog format for items.csv (expected .json, .toml, .yaml or .yml)"
        );

        let err = CatalogError::InvalidRecord {
            index: 3,
            name: "Tea".to_string(),
            source: ValidationError::Negative {
                field: "price".to_string(),
                value: -2,
            },
        };
        assert_eq!(
            err.to_string(),
            "Catalog record #3 ('Tea') is invalid: price must not be negative (got -2)"
        );
    }
}
