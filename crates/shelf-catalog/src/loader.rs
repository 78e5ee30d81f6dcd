//! # Catalog Loader
//!
//! Reads a catalog file, validates it and returns the items in file order.
//!
//! ## Load Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_catalog("demos/catalog.toml")                                     │
//! │       │                                                                 │
//! │       ├── 1. Pick format from extension   .json / .toml / .yaml / .yml  │
//! │       ├── 2. Read file                    CatalogError::Io              │
//! │       ├── 3. Deserialize document         CatalogError::Json/Toml/Yaml  │
//! │       ├── 4. Validate each record         CatalogError::InvalidRecord   │
//! │       └── 5. Warn on repeated names       (kept, not rejected)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Item> ──► Store::new                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use shelf_core::Item;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::record::CatalogDocument;

/// Supported catalog document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("yaml" | "yml") => Ok(CatalogFormat::Yaml),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Loads and validates the catalog at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Vec<Item>> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;

    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_catalog(&text, format)?;
    info!(path = %path.display(), items = items.len(), "Catalog loaded");
    Ok(items)
}

/// Parses and validates a catalog document held in memory.
pub fn parse_catalog(text: &str, format: CatalogFormat) -> CatalogResult<Vec<Item>> {
    let document: CatalogDocument = match format {
        CatalogFormat::Json => serde_json::from_str(text)?,
        CatalogFormat::Toml => toml::from_str(text)?,
        CatalogFormat::Yaml => serde_yaml::from_str(text)?,
    };
    debug!(?format, records = document.items.len(), "Catalog parsed");

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(document.items.len());

    for (index, record) in document.items.into_iter().enumerate() {
        let item = Item::from(record);

        item.validate().map_err(|source| CatalogError::InvalidRecord {
            index,
            name: item.name.clone(),
            source,
        })?;

        if !seen.insert(item.name.clone()) {
            warn!(index, name = %item.name, "Duplicate item name in catalog");
        }

        items.push(item);
    }

    Ok(items)
}
