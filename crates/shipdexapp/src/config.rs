//! # Configuration
//!
//! shipdex configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SHIPDEX__DEFAULT_SORT`, `SHIPDEX__EXPORT_DIR`, etc.
//! 2. **Local Config**: `.shipdex/shipdex.toml` under the working directory.
//! 3. **Global Config**: `shipdex.toml` in the data directory.
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_sort` | `name` | Initial sort field (`name`, `era`, `length`, `stats.speed`, ...) |
//! | `default_direction` | `asc` | Initial sort direction |
//! | `extra_catalogs` | none | JSON fragments imported at startup |
//! | `export_dir` | working directory | Where `export` writes |

use crate::query::{SortDirection, SortField, SortSpec};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for shipdex, stored in `shipdex.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShipdexConfig {
    /// Sort field used when none is given.
    #[config(default = "name")]
    pub default_sort: String,

    /// "asc" or "desc".
    #[config(default = "asc")]
    pub default_direction: String,

    /// Catalog fragments merged into the bundled catalog at startup.
    pub extra_catalogs: Option<Vec<PathBuf>>,

    /// Directory for exports. When absent, the working directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for ShipdexConfig {
    fn default() -> Self {
        Self {
            default_sort: "name".to_string(),
            default_direction: "asc".to_string(),
            extra_catalogs: None,
            export_dir: None,
        }
    }
}

impl ShipdexConfig {
    /// The configured sort. Unparseable values fall back to the defaults.
    pub fn sort_spec(&self) -> SortSpec {
        let field = self.default_sort.parse::<SortField>().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid default_sort in config, using name");
            SortField::default()
        });
        let direction = self
            .default_direction
            .parse::<SortDirection>()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid default_direction in config, using asc");
                SortDirection::default()
            });
        SortSpec::new(field, direction)
    }

    pub fn extra_catalogs(&self) -> Vec<PathBuf> {
        self.extra_catalogs.clone().unwrap_or_default()
    }
}
