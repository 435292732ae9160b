//! # Startup
//!
//! [`initialize`] wires a production [`ShipdexApi`]:
//!
//! 1. Resolve the data directory. `SHIPDEX_GLOBAL_DATA` wins when set (tests use
//!    it for isolation), otherwise the OS data directory from `directories`.
//! 2. Load [`ShipdexConfig`] from the data directory and from `<cwd>/.shipdex/`,
//!    merged, with `SHIPDEX__*` environment overrides on top.
//! 3. Start from the bundled catalog and import each configured
//!    `extra_catalogs` fragment through the normal validate-and-merge path.
//!    A broken fragment is logged and skipped; it never blocks startup.
//! 4. Open the file-backed key-value store and read favorites.

use crate::api::ShipdexApi;
use crate::catalog::Catalog;
use crate::commands::import;
use crate::config::ShipdexConfig;
use crate::error::{Result, ShipdexError};
use crate::store::fs::FileKv;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const GLOBAL_DATA_ENV: &str = "SHIPDEX_GLOBAL_DATA";
pub const CONFIG_FILE: &str = "shipdex.toml";
pub const LOCAL_DIR: &str = ".shipdex";

pub struct ShipdexContext {
    pub api: ShipdexApi<FileKv>,
    pub config: ShipdexConfig,
    pub data_dir: PathBuf,
}

impl ShipdexContext {
    /// Where exports go: the configured directory, or `cwd`.
    pub fn export_dir(&self, cwd: &Path) -> PathBuf {
        match &self.config.export_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }
}

pub fn global_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(GLOBAL_DATA_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shipdex", "shipdex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShipdexError::Api("Could not determine data directory".to_string()))
}

pub fn load_config(data_dir: &Path, cwd: &Path) -> ShipdexConfig {
    Clapfig::builder()
        .app_name("shipdex")
        .file_name(CONFIG_FILE)
        .search_paths(vec![
            SearchPath::Path(data_dir.to_path_buf()),
            SearchPath::Path(cwd.join(LOCAL_DIR)),
        ])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

/// Bundled catalog plus every readable extra fragment.
pub fn load_catalog(config: &ShipdexConfig, cwd: &Path) -> Catalog {
    let mut catalog = Catalog::bundled();
    for path in config.extra_catalogs() {
        let path = if path.is_absolute() {
            path
        } else {
            cwd.join(path)
        };
        match import::run(&catalog, &path) {
            Ok((merged, _)) => {
                tracing::info!(path = %path.display(), ships = merged.len(), "loaded extra catalog");
                catalog = merged;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping extra catalog");
            }
        }
    }
    catalog
}

pub fn initialize(cwd: &Path) -> Result<ShipdexContext> {
    let data_dir = global_data_dir()?;
    let config = load_config(&data_dir, cwd);
    let catalog = load_catalog(&config, cwd);
    let api = ShipdexApi::new(FileKv::new(&data_dir), catalog);

    Ok(ShipdexContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn extra_catalogs_are_merged_and_broken_ones_skipped() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("extra.json"),
            r#"[{"id":"ncc-1764","name":"USS Defiant","class":"Constitution",
                "affiliation":"Federation Starfleet","era":"TOS","stats":{}}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("broken.json"), "not json").unwrap();

        let config = ShipdexConfig {
            extra_catalogs: Some(vec![
                PathBuf::from("extra.json"),
                PathBuf::from("broken.json"),
                PathBuf::from("missing.json"),
            ]),
            ..Default::default()
        };
        let catalog = load_catalog(&config, dir.path());
        assert_eq!(catalog.len(), 11);
        assert!(catalog.get("ncc-1764").is_some());
    }

    #[test]
    fn export_dir_resolves_against_cwd() {
        let dir = tempdir().unwrap();
        let ctx = ShipdexContext {
            api: ShipdexApi::new(FileKv::new(dir.path()), Catalog::empty()),
            config: ShipdexConfig {
                export_dir: Some(PathBuf::from("out")),
                ..Default::default()
            },
            data_dir: dir.path().to_path_buf(),
        };
        assert_eq!(ctx.export_dir(Path::new("/work")), PathBuf::from("/work/out"));
    }
}
