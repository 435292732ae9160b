use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShipdexError};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// The full catalog as pretty-printed JSON, fields exactly as held in memory.
pub fn to_json(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog.all()).map_err(ShipdexError::Serialization)
}

/// `starfleet_database_<YYYY-MM-DD>.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("starfleet_database_{}.json", date.format("%Y-%m-%d"))
}

/// Write the catalog into `dir`, named for `date`.
pub fn run(catalog: &Catalog, dir: &Path, date: NaiveDate) -> Result<CmdResult> {
    let content = to_json(catalog)?;
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(ShipdexError::Io)?;
    }
    let path = dir.join(export_file_name(date));
    fs::write(&path, content).map_err(ShipdexError::Io)?;

    tracing::info!(path = %path.display(), ships = catalog.len(), "exported catalog");

    let mut result = CmdResult::default().with_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} ships to {}",
        catalog.len(),
        path.display()
    )));
    Ok(result)
}
