use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipdexError {
    #[error("Invalid JSON in import payload: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Imported data is not an array")]
    NotAnArray,

    #[error("No valid ships found in the imported data ({total} records checked)")]
    NoValidShips { total: usize },

    #[error("Error reading the file {}: {source}", path.display())]
    ImportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Please select at least 2 ships to compare ({selected} selected)")]
    NotEnoughShips { selected: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShipdexError>;
