//! Outbound reference links.
//!
//! shipdex never fetches these; it only builds the URLs for a client to open.

use crate::model::Ship;
use serde::Serialize;

const MEMORY_ALPHA_SEARCH: &str = "https://memory-alpha.fandom.com/wiki/Special:Search?search=";
const MEMORY_BETA_SEARCH: &str = "https://memory-beta.fandom.com/wiki/Special:Search?search=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLinks {
    pub memory_alpha: String,
    pub memory_beta: String,
}

impl ExternalLinks {
    pub fn for_ship(ship: &Ship) -> Self {
        Self {
            memory_alpha: memory_alpha_url(ship),
            memory_beta: memory_beta_url(ship),
        }
    }
}

/// Canon search, by name and class.
pub fn memory_alpha_url(ship: &Ship) -> String {
    let query = format!("{} {}", ship.name, ship.class);
    format!("{}{}", MEMORY_ALPHA_SEARCH, urlencoding::encode(&query))
}

/// Expanded-universe search, by name only.
pub fn memory_beta_url(ship: &Ship) -> String {
    format!("{}{}", MEMORY_BETA_SEARCH, urlencoding::encode(&ship.name))
}
