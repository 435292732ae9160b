//! # Command Layer
//!
//! Each user-facing operation lives in its own submodule as a plain function over
//! domain types. Commands return a [`CmdResult`]: the ships to show, an optional
//! comparison table or link set, file paths they wrote, and leveled messages.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr or colors
//! - **Argument parsing**: that's the client's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! Outcomes that are not failures (a partial import, duplicates skipped, an id
//! that matches nothing) come back as messages inside an `Ok` result. Only the
//! failure modes in [`ShipdexError`](crate::error::ShipdexError) are errors.
//!
//! ## Testing Strategy
//!
//! Command tests run against the bundled catalog and
//! [`MemoryKv`](crate::store::memory::MemoryKv), never the real data directory.
//!
//! ## Command Modules
//!
//! - [`list`]: filtered, sorted listing and filter facets
//! - [`show`]: one ship in detail
//! - [`links`]: outbound reference URLs
//! - [`favorite`]: toggle and list favorites
//! - [`compare`]: side-by-side comparison tables
//! - [`import`]: validate and merge catalog fragments
//! - [`export`]: write the catalog to a dated JSON file
//! - [`voice`]: run a text command against a session state

use crate::compare::ComparisonTable;
use crate::links::ExternalLinks;
use crate::model::Ship;
use crate::selection::IdSet;
use serde::Serialize;
use std::path::PathBuf;

pub mod compare;
pub mod export;
pub mod favorite;
pub mod import;
pub mod links;
pub mod list;
pub mod show;
pub mod voice;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A ship paired with its favorite flag, as clients display it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayShip {
    pub ship: Ship,
    pub is_favorite: bool,
}

impl DisplayShip {
    pub fn new(ship: &Ship, favorites: &IdSet) -> Self {
        Self {
            ship: ship.clone(),
            is_favorite: favorites.contains(&ship.id),
        }
    }
}

/// Distinct categorical values, for populating filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub affiliations: Vec<String>,
    pub eras: Vec<String>,
    pub classes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_ships: Vec<DisplayShip>,
    pub affected_ships: Vec<DisplayShip>,
    pub table: Option<ComparisonTable>,
    pub links: Option<ExternalLinks>,
    pub facets: Option<Facets>,
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_ships(mut self, ships: Vec<DisplayShip>) -> Self {
        self.listed_ships = ships;
        self
    }

    pub fn with_affected_ships(mut self, ships: Vec<DisplayShip>) -> Self {
        self.affected_ships = ships;
        self
    }

    pub fn with_table(mut self, table: ComparisonTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_links(mut self, links: ExternalLinks) -> Self {
        self.links = Some(links);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }
}

pub(crate) fn display_all(ships: &[&Ship], favorites: &IdSet) -> Vec<DisplayShip> {
    ships
        .iter()
        .map(|ship| DisplayShip::new(ship, favorites))
        .collect()
}
