//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every shipdex operation, whatever the client.
//!
//! ## Role and Responsibilities
//!
//! [`ShipdexApi`] owns the session's shared mutable state:
//! - the [`Catalog`] (grows on import, never shrinks)
//! - the favorites [`IdSet`] (persisted through the [`KvStore`])
//! - the session-scoped [`SessionFlags`]
//!
//! It dispatches to `commands/*.rs` and swaps in the new values they return.
//! Everything else (filters, sort, current ship, comparison selection) lives in an
//! [`AppState`] owned by the client, which the API only reads.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O for display**: returns `CmdResult`, never strings for a terminal
//!
//! ## Generic Over KvStore
//!
//! - Production: `ShipdexApi<FileKv>`
//! - Testing: `ShipdexApi<MemoryKv>`

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult};
use crate::compare::Category;
use crate::error::Result;
use crate::favorites;
use crate::query::{FilterState, SortSpec};
use crate::selection::IdSet;
use crate::state::AppState;
use crate::store::memory::SessionFlags;
use crate::store::KvStore;
use chrono::NaiveDate;
use std::path::Path;

pub struct ShipdexApi<K: KvStore> {
    store: K,
    catalog: Catalog,
    favorites: IdSet,
    session: SessionFlags,
}

impl<K: KvStore> ShipdexApi<K> {
    /// Build the facade, reading persisted favorites once.
    pub fn new(store: K, catalog: Catalog) -> Self {
        let favorites = favorites::load(&store);
        tracing::debug!(
            ships = catalog.len(),
            favorites = favorites.len(),
            "api initialized"
        );
        Self {
            store,
            catalog,
            favorites,
            session: SessionFlags::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &IdSet {
        &self.favorites
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn session(&self) -> &SessionFlags {
        &self.session
    }

    pub fn initial_state(&self, sort: SortSpec) -> AppState {
        AppState::initial(&self.catalog).with_sort(sort)
    }

    pub fn list_ships(&self, filter: &FilterState, sort: SortSpec) -> Result<CmdResult> {
        commands::list::run(&self.catalog, &self.favorites, filter, sort)
    }

    pub fn filters(&self) -> Result<CmdResult> {
        commands::list::facets(&self.catalog)
    }

    pub fn show_ship(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.catalog, &self.favorites, id)
    }

    pub fn ship_links(&self, id: &str) -> Result<CmdResult> {
        commands::links::run(&self.catalog, id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<CmdResult> {
        let (updated, result) =
            commands::favorite::toggle(&self.store, &self.catalog, &self.favorites, id)?;
        self.favorites = updated;
        Ok(result)
    }

    pub fn list_favorites(&self, sort: SortSpec) -> Result<CmdResult> {
        commands::favorite::list(&self.catalog, &self.favorites, sort)
    }

    pub fn compare_ships<I: AsRef<str>>(&self, ids: &[I], category: Category) -> Result<CmdResult> {
        commands::compare::run(&self.catalog, &self.favorites, ids, category)
    }

    /// The comparison table for a client-held state, if it is comparing.
    pub fn comparison_for(&self, state: &AppState) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        result.table = state.comparison_table(&self.catalog)?;
        Ok(result)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        let (merged, result) = commands::import::run(&self.catalog, path)?;
        self.catalog = merged;
        Ok(result)
    }

    pub fn import_payload(&mut self, payload: &str) -> Result<CmdResult> {
        let (merged, result) = commands::import::run_payload(&self.catalog, payload)?;
        self.catalog = merged;
        Ok(result)
    }

    pub fn export_catalog(&self, dir: &Path, date: NaiveDate) -> Result<CmdResult> {
        commands::export::run(&self.catalog, dir, date)
    }

    pub fn run_voice(&self, state: &AppState, transcript: &str) -> (AppState, CmdResult) {
        commands::voice::run(&self.catalog, &self.favorites, state, transcript)
    }
}
