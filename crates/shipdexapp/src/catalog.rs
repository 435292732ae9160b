//! # Record Store
//!
//! The [`Catalog`] is the immutable, in-memory list of ship records. It is built
//! once at startup (usually from [`Catalog::bundled`]) and only ever grows, by
//! producing a new catalog from [`Catalog::merge`]. Nothing here mutates in place.
//!
//! Order is significant: [`Catalog::all`] returns ships in catalog/import order,
//! and every accessor preserves that relative order.
//!
//! Lookups that find nothing return `None` or an empty list. They never fail.

use crate::error::{Result, ShipdexError};
use crate::model::Ship;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};

const BUNDLED_JSON: &str = include_str!("../data/starships.json");

static BUNDLED: Lazy<Vec<Ship>> = Lazy::new(|| match serde_json::from_str(BUNDLED_JSON) {
    Ok(ships) => ships,
    Err(e) => {
        tracing::error!(error = %e, "bundled catalog failed to parse");
        Vec::new()
    }
});

/// Outcome of merging a fragment into a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Records that were new and got appended.
    pub added: usize,
    /// Records skipped because their id was already present.
    pub duplicates: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    ships: Vec<Ship>,
}

impl Catalog {
    /// The built-in dataset.
    pub fn bundled() -> Self {
        Self {
            ships: BUNDLED.clone(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from an owned list. Duplicate ids are rejected.
    pub fn from_ships(ships: Vec<Ship>) -> Result<Self> {
        let mut seen = HashSet::new();
        for ship in &ships {
            if !seen.insert(ship.id.as_str()) {
                return Err(ShipdexError::Store(format!(
                    "Duplicate ship id in catalog: {}",
                    ship.id
                )));
            }
        }
        Ok(Self { ships })
    }

    pub fn all(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Position of `id` in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ships.iter().position(|s| s.id == id)
    }

    pub fn by_era(&self, era: &str) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.era == era).collect()
    }

    pub fn by_affiliation(&self, affiliation: &str) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|s| s.affiliation == affiliation)
            .collect()
    }

    /// Ships whose class contains `fragment`, ignoring case.
    pub fn by_class(&self, fragment: &str) -> Vec<&Ship> {
        let needle = fragment.to_lowercase();
        self.ships
            .iter()
            .filter(|s| s.class.to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive substring search over name, registry, class,
    /// affiliation and era. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Ship> {
        let needle = query.to_lowercase();
        self.ships
            .iter()
            .filter(|s| matches_search(s, &needle))
            .collect()
    }

    pub fn distinct_affiliations(&self) -> Vec<String> {
        self.distinct(|s| &s.affiliation)
    }

    pub fn distinct_eras(&self) -> Vec<String> {
        self.distinct(|s| &s.era)
    }

    pub fn distinct_classes(&self) -> Vec<String> {
        self.distinct(|s| &s.class)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&Ship) -> &String,
    {
        self.ships
            .iter()
            .map(|s| field(s).clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Produce a new catalog with `incoming` appended.
    ///
    /// Ids already in the catalog, and ids repeated inside `incoming`, are
    /// skipped. The first occurrence wins.
    pub fn merge(&self, incoming: Vec<Ship>) -> (Catalog, MergeReport) {
        let mut seen: HashSet<String> = self.ships.iter().map(|s| s.id.clone()).collect();
        let mut ships = self.ships.clone();
        let mut report = MergeReport::default();

        for ship in incoming {
            if seen.insert(ship.id.clone()) {
                ships.push(ship);
                report.added += 1;
            } else {
                tracing::debug!(id = %ship.id, "skipping duplicate ship on merge");
                report.duplicates += 1;
            }
        }

        (Catalog { ships }, report)
    }
}

/// `needle` must already be lowercased.
pub(crate) fn matches_search(ship: &Ship, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(&ship.name)
        || ship.registry().is_some_and(hit)
        || hit(&ship.class)
        || hit(&ship.affiliation)
        || hit(&ship.era)
}
