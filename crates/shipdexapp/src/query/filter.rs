//! Filter state and predicate application.
//!
//! A [`FilterState`] expands into a list of [`Predicate`]s. Each predicate is a
//! pure narrowing test, and [`apply`] runs them as a conjunction in a fixed
//! order:
//!
//! 1. favorites only
//! 2. affiliation (exact)
//! 3. era (exact)
//! 4. search text (case-insensitive substring, see [`Catalog::search`])
//!
//! Since every step only narrows, any order yields the same set. The result
//! keeps the relative order of the input.
//!
//! [`Catalog::search`]: crate::catalog::Catalog::search

use crate::catalog::matches_search;
use crate::model::Ship;
use crate::selection::IdSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub affiliation: Option<String>,
    pub era: Option<String>,
    pub favorites_only: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_affiliation(mut self, affiliation: Option<String>) -> Self {
        self.affiliation = affiliation;
        self
    }

    pub fn with_era(mut self, era: Option<String>) -> Self {
        self.era = era;
        self
    }

    pub fn with_favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.predicates().is_empty()
    }

    /// Reset search, affiliation, era and favorites-only together.
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Active predicates in application order.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if self.favorites_only {
            predicates.push(Predicate::Favorite);
        }
        if let Some(affiliation) = &self.affiliation {
            predicates.push(Predicate::Affiliation(affiliation.clone()));
        }
        if let Some(era) = &self.era {
            predicates.push(Predicate::Era(era.clone()));
        }
        if !self.search_query.is_empty() {
            predicates.push(Predicate::Search(self.search_query.to_lowercase()));
        }
        predicates
    }
}

/// A single narrowing test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Favorite,
    Affiliation(String),
    Era(String),
    /// Holds the lowercased query.
    Search(String),
}

impl Predicate {
    pub fn matches(&self, ship: &Ship, favorites: &IdSet) -> bool {
        match self {
            Predicate::Favorite => favorites.contains(&ship.id),
            Predicate::Affiliation(a) => ship.affiliation == *a,
            Predicate::Era(e) => ship.era == *e,
            Predicate::Search(needle) => matches_search(ship, needle),
        }
    }
}

/// Apply `filter` to `ships`, preserving input order.
pub fn apply<'a>(ships: &'a [Ship], filter: &FilterState, favorites: &IdSet) -> Vec<&'a Ship> {
    apply_predicates(ships, &filter.predicates(), favorites)
}

/// Run `predicates` in the given order, narrowing at each step.
pub fn apply_predicates<'a>(
    ships: &'a [Ship],
    predicates: &[Predicate],
    favorites: &IdSet,
) -> Vec<&'a Ship> {
    let mut working: Vec<&Ship> = ships.iter().collect();
    for predicate in predicates {
        working.retain(|ship| predicate.matches(ship, favorites));
    }
    tracing::debug!(
        input = ships.len(),
        output = working.len(),
        predicates = predicates.len(),
        "applied filters"
    );
    working
}
