//! # Application State
//!
//! [`AppState`] is the snapshot of everything a browsing session tracks besides
//! the catalog and favorites: filters, sort order, the ship being viewed, the
//! comparison selection and whether the comparison view is open.
//!
//! Transitions borrow the current snapshot and return a new one. The caller that
//! owns the state decides whether to keep the result. This is what lets a failed
//! [`AppState::start_comparison`] leave the session exactly as it was.
//!
//! ```text
//! initial ──with_search/with_era/...──▶ browsing
//!    │                                     │ toggle_selection (x2+)
//!    │                                     ▼
//!    │                         start_comparison ──▶ comparing
//!    │                                                  │ next/prev_category
//!    └──────────────── end_comparison ◀─────────────────┘
//! ```

use crate::catalog::Catalog;
use crate::compare::{self, Category, ComparisonTable};
use crate::error::{Result, ShipdexError};
use crate::model::Ship;
use crate::query::{self, FilterState, SortField, SortSpec};
use crate::selection::IdSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Sidebar,
    Index,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Sidebar => ViewMode::Index,
            ViewMode::Index => ViewMode::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub filter: FilterState,
    pub sort: SortSpec,
    pub current_ship: Option<String>,
    pub selection: IdSet,
    pub comparing: bool,
    pub category: Category,
    pub view_mode: ViewMode,
}

impl AppState {
    /// Fresh state viewing the first ship of the catalog, if any.
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            current_ship: catalog.all().first().map(|s| s.id.clone()),
            ..Self::default()
        }
    }

    pub fn with_sort(&self, sort: SortSpec) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_search(&self, query: impl Into<String>) -> Self {
        Self {
            filter: self.filter.clone().with_search(query),
            ..self.clone()
        }
    }

    pub fn with_affiliation(&self, affiliation: Option<String>) -> Self {
        Self {
            filter: self.filter.clone().with_affiliation(affiliation),
            ..self.clone()
        }
    }

    pub fn with_era(&self, era: Option<String>) -> Self {
        Self {
            filter: self.filter.clone().with_era(era),
            ..self.clone()
        }
    }

    pub fn with_favorites_only(&self, favorites_only: bool) -> Self {
        Self {
            filter: self.filter.clone().with_favorites_only(favorites_only),
            ..self.clone()
        }
    }

    pub fn clear_filters(&self) -> Self {
        Self {
            filter: self.filter.cleared(),
            ..self.clone()
        }
    }

    pub fn toggle_sort(&self, field: SortField) -> Self {
        Self {
            sort: self.sort.toggle(field),
            ..self.clone()
        }
    }

    pub fn select_ship(&self, id: impl Into<String>) -> Self {
        Self {
            current_ship: Some(id.into()),
            ..self.clone()
        }
    }

    pub fn toggle_selection(&self, id: &str) -> Self {
        Self {
            selection: self.selection.toggled(id),
            ..self.clone()
        }
    }

    pub fn clear_selection(&self) -> Self {
        Self {
            selection: self.selection.cleared(),
            ..self.clone()
        }
    }

    /// Open the comparison view. Needs at least two selected ships that are
    /// still in the catalog.
    pub fn start_comparison(&self, catalog: &Catalog) -> Result<Self> {
        let selected = self.selected(catalog).len();
        if selected < 2 {
            return Err(ShipdexError::NotEnoughShips { selected });
        }
        Ok(Self {
            comparing: true,
            category: Category::default(),
            ..self.clone()
        })
    }

    /// Close the comparison view and drop the selection.
    pub fn end_comparison(&self) -> Self {
        Self {
            comparing: false,
            selection: self.selection.cleared(),
            ..self.clone()
        }
    }

    pub fn next_category(&self) -> Self {
        Self {
            category: self.category.next(),
            ..self.clone()
        }
    }

    pub fn prev_category(&self) -> Self {
        Self {
            category: self.category.prev(),
            ..self.clone()
        }
    }

    pub fn toggle_view_mode(&self) -> Self {
        Self {
            view_mode: self.view_mode.toggled(),
            ..self.clone()
        }
    }

    /// The filtered, sorted list this state shows.
    pub fn visible<'a>(&self, catalog: &'a Catalog, favorites: &IdSet) -> Vec<&'a Ship> {
        query::view(catalog.all(), &self.filter, favorites, self.sort)
    }

    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a Ship> {
        self.current_ship.as_deref().and_then(|id| catalog.get(id))
    }

    /// Selected ships in selection order. Ids no longer in the catalog are skipped.
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Ship> {
        self.selection
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    /// The table for the current category, while comparing.
    pub fn comparison_table(&self, catalog: &Catalog) -> Result<Option<ComparisonTable>> {
        if !self.comparing {
            return Ok(None);
        }
        compare::build_table(&self.selected(catalog), self.category).map(Some)
    }
}
