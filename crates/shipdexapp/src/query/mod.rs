//! # Query and Sort
//!
//! The browsing pipeline is two pure steps:
//!
//! ```text
//! &[Ship] ──filter::apply──▶ Vec<&Ship> ──sort::sort──▶ Vec<&Ship>
//! ```
//!
//! Neither step copies ships or mutates its input. [`view`] chains them for
//! callers that want the usual list.

pub mod filter;
pub mod sort;

pub use filter::{FilterState, Predicate};
pub use sort::{SortDirection, SortField, SortSpec};

use crate::model::Ship;
use crate::selection::IdSet;

/// Filter then sort.
pub fn view<'a>(
    ships: &'a [Ship],
    filter: &FilterState,
    favorites: &IdSet,
    spec: SortSpec,
) -> Vec<&'a Ship> {
    let filtered = filter::apply(ships, filter, favorites);
    spec.apply(&filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn view_filters_then_sorts() {
        let catalog = Catalog::bundled();
        let filter = FilterState::new().with_affiliation(Some("Federation Starfleet".into()));
        let spec = SortSpec::new(SortField::Speed, SortDirection::Desc);
        let result = view(catalog.all(), &filter, &IdSet::new(), spec);

        assert!(result
            .iter()
            .all(|s| s.affiliation == "Federation Starfleet"));
        assert_eq!(result[0].id, "ncc-1701-e");
        assert_eq!(result.last().unwrap().id, "ncc-1701");
    }
}
