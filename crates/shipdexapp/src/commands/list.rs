use crate::catalog::Catalog;
use crate::commands::{display_all, CmdMessage, CmdResult, Facets};
use crate::error::Result;
use crate::query::{self, FilterState, SortSpec};
use crate::selection::IdSet;

pub fn run(
    catalog: &Catalog,
    favorites: &IdSet,
    filter: &FilterState,
    sort: SortSpec,
) -> Result<CmdResult> {
    let ships = query::view(catalog.all(), filter, favorites, sort);
    let mut result = CmdResult::default().with_listed_ships(display_all(&ships, favorites));

    if ships.is_empty() {
        let message = if catalog.is_empty() {
            "The ship database is empty"
        } else if filter.favorites_only && favorites.is_empty() {
            "No favorites yet"
        } else {
            "No ships match the current filters"
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result)
}

/// Distinct affiliations, eras and classes of the current catalog.
pub fn facets(catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.facets = Some(Facets {
        affiliations: catalog.distinct_affiliations(),
        eras: catalog.distinct_eras(),
        classes: catalog.distinct_classes(),
    });
    Ok(result)
}
