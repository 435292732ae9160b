use crate::catalog::Catalog;
use crate::commands::{display_all, CmdMessage, CmdResult, DisplayShip};
use crate::error::Result;
use crate::favorites;
use crate::query::{FilterState, SortSpec};
use crate::selection::IdSet;
use crate::store::KvStore;

/// Toggle `id` in the favorites set and persist the new set.
///
/// Returns the updated set alongside the result. On a write failure the error
/// propagates and the caller keeps its previous set.
pub fn toggle<K: KvStore>(
    store: &K,
    catalog: &Catalog,
    current: &IdSet,
    id: &str,
) -> Result<(IdSet, CmdResult)> {
    let mut result = CmdResult::default();
    let Some(ship) = catalog.get(id) else {
        result.add_message(CmdMessage::warning(format!("No ship found with id: {}", id)));
        return Ok((current.clone(), result));
    };

    let updated = current.toggled(id);
    favorites::save(store, &updated)?;

    if updated.contains(id) {
        tracing::info!(id, "added favorite");
        result.add_message(CmdMessage::success(format!(
            "{} has been added to your favorites",
            ship.name
        )));
    } else {
        tracing::info!(id, "removed favorite");
        result.add_message(CmdMessage::info(format!(
            "{} has been removed from your favorites",
            ship.name
        )));
    }

    let result = result.with_affected_ships(vec![DisplayShip::new(ship, &updated)]);
    Ok((updated, result))
}

/// Favorites in catalog order. Stale ids (no longer in the catalog) are skipped.
pub fn list(catalog: &Catalog, favorites: &IdSet, sort: SortSpec) -> Result<CmdResult> {
    let filter = FilterState::new().with_favorites_only(true);
    let ships = crate::query::view(catalog.all(), &filter, favorites, sort);
    let mut result = CmdResult::default().with_listed_ships(display_all(&ships, favorites));
    if ships.is_empty() {
        result.add_message(CmdMessage::info("No favorites yet"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShipdexError;
    use crate::store::memory::MemoryKv;

    #[test]
    fn toggle_adds_and_persists() {
        let store = MemoryKv::new();
        let catalog = Catalog::bundled();
        let (updated, result) = toggle(&store, &catalog, &IdSet::new(), "voyager").unwrap();
        assert!(updated.contains("voyager"));
        assert!(result.affected_ships[0].is_favorite);
        assert_eq!(favorites::load(&store), updated);
    }

    #[test]
    fn toggle_twice_restores_original() {
        let store = MemoryKv::new();
        let catalog = Catalog::bundled();
        let start: IdSet = ["nx-01"].into_iter().collect();
        let (once, _) = toggle(&store, &catalog, &start, "voyager").unwrap();
        let (twice, result) = toggle(&store, &catalog, &once, "voyager").unwrap();
        assert_eq!(twice, start);
        assert!(result.messages[0].content.contains("removed"));
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let store = MemoryKv::new();
        let (updated, result) =
            toggle(&store, &Catalog::bundled(), &IdSet::new(), "borg-cube").unwrap();
        assert!(updated.is_empty());
        assert!(result.affected_ships.is_empty());
        assert!(store.get(crate::store::FAVORITES_KEY).unwrap().is_none());
    }

    #[test]
    fn write_failure_propagates() {
        let store = MemoryKv::new();
        store.set_simulate_write_error(true);
        let err = toggle(&store, &Catalog::bundled(), &IdSet::new(), "voyager").unwrap_err();
        assert!(matches!(err, ShipdexError::Store(_)));
    }

    #[test]
    fn list_skips_stale_ids() {
        let favorites: IdSet = ["voyager", "gone"].into_iter().collect();
        let result = list(&Catalog::bundled(), &favorites, SortSpec::default()).unwrap();
        assert_eq!(result.listed_ships.len(), 1);
        assert!(result.messages.is_empty());
    }
}
