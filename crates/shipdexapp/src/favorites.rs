//! Favorites persistence.
//!
//! The favorites set is stored under [`FAVORITES_KEY`] as a JSON array of ids.
//! It is read once at startup and written back after every mutation. An absent
//! or unreadable entry means "no favorites"; it never blocks startup.

use crate::error::{Result, ShipdexError};
use crate::selection::IdSet;
use crate::store::{KvStore, FAVORITES_KEY};

/// Load favorites, falling back to an empty set.
pub fn load<K: KvStore>(store: &K) -> IdSet {
    let raw = match store.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return IdSet::new(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read favorites, starting empty");
            return IdSet::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            tracing::warn!(error = %e, "stored favorites are corrupt, starting empty");
            IdSet::new()
        }
    }
}

pub fn save<K: KvStore>(store: &K, favorites: &IdSet) -> Result<()> {
    let raw = serde_json::to_string(favorites).map_err(ShipdexError::Serialization)?;
    store.set(FAVORITES_KEY, &raw)?;
    tracing::debug!(count = favorites.len(), "saved favorites");
    Ok(())
}
