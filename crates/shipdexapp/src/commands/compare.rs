use crate::catalog::Catalog;
use crate::commands::{display_all, CmdMessage, CmdResult};
use crate::compare::{self, Category};
use crate::error::Result;
use crate::selection::IdSet;

/// Compare the ships named by `ids` in the given category.
///
/// Unknown ids are reported and left out. Fewer than two known ships is a
/// [`NotEnoughShips`](crate::error::ShipdexError::NotEnoughShips) error.
pub fn run<I: AsRef<str>>(
    catalog: &Catalog,
    favorites: &IdSet,
    ids: &[I],
    category: Category,
) -> Result<CmdResult> {
    let mut messages = Vec::new();
    let selection: IdSet = ids.iter().map(|id| id.as_ref().to_string()).collect();

    let ships: Vec<_> = selection
        .iter()
        .filter_map(|id| {
            let ship = catalog.get(id);
            if ship.is_none() {
                messages.push(CmdMessage::warning(format!("No ship found with id: {}", id)));
            }
            ship
        })
        .collect();

    let table = compare::build_table(&ships, category)?;
    let mut result = CmdResult::default()
        .with_listed_ships(display_all(&ships, favorites))
        .with_table(table);
    result.messages = messages;
    Ok(result)
}
