use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, DisplayShip};
use crate::error::Result;
use crate::links::ExternalLinks;
use crate::selection::IdSet;

/// Detail view of one ship. An unknown id is reported, not an error.
pub fn run(catalog: &Catalog, favorites: &IdSet, id: &str) -> Result<CmdResult> {
    let Some(ship) = catalog.get(id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!("No ship found with id: {}", id)));
        return Ok(result);
    };

    Ok(CmdResult::default()
        .with_listed_ships(vec![DisplayShip::new(ship, favorites)])
        .with_links(ExternalLinks::for_ship(ship)))
}
