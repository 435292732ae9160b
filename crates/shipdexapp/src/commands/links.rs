use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::links::ExternalLinks;

pub fn run(catalog: &Catalog, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match catalog.get(id) {
        Some(ship) => result.links = Some(ExternalLinks::for_ship(ship)),
        None => result.add_message(CmdMessage::warning(format!("No ship found with id: {}", id))),
    }
    Ok(result)
}
