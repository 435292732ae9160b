//! Import: validate a JSON catalog fragment and merge it into the catalog.
//!
//! Validation is a shape check on each element: an object with string `id`,
//! `name`, `class`, `affiliation` and `era`, plus an object `stats`. Everything
//! else in an element rides along untouched, whatever its type.
//!
//! | Payload | Outcome |
//! |---------|---------|
//! | not JSON | [`ShipdexError::MalformedJson`] |
//! | not an array | [`ShipdexError::NotAnArray`] |
//! | zero valid elements | [`ShipdexError::NoValidShips`] |
//! | some invalid elements | success, with a partial-import warning |
//!
//! Merging skips ids that already exist (first write wins) and reports how many
//! ships were actually added, which may be fewer than were accepted.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShipdexError};
use crate::model::Ship;
use serde_json::Value;
use std::fs;
use std::path::Path;

const REQUIRED_STRINGS: [&str; 5] = ["id", "name", "class", "affiliation", "era"];

/// Ships that passed validation, plus how many did not.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch {
    pub accepted: Vec<Ship>,
    pub rejected: usize,
    pub total: usize,
}

impl ImportBatch {
    pub fn is_partial(&self) -> bool {
        self.rejected > 0
    }
}

/// Parse and shape-check a payload. Pure.
pub fn validate_payload(payload: &str) -> Result<ImportBatch> {
    let value: Value = serde_json::from_str(payload).map_err(ShipdexError::MalformedJson)?;
    let Value::Array(elements) = value else {
        return Err(ShipdexError::NotAnArray);
    };

    let total = elements.len();
    let mut accepted = Vec::new();
    for (index, element) in elements.into_iter().enumerate() {
        if !has_ship_shape(&element) {
            tracing::warn!(index, "rejecting import record with invalid shape");
            continue;
        }
        match serde_json::from_value::<Ship>(element) {
            Ok(ship) => accepted.push(ship),
            Err(e) => tracing::warn!(index, error = %e, "rejecting import record"),
        }
    }

    if accepted.is_empty() {
        return Err(ShipdexError::NoValidShips { total });
    }

    let rejected = total - accepted.len();
    Ok(ImportBatch {
        accepted,
        rejected,
        total,
    })
}

fn has_ship_shape(value: &Value) -> bool {
    let Value::Object(map) = value else {
        return false;
    };
    REQUIRED_STRINGS
        .iter()
        .all(|key| matches!(map.get(*key), Some(Value::String(_))))
        && matches!(map.get("stats"), Some(Value::Object(_)))
}

/// Read an import file. Read failures get their own error, distinct from parse failures.
pub fn read_payload(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ShipdexError::ImportRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge a validated batch, returning the grown catalog and the user-facing report.
pub fn merge_batch(catalog: &Catalog, batch: ImportBatch) -> (Catalog, CmdResult) {
    let mut result = CmdResult::default();
    let accepted = batch.accepted.len();

    if batch.is_partial() {
        result.add_message(CmdMessage::warning(format!(
            "Imported {} of {} ships. Some ships were invalid.",
            accepted, batch.total
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Imported {} ships to the database",
            accepted
        )));
    }

    let (merged, report) = catalog.merge(batch.accepted);
    if report.added > 0 {
        result.add_message(CmdMessage::success(format!(
            "Added {} new ships to the database",
            report.added
        )));
    } else {
        result.add_message(CmdMessage::info(
            "All imported ships already exist in the database",
        ));
    }

    tracing::info!(
        accepted,
        rejected = batch.rejected,
        added = report.added,
        duplicates = report.duplicates,
        "import merged"
    );
    (merged, result)
}

/// Validate and merge a payload already in memory.
pub fn run_payload(catalog: &Catalog, payload: &str) -> Result<(Catalog, CmdResult)> {
    let batch = validate_payload(payload)?;
    Ok(merge_batch(catalog, batch))
}

/// Read, validate and merge an import file.
pub fn run(catalog: &Catalog, path: &Path) -> Result<(Catalog, CmdResult)> {
    let payload = read_payload(path)?;
    run_payload(catalog, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PARTIAL: &str = r#"[
        {"id":"x","name":"Y","class":"Z","affiliation":"F","era":"TOS","stats":{}},
        {"id":"bad"}
    ]"#;

    #[test]
    fn partial_payload_accepts_valid_records() {
        let batch = validate_payload(PARTIAL).unwrap();
        assert_eq!(batch.accepted.len(), 1);
        assert_eq!(batch.rejected, 1);
        assert!(batch.is_partial());
    }

    #[test]
    fn distinct_failure_modes() {
        assert!(matches!(
            validate_payload("{oops"),
            Err(ShipdexError::MalformedJson(_))
        ));
        assert!(matches!(
            validate_payload(r#"{"id":"x"}"#),
            Err(ShipdexError::NotAnArray)
        ));
        assert!(matches!(
            validate_payload(r#"[{"id":"x"}, 3, null]"#),
            Err(ShipdexError::NoValidShips { total: 3 })
        ));
        assert!(matches!(
            validate_payload("[]"),
            Err(ShipdexError::NoValidShips { total: 0 })
        ));
    }

    #[test]
    fn wrong_field_types_are_rejected() {
        let payload = r#"[
            {"id":1,"name":"Y","class":"Z","affiliation":"F","era":"TOS","stats":{}},
            {"id":"a","name":"Y","class":"Z","affiliation":"F","era":"TOS","stats":[]},
            {"id":"b","name":"Y","class":"Z","affiliation":"F","era":"TOS","stats":null},
            {"id":"c","name":"Y","class":"Z","affiliation":"F","era":"TOS","stats":"fast"},
            {"id":"d","name":"Y","class":"Z","affiliation":"F","era":"TOS","stats":{"crew":"Unknown"}}
        ]"#;
        let batch = validate_payload(payload).unwrap();
        assert_eq!(batch.rejected, 3);
        assert_eq!(batch.accepted.len(), 1);
        assert_eq!(batch.accepted[0].id, "d");
    }

    #[test]
    fn optional_fields_of_any_type_are_accepted() {
        let payload = r#"[
            {"id":"c","name":"Y","class":"Z","affiliation":"F","era":"TOS","stats":{},"launched":2245},
            {"id":"e","name":"Y","class":"Z","affiliation":"F","era":"TOS","stats":{},"registry":null,"status":false}
        ]"#;
        let batch = validate_payload(payload).unwrap();
        assert_eq!(batch.rejected, 0);
        assert_eq!(batch.accepted.len(), 2);

        let exported = serde_json::to_value(&batch.accepted).unwrap();
        assert_eq!(exported[0]["launched"], serde_json::json!(2245));
        assert!(exported[1].as_object().unwrap().contains_key("registry"));
        assert_eq!(exported[1]["registry"], Value::Null);
        assert_eq!(exported[1]["status"], serde_json::json!(false));
    }

    #[test]
    fn unknown_fields_pass_through() {
        let payload = r#"[{"id":"x","name":"Y","class":"Z","affiliation":"F","era":"TOS",
            "stats":{"hull":3},"gallery":[{"url":"a.png"}],"senior_officers":[]}]"#;
        let batch = validate_payload(payload).unwrap();
        let ship = &batch.accepted[0];
        assert!(ship.details.contains_key("gallery"));
        assert!(ship.details.contains_key("senior_officers"));
    }

    #[test]
    fn merge_reports_partial_and_added() {
        let (merged, result) = run_payload(&Catalog::bundled(), PARTIAL).unwrap();
        assert_eq!(merged.len(), 11);
        let contents: Vec<&str> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![
                "Imported 1 of 2 ships. Some ships were invalid.",
                "Added 1 new ships to the database"
            ]
        );
    }

    #[test]
    fn merge_of_existing_ids_adds_nothing() {
        let payload = crate::commands::export::to_json(&Catalog::bundled()).unwrap();
        let (merged, result) = run_payload(&Catalog::bundled(), &payload).unwrap();
        assert_eq!(merged.len(), 10);
        assert_eq!(
            result.messages.last().unwrap().content,
            "All imported ships already exist in the database"
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = run(&Catalog::bundled(), &dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ShipdexError::ImportRead { .. }));
    }

    #[test]
    fn failed_import_leaves_catalog_untouched() {
        let catalog = Catalog::bundled();
        assert!(run_payload(&catalog, "\"ships\"").is_err());
        assert_eq!(catalog.len(), 10);
    }
}
