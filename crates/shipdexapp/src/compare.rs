//! # Comparison Tables
//!
//! [`build_table`] turns two or more ships plus a [`Category`] into a
//! rendering-ready matrix: one [`Row`] per field path, one [`Cell`] per ship,
//! columns in the order ships were given.
//!
//! ## Cell formatting
//!
//! | Value | Display |
//! |-------|---------|
//! | missing, `null`, empty text | `N/A` |
//! | `speed` above 9 | `Warp {value}` |
//! | any other number | the number as written (`8`, `9.6`, `642.5`) |
//! | text | unchanged |
//!
//! ## Highlighting
//!
//! For every row with at least one numeric cell, all cells equal to the row
//! maximum are flagged `is_highest`. Ties flag every tied ship. Missing values
//! never take part.
//!
//! ## Rating bars
//!
//! Scored stats (`stats.*` other than `length_m` and `crew`) also carry a bar
//! percentage, `value * 10` clamped to `0..=100`.

use crate::error::{Result, ShipdexError};
use crate::model::{FieldPath, FieldValue, Ship};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const MISSING_MARKER: &str = "N/A";
pub const NO_REGISTRY: &str = "No Registry";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Technical,
    Physical,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::General, Category::Technical, Category::Physical];

    pub fn name(&self) -> &'static str {
        match self {
            Category::General => "General Specifications",
            Category::Technical => "Technical Specifications",
            Category::Physical => "Physical Specifications",
        }
    }

    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Category::General => &["class", "affiliation", "era", "registry"],
            Category::Technical => &[
                "stats.hull",
                "stats.shields",
                "stats.weapons",
                "stats.speed",
                "stats.maneuver",
            ],
            Category::Physical => &["stats.crew", "stats.length_m"],
        }
    }

    pub fn fields(&self) -> Vec<FieldPath> {
        self.paths().iter().map(|p| FieldPath::parse(p)).collect()
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ShipdexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "technical" => Ok(Category::Technical),
            "physical" => Ok(Category::Physical),
            _ => Err(ShipdexError::Api(format!("Unknown comparison category: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub id: String,
    pub name: String,
    pub registry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub display: String,
    pub is_highest: bool,
    /// Rating bar fill, in percent.
    pub bar: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub path: String,
    pub label: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub title: String,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Row>,
}

/// Build the table for one of the fixed categories.
pub fn build_table(ships: &[&Ship], category: Category) -> Result<ComparisonTable> {
    build_custom_table(ships, category.name(), &category.fields())
}

/// Build a table over arbitrary field paths.
pub fn build_custom_table(
    ships: &[&Ship],
    title: &str,
    fields: &[FieldPath],
) -> Result<ComparisonTable> {
    if ships.len() < 2 {
        return Err(ShipdexError::NotEnoughShips {
            selected: ships.len(),
        });
    }

    let columns = ships
        .iter()
        .map(|ship| ColumnHeader {
            id: ship.id.clone(),
            name: ship.name.clone(),
            registry: ship.registry().unwrap_or(NO_REGISTRY).to_string(),
        })
        .collect();

    let rows = fields.iter().map(|path| build_row(ships, path)).collect();

    tracing::debug!(ships = ships.len(), fields = fields.len(), title, "built comparison table");

    Ok(ComparisonTable {
        title: title.to_string(),
        columns,
        rows,
    })
}

fn build_row(ships: &[&Ship], path: &FieldPath) -> Row {
    let values: Vec<FieldValue> = ships.iter().map(|ship| ship.field(path)).collect();

    let max = values
        .iter()
        .filter_map(FieldValue::as_number)
        .fold(None, |acc: Option<f64>, n| Some(acc.map_or(n, |m| m.max(n))));

    let leaf = path.leaf();
    let cells = values
        .iter()
        .map(|value| Cell {
            display: format_value(&leaf, value),
            is_highest: matches!((value.as_number(), max), (Some(n), Some(m)) if n == m),
            bar: bar_percent(path, value),
        })
        .collect();

    Row {
        path: path.to_string(),
        label: field_label(&leaf),
        cells,
    }
}

/// Display string for a resolved value. `leaf` is the last path segment.
pub fn format_value(leaf: &str, value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) if leaf == "speed" && *n > 9.0 => format!("Warp {}", n),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Text(s) if s.is_empty() => MISSING_MARKER.to_string(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::Missing => MISSING_MARKER.to_string(),
    }
}

fn bar_percent(path: &FieldPath, value: &FieldValue) -> Option<f64> {
    if !path.is_stat() {
        return None;
    }
    let leaf = path.leaf();
    if leaf == "length_m" || leaf == "crew" {
        return None;
    }
    value.as_number().map(|n| (n * 10.0).clamp(0.0, 100.0))
}

/// Human label for a field: `length_m` becomes "Length (m)", `maneuver` "Maneuver".
pub fn field_label(leaf: &str) -> String {
    let (base, unit) = match leaf.strip_suffix("_m") {
        Some(base) if !base.is_empty() => (base, Some("m")),
        _ => (leaf, None),
    };
    let words: Vec<String> = base
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    let label = words.join(" ");
    match unit {
        Some(unit) => format!("{} ({})", label, unit),
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(id: &str, weapons: f64) -> Ship {
        Ship::new(id, id.to_uppercase(), "Class", "Federation Starfleet", "TNG")
            .with_stat("weapons", weapons)
    }

    fn row<'a>(table: &'a ComparisonTable, path: &str) -> &'a Row {
        table.rows.iter().find(|r| r.path == path).unwrap()
    }

    #[test]
    fn fewer_than_two_ships_is_rejected() {
        let a = ship("a", 6.0);
        assert!(matches!(
            build_table(&[&a], Category::General),
            Err(ShipdexError::NotEnoughShips { selected: 1 })
        ));
        assert!(matches!(
            build_table(&[], Category::General),
            Err(ShipdexError::NotEnoughShips { selected: 0 })
        ));
    }

    #[test]
    fn all_tied_maxima_are_flagged() {
        let a = ship("a", 6.0);
        let b = ship("b", 9.0);
        let c = ship("c", 9.0);
        let table = build_table(&[&a, &b, &c], Category::Technical).unwrap();
        let flags: Vec<bool> = row(&table, "stats.weapons")
            .cells
            .iter()
            .map(|c| c.is_highest)
            .collect();
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn missing_values_render_na_and_are_not_highlighted() {
        let a = ship("a", 6.0);
        let b = ship("b", 9.0);
        let table = build_table(&[&a, &b], Category::Technical).unwrap();
        let hull = row(&table, "stats.hull");
        assert!(hull.cells.iter().all(|c| c.display == "N/A"));
        assert!(hull.cells.iter().all(|c| !c.is_highest));
        assert!(hull.cells.iter().all(|c| c.bar.is_none()));
    }

    #[test]
    fn speed_above_nine_renders_as_warp() {
        assert_eq!(format_value("speed", &FieldValue::Number(9.6)), "Warp 9.6");
        assert_eq!(format_value("speed", &FieldValue::Number(9.0)), "9");
        assert_eq!(format_value("speed", &FieldValue::Number(8.0)), "8");
        assert_eq!(format_value("hull", &FieldValue::Number(12.0)), "12");
        assert_eq!(format_value("class", &FieldValue::Text(String::new())), "N/A");
    }

    #[test]
    fn bars_only_for_scored_stats() {
        let a = ship("a", 12.0).with_stat("crew", 430).with_stat("speed", 9.6);
        let b = ship("b", -1.0).with_stat("crew", 50).with_stat("speed", 5.2);
        let technical = build_table(&[&a, &b], Category::Technical).unwrap();
        let weapons = row(&technical, "stats.weapons");
        assert_eq!(weapons.cells[0].bar, Some(100.0));
        assert_eq!(weapons.cells[1].bar, Some(0.0));
        let speed_bar = row(&technical, "stats.speed").cells[1].bar.unwrap();
        assert!((speed_bar - 52.0).abs() < 1e-9);

        let physical = build_table(&[&a, &b], Category::Physical).unwrap();
        assert!(row(&physical, "stats.crew").cells[0].bar.is_none());
        assert!(row(&physical, "stats.crew").cells[0].is_highest);
    }

    #[test]
    fn headers_fall_back_to_no_registry() {
        let a = ship("a", 1.0).with_registry("NCC-1701");
        let b = ship("b", 2.0);
        let table = build_table(&[&a, &b], Category::General).unwrap();
        assert_eq!(table.columns[0].registry, "NCC-1701");
        assert_eq!(table.columns[1].registry, "No Registry");
        assert_eq!(table.title, "General Specifications");
        assert_eq!(row(&table, "registry").cells[1].display, "N/A");
    }

    #[test]
    fn text_rows_are_never_highlighted() {
        let a = ship("a", 1.0);
        let b = ship("b", 2.0);
        let table = build_table(&[&a, &b], Category::General).unwrap();
        assert!(row(&table, "class").cells.iter().all(|c| !c.is_highest));
    }

    #[test]
    fn categories_wrap_in_both_directions() {
        assert_eq!(Category::General.next(), Category::Technical);
        assert_eq!(Category::Physical.next(), Category::General);
        assert_eq!(Category::General.prev(), Category::Physical);
        for c in Category::ALL {
            assert_eq!(c.next().prev(), c);
        }
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(field_label("length_m"), "Length (m)");
        assert_eq!(field_label("maneuver"), "Maneuver");
        assert_eq!(field_label("max_speed"), "Max Speed");
        assert_eq!(field_label("registry"), "Registry");
    }

    #[test]
    fn custom_tables_resolve_detail_paths() {
        let a = ship("a", 1.0);
        let b = ship("b", 2.0);
        let fields = vec![FieldPath::parse("technical_specs.propulsion")];
        let table = build_custom_table(&[&a, &b], "Propulsion", &fields).unwrap();
        assert_eq!(table.rows[0].cells[0].display, "N/A");
        assert_eq!(table.rows[0].label, "Propulsion");
    }
}
