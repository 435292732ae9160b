//! Sort engine.
//!
//! Sorting resolves each ship to a [`SortKey`] for the chosen [`SortField`] and
//! compares keys: text keys by collation, everything else numerically. Missing
//! text resolves to `""`, missing numbers to `0`.
//!
//! Ordering is total. When primary keys tie, ships fall back to name (unless
//! name is already the primary field) and then to id. `Desc` reverses the whole
//! comparator, so a descending sort is exactly the ascending sort reversed.

use crate::error::{Result, ShipdexError};
use crate::model::{FieldPath, Ship, StatValue};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Name,
    Registry,
    Class,
    Affiliation,
    Era,
    Launched,
    Status,
    Length,
    Crew,
    Speed,
}

impl SortField {
    pub const ALL: [SortField; 10] = [
        SortField::Name,
        SortField::Registry,
        SortField::Class,
        SortField::Affiliation,
        SortField::Era,
        SortField::Launched,
        SortField::Status,
        SortField::Length,
        SortField::Crew,
        SortField::Speed,
    ];

    /// The dotted path this field reads.
    pub fn path(&self) -> FieldPath {
        match self {
            SortField::Name => FieldPath::Name,
            SortField::Registry => FieldPath::Registry,
            SortField::Class => FieldPath::Class,
            SortField::Affiliation => FieldPath::Affiliation,
            SortField::Era => FieldPath::Era,
            SortField::Launched => FieldPath::Launched,
            SortField::Status => FieldPath::Status,
            SortField::Length => FieldPath::stat("length_m"),
            SortField::Crew => FieldPath::stat("crew"),
            SortField::Speed => FieldPath::stat("speed"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Registry => "registry",
            SortField::Class => "class",
            SortField::Affiliation => "affiliation",
            SortField::Era => "era",
            SortField::Launched => "launched",
            SortField::Status => "status",
            SortField::Length => "length",
            SortField::Crew => "crew",
            SortField::Speed => "speed",
        }
    }

    pub fn key(&self, ship: &Ship) -> SortKey {
        match self {
            SortField::Length => SortKey::Number(match ship.stats.get("length_m") {
                StatValue::Number(n) => n,
                StatValue::Text(s) => parse_finite(&s).unwrap_or(0.0),
                StatValue::Missing => 0.0,
            }),
            SortField::Crew => SortKey::Number(ship.stats.number("crew").unwrap_or(0.0)),
            SortField::Speed => SortKey::Number(ship.stats.number("speed").unwrap_or(0.0)),
            text => SortKey::Text(
                ship.field(&text.path())
                    .as_text()
                    .unwrap_or_default()
                    .to_string(),
            ),
        }
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ShipdexError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        let field = match normalized.as_str() {
            "name" => SortField::Name,
            "registry" => SortField::Registry,
            "class" => SortField::Class,
            "affiliation" => SortField::Affiliation,
            "era" => SortField::Era,
            "launched" => SortField::Launched,
            "status" => SortField::Status,
            "length" | "length_m" | "stats.length_m" => SortField::Length,
            "crew" | "stats.crew" => SortField::Crew,
            "speed" | "stats.speed" => SortField::Speed,
            _ => return Err(ShipdexError::Api(format!("Unknown sort field: {}", s))),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ShipdexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ShipdexError::Api(format!("Unknown sort direction: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header-click behavior: same field flips direction, a new field starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    pub fn apply<'a>(&self, ships: &[&'a Ship]) -> Vec<&'a Ship> {
        sort(ships, self.field, self.direction)
    }
}

/// A resolved comparison key.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    fn numeric(&self) -> f64 {
        match self {
            SortKey::Number(n) => *n,
            SortKey::Text(_) => 0.0,
        }
    }
}

pub fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Text(a), SortKey::Text(b)) => collate(a, b),
        _ => a.numeric().total_cmp(&b.numeric()),
    }
}

/// Case-insensitive ordering, with the raw strings as a tiebreak.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Full ascending comparator for `field`, including tiebreaks.
pub fn compare_ships(a: &Ship, b: &Ship, field: SortField) -> Ordering {
    let primary = compare_keys(&field.key(a), &field.key(b));
    let by_name = || {
        if field == SortField::Name {
            Ordering::Equal
        } else {
            collate(&a.name, &b.name)
        }
    };
    primary.then_with(by_name).then_with(|| a.id.cmp(&b.id))
}

/// Return a new ordering of `ships`. The input is left untouched.
pub fn sort<'a>(ships: &[&'a Ship], field: SortField, direction: SortDirection) -> Vec<&'a Ship> {
    let mut sorted = ships.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_ships(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    tracing::debug!(
        count = sorted.len(),
        field = %field,
        direction = direction.as_str(),
        "sorted ships"
    );
    sorted
}
