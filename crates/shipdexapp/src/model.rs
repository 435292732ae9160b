//! # Domain Model: Ship Records and Typed Field Access
//!
//! This module defines the core data structures for shipdex: [`Ship`], [`Stats`],
//! [`FieldPath`] and [`FieldValue`].
//!
//! ## The Problem
//!
//! Ship records come from two places: the bundled dataset and user-supplied JSON
//! fragments. Only a handful of fields drive any logic (identity, the three
//! categorical fields, and a few numeric stats). Everything else (history,
//! captains, gallery, technical specs) is display material whose shape varies
//! from record to record.
//!
//! ## The Shape
//!
//! ```text
//! Ship
//! ├── id, name, class, affiliation, era   <-- required strings
//! ├── stats                               <-- open map, number-or-string per key
//! └── details                             <-- every other field, untouched
//! ```
//!
//! `details` is a flattened, order-preserving map so that a record survives an
//! import/export cycle field-for-field, including fields this crate knows
//! nothing about. `registry`, `launched` and `status` live there too: they are
//! usually strings, but a record holding `null` or a number for them is still
//! a valid record and is written back exactly as it came in. Use
//! [`Ship::registry`] and friends to read them as text.
//!
//! ## Typed Access Instead of Reflection
//!
//! Query, sort and comparison code never index into raw JSON. They go through
//! [`FieldPath`], which maps known names to typed extraction and falls back to
//! [`FieldValue::Missing`] for anything absent, `null`, or non-scalar.
//!
//! | Path | Resolves to |
//! |------|-------------|
//! | `name`, `class`, ... | the typed top-level field |
//! | `stats.<key>` | the stats entry, number or text |
//! | anything else | a walk through `details`, `null` short-circuits |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

const REGISTRY: &str = "registry";
const LAUNCHED: &str = "launched";
const STATUS: &str = "status";

/// A single catalog entry. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: String,
    pub name: String,
    pub class: String,
    pub affiliation: String,
    pub era: String,
    pub stats: Stats,
    /// Everything else (registry, launched, status, info, history, gallery, ...).
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Ship {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class: impl Into<String>,
        affiliation: impl Into<String>,
        era: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class: class.into(),
            affiliation: affiliation.into(),
            era: era.into(),
            stats: Stats::default(),
            details: Map::new(),
        }
    }

    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.set_detail(REGISTRY, registry.into());
        self
    }

    pub fn set_detail(&mut self, key: &str, value: impl Into<Value>) {
        self.details.insert(key.to_string(), value.into());
    }

    /// The registry number, when the record holds one as a string.
    pub fn registry(&self) -> Option<&str> {
        self.text_detail(REGISTRY)
    }

    pub fn launched(&self) -> Option<&str> {
        self.text_detail(LAUNCHED)
    }

    pub fn status(&self) -> Option<&str> {
        self.text_detail(STATUS)
    }

    fn text_detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }

    fn detail_field(&self, key: &str) -> FieldValue {
        match self.details.get(key) {
            Some(value) => FieldValue::from_json(value),
            None => FieldValue::Missing,
        }
    }

    pub fn with_stat(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.stats.set(key, value);
        self
    }

    /// Resolve a field path to a typed value.
    pub fn field(&self, path: &FieldPath) -> FieldValue {
        match path {
            FieldPath::Id => FieldValue::Text(self.id.clone()),
            FieldPath::Name => FieldValue::Text(self.name.clone()),
            FieldPath::Class => FieldValue::Text(self.class.clone()),
            FieldPath::Affiliation => FieldValue::Text(self.affiliation.clone()),
            FieldPath::Era => FieldValue::Text(self.era.clone()),
            FieldPath::Registry => self.detail_field(REGISTRY),
            FieldPath::Launched => self.detail_field(LAUNCHED),
            FieldPath::Status => self.detail_field(STATUS),
            FieldPath::Stat(segments) => match segments.split_first() {
                Some((key, rest)) => match self.stats.raw(key) {
                    Some(value) => walk(value, rest),
                    None => FieldValue::Missing,
                },
                None => FieldValue::Missing,
            },
            FieldPath::Detail(segments) => match segments.split_first() {
                Some((key, rest)) => match self.details.get(key) {
                    Some(value) => walk(value, rest),
                    None => FieldValue::Missing,
                },
                None => FieldValue::Missing,
            },
        }
    }

    /// Convenience for string paths such as `"stats.speed"`.
    pub fn field_at(&self, path: &str) -> FieldValue {
        self.field(&FieldPath::parse(path))
    }
}

fn walk(value: &Value, rest: &[String]) -> FieldValue {
    let mut current = value;
    for segment in rest {
        match current {
            Value::Object(map) => match map.get(segment) {
                Some(next) => current = next,
                None => return FieldValue::Missing,
            },
            _ => return FieldValue::Missing,
        }
    }
    FieldValue::from_json(current)
}

/// Open-ended ship metrics (`hull`, `shields`, `speed`, `crew`, `length_m`, ...).
///
/// Values are numbers for most keys, but some keys (notably `crew` and
/// `length_m`) may hold descriptive strings. Missing keys are not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats(Map<String, Value>);

impl Stats {
    pub fn get(&self, key: &str) -> StatValue {
        match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64().map(StatValue::Number).unwrap_or(StatValue::Missing),
            Some(Value::String(s)) => StatValue::Text(s.clone()),
            _ => StatValue::Missing,
        }
    }

    /// The numeric value of `key`, if it holds a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            StatValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Number(f64),
    Text(String),
    Missing,
}

/// Result of resolving a [`FieldPath`] against a ship.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    /// Absent, `null`, or not a scalar.
    Missing,
}

impl FieldValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Missing),
            Value::Bool(b) => FieldValue::Text(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => FieldValue::Missing,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

/// A typed, parsed field reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Id,
    Name,
    Registry,
    Class,
    Affiliation,
    Era,
    Launched,
    Status,
    /// `stats.<key>[.<nested>...]`
    Stat(Vec<String>),
    /// Any other dotted path into the display fields.
    Detail(Vec<String>),
}

impl FieldPath {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        match segments.as_slice() {
            [single] => match single.as_str() {
                "id" => FieldPath::Id,
                "name" => FieldPath::Name,
                "registry" => FieldPath::Registry,
                "class" => FieldPath::Class,
                "affiliation" => FieldPath::Affiliation,
                "era" => FieldPath::Era,
                "launched" => FieldPath::Launched,
                "status" => FieldPath::Status,
                _ => FieldPath::Detail(segments),
            },
            [first, rest @ ..] if first == "stats" && !rest.is_empty() => {
                FieldPath::Stat(rest.to_vec())
            }
            _ => FieldPath::Detail(segments),
        }
    }

    pub fn stat(key: &str) -> Self {
        FieldPath::Stat(vec![key.to_string()])
    }

    /// The final segment, used for labels.
    pub fn leaf(&self) -> String {
        match self {
            FieldPath::Stat(segments) | FieldPath::Detail(segments) => {
                segments.last().cloned().unwrap_or_default()
            }
            other => other.to_string(),
        }
    }

    pub fn is_stat(&self) -> bool {
        matches!(self, FieldPath::Stat(_))
    }
}

impl FromStr for FieldPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FieldPath::parse(s))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Id => write!(f, "id"),
            FieldPath::Name => write!(f, "name"),
            FieldPath::Registry => write!(f, "registry"),
            FieldPath::Class => write!(f, "class"),
            FieldPath::Affiliation => write!(f, "affiliation"),
            FieldPath::Era => write!(f, "era"),
            FieldPath::Launched => write!(f, "launched"),
            FieldPath::Status => write!(f, "status"),
            FieldPath::Stat(segments) => write!(f, "stats.{}", segments.join(".")),
            FieldPath::Detail(segments) => write!(f, "{}", segments.join(".")),
        }
    }
}
