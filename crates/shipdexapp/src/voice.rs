//! # Text Command Interpreter
//!
//! Turns a plain transcript ("computer, show me the Defiant") into a
//! [`VoiceCommand`] and applies it to an [`AppState`] through the same
//! transitions every other caller uses. No audio is involved: whatever produces
//! the transcript is someone else's problem.
//!
//! ## Grammar
//!
//! Matching is case-insensitive and substring based. A transcript without the
//! wake word `computer` is ignored. Otherwise the first rule that produces a
//! command wins:
//!
//! | Trigger | Argument | Command |
//! |---------|----------|---------|
//! | `show me`, `display` | a ship name or class in the transcript | [`VoiceCommand::ShowShip`] |
//! | `search`, `find` | remaining words | [`VoiceCommand::Search`] |
//! | `sort by` | `name`, `class`, `era`, `affiliation` | [`VoiceCommand::Sort`] |
//! | `filter`, `show only` | `federation`, `klingon`, `romulan`, `all` | [`VoiceCommand::Filter`] |
//!
//! A trigger whose argument is missing falls through to the next rule. When
//! nothing matches the result is [`Interpretation::NotRecognized`].

use crate::model::Ship;
use crate::query::{SortField, SortSpec};
use crate::state::AppState;

const WAKE_WORD: &str = "computer";
const SEARCH_FILLER: [&str; 4] = ["computer", "search", "find", "for"];

const AFFILIATION_KEYWORDS: [(&str, &str); 3] = [
    ("federation", "Federation Starfleet"),
    ("klingon", "Klingon Empire"),
    ("romulan", "Romulan Star Empire"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceCommand {
    /// Select the ship with this id.
    ShowShip { id: String, name: String },
    Search(String),
    Sort(SortField),
    /// `None` clears the affiliation filter.
    Filter(Option<String>),
}

impl VoiceCommand {
    pub fn apply(&self, state: &AppState) -> AppState {
        match self {
            VoiceCommand::ShowShip { id, .. } => state.select_ship(id.clone()),
            VoiceCommand::Search(terms) => state.with_search(terms.clone()),
            VoiceCommand::Sort(field) => {
                state.with_sort(SortSpec::new(*field, state.sort.direction))
            }
            VoiceCommand::Filter(affiliation) => state.with_affiliation(affiliation.clone()),
        }
    }

    /// Acknowledgement text for the user.
    pub fn describe(&self) -> String {
        match self {
            VoiceCommand::ShowShip { name, .. } => format!("Displaying {}", name),
            VoiceCommand::Search(terms) => format!("Searching for \"{}\"", terms),
            VoiceCommand::Sort(field) => format!("Sorting ships by {}", field),
            VoiceCommand::Filter(Some(affiliation)) => format!("Filtering {} ships", affiliation),
            VoiceCommand::Filter(None) => "Showing all ships".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// No wake word; not addressed to us.
    Ignored,
    NotRecognized,
    Command(VoiceCommand),
}

/// Interpret `transcript` against the ships that can be named.
pub fn interpret(transcript: &str, ships: &[Ship]) -> Interpretation {
    let command = transcript.to_lowercase();
    if !command.contains(WAKE_WORD) {
        return Interpretation::Ignored;
    }

    let parsed = show_ship(&command, ships)
        .or_else(|| search(&command))
        .or_else(|| sort(&command))
        .or_else(|| filter(&command));

    match parsed {
        Some(cmd) => {
            tracing::debug!(transcript, command = ?cmd, "voice command accepted");
            Interpretation::Command(cmd)
        }
        None => {
            tracing::debug!(transcript, "voice command not recognized");
            Interpretation::NotRecognized
        }
    }
}

fn show_ship(command: &str, ships: &[Ship]) -> Option<VoiceCommand> {
    if !(command.contains("show me") || command.contains("display")) {
        return None;
    }
    ships
        .iter()
        .find(|ship| mentions(command, &ship.name) || mentions(command, &ship.class))
        .map(|ship| VoiceCommand::ShowShip {
            id: ship.id.clone(),
            name: ship.name.clone(),
        })
}

/// An empty name would match every command.
fn mentions(command: &str, text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && command.contains(&text.to_lowercase())
}

fn search(command: &str) -> Option<VoiceCommand> {
    if !(command.contains("search") || command.contains("find")) {
        return None;
    }
    let terms: Vec<&str> = command
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| c == ',' || c == '.'))
        .filter(|w| !w.is_empty() && !SEARCH_FILLER.contains(w))
        .collect();
    if terms.is_empty() {
        return None;
    }
    Some(VoiceCommand::Search(terms.join(" ")))
}

fn sort(command: &str) -> Option<VoiceCommand> {
    if !command.contains("sort by") {
        return None;
    }
    [
        ("name", SortField::Name),
        ("class", SortField::Class),
        ("era", SortField::Era),
        ("affiliation", SortField::Affiliation),
    ]
    .into_iter()
    .find(|(keyword, _)| command.contains(keyword))
    .map(|(_, field)| VoiceCommand::Sort(field))
}

fn filter(command: &str) -> Option<VoiceCommand> {
    if !(command.contains("filter") || command.contains("show only")) {
        return None;
    }
    if let Some((_, affiliation)) = AFFILIATION_KEYWORDS
        .iter()
        .find(|(keyword, _)| command.contains(keyword))
    {
        return Some(VoiceCommand::Filter(Some(affiliation.to_string())));
    }
    command
        .contains("all")
        .then_some(VoiceCommand::Filter(None))
}
