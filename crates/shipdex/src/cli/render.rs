//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every function returns a
//! `String`; `commands.rs` does the printing. Colors come from `colored`, which
//! turns itself off when stdout is not a terminal or `NO_COLOR` is set.
//! Column widths are measured with `unicode-width` so names with wide
//! characters still line up.

use colored::Colorize;
use serde_json::Value;
use shipdexapp::commands::{CmdMessage, DisplayShip, Facets, MessageLevel};
use shipdexapp::compare::{self, ComparisonTable};
use shipdexapp::links::ExternalLinks;
use shipdexapp::model::{FieldPath, Ship};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const FAVORITE_MARKER: &str = "★";
const ID_WIDTH: usize = 18;
const NAME_WIDTH: usize = 28;
const CLASS_WIDTH: usize = 14;
const AFFILIATION_WIDTH: usize = 22;
const LABEL_WIDTH: usize = 18;
const CELL_WIDTH: usize = 24;
const BAR_WIDTH: usize = 10;

const DETAIL_TEXTS: [(&str, &str); 4] = [
    ("armaments", "Armaments"),
    ("defenses", "Defenses"),
    ("info", "Info"),
    ("history", "History"),
];

const DETAIL_LISTS: [(&str, &str); 3] = [
    ("captains", "Captains"),
    ("notable_features", "Notable features"),
    ("notable_missions", "Notable missions"),
];

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn render_ship_list(ships: &[DisplayShip]) -> String {
    let mut out = String::new();
    for entry in ships {
        let ship = &entry.ship;
        let marker = if entry.is_favorite {
            FAVORITE_MARKER.yellow()
        } else {
            " ".normal()
        };
        out.push_str(&format!(
            "  {} {} {} {} {} {}\n",
            marker,
            fit(&ship.id, ID_WIDTH).dimmed(),
            fit(&ship.name, NAME_WIDTH).bold(),
            fit(&ship.class, CLASS_WIDTH),
            fit(&ship.affiliation, AFFILIATION_WIDTH),
            ship.era
        ));
    }
    out
}

pub(super) fn render_ship_detail(entry: &DisplayShip, links: Option<&ExternalLinks>) -> String {
    let ship = &entry.ship;
    let mut out = String::new();

    let marker = if entry.is_favorite {
        format!(" {}", FAVORITE_MARKER.yellow())
    } else {
        String::new()
    };
    out.push_str(&format!("{}{}\n", ship.name.bold(), marker));
    out.push_str(&format!(
        "{}\n",
        format!(
            "{} | {} class | {} | {}",
            ship.registry().unwrap_or(compare::NO_REGISTRY),
            ship.class,
            ship.affiliation,
            ship.era
        )
        .dimmed()
    ));
    if let Some(launched) = ship.launched() {
        out.push_str(&format!("Launched: {}\n", launched));
    }
    if let Some(status) = ship.status() {
        out.push_str(&format!("Status: {}\n", status));
    }

    if !ship.stats.is_empty() {
        out.push_str(&format!("\n{}\n", "Stats".bold()));
        for key in ship.stats.keys() {
            let value = compare::format_value(key, &ship.field(&FieldPath::stat(key)));
            out.push_str(&format!(
                "  {}{}\n",
                fit(&compare::field_label(key), LABEL_WIDTH),
                value
            ));
        }
    }

    for (key, title) in DETAIL_TEXTS {
        if let Some(Value::String(text)) = ship.details.get(key) {
            if !text.is_empty() {
                out.push_str(&format!("\n{}\n  {}\n", title.bold(), text));
            }
        }
    }

    for (key, title) in DETAIL_LISTS {
        let items = detail_list(ship, key);
        if !items.is_empty() {
            out.push_str(&format!("\n{}\n", title.bold()));
            for item in items {
                out.push_str(&format!("  - {}\n", item));
            }
        }
    }

    if let Some(links) = links {
        out.push('\n');
        out.push_str(&render_links(links));
    }
    out
}

fn detail_list<'a>(ship: &'a Ship, key: &str) -> Vec<&'a str> {
    match ship.details.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

pub(super) fn render_links(links: &ExternalLinks) -> String {
    format!(
        "{}\n  {}{}\n  {}{}\n",
        "Links".bold(),
        fit("Memory Alpha", LABEL_WIDTH),
        links.memory_alpha.cyan(),
        fit("Memory Beta", LABEL_WIDTH),
        links.memory_beta.cyan()
    )
}

pub(super) fn render_comparison(table: &ComparisonTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", table.title.bold()));

    let blank = " ".repeat(LABEL_WIDTH);
    let names: String = table
        .columns
        .iter()
        .map(|c| fit(&c.name, CELL_WIDTH).bold().to_string())
        .collect();
    let registries: String = table
        .columns
        .iter()
        .map(|c| fit(&c.registry, CELL_WIDTH).dimmed().to_string())
        .collect();
    out.push_str(&format!("{}{}\n", blank, names.trim_end()));
    out.push_str(&format!("{}{}\n", blank, registries.trim_end()));

    for row in &table.rows {
        let mut line = fit(&row.label, LABEL_WIDTH);
        for cell in &row.cells {
            let text = match cell.bar {
                Some(percent) => format!("{} {}", bar(percent), cell.display),
                None => cell.display.clone(),
            };
            let text = fit(&text, CELL_WIDTH);
            if cell.is_highest {
                line.push_str(&text.green().bold().to_string());
            } else {
                line.push_str(&text);
            }
        }
        out.push_str(&format!("{}\n", line.trim_end()));
    }
    out
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub(super) fn render_facets(facets: &Facets) -> String {
    let mut out = String::new();
    for (title, values) in [
        ("Affiliations", &facets.affiliations),
        ("Eras", &facets.eras),
        ("Classes", &facets.classes),
    ] {
        out.push_str(&format!("{}\n", title.bold()));
        for value in values {
            out.push_str(&format!("  {}\n", value));
        }
    }
    out
}

/// Truncate with an ellipsis and pad with spaces to exactly `width` columns.
fn fit(text: &str, width: usize) -> String {
    let shown = truncate_to_width(text, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() < max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(2) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipdexapp::commands::CmdResult;
    use shipdexapp::compare::Category;
    use shipdexapp::store::memory::MemoryKv;
    use shipdexapp::{Catalog, IdSet, ShipdexApi};

    fn plain() {
        colored::control::set_override(false);
    }

    fn entry(id: &str, favorite: bool) -> DisplayShip {
        let catalog = Catalog::bundled();
        let favorites: IdSet = if favorite {
            [id].into_iter().collect()
        } else {
            IdSet::new()
        };
        DisplayShip::new(catalog.get(id).unwrap(), &favorites)
    }

    #[test]
    fn truncation_keeps_a_column_gap() {
        assert_eq!(fit("Galaxy", 8), "Galaxy  ");
        assert_eq!(fit("Constitution", 8), "Consti… ");
        assert_eq!(fit("Constitution", 8).width(), 8);
    }

    #[test]
    fn list_marks_favorites() {
        plain();
        let out = render_ship_list(&[entry("voyager", true), entry("nx-01", false)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(FAVORITE_MARKER));
        assert!(lines[0].contains("USS Voyager"));
        assert!(!lines[1].contains(FAVORITE_MARKER));
        assert!(lines[1].contains("nx-01"));
    }

    #[test]
    fn detail_shows_stats_text_and_links() {
        plain();
        let ship = entry("ncc-1701", false);
        let links = ExternalLinks::for_ship(&ship.ship);
        let out = render_ship_detail(&ship, Some(&links));
        assert!(out.starts_with("USS Enterprise\n"));
        assert!(out.contains("NCC-1701 | Constitution class"));
        assert!(out.contains("Length (m)"));
        assert!(out.contains("Armaments"));
        assert!(out.contains("  - James T. Kirk (2265-2270, 2273-2285)"));
        assert!(out.contains("memory-alpha"));
    }

    #[test]
    fn comparison_renders_every_row() {
        plain();
        let api = ShipdexApi::new(MemoryKv::new(), Catalog::bundled());
        let result: CmdResult = api
            .compare_ships(&["ncc-1701-d", "voyager"], Category::Technical)
            .unwrap();
        let table = result.table.unwrap();
        let out = render_comparison(&table);
        assert!(out.starts_with("Technical Specifications\n"));
        assert_eq!(out.lines().count(), 3 + table.rows.len());
        assert!(out.contains("█"));
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(0.0), "░".repeat(10));
        assert_eq!(bar(100.0), "█".repeat(10));
        assert_eq!(bar(50.0).chars().filter(|c| *c == '█').count(), 5);
    }

    #[test]
    fn messages_keep_their_text() {
        plain();
        let out = render_messages(&[CmdMessage::warning("careful"), CmdMessage::success("done")]);
        assert_eq!(out, "careful\ndone\n");
    }

    #[test]
    fn facets_list_each_group() {
        plain();
        let facets = Facets {
            affiliations: vec!["Klingon Empire".into()],
            eras: vec!["TNG".into()],
            classes: vec![],
        };
        let out = render_facets(&facets);
        assert_eq!(out, "Affiliations\n  Klingon Empire\nEras\n  TNG\nClasses\n");
    }
}
