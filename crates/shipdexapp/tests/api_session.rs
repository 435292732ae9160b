//! End-to-end sessions against the file-backed store.

use chrono::NaiveDate;
use shipdexapp::commands::MessageLevel;
use shipdexapp::compare::Category;
use shipdexapp::init;
use shipdexapp::query::{FilterState, SortDirection, SortField, SortSpec};
use shipdexapp::store::fs::FileKv;
use shipdexapp::store::{KvStore, FAVORITES_KEY};
use shipdexapp::{Catalog, ShipdexApi, ShipdexError};
use std::fs;
use tempfile::tempdir;

fn names(result: &shipdexapp::commands::CmdResult) -> Vec<String> {
    result
        .listed_ships
        .iter()
        .map(|d| d.ship.name.clone())
        .collect()
}

#[test]
fn favorites_survive_a_new_session() {
    let dir = tempdir().unwrap();

    let mut api = ShipdexApi::new(FileKv::new(dir.path()), Catalog::bundled());
    api.toggle_favorite("voyager").unwrap();
    api.toggle_favorite("klingon-bop").unwrap();
    api.toggle_favorite("ncc-1864").unwrap();
    drop(api);

    let api = ShipdexApi::new(FileKv::new(dir.path()), Catalog::bundled());
    let ids: Vec<&str> = api.favorites().iter().collect();
    assert_eq!(ids, vec!["voyager", "klingon-bop"]);

    let favorites = api.list_favorites(SortSpec::default()).unwrap();
    assert_eq!(names(&favorites), vec!["IKS Rotarran", "USS Voyager"]);
}

#[test]
fn corrupt_favorites_start_empty() {
    let dir = tempdir().unwrap();
    let store = FileKv::new(dir.path());
    store.set(FAVORITES_KEY, "{not an array").unwrap();

    let api = ShipdexApi::new(store, Catalog::bundled());
    assert!(api.favorites().is_empty());
}

#[test]
fn corrupt_store_file_recovers_on_the_next_write() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("kv.json"), "{not json").unwrap();

    let mut api = ShipdexApi::new(FileKv::new(dir.path()), Catalog::bundled());
    assert!(api.favorites().is_empty());
    api.toggle_favorite("voyager").unwrap();

    let reopened = ShipdexApi::new(FileKv::new(dir.path()), Catalog::bundled());
    assert!(reopened.favorites().contains("voyager"));
}

#[test]
fn list_applies_filters_then_sort() {
    let dir = tempdir().unwrap();
    let api = ShipdexApi::new(FileKv::new(dir.path()), Catalog::bundled());

    let filter = FilterState::new()
        .with_search("enterprise")
        .with_affiliation(Some("Federation Starfleet".to_string()));
    let result = api
        .list_ships(
            &filter,
            SortSpec::new(SortField::Length, SortDirection::Desc),
        )
        .unwrap();
    assert_eq!(
        names(&result),
        vec![
            "USS Enterprise-E",
            "USS Enterprise-D",
            "USS Enterprise-A",
            "USS Enterprise",
            "Enterprise"
        ]
    );
}

#[test]
fn export_then_import_in_a_fresh_session() {
    let dir = tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();

    let mut api = ShipdexApi::new(FileKv::new(dir.path()), Catalog::bundled());
    api.import_payload(
        r#"[{"id":"nx-74213","name":"USS Valiant","class":"Defiant",
            "affiliation":"Federation Starfleet","era":"DS9",
            "stats":{"crew":"Unknown"},"gallery":[{"url":"valiant.png"}]}]"#,
    )
    .unwrap();
    let exported = api.export_catalog(&dir.path().join("out"), date).unwrap();
    let path = exported.paths[0].clone();
    assert!(path.ends_with("starfleet_database_2025-01-02.json"));

    let mut fresh = ShipdexApi::new(FileKv::new(dir.path()), Catalog::empty());
    let result = fresh.import_file(&path).unwrap();
    assert_eq!(fresh.catalog().len(), 11);
    assert!(matches!(result.messages[0].level, MessageLevel::Info));
    assert_eq!(result.messages[1].content, "Added 11 new ships to the database");

    let valiant = fresh.catalog().get("nx-74213").unwrap();
    assert_eq!(valiant, api.catalog().get("nx-74213").unwrap());
    assert!(valiant.details.contains_key("gallery"));
}

#[test]
fn compare_errors_and_warnings() {
    let dir = tempdir().unwrap();
    let api = ShipdexApi::new(FileKv::new(dir.path()), Catalog::bundled());

    let err = api
        .compare_ships(&["voyager", "ncc-1864"], Category::General)
        .unwrap_err();
    assert!(matches!(err, ShipdexError::NotEnoughShips { selected: 1 }));

    let result = api
        .compare_ships(&["voyager", "ncc-1864", "romulan-warbird"], Category::Physical)
        .unwrap();
    assert_eq!(result.messages.len(), 1);
    let table = result.table.unwrap();
    assert_eq!(table.columns.len(), 2);
    let length = table.rows.iter().find(|r| r.label == "Length (m)").unwrap();
    assert!(length.cells[1].is_highest);
    assert!(!length.cells[0].is_highest);
}

#[test]
fn voice_session_walks_the_state() {
    let dir = tempdir().unwrap();
    let api = ShipdexApi::new(FileKv::new(dir.path()), Catalog::bundled());
    let state = api.initial_state(SortSpec::default());

    let (state, _) = api.run_voice(&state, "Computer, show only Romulan ships");
    let (state, result) = api.run_voice(&state, "computer display IRW Khazara");
    assert_eq!(state.current_ship.as_deref(), Some("romulan-warbird"));
    assert_eq!(names(&result), vec!["IRW Khazara"]);

    let (state, result) = api.run_voice(&state, "computer filter all");
    assert_eq!(result.listed_ships.len(), 10);
    assert_eq!(state.filter.affiliation, None);
}

#[test]
fn startup_reads_local_config() {
    let dir = tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let cwd = dir.path().join("work");
    fs::create_dir_all(cwd.join(init::LOCAL_DIR)).unwrap();
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        cwd.join(init::LOCAL_DIR).join(init::CONFIG_FILE),
        "default_sort = \"crew\"\nexport_dir = \"exports\"\n",
    )
    .unwrap();

    let config = init::load_config(&data_dir, &cwd);
    assert_eq!(
        config.sort_spec(),
        SortSpec::new(SortField::Crew, SortDirection::Asc)
    );
    assert_eq!(config.export_dir.as_deref(), Some(std::path::Path::new("exports")));
}
