//! # CLI Layer
//!
//! This module is **one possible UI client** for shipdex. It is the only place
//! that:
//! - writes to stdout and stderr
//! - installs a tracing subscriber
//! - parses arguments
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap
//! 2. **Context Setup**: `initialize()` builds the API from config and the data dir
//! 3. **API Dispatch**: call the matching `ShipdexApi` method
//! 4. **Output Formatting**: hand the `CmdResult` to `render.rs`
//!
//! Errors bubble up to `main.rs`, which prints them and exits with status 1.

use super::render::{
    render_comparison, render_facets, render_links, render_messages, render_ship_detail,
    render_ship_list,
};
use super::setup::{Cli, Commands, ConfigCommands, Faction};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use clapfig::{Clapfig, ConfigAction, SearchPath};
use shipdexapp::commands::{CmdResult, MessageLevel};
use shipdexapp::config::ShipdexConfig;
use shipdexapp::init::{self, initialize, ShipdexContext};
use shipdexapp::query::{FilterState, SortDirection, SortField, SortSpec};
use shipdexapp::template::ShipTemplate;
use std::path::{Path, PathBuf};
use tracing_subscriber::{prelude::*, EnvFilter};

const LOG_ENV: &str = "SHIPDEX_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let cwd = std::env::current_dir().context("Could not read the working directory")?;

    // Commands that never touch the catalog or the store
    match &cli.command {
        Some(Commands::Config { action }) => return handle_config(action.as_ref(), &cwd),
        Some(Commands::Template {
            faction,
            id,
            name,
            class,
            era,
            registry,
            affiliation,
        }) => {
            return handle_template(*faction, id, name, class, era, registry.as_deref(), affiliation)
        }
        _ => {}
    }

    let mut ctx = initialize(&cwd)?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "context ready");

    match cli.command {
        None => handle_list(&ctx, FilterState::new(), None, false),
        Some(Commands::List {
            search,
            affiliation,
            era,
            favorites,
            sort,
            desc,
        }) => {
            let filter = FilterState::new()
                .with_search(search.unwrap_or_default())
                .with_affiliation(affiliation)
                .with_era(era)
                .with_favorites_only(favorites);
            handle_list(&ctx, filter, sort, desc)
        }
        Some(Commands::Show { id }) => {
            let result = ctx.api.show_ship(&id)?;
            print_detail(&result);
            Ok(())
        }
        Some(Commands::Links { id }) => {
            let result = ctx.api.ship_links(&id)?;
            print_result(&result);
            Ok(())
        }
        Some(Commands::Fav { id }) => {
            let result = ctx.api.toggle_favorite(&id)?;
            print_result(&result);
            Ok(())
        }
        Some(Commands::Favorites) => {
            let result = ctx.api.list_favorites(ctx.config.sort_spec())?;
            print_result(&result);
            Ok(())
        }
        Some(Commands::Compare { ids, category }) => {
            let result = ctx.api.compare_ships(ids.as_slice(), category)?;
            print_result(&result);
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let before = ctx.api.catalog().len();
            let result = ctx.api.import_file(&file)?;
            print_result(&result);
            println!(
                "Catalog now holds {} ships ({} before import)",
                ctx.api.catalog().len(),
                before
            );
            Ok(())
        }
        Some(Commands::Export { out }) => {
            let dir = out.unwrap_or_else(|| ctx.export_dir(&cwd));
            let today = chrono::Utc::now().date_naive();
            let result = ctx.api.export_catalog(&dir, today)?;
            print_result(&result);
            Ok(())
        }
        Some(Commands::Filters) => {
            let result = ctx.api.filters()?;
            print_result(&result);
            Ok(())
        }
        Some(Commands::Say { transcript }) => handle_say(&ctx, &transcript.join(" ")),
        Some(Commands::Config { .. }) | Some(Commands::Template { .. }) => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    // A second init (tests calling run twice) is harmless
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}

fn handle_list(
    ctx: &ShipdexContext,
    filter: FilterState,
    sort: Option<SortField>,
    desc: bool,
) -> Result<()> {
    let configured = ctx.config.sort_spec();
    let spec = match (sort, desc) {
        (Some(field), desc) => SortSpec::new(field, direction(desc)),
        (None, true) => SortSpec::new(configured.field, SortDirection::Desc),
        (None, false) => configured,
    };
    let result = ctx.api.list_ships(&filter, spec)?;
    print_result(&result);
    Ok(())
}

fn direction(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

fn handle_say(ctx: &ShipdexContext, transcript: &str) -> Result<()> {
    let state = ctx.api.initial_state(ctx.config.sort_spec());
    let (_, result) = ctx.api.run_voice(&state, transcript);
    print!("{}", render_messages(&result.messages));

    let accepted = result
        .messages
        .iter()
        .any(|m| matches!(m.level, MessageLevel::Success));
    if !accepted {
        return Ok(());
    }
    print!("{}", render_ship_list(&result.listed_ships));
    if let Some(current) = result.affected_ships.first() {
        println!();
        print!("{}", render_ship_detail(current, None));
    }
    Ok(())
}

fn handle_template(
    faction: Faction,
    id: &str,
    name: &str,
    class: &str,
    era: &str,
    registry: Option<&str>,
    affiliation: &str,
) -> Result<()> {
    let template = match faction {
        Faction::Federation => ShipTemplate::federation(id, name, class, era),
        Faction::Klingon => ShipTemplate::klingon(id, name, class, era),
        Faction::Romulan => ShipTemplate::romulan(id, name, class, era),
        Faction::Other => ShipTemplate::basic(id, name, class, affiliation, era),
    };
    let template = match registry {
        Some(registry) => template.registry(registry),
        None => template,
    };
    // An array, so the output can be fed straight back to `import`
    let json = serde_json::to_string_pretty(&vec![template.build()])?;
    println!("{}", json);
    Ok(())
}

fn load_paths(data_dir: &Path, cwd: &Path) -> Vec<SearchPath> {
    vec![
        SearchPath::Path(data_dir.to_path_buf()),
        SearchPath::Path(cwd.join(init::LOCAL_DIR)),
    ]
}

fn handle_config(action: Option<&ConfigCommands>, cwd: &Path) -> Result<()> {
    let data_dir = init::global_data_dir()?;
    match action {
        None => {
            // Bare `shipdex config`: every resolved value
            let config: ShipdexConfig = Clapfig::builder()
                .app_name("shipdex")
                .file_name(init::CONFIG_FILE)
                .search_paths(load_paths(&data_dir, cwd))
                .no_env()
                .strict(false)
                .load()
                .unwrap_or_default();

            let table = toml::Value::try_from(&config)?;
            if let toml::Value::Table(t) = table {
                for (k, v) in &t {
                    println!("{} = {}", k, format_toml_value(v));
                }
            }
            Ok(())
        }
        Some(ConfigCommands::Gen { output }) => {
            let action = ConfigAction::Gen {
                output: output.clone(),
            };
            let result = Clapfig::builder::<ShipdexConfig>()
                .app_name("shipdex")
                .file_name(init::CONFIG_FILE)
                .search_paths(load_paths(&data_dir, cwd))
                .no_env()
                .strict(false)
                .handle(&action)
                .map_err(|e| anyhow!("{}", e))?;
            print!("{result}");
            Ok(())
        }
        Some(ConfigCommands::Get { key }) => {
            let action = ConfigAction::Get {
                key: key.clone(),
                scope: None,
            };
            let result = Clapfig::builder::<ShipdexConfig>()
                .app_name("shipdex")
                .file_name(init::CONFIG_FILE)
                .search_paths(load_paths(&data_dir, cwd))
                .no_env()
                .strict(false)
                .handle(&action)
                .map_err(|e| anyhow!("{}", e))?;
            println!("{result}");
            Ok(())
        }
        Some(ConfigCommands::Set { key, value, local }) => {
            // The first search path is the one `set` writes to
            let target: PathBuf = if *local {
                cwd.join(init::LOCAL_DIR)
            } else {
                data_dir
            };
            std::fs::create_dir_all(&target)
                .with_context(|| format!("Could not create {}", target.display()))?;
            let action = ConfigAction::Set {
                key: key.clone(),
                value: value.clone(),
                scope: None,
            };
            let result = Clapfig::builder::<ShipdexConfig>()
                .app_name("shipdex")
                .file_name(init::CONFIG_FILE)
                .search_paths(vec![SearchPath::Path(target)])
                .no_env()
                .strict(false)
                .handle(&action)
                .map_err(|e| anyhow!("{}", e))?;
            println!("{result}");
            Ok(())
        }
    }
}

fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => format!("\"{}\"", s),
        toml::Value::Array(a) => toml::to_string(a).unwrap_or_else(|_| format!("{a:?}")),
        other => other.to_string(),
    }
}

fn print_result(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
    if !result.listed_ships.is_empty() && result.table.is_none() {
        print!("{}", render_ship_list(&result.listed_ships));
    }
    if let Some(table) = &result.table {
        print!("{}", render_comparison(table));
    }
    if let Some(links) = &result.links {
        print!("{}", render_links(links));
    }
    if let Some(facets) = &result.facets {
        print!("{}", render_facets(facets));
    }
}

fn print_detail(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
    for entry in &result.listed_ships {
        print!("{}", render_ship_detail(entry, result.links.as_ref()));
    }
}
