use clap::{Parser, Subcommand, ValueEnum};
use shipdexapp::compare::Category;
use shipdexapp::query::SortField;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shipdex",
    bin_name = "shipdex",
    version,
    about = "Browse, filter and compare a catalog of starships",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Faction {
    Federation,
    Klingon,
    Romulan,
    /// Neutral defaults, affiliation from --affiliation
    Other,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List ships (default)
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Match against name, class and registry
        #[arg(short, long)]
        search: Option<String>,

        /// Only ships of this affiliation
        #[arg(short, long)]
        affiliation: Option<String>,

        /// Only ships of this era
        #[arg(short, long)]
        era: Option<String>,

        /// Only favorite ships
        #[arg(short, long)]
        favorites: bool,

        /// Sort field (name, registry, class, affiliation, era, launched, status, length, crew, speed)
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show one ship in detail
    #[command(display_order = 2)]
    Show {
        /// Ship id (e.g. ncc-1701-d)
        id: String,
    },

    /// Print reference search links for a ship
    #[command(display_order = 3)]
    Links {
        /// Ship id
        id: String,
    },

    /// Toggle a ship as favorite
    #[command(display_order = 4)]
    Fav {
        /// Ship id
        id: String,
    },

    /// List favorite ships
    #[command(display_order = 5)]
    Favorites,

    /// Compare ships side by side
    #[command(display_order = 6)]
    Compare {
        /// Ship ids, at least two
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Spec category: general, technical or physical
        #[arg(short, long, default_value = "general")]
        category: Category,
    },

    /// Validate and merge a JSON catalog fragment
    #[command(display_order = 10)]
    Import {
        /// Path to a JSON array of ships
        file: PathBuf,
    },

    /// Write the catalog to starfleet_database_<date>.json
    #[command(display_order = 11)]
    Export {
        /// Output directory (defaults to export_dir, then the working directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print a new ship record, ready to edit and import
    #[command(display_order = 12)]
    Template {
        #[arg(value_enum)]
        faction: Faction,
        id: String,
        name: String,
        class: String,
        era: String,

        /// Registry number
        #[arg(long)]
        registry: Option<String>,

        /// Affiliation for the `other` faction
        #[arg(long, default_value = "Independent")]
        affiliation: String,
    },

    /// List distinct affiliations, eras and classes
    #[command(display_order = 20)]
    Filters,

    /// Run a text command, e.g. "computer, sort by era"
    #[command(display_order = 21)]
    Say {
        #[arg(required = true, num_args = 1..)]
        transcript: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print one resolved value
    Get { key: String },

    /// Persist a value
    Set {
        key: String,
        value: String,

        /// Write to ./.shipdex/shipdex.toml instead of the data directory
        #[arg(long)]
        local: bool,
    },

    /// Generate a commented config file
    Gen {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
