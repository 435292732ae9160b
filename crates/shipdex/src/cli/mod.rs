//! # CLI Behavior
//!
//! This is **one possible UI client** for shipdex, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution
//!
//! Running `shipdex` with no arguments lists the catalog with the configured
//! default sort. Browsing is most of the usage, so it takes no typing.
//!
//! ## One Session Per Invocation
//!
//! Each run builds a fresh catalog (bundled ships plus configured
//! `extra_catalogs`). Favorites persist across runs; `import` merges into the
//! running session only and reports what it would add.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `render`: output formatting (tables, colors, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
