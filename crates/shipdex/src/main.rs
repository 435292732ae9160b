//! # Shipdex CLI Architecture
//!
//! The `shipdex` binary is a thin terminal client for the `shipdexapp` library.
//! This file only invokes `cli::run()` and handles process termination; the CLI
//! itself lives in `src/cli/`.
//!
//! ## Workspace Structure
//!
//! - `crates/shipdexapp/`: the catalog library, UI agnostic
//! - `crates/shipdex/`: this CLI, depending on `shipdexapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shipdex/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with colored (render.rs)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/shipdexapp/src/api.rs)                   │
//! │  - Owns catalog, favorites and the key-value store          │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns argument
//! parsing, the tracing subscriber, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - Library behavior is tested in `shipdexapp`.
//! - `render.rs` has unit tests over canned `CmdResult` values.
//! - `tests/cli_e2e.rs` drives the built binary with `assert_cmd`, isolated
//!   through `SHIPDEX_GLOBAL_DATA`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
