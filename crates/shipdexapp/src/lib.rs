//! # Shipdex Architecture
//!
//! Shipdex is a **UI-agnostic starship catalog library**. It searches, filters,
//! sorts, favorites and compares ship records; a terminal client, a web page or a
//! test harness are all just callers.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `shipdex` binary, or anything else)            │
//! │  - Parses input, renders output, owns an AppState           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns catalog, favorites and the key-value store          │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user operation                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engines (catalog, query, selection, compare, state)        │
//! │  - Pure functions over borrowed data, new values out        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KvStore trait: FileKv (production), MemoryKv (testing)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never exits
//! the process. Diagnostics go through `tracing`; installing a subscriber is the
//! client's call.
//!
//! ## Single Owner, New Values
//!
//! Shared mutable state (catalog, favorites, session state) has exactly one
//! owner. Engines borrow it and hand back new values, so there is nothing to
//! lock and every engine can be tested without a UI.
//!
//! ## Testing Strategy
//!
//! - **Engines and commands**: unit tests next to the code, against the bundled
//!   catalog and `MemoryKv`.
//! - **API**: integration tests in `tests/`, including property tests for the
//!   filter, sort, favorites and import/export laws.
//! - **CLI**: end-to-end tests in the `shipdex` crate.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod favorites;
pub mod init;
pub mod links;
pub mod model;
pub mod query;
pub mod selection;
pub mod state;
pub mod store;
pub mod template;
pub mod voice;

pub use api::ShipdexApi;
pub use catalog::{Catalog, MergeReport};
pub use error::{Result, ShipdexError};
pub use model::{FieldPath, FieldValue, Ship, StatValue, Stats};
pub use selection::IdSet;
pub use state::{AppState, ViewMode};
