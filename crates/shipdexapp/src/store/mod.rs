//! # Storage Layer
//!
//! shipdex persists very little: the favorites array, plus a session-scoped
//! flag or two. Both live behind the [`KvStore`] trait, a string-keyed,
//! string-valued store in the shape of browser local storage.
//!
//! ## Implementations
//!
//! - [`fs::FileKv`]: Production. One JSON object file (`kv.json`) in the data
//!   directory, rewritten atomically (temp file + rename) on every write.
//! - [`memory::MemoryKv`]: For tests and for session-only state. Can simulate
//!   write failures.
//!
//! ## Keys
//!
//! | Key | Scope | Value |
//! |-----|-------|-------|
//! | `startrekdex_favorites` | persisted | JSON array of ship ids |
//! | `lcars_fullscreen_prompt` | session | `"true"` once the prompt was dismissed |
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── kv.json          # persisted key-value entries
//! └── shipdex.toml     # optional configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

pub const FAVORITES_KEY: &str = "startrekdex_favorites";
pub const FULLSCREEN_PROMPT_KEY: &str = "lcars_fullscreen_prompt";

/// A string-keyed store. All methods take `&self`; implementations use
/// interior mutability where needed since shipdex is single-threaded.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}
