use super::{KvStore, FULLSCREEN_PROMPT_KEY};
use crate::error::{Result, ShipdexError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key-value store.
///
/// Uses `RefCell` for interior mutability since shipdex is single-threaded.
/// Backs tests and anything that should only live for the current session.
#[derive(Default)]
pub struct MemoryKv {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShipdexError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Session-scoped flags. Nothing here survives the process.
#[derive(Default)]
pub struct SessionFlags {
    store: MemoryKv,
}

impl SessionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fullscreen_prompt_shown(&self) -> bool {
        matches!(
            self.store.get(FULLSCREEN_PROMPT_KEY),
            Ok(Some(value)) if value == "true"
        )
    }

    pub fn mark_fullscreen_prompt_shown(&self) -> Result<()> {
        self.store.set(FULLSCREEN_PROMPT_KEY, "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let kv = MemoryKv::new();
        assert_eq!(kv.get("k").unwrap(), None);
        kv.set("k", "v").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v"));
        kv.remove("k").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);
    }

    #[test]
    fn simulated_write_error_blocks_writes_only() {
        let kv = MemoryKv::new();
        kv.set("k", "v").unwrap();
        kv.set_simulate_write_error(true);
        assert!(matches!(kv.set("k", "w"), Err(ShipdexError::Store(_))));
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn fullscreen_prompt_flag_starts_unset() {
        let flags = SessionFlags::new();
        assert!(!flags.fullscreen_prompt_shown());
        flags.mark_fullscreen_prompt_shown().unwrap();
        assert!(flags.fullscreen_prompt_shown());
    }
}
