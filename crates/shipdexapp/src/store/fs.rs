use super::KvStore;
use crate::error::{Result, ShipdexError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const KV_FILE: &str = "kv.json";
const CORRUPT_SUFFIX: &str = "corrupt";

/// File-backed key-value store.
///
/// Every operation reads `kv.json` fresh, so two handles on the same directory
/// see each other's writes. A missing file is an empty store. So is a file
/// that no longer parses: it is moved aside to `kv.json.corrupt` so later
/// writes start clean.
pub struct FileKv {
    root: PathBuf,
}

impl FileKv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_path(&self) -> PathBuf {
        self.root.join(KV_FILE)
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(ShipdexError::Io)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let aside = path.with_extension(format!("json.{}", CORRUPT_SUFFIX));
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "store file is corrupt, starting from an empty store"
                );
                if let Err(e) = fs::rename(&path, &aside) {
                    tracing::warn!(error = %e, "could not move the corrupt store file aside");
                }
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShipdexError::Io)?;
        }
        let content =
            serde_json::to_string_pretty(entries).map_err(ShipdexError::Serialization)?;

        let tmp_file = self
            .root
            .join(format!(".kv-{}.tmp", std::process::id()));
        fs::write(&tmp_file, content).map_err(ShipdexError::Io)?;
        fs::rename(&tmp_file, self.file_path()).map_err(ShipdexError::Io)?;
        Ok(())
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
