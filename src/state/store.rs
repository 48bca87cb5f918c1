//! Filesystem-based key-value persistence.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Minimal string key-value store.
///
/// The wheel only ever needs "read the whole value at startup" and
/// "overwrite the whole value on change", so that is all this exposes.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Manages filesystem-based persistence for namewheel.
///
/// Directory structure:
/// ```text
/// $XDG_STATE_HOME/namewheel/      # ~/.local/state/namewheel/
/// ├── wheel_items.json            # Ordered option list
/// ├── settings.json               # Language, theme, rotation
/// └── namewheel.log
/// ```
pub struct StateStore {
    base_path: PathBuf,
}

impl StateStore {
    /// Create a StateStore rooted at `base_path`, usually
    /// [`default_state_dir`]. Creates the directory if it doesn't exist.
    pub fn with_path(base_path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_path).context("Failed to create state directory")?;
        Ok(Self { base_path })
    }

    /// Root directory of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path to the file backing `key`.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

impl KeyValueStore for StateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    /// Uses atomic write (temp file + rename) for crash safety.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        write_atomic(&self.key_path(key), value.as_bytes())
    }
}

/// In-memory store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Write content atomically using temp file + rename.
///
/// This ensures the target file is never partially written.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).context("Failed to write temp file")?;
    fs::rename(&tmp, path).context("Failed to rename temp file")?;
    Ok(())
}

/// Get the namewheel state directory.
///
/// Checks XDG_STATE_HOME first, falls back to ~/.local/state.
pub fn default_state_dir() -> Result<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(state_home).join("namewheel"));
    }

    if let Some(home_dir) = home::home_dir() {
        return Ok(home_dir.join(".local/state/namewheel"));
    }

    anyhow::bail!("Could not determine state directory")
}
