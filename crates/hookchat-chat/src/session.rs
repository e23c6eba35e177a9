use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use hookchat_types::{SessionId, SESSION_STORAGE_KEY};

/// Device-local key-value storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Read the persisted session id, generating and persisting one if absent.
///
/// A stored value is used verbatim, even if it is not a UUID.
pub fn bootstrap_session(store: &mut dyn SessionStore) -> Result<SessionId> {
    if let Some(stored) = store.get(SESSION_STORAGE_KEY)? {
        log::debug!("Reusing stored session id {}", stored);
        return Ok(SessionId::new(stored));
    }

    let session_id = SessionId::generate();
    store
        .set(SESSION_STORAGE_KEY, session_id.as_str())
        .context("Failed to persist session id")?;
    log::info!("Generated new session id {}", session_id);

    Ok(session_id)
}

/// Key-value store kept in a single JSON file
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub const FILE_NAME: &'static str = "storage.json";

    /// Store living in `<data_dir>/storage.json`; `~` is expanded
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = expand_tilde(data_dir.as_ref())?;
        Ok(Self {
            path: data_dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage from {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse storage file {}", self.path.display()))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(entries).context("Failed to serialize storage")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write storage to {}", self.path.display()))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// In-process store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if let Some(rest) = path_str.strip_prefix("~/") {
        let home = std::env::var("HOME")
            .context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(rest))
    } else if path_str == "~" {
        let home = std::env::var("HOME")
            .context("HOME environment variable not set")?;
        Ok(PathBuf::from(home))
    } else {
        Ok(path.to_path_buf())
    }
}
