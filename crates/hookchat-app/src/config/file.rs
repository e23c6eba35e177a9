use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub webhook_url: Option<String>,
    pub verbose: bool,
    pub log_requests: bool,
}

impl FileConfig {
    /// Load config from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
