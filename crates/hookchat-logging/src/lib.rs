// Logging module - webhook request/response debugging
pub mod request_logger;

use std::path::{Path, PathBuf};
use anyhow::{Result, Context};

// Re-export request logging functions
pub use request_logger::{
    log_request,
    log_request_to_file,
    log_response,
    log_response_to_file,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Default base hookchat directory (~/.hookchat)
/// Holds the session storage file, the config file and request logs
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    Ok(PathBuf::from(home_dir).join(".hookchat"))
}

/// Get or create the logs directory below a data directory
pub fn get_logs_dir(data_dir: &Path) -> Result<PathBuf> {
    let logs_dir = data_dir.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("Failed to create logs directory: {}", logs_dir.display()))?;
    }

    Ok(logs_dir)
}
