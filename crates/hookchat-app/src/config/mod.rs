use anyhow::{bail, Result};
use std::path::PathBuf;

use hookchat_api::RequestLogging;
use hookchat_logging::{default_data_dir, get_logs_dir};
use hookchat_types::DEFAULT_WEBHOOK_URL;

use crate::cli::Cli;

pub mod file;
pub use file::FileConfig;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration derived from CLI arguments, environment and
/// the optional config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub webhook_url: String,
    pub data_dir: PathBuf,
    pub verbose: bool,
    pub log_requests: bool,
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    AppConfig::resolve(cli, data_dir)
}

impl AppConfig {
    /// Precedence: CLI flags > HOOKCHAT_* env (clap) > config file > defaults
    pub fn resolve(cli: &Cli, data_dir: PathBuf) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) if !path.exists() => {
                bail!("Config file not found: {}", path.display());
            }
            Some(path) => FileConfig::load_from_file(path)?,
            None => {
                let default_path = data_dir.join(CONFIG_FILE_NAME);
                if default_path.exists() {
                    FileConfig::load_from_file(&default_path)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let webhook_url = cli.webhook_url.clone()
            .or(file_config.webhook_url)
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        Ok(Self {
            webhook_url,
            data_dir,
            verbose: cli.verbose || file_config.verbose,
            log_requests: cli.log_requests || file_config.log_requests,
        })
    }

    /// Request logging options, creating the logs directory if needed
    pub fn request_logging(&self) -> Result<RequestLogging> {
        let logs_dir = if self.log_requests {
            Some(get_logs_dir(&self.data_dir)?)
        } else {
            None
        };

        Ok(RequestLogging {
            verbose: self.verbose,
            logs_dir,
        })
    }
}
