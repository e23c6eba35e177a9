use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for hookchat
#[derive(Parser, Debug)]
#[command(name = "hookchat")]
#[command(about = "Hookchat - chat with a webhook-backed bot from your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Webhook receiving `{ sessionId, message }` POSTs
    #[arg(long, value_name = "URL", env = "HOOKCHAT_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Directory holding the session storage, config file and request logs
    /// (default: ~/.hookchat)
    #[arg(long, value_name = "PATH", env = "HOOKCHAT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// TOML config file (default: <data-dir>/config.toml when present)
    #[arg(long, value_name = "PATH", env = "HOOKCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose debug output (shows HTTP requests, responses, headers)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Write every webhook request and response to <data-dir>/logs
    #[arg(long)]
    pub log_requests: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Inspect or reset the persisted session id
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommands {
    /// Print the session id, creating one if none is stored yet
    Show,
    /// Forget the stored session id; the next start generates a new one
    Reset,
}
