use anyhow::Result;
use colored::Colorize;

use hookchat_chat::{bootstrap_session, FileSessionStore, SessionStore};
use hookchat_types::SESSION_STORAGE_KEY;

use crate::cli::SessionCommands;
use crate::config::AppConfig;

/// Execute a `session` subcommand, returning the text to print
pub fn run_session_command(command: &SessionCommands, config: &AppConfig) -> Result<String> {
    let mut store = FileSessionStore::new(&config.data_dir)?;

    match command {
        SessionCommands::Show => {
            let session_id = bootstrap_session(&mut store)?;
            Ok(session_id.to_string())
        }
        SessionCommands::Reset => {
            let previous = store.get(SESSION_STORAGE_KEY)?;
            store.remove(SESSION_STORAGE_KEY)?;
            Ok(match previous {
                Some(id) => format!("{} {}", "🗑️  Forgot session".yellow(), id),
                None => "No session id stored".bright_black().to_string(),
            })
        }
    }
}
