//! hookchat application layer: command line, configuration, the
//! interactive session and the terminal renderer.

pub mod app;
pub mod cli;
pub mod config;
pub mod render;

pub use cli::{Cli, Commands, SessionCommands};
pub use config::{setup_from_cli, AppConfig};
pub use render::TerminalRenderer;
