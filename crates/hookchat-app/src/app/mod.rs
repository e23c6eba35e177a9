// Application modes
pub mod repl;
pub mod session;

pub use repl::run_repl_mode;
pub use session::run_session_command;
