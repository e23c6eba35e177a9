use anyhow::Result;
use clap::{CommandFactory, Parser};

use hookchat::app::{run_repl_mode, run_session_command};
use hookchat::{setup_from_cli, Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        clap_complete::generate(shell, &mut Cli::command(), "hookchat", &mut std::io::stdout());
        return Ok(());
    }

    let app_config = setup_from_cli(&cli)?;
    log::debug!("Resolved configuration: {:?}", app_config);

    if let Some(Commands::Session { command }) = &cli.command {
        println!("{}", run_session_command(command, &app_config)?);
        return Ok(());
    }

    run_repl_mode(&app_config).await
}
