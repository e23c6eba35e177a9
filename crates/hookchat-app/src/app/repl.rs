use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

use hookchat_api::WebhookClient;
use hookchat_chat::{bootstrap_session, ChatSession, FileSessionStore};

use crate::config::AppConfig;
use crate::render::{input_hint, TerminalRenderer};

/// What a line typed at the prompt asks for
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Quit,
    Dismiss,
    Help,
    Send(&'a str),
}

fn parse_line(line: &str) -> ReplCommand<'_> {
    match line.trim() {
        "/quit" | "/exit" | "quit" | "exit" => ReplCommand::Quit,
        "/dismiss" => ReplCommand::Dismiss,
        "/help" => ReplCommand::Help,
        _ => ReplCommand::Send(line),
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  {}  clear the error banner", "/dismiss".bright_white());
    println!("  {}     show this help", "/help".bright_white());
    println!("  {}     leave (also: exit, Ctrl-D)", "/quit".bright_white());
    println!("{}", "Anything else is sent to the bot.".bright_black());
}

/// Run the interactive chat session
pub async fn run_repl_mode(config: &AppConfig) -> Result<()> {
    let mut store = FileSessionStore::new(&config.data_dir)?;
    let session_id = bootstrap_session(&mut store)?;

    let client = WebhookClient::new(config.webhook_url.clone())
        .with_logging(config.request_logging()?);
    let mut session = ChatSession::new(session_id, Arc::new(client));
    let mut renderer = TerminalRenderer::default();

    renderer.paint(&session.view())?;
    println!("{}", format!("Webhook: {}", config.webhook_url).bright_black());
    println!("{}", format!("Session: {}", session.session_id()).bright_black());
    println!("{}", "Type '/help' for commands, '/quit' to exit\n".bright_black());

    let mut rl = DefaultEditor::new()?;
    let prompt = format!("{} ", "You:".bright_green().bold());

    loop {
        if let Some(hint) = input_hint(&session.view()) {
            println!("{}", hint.bright_black().italic());
        }
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        match parse_line(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                print_help();
                continue;
            }
            ReplCommand::Dismiss => {
                session.dismiss_error();
                renderer.paint(&session.view())?;
                continue;
            }
            ReplCommand::Send(text) => {
                if !text.trim().is_empty() {
                    rl.add_history_entry(text.trim())?;
                }
                session.set_input(text);
            }
        }

        if !session.view().submit_enabled {
            continue;
        }

        let Some(pending) = session.begin_send() else {
            continue;
        };
        renderer.paint(&session.view())?;

        // The prompt stays closed until the reply (or failure) arrives
        let request = session.dispatch(pending);
        tokio::select! {
            result = request => session.finish_send(result),
            _ = tokio::signal::ctrl_c() => {
                println!("\n{}", "^C - leaving, pending reply abandoned".bright_yellow());
                return Ok(());
            }
        }
        renderer.paint(&session.view())?;
    }

    println!("{}", "Goodbye!".bright_cyan());
    Ok(())
}
