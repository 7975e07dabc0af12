use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use client_core::{HttpGameService, SessionController, SessionError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

mod commands;
mod config;
mod terminal;

use commands::{parse_command, InputCommand, HELP_TEXT};
use config::{load_settings, normalize_server_url, Settings};
use terminal::TerminalPresenter;

#[derive(Parser, Debug)]
#[command(name = "wordchain", about = "Terminal client for the word chain game")]
struct Args {
    /// Base URL of the game service.
    #[arg(long)]
    server_url: Option<String>,
    /// TOML settings file; defaults to ./wordchain.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    message_ttl_ms: Option<u64>,
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn apply(self, settings: &mut Settings) {
        if let Some(v) = self.server_url {
            settings.server_url = v;
        }
        if let Some(v) = self.message_ttl_ms {
            settings.message_ttl_ms = v;
        }
        if let Some(v) = self.log_filter {
            settings.log_filter = v;
        }
    }
}

fn log_outcome<T>(action: &str, result: Result<T, SessionError>) {
    // Failures have already been shown to the player by the controller.
    if let Err(err) = result {
        debug!(action, error = %err, "command did not complete");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    args.apply(&mut settings);

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let server_url = normalize_server_url(&settings.server_url)?;
    info!(%server_url, "connecting to game service");
    let service = Arc::new(HttpGameService::new(&server_url)?);
    let presenter = Arc::new(TerminalPresenter::stdout());
    let mut controller = SessionController::with_message_ttl(
        service,
        presenter.clone(),
        Duration::from_millis(settings.message_ttl_ms),
    );

    presenter.line(HELP_TEXT);
    log_outcome("start", controller.start_session().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            InputCommand::Submit(word) => {
                log_outcome("submit", controller.submit_word(&word).await);
            }
            InputCommand::ToggleHints => {
                log_outcome("hints", controller.toggle_hints().await);
            }
            InputCommand::UseHint(index) => {
                let hint = controller
                    .hints()
                    .and_then(|hints| hints.get(index))
                    .map(str::to_string);
                match hint {
                    Some(hint) => log_outcome("use_hint", controller.submit_hint(&hint).await),
                    None => presenter.line(&format!(
                        "No hint #{} is displayed; type /hint first.",
                        index + 1
                    )),
                }
            }
            InputCommand::Restart => {
                log_outcome("restart", controller.reset_session().await);
            }
            InputCommand::Help => presenter.line(HELP_TEXT),
            InputCommand::Quit => break,
            InputCommand::Unknown(command) => {
                presenter.line(&format!("Unknown command '{command}'; type /help."));
            }
        }
    }

    info!(score = controller.session().score(), "leaving game");
    Ok(())
}
