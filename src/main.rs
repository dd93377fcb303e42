//! A terminal time-tracking helper.
//!
//! `jired auth login` walks the user through an interactive list to pick an
//! integration and connect it; `jired log <message>` records work against a
//! chosen clock.

mod app;
mod commands;
mod config;
mod error;
mod integrations;
mod logging;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::TerminalPrompt;
use crate::config::AppConfig;
use crate::integrations::Registry;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "Track time against your boards and clocks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file with key bindings (defaults to `$XDG_CONFIG_HOME/jired/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append tracing output to this file.  Nothing is logged without it.
    #[arg(long, global = true, env = "JIRED_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Connect or disconnect an integration.
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Record a work entry with a clock integration.
    Log {
        /// What you worked on.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Print the config file path.
    Config {
        /// Write the default key bindings first.
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand, Debug)]
enum AuthAction {
    /// Choose an integration and authenticate with it.
    Login,
    /// Choose an integration and forget its credentials.
    Logout,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let registry = Registry::builtin();

    let finished = match cli.command {
        Commands::Config { init } => {
            return commands::config(&config_path, init);
        }
        Commands::Auth { action } => {
            let mut prompt = TerminalPrompt::new(AppConfig::load(&config_path)?);
            match action {
                AuthAction::Login => commands::login(&mut prompt, &registry).await?.is_some(),
                AuthAction::Logout => commands::logout(&mut prompt, &registry).await?.is_some(),
            }
        }
        Commands::Log { message } => {
            let mut prompt = TerminalPrompt::new(AppConfig::load(&config_path)?);
            commands::log(&mut prompt, &registry, &message.join(" "))
                .await?
                .is_some()
        }
    };

    if !finished {
        eprintln!("Selection cancelled.");
    }
    Ok(())
}
