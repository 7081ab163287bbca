//! Tic-tac-toe agent - terminal front end
//!
//! Play against the heuristic agent, ask it for a move, or watch it play itself.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "Parsed arguments");

    let stdout = std::io::stdout();
    match cli.command {
        Command::Play {
            config,
            first,
            depth,
        } => {
            let config = GameConfig::load(config.as_deref())?.with_overrides(first, depth);
            let stdin = std::io::stdin();
            play::run_play(&config, stdin.lock(), stdout.lock())
        }
        Command::Suggest {
            board,
            mark,
            depth,
            json,
        } => play::run_suggest(&board, mark.0, depth, json, stdout.lock()),
        Command::Selfplay {
            depth_x,
            depth_o,
            first,
        } => play::run_selfplay(depth_x, depth_o, first, stdout.lock()).map(|_| ()),
    }
}

/// Logs to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}
