//! Command-line interface for the tic-tac-toe agent.

use clap::{Parser, Subcommand};
use tictactoe_agent::FirstPlayer;

use crate::config::SideArg;

/// Tic-tac-toe against a heuristic agent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a heuristic agent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Who moves first (human or agent)
        #[arg(long)]
        first: Option<FirstPlayer>,

        /// Agent lookahead in plies
        #[arg(short, long)]
        depth: Option<u32>,
    },

    /// Print the agent's choice for a given position
    Suggest {
        /// Nine cells in row-major order, e.g. "X.O|.X.|..O"
        #[arg(short, long)]
        board: String,

        /// Side to move (x or o)
        #[arg(short, long, default_value = "o")]
        mark: SideArg,

        /// Agent lookahead in plies
        #[arg(short, long, default_value = "1")]
        depth: u32,

        /// Print the choice as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the agent play both sides
    Selfplay {
        /// Lookahead for X
        #[arg(long, default_value = "1")]
        depth_x: u32,

        /// Lookahead for O
        #[arg(long, default_value = "1")]
        depth_o: u32,

        /// Which side opens (human means X, agent means O)
        #[arg(long, default_value = "human")]
        first: FirstPlayer,
    },
}
