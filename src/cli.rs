//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};

/// Strictly Minimax - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exhaustive minimax tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP move server (plays O)
    Http {
        /// Port to bind to (overrides MINIMAX_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides MINIMAX_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Answer with score and ranked moves (same as MINIMAX_DEBUG=1)
        #[arg(long)]
        debug: bool,
    },

    /// Evaluate a board and print its score, ranked moves and best move
    Play {
        /// Nine characters, row-major: 'x', 'o' or space
        board: String,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}
