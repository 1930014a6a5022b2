//! Strictly Minimax library - perfect-play tic-tac-toe
//!
//! Boards are parsed from a nine-character spec (row-major, `x`, `o` or
//! space) and scored by exhaustive minimax from O's point of view.
//!
//! # Architecture
//!
//! - **Board**: immutable position with tally, win and turn queries
//! - **Minimax**: full game-tree scoring and ranked moves
//! - **Server**: HTTP endpoint that plays O's best move
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Player, Score};
//!
//! let board: Board = "xx oo    ".parse()?;
//! let evaluation = board.evaluate();
//! assert_eq!(evaluation.score(), Score::XWins);
//!
//! let next = board.best_move().expect("board is open");
//! assert_eq!(next.winner(), Some(Player::X));
//! # Ok::<(), strictly_minimax::InvalidBoardSpec>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;

// Public modules
pub mod config;
pub mod report;
pub mod server;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Server types
pub use server::{MoveQuery, ServerError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, Evaluation, InvalidBoardSpec, Player, Position, RankedChild, Score, Square,
    rules, score,
};
