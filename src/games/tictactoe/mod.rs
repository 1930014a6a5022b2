//! Tic-tac-toe board model and minimax evaluator.

mod minimax;
mod position;
pub mod rules;
mod types;

pub use minimax::{Evaluation, RankedChild, Score, score};
pub use position::Position;
pub use types::{BOARD_SIZE, Board, InvalidBoardSpec, Player, Square};
