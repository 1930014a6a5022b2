//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for classifying a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the board type stays a plain value.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, tally};
pub use win::{LINES, check_winner};
