//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};

/// Counts the X and O marks in a row of squares.
///
/// Squares holding other characters count for neither player.
pub fn tally(squares: &[Square]) -> (usize, usize) {
    squares
        .iter()
        .fold((0, 0), |(x, o), square| match square {
            Square::Occupied(Player::X) => (x + 1, o),
            Square::Occupied(Player::O) => (x, o + 1),
            Square::Empty | Square::Other(_) => (x, o),
        })
}

/// Checks if the board is full (every square holds a player mark).
///
/// Every square holds a mark.
pub fn is_full(board: &Board) -> bool {
    let (x, o) = board.tally();
    x + o == board.squares().len()
}

/// A draw is a full board nobody has won.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && board.winner().is_none()
}
