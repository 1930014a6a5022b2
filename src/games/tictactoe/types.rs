//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use derive_more::{Display, Error};
use serde::{Serialize, Serializer};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player X (goes first).
    #[display("x")]
    X,
    /// Player O (goes second).
    #[display("o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the character this player is encoded as.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
    /// Any other character found in a board spec.
    ///
    /// Kept verbatim so the board re-encodes losslessly. It is not a
    /// player mark and not a legal move target.
    Other(char),
}

impl Square {
    /// Decodes a single (already lowercased) board character.
    pub fn from_char(c: char) -> Self {
        match c {
            ' ' => Square::Empty,
            'x' => Square::Occupied(Player::X),
            'o' => Square::Occupied(Player::O),
            other => Square::Other(other),
        }
    }

    /// Encodes this square back to its board character.
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
            Square::Other(c) => c,
        }
    }
}

/// Error returned when a board spec cannot be turned into a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidBoardSpec {
    /// No board spec was supplied.
    #[display("invalid board spec: no board given")]
    Missing,
    /// The spec does not have exactly nine characters.
    #[display("board spec should be {expected} characters long, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length of the rejected spec.
        actual: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Boards are immutable: moves produce new boards. Piece counts are
/// tallied once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
    x_count: usize,
    o_count: usize,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::from_squares([Square::Empty; BOARD_SIZE])
    }

    fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        let (x_count, o_count) = rules::tally(&squares);
        Self {
            squares,
            x_count,
            o_count,
        }
    }

    /// Parses a board from its nine-character spec.
    ///
    /// Spaces are empty squares, `x` and `o` (either case) are marks.
    /// Other characters are accepted as-is and never count as a mark.
    /// Lowercasing is ASCII-only: full Unicode lowercasing can expand one
    /// character into several (`'İ'` becomes `"i\u{307}"`) and would
    /// change the cell count, so non-ASCII characters keep their case.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSpec::WrongLength`] unless the spec is
    /// exactly nine characters.
    #[instrument]
    pub fn parse(spec: &str) -> Result<Self, InvalidBoardSpec> {
        let actual = spec.chars().count();
        if actual != BOARD_SIZE {
            return Err(InvalidBoardSpec::WrongLength {
                expected: BOARD_SIZE,
                actual,
            });
        }

        let mut squares = [Square::Empty; BOARD_SIZE];
        for (square, c) in squares.iter_mut().zip(spec.chars()) {
            *square = Square::from_char(c.to_ascii_lowercase());
        }
        Ok(Self::from_squares(squares))
    }

    /// Parses an optional board spec, as received from a query string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardSpec::Missing`] for `None`, otherwise the
    /// same errors as [`Board::parse`].
    pub fn from_spec(spec: Option<&str>) -> Result<Self, InvalidBoardSpec> {
        spec.ok_or(InvalidBoardSpec::Missing).and_then(Self::parse)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Returns `(x_count, o_count)`.
    pub fn tally(&self) -> (usize, usize) {
        (self.x_count, self.o_count)
    }

    /// True when neither player has a mark on the board.
    pub fn is_empty(&self) -> bool {
        self.x_count == 0 && self.o_count == 0
    }

    /// True when all nine squares hold a player mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the winner, if any triple is owned by one player.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Returns the player to move, or `None` on a full board.
    ///
    /// O is to move only when X is exactly one mark ahead; every other
    /// tally, reachable or not, means X is to move.
    pub fn next_player(&self) -> Option<Player> {
        if self.is_full() {
            None
        } else if self.x_count == self.o_count + 1 {
            Some(Player::O)
        } else {
            Some(Player::X)
        }
    }

    /// True if the game is still open and it is `player`'s move.
    pub fn is_turn_of(&self, player: Player) -> bool {
        !self.is_full() && self.winner().is_none() && self.next_player() == Some(player)
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    ///
    /// Returns `None` if the square is not empty.
    pub fn place(&self, pos: Position, player: Player) -> Option<Self> {
        if !self.is_cell_empty(pos) {
            return None;
        }
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Some(Self::from_squares(squares))
    }

    /// Boards reachable by one move of the next player, paired with the
    /// square that was played, in increasing position order.
    pub fn successors(&self) -> Vec<(Position, Board)> {
        let Some(player) = self.next_player() else {
            return Vec::new();
        };
        Position::valid_moves(self)
            .into_iter()
            .filter_map(|pos| self.place(pos, player).map(|child| (pos, child)))
            .collect()
    }

    /// Boards reachable by one move of the next player.
    pub fn children(&self) -> Vec<Board> {
        self.successors()
            .into_iter()
            .map(|(_, child)| child)
            .collect()
    }

    /// Returns the raw nine-character encoding of the board.
    pub fn encode(&self) -> String {
        self.squares.iter().map(|s| s.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = InvalidBoardSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Board {
    type Error = InvalidBoardSpec;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.squares[row * 3 + col].to_char())?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}
