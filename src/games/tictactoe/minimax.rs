//! Exhaustive minimax search.
//!
//! Scores are always from O's point of view: O maximizes, X minimizes.
//! The tree is at most nine plies deep, so the search enumerates it in
//! full with no pruning and no transposition table.

use super::{Board, Player, Position, rules};
use serde::Serialize;
use std::cmp::Reverse;
use tracing::{debug, instrument};

/// Game-theoretic value of a board under perfect play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Score {
    /// X wins.
    #[display("-1")]
    XWins,
    /// Neither side can force a win.
    #[display("0")]
    Draw,
    /// O wins.
    #[display("1")]
    OWins,
}

impl Score {
    /// Integer value: -1, 0 or 1.
    pub fn value(self) -> i8 {
        match self {
            Score::XWins => -1,
            Score::Draw => 0,
            Score::OWins => 1,
        }
    }

    /// Score of a board that has been won.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Score::XWins,
            Player::O => Score::OWins,
        }
    }
}

impl Serialize for Score {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.value())
    }
}

/// Scores a board with plain recursive minimax.
pub fn score(board: &Board) -> Score {
    if let Some(terminal) = terminal_score(board) {
        return terminal;
    }

    let scores = board.children().into_iter().map(|child| score(&child));
    let best = match board.next_player() {
        Some(Player::O) => scores.max(),
        _ => scores.min(),
    };
    // Only boards padded with foreign characters can be open yet move-less.
    best.unwrap_or(Score::Draw)
}

fn terminal_score(board: &Board) -> Option<Score> {
    if let Some(player) = board.winner() {
        return Some(Score::won_by(player));
    }
    rules::is_draw(board).then_some(Score::Draw)
}

/// One move out of an evaluated board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct RankedChild {
    /// Square the mover played.
    pub position: Position,
    /// Board after the move.
    pub board: Board,
    /// Minimax score of `board`.
    pub score: Score,
}

/// A board together with its minimax score and ranked moves.
///
/// Children are ordered best-first for the player to move: descending
/// score when O is to move, ascending when X is. Among equal scores an
/// immediately winning move ranks first, then cell order.
/// Terminal boards have no children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    board: Board,
    score: Score,
    children: Vec<RankedChild>,
}

impl Evaluation {
    /// The board that was evaluated.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Minimax score of the board.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Moves, best first for the player to move.
    pub fn children(&self) -> &[RankedChild] {
        &self.children
    }

    /// The best move, or `None` if the board is terminal.
    pub fn best(&self) -> Option<&RankedChild> {
        self.children.first()
    }

    /// Board after the best move.
    pub fn into_best_board(self) -> Option<Board> {
        self.children.into_iter().next().map(|child| child.board)
    }
}

impl Board {
    /// Scores this board and ranks its moves.
    ///
    /// Evaluation is pure: the board is not modified and evaluating it
    /// again produces an equal [`Evaluation`].
    #[instrument(skip(self), fields(board = %self.encode()))]
    pub fn evaluate(&self) -> Evaluation {
        if let Some(terminal) = terminal_score(self) {
            debug!(score = %terminal, "Terminal board");
            return Evaluation {
                board: self.clone(),
                score: terminal,
                children: Vec::new(),
            };
        }

        let mut children: Vec<RankedChild> = self
            .successors()
            .into_iter()
            .map(|(position, child)| {
                let child_score = score(&child);
                RankedChild::new(position, child, child_score)
            })
            .collect();

        let mover = self.next_player();
        let best = match mover {
            Some(Player::O) => children.iter().map(|c| c.score).max(),
            _ => children.iter().map(|c| c.score).min(),
        }
        .unwrap_or(Score::Draw);

        // Among equal scores a move that wins on the spot comes first;
        // the stable sort keeps cell order for the rest.
        let wins_now = |child: &RankedChild| mover.is_some() && child.board.winner() == mover;
        match mover {
            Some(Player::O) => children.sort_by_key(|c| (Reverse(c.score), !wins_now(c))),
            _ => children.sort_by_key(|c| (c.score, !wins_now(c))),
        }

        debug!(score = %best, children = children.len(), mover = ?mover, "Board evaluated");
        Evaluation {
            board: self.clone(),
            score: best,
            children,
        }
    }

    /// Plays the best move for the player to move.
    ///
    /// Returns `None` when there is no move to make.
    pub fn best_move(&self) -> Option<Board> {
        self.evaluate().into_best_board()
    }
}
