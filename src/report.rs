//! Plain-text views over an evaluation.

use crate::games::tictactoe::{Evaluation, RankedChild};

/// One line per child: score, then the quoted board encoding.
fn ranked_lines<'a>(children: impl IntoIterator<Item = &'a RankedChild>) -> String {
    children
        .into_iter()
        .map(|child| format!("{:>2} {:?}\n", child.score.value(), child.board.encode()))
        .collect()
}

/// Children from the highest score down, whoever is to move.
/// Equal scores list the later cell first.
fn by_descending_score(children: &[RankedChild]) -> Vec<&RankedChild> {
    let mut sorted: Vec<&RankedChild> = children.iter().collect();
    sorted.sort_by_key(|child| (child.score, child.position));
    sorted.reverse();
    sorted
}

/// Full analysis of a start board: the board, its score, every move
/// listed by descending score and the chosen next move.
pub fn play_report(evaluation: &Evaluation) -> String {
    let next = evaluation
        .best()
        .map(|child| child.board.to_string())
        .unwrap_or_else(|| "none".to_string());

    format!(
        "Start:\n{}\n\nScore: {}\n\nChildren:\n{}\nNext move:\n{}\n",
        evaluation.board(),
        evaluation.score(),
        ranked_lines(by_descending_score(evaluation.children())),
        next,
    )
}

/// Response body for the debug view: the chosen move first, then the
/// score of the start board and the ranked alternatives.
pub fn debug_report(evaluation: &Evaluation) -> String {
    let chosen = evaluation
        .best()
        .map(|child| format!("{}\n\n{:?}", child.board, child.board.encode()))
        .unwrap_or_else(|| "none".to_string());

    format!(
        "{}\n\nScore: {}\n\nChildren:\n{}",
        chosen,
        evaluation.score(),
        ranked_lines(evaluation.children()),
    )
}
