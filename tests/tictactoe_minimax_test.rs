//! Tests for minimax scoring and move selection.

use std::collections::HashSet;

use strictly_minimax::{Board, Player, Position, Score};

fn board(spec: &str) -> Board {
    Board::parse(spec).expect("valid board spec")
}

#[test]
fn test_empty_board_is_a_draw() {
    let evaluation = Board::new().evaluate();
    assert_eq!(evaluation.score(), Score::Draw);
    assert_eq!(evaluation.children().len(), 9);
    assert!(evaluation.children().iter().all(|c| c.score == Score::Draw));
}

#[test]
fn test_empty_board_first_move_is_deterministic() {
    let next = Board::new().best_move().expect("empty board has moves");
    assert_eq!(next.tally(), (1, 0));
    assert_eq!(next.squares().iter().filter(|s| **s == strictly_minimax::Square::Empty).count(), 8);
    // Every opening draws, so the first cell in order wins the tie.
    assert_eq!(next.encode(), "x        ");
    assert_eq!(Board::new().best_move(), Some(next));
}

#[test]
fn test_full_draw_scores_zero() {
    let evaluation = board("xoxoxxoxo").evaluate();
    assert_eq!(evaluation.score(), Score::Draw);
    assert_eq!(evaluation.score().value(), 0);
    assert!(evaluation.into_best_board().is_none());
}

#[test]
fn test_evaluate_is_idempotent() {
    let start = board("x   o   x");
    let first = start.evaluate();
    let second = start.evaluate();
    assert_eq!(first.score(), second.score());
    assert_eq!(first, second);
    assert_eq!(first.score(), first.score());
}

#[test]
fn test_forced_loss_for_o() {
    // X threatens both the top row and the right column.
    let evaluation = board("x x o o x").evaluate();
    assert_eq!(evaluation.score(), Score::XWins);
    assert!(evaluation.children().iter().all(|c| c.score == Score::XWins));
}

#[test]
fn test_o_takes_immediate_win() {
    let next = board("oo xx x  ").best_move().expect("O has moves");
    assert_eq!(next.winner(), Some(Player::O));
    assert_eq!(next.encode(), "oooxx x  ");
}

#[test]
fn test_x_takes_immediate_win() {
    let start = board("xx oo    ");
    assert_eq!(start.next_player(), Some(Player::X));
    let next = start.best_move().expect("X has moves");
    assert_eq!(next.winner(), Some(Player::X));
    assert_eq!(start.evaluate().score(), Score::XWins);
}

#[test]
fn test_immediate_win_preferred_over_forced_win() {
    let next = board("xoxox  o ").best_move().expect("X has moves");
    assert_eq!(next.winner(), Some(Player::X));
    assert_eq!(next.encode(), "xoxoxxxo ");

    let next = board("xox o x  ").best_move().expect("O has moves");
    assert_eq!(next.winner(), Some(Player::O));
    assert_eq!(next.encode(), "xox o xo ");
}

#[test]
fn test_every_reachable_board_takes_an_immediate_win() {
    let mut seen = HashSet::new();
    let mut pending = vec![Board::new()];
    let mut checked = 0;
    while let Some(current) = pending.pop() {
        if !seen.insert(current.clone()) {
            continue;
        }
        let Some(mover) = current.next_player() else {
            continue;
        };
        if current.winner().is_some() || current.is_full() {
            continue;
        }
        let children = current.children();
        if children.iter().any(|c| c.winner() == Some(mover)) {
            let next = current.best_move().expect("open board has moves");
            assert_eq!(
                next.winner(),
                Some(mover),
                "{} missed a win on {:?}",
                mover,
                current.encode()
            );
            checked += 1;
        }
        pending.extend(children);
    }
    assert!(checked > 0);
}

#[test]
fn test_o_blocks() {
    let evaluation = board("xx  o    ").evaluate();
    assert_eq!(evaluation.score(), Score::Draw);
    let best = evaluation.best().expect("O has moves");
    assert_eq!(best.position, Position::TopRight);
    assert!(evaluation.children()[1..].iter().all(|c| c.score == Score::XWins));
}

#[test]
fn test_o_ranking_is_descending_and_stable() {
    let evaluation = board("x   o   x").evaluate();
    let ranked: Vec<_> = evaluation
        .children()
        .iter()
        .map(|c| (c.position.to_index(), c.score.value()))
        .collect();
    assert_eq!(ranked, vec![(1, 0), (3, 0), (5, 0), (7, 0), (2, -1), (6, -1)]);
}

#[test]
fn test_x_ranking_is_best_for_x_first() {
    let evaluation = board(" x o     ").evaluate();
    assert_eq!(evaluation.score(), Score::XWins);
    let ranked: Vec<_> = evaluation
        .children()
        .iter()
        .map(|c| (c.position.to_index(), c.score.value()))
        .collect();
    assert_eq!(
        ranked,
        vec![(0, -1), (4, -1), (5, 0), (6, 0), (8, 0), (2, 1), (7, 1)]
    );
}

#[test]
fn test_score_is_best_child_score() {
    for spec in ["x   o   x", " x o     ", "xx  o    ", "oo xx x  "] {
        let evaluation = board(spec).evaluate();
        let best = evaluation.best().expect("open board");
        assert_eq!(evaluation.score(), best.score, "board {:?}", spec);
    }
}

#[test]
fn test_evaluation_does_not_touch_board() {
    let start = board("x        ");
    let evaluation = start.evaluate();
    assert_eq!(evaluation.board(), &start);
    assert_eq!(start.encode(), "x        ");
}
