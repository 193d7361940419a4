//! Exhaustive fixed-depth minimax.

use shakmaty::{Chess, Color, Move, Position};

use super::eval::Evaluate;

/// Pick the best move for `computer` by minimax to `depth` plies.
///
/// The root maximizes from the computer's perspective and keeps the move
/// with the strictly greatest score; on ties the first move in the legal
/// enumeration order wins, which keeps repeated searches reproducible.
///
/// Returns `None` only when the position has no legal moves.
pub fn best_move<E: Evaluate>(
    position: &Chess,
    computer: Color,
    depth: u32,
    evaluator: &E,
) -> Option<Move> {
    let moves = position.legal_moves();

    #[cfg(feature = "logging")]
    log::debug!(
        "root search: {} candidates at depth {depth} for {computer:?}",
        moves.len()
    );

    let mut best: Option<Move> = None;
    let mut best_score = i32::MIN;
    for mv in &moves {
        let mut child = position.clone();
        child.play_unchecked(mv);
        let score = minimax(&child, computer, depth.saturating_sub(1), false, evaluator);
        if score > best_score {
            best_score = score;
            best = Some(mv.clone());
        }
    }
    best
}

/// Minimax score of `position` from the computer's perspective.
///
/// `maximizing` alternates per ply; at depth zero or in a terminal position
/// the static evaluation is returned regardless of whose turn it is. Every
/// child is explored on a cloned position, so apply and undo are balanced by
/// scoping on all paths.
pub(crate) fn minimax<E: Evaluate>(
    position: &Chess,
    computer: Color,
    depth: u32,
    maximizing: bool,
    evaluator: &E,
) -> i32 {
    if depth == 0 || position.is_game_over() {
        return evaluator.evaluate(position, computer);
    }
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in &position.legal_moves() {
        let mut child = position.clone();
        child.play_unchecked(mv);
        let score = minimax(&child, computer, depth - 1, !maximizing, evaluator);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
