//! Terminal-state classification.

use shakmaty::{Chess, Color, Position};

/// Outcome classification for a tracked position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// The side to move has at least one legal move and the game continues
    Ongoing,
    /// The side to move is checkmated; `winner` is the other side
    Checkmate { winner: Color },
    /// The side to move has no legal moves and is not in check
    Stalemate,
    /// Neither side retains mating material
    Draw,
}

/// Classify `position`, checking in the order checkmate, stalemate,
/// insufficient material. The rules engine's checkmate and stalemate
/// predicates partition the no-legal-moves case exactly, so no separate
/// fallback is needed.
#[must_use]
pub fn status_of(position: &Chess) -> GameStatus {
    if position.is_checkmate() {
        GameStatus::Checkmate {
            winner: !position.turn(),
        }
    } else if position.is_stalemate() {
        GameStatus::Stalemate
    } else if position.is_insufficient_material() {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}
