//! Move selection for the computer side.
//!
//! Three tiers:
//! - Easy: uniformly random choice among the legal moves
//! - Medium: exhaustive minimax, 2 plies
//! - Hard: exhaustive minimax, 3 plies
//!
//! The minimax tiers score every leaf with a static material count; there is
//! no pruning, no move ordering, and no transposition table, so cost grows as
//! branching^depth. A search borrows the position immutably and explores
//! children on clones, so the caller's position is never left mid-branch.

mod eval;
mod minimax;

#[cfg(test)]
mod tests;

pub use eval::{piece_value, Evaluate, MaterialEvaluator};
pub use minimax::best_move;

use rand::seq::SliceRandom;
use rand::Rng;

use shakmaty::{Chess, Color, Move, Position};

/// Difficulty tier, fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in ascending strength order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search depth in plies, or `None` for the random tier.
    #[inline]
    #[must_use]
    pub const fn search_depth(self) -> Option<u32> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Hard => Some(3),
        }
    }

    /// Parse a tier from its lowercase name (easy, medium, hard).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Tier name as shown to the user.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Choose one move for `computer` in `position` at the given tier.
///
/// Returns `None` only when the position has no legal moves. The random tier
/// draws from `rng`; the minimax tiers are deterministic and ignore it.
pub fn pick_move<R: Rng>(
    position: &Chess,
    computer: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    match difficulty.search_depth() {
        None => random_move(position, rng),
        Some(depth) => best_move(position, computer, depth, &MaterialEvaluator),
    }
}

/// Uniformly random choice among the legal moves of `position`.
pub fn random_move<R: Rng>(position: &Chess, rng: &mut R) -> Option<Move> {
    position.legal_moves().choose(rng).cloned()
}
