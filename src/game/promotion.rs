//! Promotion resolution against captured material.
//!
//! Promotion is not free in this game: a pawn reaching the final rank may
//! only become a piece kind already captured from the opponent. The pool is
//! read, never consumed; it only ever grows until the game is reset.

use shakmaty::{Move, Role};

/// Promotion targets in descending value order.
pub const PROMOTION_ORDER: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

/// Kinds a captured pool makes available for promotion: restricted to the
/// four legal targets, deduplicated, strongest first.
#[must_use]
pub fn promotion_options(pool: &[Role]) -> Vec<Role> {
    PROMOTION_ORDER
        .iter()
        .copied()
        .filter(|role| pool.contains(role))
        .collect()
}

/// The computer's promotion choice: the strongest pooled kind.
///
/// Falls back to queen when the pool offers no promotion-eligible kind, so
/// the engine never loses a legal move to the pool constraint.
#[must_use]
pub fn computer_promotion(pool: &[Role]) -> Role {
    promotion_options(pool).first().copied().unwrap_or(Role::Queen)
}

/// Rewrite a promotion move to promote to `role`. Non-promotion moves pass
/// through unchanged.
pub(crate) fn with_promotion(mv: &Move, role: Role) -> Move {
    match *mv {
        Move::Normal {
            role: piece,
            from,
            capture,
            to,
            promotion: Some(_),
        } => Move::Normal {
            role: piece,
            from,
            capture,
            to,
            promotion: Some(role),
        },
        ref other => other.clone(),
    }
}
