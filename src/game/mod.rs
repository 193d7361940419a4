//! Game state tracking for one human-versus-computer game.
//!
//! The tracker owns the authoritative position, the side assigned to the
//! human, the difficulty tier fixed at game start, and two append-only pools
//! of captured piece kinds (used to constrain promotion choices). Move
//! legality and terminal-state detection are delegated to `shakmaty`; this
//! module only sequences them.
//!
//! # Example
//! ```
//! use chess_duel::game::GameState;
//! use chess_duel::search::Difficulty;
//! use shakmaty::Color;
//!
//! let mut game = GameState::new(Color::White, Difficulty::Medium);
//! let from = "e2".parse().unwrap();
//! let to = "e4".parse().unwrap();
//! game.play_human(from, to, None).unwrap();
//! assert!(!game.is_human_turn());
//! let (reply, _capture) = game.play_computer().expect("computer has a move");
//! assert!(game.is_human_turn());
//! # let _ = reply;
//! ```

mod error;
mod promotion;
mod status;

#[cfg(test)]
mod tests;

pub use error::MoveError;
pub use promotion::{computer_promotion, promotion_options, PROMOTION_ORDER};
pub use status::{status_of, GameStatus};

use rand::Rng;

use shakmaty::{ByColor, Chess, Color, File, Move, MoveList, Position, Role, Square};

use crate::search::{self, Difficulty};

/// A piece removed from the board by one move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureEvent {
    /// Kind of the captured piece
    pub role: Role,
    /// Color of the captured piece (the pool it was recorded into)
    pub color: Color,
}

/// Authoritative state of one game: position, sides, captured material.
///
/// The position is exclusively owned; the search borrows it immutably for the
/// duration of one call. All state lives for one game and is discarded on
/// [`GameState::reset`].
#[derive(Debug, Clone)]
pub struct GameState {
    position: Chess,
    human: Color,
    difficulty: Difficulty,
    captives: ByColor<Vec<Role>>,
}

impl GameState {
    /// Fresh game from the standard starting position.
    #[must_use]
    pub fn new(human: Color, difficulty: Difficulty) -> GameState {
        GameState::from_position(Chess::default(), human, difficulty)
    }

    /// Fresh game from an arbitrary legal position, with empty pools.
    #[must_use]
    pub fn from_position(position: Chess, human: Color, difficulty: Difficulty) -> GameState {
        GameState {
            position,
            human,
            difficulty,
            captives: ByColor::default(),
        }
    }

    /// Discard all prior state and start over from the starting position.
    pub fn reset(&mut self, human: Color, difficulty: Difficulty) {
        *self = GameState::new(human, difficulty);
    }

    /// The tracked position.
    #[must_use]
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// The side assigned to the human at game start.
    #[must_use]
    pub fn human_color(&self) -> Color {
        self.human
    }

    /// The tier fixed for this game.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// True iff the side to move is the human side.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.position.turn() == self.human
    }

    /// Legal moves of the current position, in the rules engine's
    /// enumeration order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    /// Terminal status of the current position.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        status_of(&self.position)
    }

    /// Pieces of `color` captured since the last reset, in capture order.
    ///
    /// The pool never shrinks during a game: promotion reads it but does not
    /// consume from it.
    #[must_use]
    pub fn captives(&self, color: Color) -> &[Role] {
        self.captives.get(color)
    }

    /// Promotion kinds currently available to the human, strongest first.
    #[must_use]
    pub fn human_promotion_options(&self) -> Vec<Role> {
        promotion_options(self.captives(!self.human))
    }

    /// True iff the (from, to) candidate is a pawn move onto the final rank,
    /// i.e. it cannot be completed without a promotion choice.
    #[must_use]
    pub fn requires_promotion(&self, from: Square, to: Square) -> bool {
        self.position
            .legal_moves()
            .iter()
            .any(|mv| mv.from() == Some(from) && mv.to() == to && mv.promotion().is_some())
    }

    /// Resolve a presentation-layer candidate against the legal-move set.
    ///
    /// Castling is accepted both as king-onto-rook and in the
    /// king-destination convention (e1g1).
    #[must_use]
    pub fn find_legal(&self, from: Square, to: Square, promotion: Option<Role>) -> Option<Move> {
        self.position
            .legal_moves()
            .iter()
            .find(|mv| matches_candidate(mv, from, to, promotion))
            .cloned()
    }

    /// Apply a move that is already known to be legal.
    ///
    /// The caller is responsible for the membership check ([`find_legal`] or
    /// the legal-move list); this operation trusts it. Any capture is
    /// recorded into the pool indexed by the captured piece's own color
    /// before the move is applied. The captured kind is taken from the move
    /// itself, so en passant is recorded correctly.
    ///
    /// [`find_legal`]: GameState::find_legal
    pub fn apply_move(&mut self, mv: &Move) -> Option<CaptureEvent> {
        let captured = mv.capture().map(|role| CaptureEvent {
            role,
            color: !self.position.turn(),
        });
        if let Some(event) = captured {
            #[cfg(feature = "logging")]
            log::debug!("captured {:?} {:?}", event.color, event.role);
            self.captives.get_mut(event.color).push(event.role);
        }
        self.position.play_unchecked(mv);
        captured
    }

    /// Validate and apply a human move candidate.
    ///
    /// Rejections leave the state untouched: an unknown candidate or a
    /// candidate missing its required promotion choice is
    /// [`MoveError::IllegalMove`]; a promotion the captured pool cannot
    /// supply is [`MoveError::PromotionUnavailable`].
    pub fn play_human(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Option<CaptureEvent>, MoveError> {
        if !self.is_human_turn() {
            return Err(MoveError::IllegalMove);
        }
        let mv = if self.requires_promotion(from, to) {
            let options = self.human_promotion_options();
            if options.is_empty() {
                return Err(MoveError::PromotionUnavailable);
            }
            let role = promotion.ok_or(MoveError::IllegalMove)?;
            if !options.contains(&role) {
                return Err(MoveError::PromotionUnavailable);
            }
            self.find_legal(from, to, Some(role))
        } else {
            self.find_legal(from, to, promotion)
        };
        let mv = mv.ok_or(MoveError::IllegalMove)?;
        Ok(self.apply_move(&mv))
    }

    /// Search for, resolve, and apply the computer's move.
    ///
    /// Returns `None` when it is not the computer's turn or the game is
    /// already over. A promotion returned by the search is rewritten to the
    /// fixed computer policy (strongest kind captured from the human, queen
    /// when that pool offers none) before application.
    pub fn play_computer(&mut self) -> Option<(Move, Option<CaptureEvent>)> {
        self.play_computer_with(&mut rand::thread_rng())
    }

    /// [`play_computer`] with a caller-supplied random source, so the Easy
    /// tier can be driven deterministically.
    ///
    /// [`play_computer`]: GameState::play_computer
    pub fn play_computer_with<R: Rng>(&mut self, rng: &mut R) -> Option<(Move, Option<CaptureEvent>)> {
        if self.is_human_turn() || self.status() != GameStatus::Ongoing {
            return None;
        }
        let computer = !self.human;
        let mut mv = search::pick_move(&self.position, computer, self.difficulty, rng)?;
        if mv.is_promotion() {
            let choice = computer_promotion(self.captives(self.human));
            mv = promotion::with_promotion(&mv, choice);
        }
        let capture = self.apply_move(&mv);
        #[cfg(feature = "logging")]
        {
            let status = self.status();
            if status != GameStatus::Ongoing {
                log::info!("game over: {status:?}");
            }
        }
        Some((mv, capture))
    }
}

fn matches_candidate(mv: &Move, from: Square, to: Square, promotion: Option<Role>) -> bool {
    match *mv {
        Move::Castle { king, rook } => {
            let file = if rook > king { File::G } else { File::C };
            promotion.is_none()
                && from == king
                && (to == rook || to == Square::from_coords(file, king.rank()))
        }
        _ => mv.from() == Some(from) && mv.to() == to && mv.promotion() == promotion,
    }
}
