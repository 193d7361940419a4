//! Game-state module tests.
//!
//! Tests are organized into separate files by category:
//! - `captures.rs` - capture bookkeeping and pool growth
//! - `promotion.rs` - promotion gating and the computer promotion policy
//! - `status.rs` - terminal-status classification

mod promotion;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode};

fn position(fen: &str) -> Chess {
    fen.parse::<Fen>()
        .expect("valid fen")
        .into_position(CastlingMode::Standard)
        .expect("legal position")
}

fn fen_of(position: &Chess) -> String {
    Fen::from_position(position.clone(), EnPassantMode::Legal).to_string()
}
