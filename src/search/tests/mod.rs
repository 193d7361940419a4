//! Search module tests.
//!
//! Tests are organized into separate files by category:
//! - `eval.rs` - static material evaluation
//! - `minimax.rs` - root search and recursion properties
//! - `random.rs` - the random (Easy) tier


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
