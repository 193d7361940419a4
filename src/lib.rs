pub mod cli;
pub mod game;
pub mod search;

pub use game::{CaptureEvent, GameState, GameStatus, MoveError};
pub use search::{pick_move, Difficulty, Evaluate, MaterialEvaluator};
