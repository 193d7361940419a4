//! Promotion gating and policy tests.

use shakmaty::{Color, Position, Role, Square};

use crate::game::{computer_promotion, promotion_options, GameState, MoveError};
use crate::search::Difficulty;

use super::{fen_of, position};

const WHITE_TO_PROMOTE: &str = "k7/4P3/8/8/8/8/8/K7 w - - 0 1";

#[test]
fn test_options_are_filtered_deduplicated_and_ordered() {
    let pool = [Role::Pawn, Role::Knight, Role::Queen, Role::Knight];
    assert_eq!(promotion_options(&pool), vec![Role::Queen, Role::Knight]);
    assert_eq!(promotion_options(&[]), Vec::<Role>::new());
    // a pool of pawns offers nothing to promote to
    assert_eq!(promotion_options(&[Role::Pawn]), Vec::<Role>::new());
}

#[test]
fn test_computer_promotion_prefers_strongest_pooled_kind() {
    assert_eq!(computer_promotion(&[Role::Bishop, Role::Rook]), Role::Rook);
    assert_eq!(
        computer_promotion(&[Role::Knight, Role::Queen, Role::Rook]),
        Role::Queen
    );
}

#[test]
fn test_computer_promotion_falls_back_to_queen() {
    assert_eq!(computer_promotion(&[]), Role::Queen);
    assert_eq!(computer_promotion(&[Role::Pawn]), Role::Queen);
}

#[test]
fn test_empty_pool_abandons_human_promotion() {
    let mut game = GameState::from_position(
        position(WHITE_TO_PROMOTE),
        Color::White,
        Difficulty::Easy,
    );
    let before = fen_of(game.position());

    let err = game
        .play_human(Square::E7, Square::E8, Some(Role::Queen))
        .unwrap_err();
    assert_eq!(err, MoveError::PromotionUnavailable);
    assert_eq!(fen_of(game.position()), before);
    assert!(game.is_human_turn());
}

#[test]
fn test_unpooled_kind_is_rejected() {
    let mut game = GameState::from_position(
        position(WHITE_TO_PROMOTE),
        Color::White,
        Difficulty::Easy,
    );
    game.captives.get_mut(Color::Black).push(Role::Rook);

    let err = game
        .play_human(Square::E7, Square::E8, Some(Role::Queen))
        .unwrap_err();
    assert_eq!(err, MoveError::PromotionUnavailable);
}

#[test]
fn test_missing_choice_is_rejected() {
    let mut game = GameState::from_position(
        position(WHITE_TO_PROMOTE),
        Color::White,
        Difficulty::Easy,
    );
    game.captives.get_mut(Color::Black).push(Role::Rook);

    let err = game.play_human(Square::E7, Square::E8, None).unwrap_err();
    assert_eq!(err, MoveError::IllegalMove);
}

#[test]
fn test_pooled_kind_promotes() {
    let mut game = GameState::from_position(
        position(WHITE_TO_PROMOTE),
        Color::White,
        Difficulty::Easy,
    );
    game.captives.get_mut(Color::Black).push(Role::Rook);

    let capture = game
        .play_human(Square::E7, Square::E8, Some(Role::Rook))
        .expect("promotion is legal");
    assert_eq!(capture, None);

    let piece = game.position().board().piece_at(Square::E8).expect("promoted piece");
    assert_eq!(piece.role, Role::Rook);
    assert_eq!(piece.color, Color::White);
}

#[test]
fn test_computer_promotes_to_strongest_pooled_kind() {
    // human is black, so white (to move) is the computer
    let mut game = GameState::from_position(
        position(WHITE_TO_PROMOTE),
        Color::Black,
        Difficulty::Medium,
    );
    game.captives.get_mut(Color::Black).push(Role::Knight);

    let (mv, capture) = game.play_computer().expect("computer moves");
    assert_eq!(capture, None);
    assert_eq!(mv.promotion(), Some(Role::Knight));

    let piece = game.position().board().piece_at(Square::E8).expect("promoted piece");
    assert_eq!(piece.role, Role::Knight);
}

#[test]
fn test_computer_promotes_to_queen_with_empty_pool() {
    let mut game = GameState::from_position(
        position(WHITE_TO_PROMOTE),
        Color::Black,
        Difficulty::Medium,
    );
    let (mv, _capture) = game.play_computer().expect("computer moves");
    assert_eq!(mv.promotion(), Some(Role::Queen));
}
