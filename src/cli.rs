//! Line-oriented reference orchestrator.
//!
//! A minimal presentation collaborator for driving a game from a terminal:
//!
//! ```text
//! new <easy|medium|hard> [white|black]   start a game
//! move <from><to>[qrbn]                  e.g. move e2e4, move e7e8q
//! board                                  print the position
//! captives                               print both captured pools
//! status                                 print the game status
//! quit
//! ```
//!
//! After a successful human move the computer replies in the same turn. Real
//! front ends (a board widget with a promotion picker) are expected to link
//! against the library instead of driving this loop.

use std::io::{self, BufRead, Write};

use shakmaty::{Chess, Color, File, Move, Position, Rank, Role, Square};

use crate::game::{GameState, GameStatus};
use crate::search::Difficulty;

/// Parse a move candidate like `e2e4` or `e7e8q`.
#[must_use]
pub fn parse_candidate(input: &str) -> Option<(Square, Square, Option<Role>)> {
    if !input.is_ascii() || input.len() < 4 || input.len() > 5 {
        return None;
    }
    let from = input[0..2].parse::<Square>().ok()?;
    let to = input[2..4].parse::<Square>().ok()?;
    let promotion = if input.len() == 5 {
        Some(Role::from_char(input.as_bytes()[4] as char)?)
    } else {
        None
    };
    Some((from, to, promotion))
}

/// Format a move in from-to[promotion] coordinates; castling is shown with
/// the king's destination (e1g1).
#[must_use]
pub fn format_move(mv: &Move) -> String {
    match *mv {
        Move::Castle { king, rook } => {
            let file = if rook > king { File::G } else { File::C };
            format!("{}{}", king, Square::from_coords(file, king.rank()))
        }
        _ => {
            let mut out = String::new();
            if let Some(from) = mv.from() {
                out.push_str(&from.to_string());
            }
            out.push_str(&mv.to().to_string());
            if let Some(role) = mv.promotion() {
                out.push(role.char());
            }
            out
        }
    }
}

fn render_board(position: &Chess) -> String {
    let mut out = String::new();
    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        for file in 0..8u8 {
            let square = Square::from_coords(File::new(u32::from(file)), Rank::new(u32::from(rank)));
            let glyph = position
                .board()
                .piece_at(square)
                .map_or('.', |piece| piece.char());
            out.push(' ');
            out.push(glyph);
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn describe_status(status: GameStatus, human: Color) -> String {
    match status {
        GameStatus::Ongoing => "ongoing".to_string(),
        GameStatus::Checkmate { winner } if winner == human => "checkmate - you win".to_string(),
        GameStatus::Checkmate { .. } => "checkmate - you lose".to_string(),
        GameStatus::Stalemate => "stalemate".to_string(),
        GameStatus::Draw => "draw - insufficient material".to_string(),
    }
}

fn pool_line(game: &GameState, color: Color) -> String {
    let symbols: String = game
        .captives(color)
        .iter()
        .map(|role| {
            if color == Color::White {
                role.upper_char()
            } else {
                role.char()
            }
        })
        .collect();
    if symbols.is_empty() {
        format!("captured {}: (none)", color_name(color))
    } else {
        format!("captured {}: {symbols}", color_name(color))
    }
}

fn computer_turn(game: &mut GameState) {
    if let Some((mv, capture)) = game.play_computer() {
        match capture {
            Some(event) => println!(
                "computer plays {} taking {}",
                format_move(&mv),
                event.role.char()
            ),
            None => println!("computer plays {}", format_move(&mv)),
        }
    }
}

fn report_and_reply(game: &mut GameState) {
    if game.status() == GameStatus::Ongoing {
        computer_turn(game);
    }
    println!("{}", render_board(game.position()));
    let status = game.status();
    if status != GameStatus::Ongoing {
        println!("game over: {}", describe_status(status, game.human_color()));
    }
}

fn print_help() {
    println!("commands:");
    println!("  new <easy|medium|hard> [white|black]");
    println!("  move <from><to>[qrbn]");
    println!("  board | captives | status | help | quit");
}

/// Run the interactive loop until `quit` or end of input.
pub fn run_game_loop() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game: Option<GameState> = None;

    print_help();
    for line in stdin.lock().lines() {
        let line = line.unwrap();
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        match parts[0] {
            "quit" => break,
            "help" => print_help(),
            "new" => {
                let difficulty = parts.get(1).and_then(|name| Difficulty::from_name(name));
                let human = match parts.get(2).copied() {
                    None | Some("white") => Some(Color::White),
                    Some("black") => Some(Color::Black),
                    Some(_) => None,
                };
                match (difficulty, human) {
                    (Some(difficulty), Some(human)) => {
                        let mut state = GameState::new(human, difficulty);
                        println!(
                            "new game: you play {}, {} tier",
                            color_name(human),
                            difficulty.name()
                        );
                        if !state.is_human_turn() {
                            computer_turn(&mut state);
                        }
                        println!("{}", render_board(state.position()));
                        game = Some(state);
                    }
                    _ => println!("usage: new <easy|medium|hard> [white|black]"),
                }
            }
            "move" => match game.as_mut() {
                None => println!("no game in progress; use new"),
                Some(state) => match parts.get(1).and_then(|input| parse_candidate(input)) {
                    None => println!("usage: move <from><to>[qrbn]"),
                    Some((from, to, promotion)) => match state.play_human(from, to, promotion) {
                        Err(err) => println!("{err}"),
                        Ok(capture) => {
                            if let Some(event) = capture {
                                println!("you take {}", event.role.char());
                            }
                            report_and_reply(state);
                        }
                    },
                },
            },
            "board" => match game.as_ref() {
                Some(state) => println!("{}", render_board(state.position())),
                None => println!("no game in progress"),
            },
            "captives" => match game.as_ref() {
                Some(state) => {
                    println!("{}", pool_line(state, Color::White));
                    println!("{}", pool_line(state, Color::Black));
                }
                None => println!("no game in progress"),
            },
            "status" => match game.as_ref() {
                Some(state) => println!(
                    "{}",
                    describe_status(state.status(), state.human_color())
                ),
                None => println!("no game in progress"),
            },
            _ => println!("unknown command: {}", parts[0]),
        }
        stdout.flush().unwrap();
    }
}
