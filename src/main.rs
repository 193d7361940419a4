use chess_duel::cli;

fn main() {
    cli::run_game_loop();
}
