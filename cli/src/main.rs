use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tresraya_core::{Game, Player};

mod input;
mod render;

/// Two players share the keyboard and take turns marking a 3x3 grid. Three
/// marks in a row, column or diagonal win; a full grid with no line is a
/// draw.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Display name for player X (moves first)
    #[arg(long, value_name = "NAME")]
    player_x: Option<String>,

    /// Display name for player O
    #[arg(long, value_name = "NAME")]
    player_o: Option<String>,

    /// Print each finished game as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut game = Game::new();
    if let Some(name) = args.player_x {
        game.set_player_name(Player::X, name);
    }
    if let Some(name) = args.player_o {
        game.set_player_name(Player::O, name);
    }

    println!("Tic Tac Toe");
    println!("-----------");
    println!("{}", render::index_help());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render::grid(game.grid()));
        println!();

        if game.is_terminal() {
            if let Some(outcome) = render::outcome_line(&game) {
                println!("{outcome}");
            }
            if args.json {
                println!("{}", serde_json::to_string_pretty(&game)?);
            }
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            let play_again = match lines.next() {
                Some(line) => line?.trim().eq_ignore_ascii_case("y"),
                None => false,
            };
            if !play_again {
                break;
            }
            game.reset();
            println!();
            continue;
        }

        print!("{}", render::turn_prompt(&game));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // Stdin closed mid-game, leave it unfinished.
            log::debug!("no more input, quitting");
            println!();
            break;
        };

        let coords = match input::parse_move(&line?) {
            Ok(coords) => coords,
            Err(err) => {
                println!("Invalid move: {err}. Try again.");
                continue;
            }
        };
        if let Err(err) = game.place_mark(coords) {
            println!("Invalid move: {err}. Try again.");
        }
    }

    Ok(())
}
