//! Terminal chess front end.
//!
//! Renders the board as text, reads "e2e4"-style moves, and plays engine
//! turns on a worker thread that is polled for completion. Input validation
//! happens entirely here: the rules engine only ever sees moves drawn from
//! its own legal move list.

mod config;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use negamax_engine::NegamaxEngine;
use negamax_engine::OpeningBook;
use tactica_core::{
    Color, EMPTY_CODE, Engine, Move, Position, PositionKey, coord_to_sq, is_checkmate,
    is_stalemate, legal_targets, move_to_text, parse_move, sq_to_coord,
};

use config::Config;

const CONFIG_PATH: &str = "tactica.toml";

fn main() {
    let cfg = Config::load(CONFIG_PATH);
    let book = OpeningBook::load_or_default(&cfg.book_path);
    if !book.is_empty() {
        println!("Loaded opening book with {} positions.", book.len());
    }
    let mut engine = NegamaxEngine::with_book(book);
    let ai_side = cfg.ai_side();

    println!("Tactica chess. Moves as coordinates (e2e4), 'moves e2' to list");
    println!("targets, 'quit' to leave. Engine depth {}.", cfg.depth);

    let mut pos = Position::startpos();
    pos.record_position();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&pos);

        let to_move = pos.side_to_move;
        if is_checkmate(&pos, to_move) {
            println!("Checkmate. {} wins.", side_name(to_move.other()));
            break;
        }
        if is_stalemate(&pos) {
            println!("Draw by stalemate.");
            break;
        }
        if pos.is_fifty_move_draw() {
            println!("Draw by the fifty-move rule.");
            break;
        }
        if pos.is_threefold_repetition() {
            println!("Draw by threefold repetition.");
            break;
        }

        let mv = if ai_side == Some(to_move) {
            // The worker gets a snapshot of the game and the engine itself;
            // the game position stays untouched until the result is in.
            let handle = engine.spawn_search(pos.clone(), cfg.depth);
            while !handle.is_finished() {
                thread::sleep(Duration::from_millis(25));
            }
            let (result, returned) = handle.join();
            engine = returned;

            match result.best_move {
                Some(mv) => {
                    println!(
                        "{} plays {} (score {}, {} nodes)",
                        engine.name(),
                        move_to_text(mv),
                        result.score,
                        result.nodes
                    );
                    mv
                }
                None => {
                    println!("The engine has no legal moves.");
                    break;
                }
            }
        } else {
            match read_move(&mut lines, &pos) {
                Some(mv) => mv,
                None => break,
            }
        };

        play(&mut pos, mv, &mut engine, cfg.record_book);
    }

    if cfg.record_book {
        match engine.book().save(&cfg.book_path) {
            Ok(()) => println!("Opening book saved to {}.", cfg.book_path),
            Err(e) => eprintln!("Warning: failed to save opening book: {}", e),
        }
    }
}

/// Apply a played move to the live game: optionally record it in the book
/// under the pre-move position, then mutate and count the new position.
fn play(pos: &mut Position, mv: Move, engine: &mut NegamaxEngine, record: bool) {
    if record {
        let key = PositionKey::of(pos);
        engine.book_mut().record(key, mv);
    }
    pos.make_move(mv);
    pos.record_position();
}

/// Prompt until a legal move, 'quit', or end of input. Off-board or
/// malformed coordinates never reach the rules engine.
fn read_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    pos: &Position,
) -> Option<Move> {
    loop {
        print!("{}> ", side_name(pos.side_to_move));
        io::stdout().flush().ok();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            _ => return None,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            return None;
        }

        if let Some(rest) = input.strip_prefix("moves ") {
            match coord_to_sq(rest.trim()) {
                Some(from) => {
                    let targets = legal_targets(pos, from);
                    if targets.is_empty() {
                        println!("No moves from {}.", rest.trim());
                    } else {
                        let list: Vec<String> =
                            targets.iter().map(|&t| sq_to_coord(t)).collect();
                        println!("{}: {}", rest.trim(), list.join(" "));
                    }
                }
                None => println!("Not a square: {}", rest.trim()),
            }
            continue;
        }

        match parse_move(pos, input) {
            Some(mv) => return Some(mv),
            None => println!("Illegal move: {}", input),
        }
    }
}

fn render(pos: &Position) {
    println!();
    for rank in (0..8).rev() {
        print!("{} ", rank + 1);
        for file in 0..8 {
            let sq = (rank * 8 + file) as u8;
            match pos.piece_at(sq) {
                Some(pc) => print!(" {}", pc.code()),
                None => print!(" {}", EMPTY_CODE),
            }
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");
    println!();
}

fn side_name(c: Color) -> &'static str {
    match c {
        Color::White => "White",
        Color::Black => "Black",
    }
}
