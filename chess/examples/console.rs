// Simple command-line application to move pieces around a board

use parlorchess::{board::PrettyStyle, moves, Board};
use std::io::{self, BufRead, Write};

fn main() {
    let mut stdin = io::stdin().lock();

    let mut board = Board::initial();

    loop {
        println!("{}", board.pretty(PrettyStyle::Ascii));
        print!("(piece move): ");
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();
        if s.is_empty() {
            continue;
        }

        match moves::execute(&mut board, s) {
            Ok(mv) => println!("played {}", mv),
            Err(e) => println!("invalid move, try again ({})", e),
        }
        println!();
    }
}
