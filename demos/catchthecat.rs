//! Terminal catch-the-cat: you block cells, the cat runs for the edge.
//!
//! Run: cargo run --bin catchthecat -- --side 11 --seed 7

use std::io::{self, BufRead, Write};

use clap::Parser;
use hexcat_board::{Game, GameConfig};
use hexcat_demos::{Command, describe_route, parse_command};

#[derive(Parser, Debug)]
#[command(name = "catchthecat", about = "Trap the cat before it reaches the edge")]
struct Args {
    /// Cells along each board edge (odd).
    #[arg(long, default_value_t = 11)]
    side: i32,
    /// Fraction of cells blocked at the start.
    #[arg(long, default_value_t = 0.1)]
    block_ratio: f64,
    /// Seed for a reproducible board.
    #[arg(long)]
    seed: Option<u64>,
    /// Cap on cells the cat examines per move.
    #[arg(long)]
    expansion_limit: Option<usize>,
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        GameConfig {
            side: args.side,
            block_ratio: args.block_ratio,
            seed: args.seed,
            expansion_limit: args.expansion_limit,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: GameConfig = Args::parse().into();
    let mut game = Game::new(&config)?;
    let half = game.board().half();
    println!("Block a cell with `x y` (-{half}..={half}), `hint` shows the cat's plan, `q` quits.");
    print!("{}", game.board());

    let stdin = io::stdin();
    let mut out = io::stdout();
    write!(out, "> ")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Hint) => println!("{}", describe_route(game.board())),
            Ok(Command::Block(p)) => match game.catcher_turn(p) {
                Ok(status) => {
                    print!("{}", game.board());
                    if status.is_over() {
                        println!("{status} after {} turns", game.turn());
                        return Ok(());
                    }
                }
                Err(e) => log::warn!("{e}"),
            },
            Err(e) => log::warn!("{e}"),
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
