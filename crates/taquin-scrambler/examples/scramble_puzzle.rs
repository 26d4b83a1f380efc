//! Example demonstrating the full engine: scramble a board, then look up
//! how many moves an optimal solver would need.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scramble_puzzle
//! ```
//!
//! Pick the board shape (at most 12 cells if you want the optimal-move
//! lookup; larger boards skip the table):
//!
//! ```sh
//! cargo run --example scramble_puzzle -- --columns 2 --rows 3
//! ```
//!
//! Reproduce a scramble from a seed:
//!
//! ```sh
//! cargo run --example scramble_puzzle -- --seed 42
//! ```
//!
//! Override the Manhattan acceptance target:
//!
//! ```sh
//! cargo run --example scramble_puzzle -- --target 12
//! ```

use std::process;

use clap::Parser;
use taquin_core::Dims;
use taquin_game::Puzzle;
use taquin_scrambler::{ScrambleOptions, Scrambler};
use taquin_solver::{MoveCount, OptimalDistances};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of board columns.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    columns: u8,

    /// Number of board rows.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    rows: u8,

    /// RNG seed for a reproducible scramble.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Manhattan distance at which the scramble is accepted.
    #[arg(long, value_name = "DISTANCE")]
    target: Option<usize>,

    /// Skip building the optimal-distance table.
    #[arg(long)]
    no_table: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let dims = match Dims::new(args.columns, args.rows) {
        Ok(dims) => dims,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let mut puzzle = Puzzle::new(dims);
    let mut scrambler = args.seed.map_or_else(Scrambler::new, Scrambler::from_seed);
    let options = ScrambleOptions {
        target_manhattan: args.target,
        move_limit: None,
    };
    let report = scrambler.scramble_with(&mut puzzle, &options);

    println!("Board ({dims}):");
    print!("{puzzle}");
    println!();

    println!("Scramble:");
    if let Some(seed) = args.seed {
        println!("  seed: {seed}");
    }
    println!("  applied moves: {}", report.applied_moves);
    println!("  reached target: {}", report.reached_target);
    println!("  arrangement index: {}", puzzle.encode());

    if args.no_table {
        return;
    }

    let mut table = match OptimalDistances::new(dims) {
        Ok(table) => table,
        Err(err) => {
            println!();
            println!("Optimal moves: skipped ({err})");
            return;
        }
    };
    table.run_to_completion();

    println!();
    match table.lookup(puzzle.board()) {
        MoveCount::Exact(distance) => println!("Optimal moves: {distance}"),
        MoveCount::Unreachable => println!("Optimal moves: unreachable (should never happen)"),
        MoveCount::Pending => println!("Optimal moves: table still building"),
    }
}
