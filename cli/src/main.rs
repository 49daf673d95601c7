use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use clearfield_core::{Coord, GameConfig, Session};

mod command;
mod play;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Number of board rows
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_SIZE)]
    rows: Coord,

    /// Number of board columns
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_SIZE)]
    cols: Coord,

    /// Chance for each cell to hold a mine
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_MINE_PROBABILITY)]
    probability: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::new(args.rows, args.cols, args.probability)
        .context("invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {seed}");

    let session = Session::new_game(config, seed)?;
    let stdin = io::stdin();
    let mut game = play::Game::new(session, seed, stdin.lock(), io::stdout().lock());
    game.run()
}
