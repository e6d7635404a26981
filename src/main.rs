use clap::Parser;
use env_logger::Env;
use log::info;

use slide_2048::engine::Board;
use slide_2048::lookahead::{Lookahead, LookaheadConfig, LookaheadParallel};
use slide_2048::play::{play_game, Policy};

#[derive(Debug, Parser)]
#[command(name = "slide-2048", about = "Play one sliding-tile game with the look-ahead player")]
struct Args {
    /// Board side length (3..=8)
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Seed for tile spawning (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Cap on search depth
    #[arg(long)]
    depth: Option<u64>,

    /// Stop after this many moves
    #[arg(long)]
    max_moves: Option<u64>,

    /// Use the rayon-parallel search
    #[arg(long)]
    parallel: bool,

    /// Do not print the board after each move
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut board = match args.seed {
        Some(seed) => Board::with_seed(args.size, seed)?,
        None => Board::new(args.size)?,
    };
    let cfg = LookaheadConfig { depth_cap: args.depth.or(LookaheadConfig::default().depth_cap), ..Default::default() };
    let mut policy: Box<dyn Policy> = if args.parallel {
        Box::new(LookaheadParallel::with_config(cfg))
    } else {
        Box::new(Lookahead::with_config(cfg))
    };

    if !args.quiet {
        println!("{board}");
    }
    let summary = play_game(&mut board, policy.as_mut(), args.max_moves, |b| {
        if !args.quiet {
            println!("{b}");
        }
    });
    info!(
        "moves: {}, score: {}, max tile: {}, game over: {}",
        summary.moves,
        summary.score,
        summary.max_value,
        !board.check_continue()
    );
    Ok(())
}
