use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use slide_2048::config::SelfPlayConfig;
use slide_2048::engine::Board;
use slide_2048::lookahead::Lookahead;
use slide_2048::play::{play_game, GameSummary};

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Play many seeded games in parallel and report score statistics")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of games
    #[arg(long)]
    games: Option<u32>,

    /// Board side length (3..=8)
    #[arg(long)]
    size: Option<usize>,

    /// Base seed; game i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Cap on search depth
    #[arg(long)]
    depth: Option<u64>,

    /// Per-game move limit
    #[arg(long)]
    max_moves: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Suppress the progress bar
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    games: usize,
    elapsed_s: f64,
    best_score: u64,
    mean_score: f64,
    total_moves: u64,
    /// Max tile value -> number of games that reached it as their best tile.
    max_tiles: BTreeMap<u64, usize>,
    runs: Vec<GameSummary>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => SelfPlayConfig::from_toml(path)?,
        None => SelfPlayConfig::default(),
    };
    if let Some(games) = args.games {
        cfg.games = games;
    }
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.depth.is_some() {
        cfg.lookahead.depth_cap = args.depth;
    }
    if args.max_moves.is_some() {
        cfg.max_moves = args.max_moves;
    }
    cfg.validate()?;
    if cfg.lookahead.depth_cap.map_or(true, |d| d > 4) && cfg.size > 4 {
        warn!("deep search on a {0}x{0} board will be slow", cfg.size);
    }
    info!("playing {} games on a {}x{} board", cfg.games, cfg.size, cfg.size);

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(cfg.games as u64);
        pb.set_style(ProgressStyle::with_template("{spinner} {elapsed_precise} [{bar:40}] {pos}/{len} games | {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    };

    let start = Instant::now();
    let runs: Vec<GameSummary> = (0..cfg.games)
        .into_par_iter()
        .map(|i| -> anyhow::Result<GameSummary> {
            let mut board = match cfg.seed {
                Some(seed) => Board::with_seed(cfg.size, seed.wrapping_add(i as u64))?,
                None => Board::new(cfg.size)?,
            };
            let mut policy = Lookahead::with_config(cfg.lookahead.clone());
            let summary = play_game(&mut board, &mut policy, cfg.max_moves, |_| {});
            pb.inc(1);
            pb.set_message(format!("last score: {}", summary.score));
            Ok(summary)
        })
        .collect::<anyhow::Result<_>>()?;
    pb.finish_and_clear();

    let report = summarize(runs, start.elapsed().as_secs_f64());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Games: {} | best score: {} | mean score: {:.1} | moves: {} | {:.1}s",
            report.games, report.best_score, report.mean_score, report.total_moves, report.elapsed_s
        );
        for (tile, count) in &report.max_tiles {
            println!("{tile:>6}: {count}");
        }
    }
    Ok(())
}

fn summarize(runs: Vec<GameSummary>, elapsed_s: f64) -> Report {
    let mut max_tiles = BTreeMap::new();
    for run in &runs {
        *max_tiles.entry(run.max_value).or_insert(0) += 1;
    }
    let total_score: u64 = runs.iter().map(|r| r.score).sum();
    Report {
        games: runs.len(),
        elapsed_s,
        best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
        mean_score: if runs.is_empty() { 0.0 } else { total_score as f64 / runs.len() as f64 },
        total_moves: runs.iter().map(|r| r.moves).sum(),
        max_tiles,
        runs,
    }
}
