//! Look-ahead move selection (single-threaded and parallel) over board snapshots.
//!
//! Both searches only ever touch [`Board::copy`] snapshots: max nodes probe each
//! direction with [`Board::shift`], chance nodes place a 2 or 4 in every free
//! cell with [`Board::spawn_at`]. The board handed in is never mutated.
//!
//! Quick start
//! ```
//! use slide_2048::engine::Board;
//! use slide_2048::lookahead::{Lookahead, LookaheadConfig, LookaheadParallel};
//!
//! let board = Board::with_seed(4, 123).unwrap();
//! let cfg = LookaheadConfig { depth_cap: Some(1), ..Default::default() };
//!
//! let mut seq = Lookahead::with_config(cfg.clone());
//! assert!(seq.best_move(&board).is_some());
//!
//! let mut par = LookaheadParallel::with_config(cfg);
//! assert!(par.best_move(&board).is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::{Board, Direction, FOUR_PROBABILITY};

mod heuristic;
mod search_par;
mod search_seq;

pub use search_par::LookaheadParallel;
pub use search_seq::Lookahead;

/// Configurable knobs for the look-ahead search.
///
/// - `prob_cutoff`: prune chance branches when cumulative probability falls below this value.
/// - `depth_cap`: optional hard cap for the dynamic depth.
/// - `cache_enabled`: enable/disable transposition table usage.
/// - `par_thresholds`: thresholds used only by the parallel implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookaheadConfig {
    pub prob_cutoff: f32,
    pub depth_cap: Option<u64>,
    pub cache_enabled: bool,
    pub par_thresholds: ParThresholds,
}

impl Default for LookaheadConfig {
    fn default() -> Self {
        Self { prob_cutoff: 1e-4, depth_cap: Some(3), cache_enabled: true, par_thresholds: ParThresholds::default() }
    }
}

/// Thresholds used to balance parallel overheads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParThresholds {
    pub max_par_depth: u64,
    pub par_depth: u64,
    pub par_slots: usize,
    pub cache_min_depth: u64,
}

impl Default for ParThresholds {
    fn default() -> Self {
        Self { max_par_depth: 2, par_depth: 2, par_slots: 6, cache_min_depth: 1 }
    }
}

/// Per-branch expected value at the root.
///
/// `legal` is false when the move is a no-op for the current board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchEval {
    pub dir: Direction,
    pub ev: f64,
    pub legal: bool,
}

impl BranchEval {
    fn illegal(dir: Direction) -> Self {
        BranchEval { dir, ev: 0.0, legal: false }
    }
}

/// Basic search stats for a single evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub peak_nodes: u64,
}

#[derive(Clone, Copy)]
struct TranspositionEntry {
    score: f64,
    move_depth: u64,
}

const TWO_PROBABILITY: f64 = 1.0 - FOUR_PROBABILITY;

fn compute_depth(cfg: &LookaheadConfig, board: &Board) -> u64 {
    let dyn_depth = 3.max(heuristic::count_unique(board).saturating_sub(2));
    match cfg.depth_cap {
        Some(cap) => dyn_depth.min(cap.max(1)),
        None => dyn_depth,
    }
}

/// Board after sliding in `dir`, or `None` if the slide changes nothing.
fn after_shift(board: &Board, dir: Direction) -> Option<Board> {
    // Search nodes never spawn randomly, so the cheap clone is enough.
    let mut next = board.clone();
    next.shift(dir).success.then_some(next)
}

/// Board with `value` placed in the free cell at `cell`.
fn with_tile(board: &Board, cell: crate::engine::Cell, value: u64) -> Board {
    let mut next = board.clone();
    next.spawn_at(cell.row, cell.col, value);
    next
}

/// Legal directions from best to worst expected value.
fn rank(branches: &[BranchEval; 4]) -> Vec<Direction> {
    let mut legal: Vec<BranchEval> = branches.iter().copied().filter(|b| b.legal).collect();
    legal.sort_by(|a, b| b.ev.partial_cmp(&a.ev).unwrap_or(std::cmp::Ordering::Equal));
    legal.into_iter().map(|b| b.dir).collect()
}

/// Bench-only: expose the raw heuristic value for a board.
#[cfg(feature = "bench-internal")]
#[inline]
pub fn heuristic_value(board: &Board) -> f64 {
    heuristic::get_heuristic_score(board)
}
