use std::sync::atomic::{AtomicU64, Ordering};

use ahash::RandomState as AHasher;
use dashmap::DashMap;
use log::debug;
use rayon::prelude::*;

use crate::engine::{Board, Cell, Direction, FOUR_PROBABILITY};

use super::heuristic::get_heuristic_score;
use super::{
    after_shift, compute_depth, rank, with_tile, BranchEval, LookaheadConfig, ParThresholds, SearchStats,
    TranspositionEntry, TWO_PROBABILITY,
};

type Table = DashMap<Vec<u64>, TranspositionEntry, AHasher>;

#[derive(Clone, Copy)]
enum Node {
    Max,
    Chance,
}

/// Parallel expectimax using rayon and a shared `DashMap` transposition table.
///
/// Every task works on its own board snapshot; only the table is shared.
pub struct LookaheadParallel {
    cfg: LookaheadConfig,
    stats: SearchStats,
}

impl LookaheadParallel {
    pub fn new() -> Self {
        Self::with_config(LookaheadConfig::default())
    }

    pub fn with_config(cfg: LookaheadConfig) -> Self {
        Self { cfg, stats: SearchStats::default() }
    }

    /// Best direction by expected value; wraps [`Self::branch_evals`].
    #[inline]
    pub fn best_move(&mut self, board: &Board) -> Option<Direction> {
        self.best_move_with_branches(board).0
    }

    /// Best move together with every branch evaluation.
    pub fn best_move_with_branches(&mut self, board: &Board) -> (Option<Direction>, [BranchEval; 4]) {
        let branches = self.branch_evals(board);
        let best_move = rank(&branches).first().copied();
        (best_move, branches)
    }

    /// EV for each direction in order `[Up, Down, Left, Right]`, evaluated in parallel.
    pub fn branch_evals(&mut self, board: &Board) -> [BranchEval; 4] {
        let depth = compute_depth(&self.cfg, board);
        let map: Table = DashMap::with_hasher(AHasher::new());
        let nodes = AtomicU64::new(0);
        let evaluated: Vec<BranchEval> = Direction::ALL
            .par_iter()
            .map(|&dir| match after_shift(board, dir) {
                Some(next) => {
                    let ev = self.expectimax_parallel(&next, Node::Chance, depth, 1.0, &map, &nodes);
                    BranchEval { dir, ev, legal: true }
                }
                None => BranchEval::illegal(dir),
            })
            .collect();
        let mut out = Direction::ALL.map(BranchEval::illegal);
        for be in evaluated {
            out[be.dir.index()] = be;
        }
        let count = nodes.load(Ordering::Relaxed);
        self.stats.nodes = count;
        self.stats.peak_nodes = self.stats.peak_nodes.max(count);
        debug!("parallel lookahead visited {count} nodes");
        out
    }

    /// Legal directions from best to worst.
    pub fn ranked_moves(&mut self, board: &Board) -> Vec<Direction> {
        rank(&self.branch_evals(board))
    }

    /// EV at the root, equivalent to the best branch EV (0 if no legal move).
    pub fn state_value(&mut self, board: &Board) -> f64 {
        self.branch_evals(board)
            .iter()
            .filter(|branch| branch.legal)
            .map(|branch| branch.ev)
            .fold(None, |acc: Option<f64>, ev| Some(acc.map_or(ev, |a| a.max(ev))))
            .unwrap_or(0.0)
    }

    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    fn expectimax_parallel(
        &self,
        board: &Board,
        node: Node,
        move_depth: u64,
        cum_prob: f32,
        map: &Table,
        nodes: &AtomicU64,
    ) -> f64 {
        nodes.fetch_add(1, Ordering::Relaxed);
        match node {
            Node::Max => self.evaluate_max_parallel(board, move_depth, cum_prob, map, nodes),
            Node::Chance => self.evaluate_chance_parallel(board, move_depth, cum_prob, map, nodes),
        }
    }

    fn evaluate_max_parallel(&self, board: &Board, move_depth: u64, cum_prob: f32, map: &Table, nodes: &AtomicU64) -> f64 {
        let ParThresholds { max_par_depth, .. } = self.cfg.par_thresholds;
        let branch = |dir: Direction| match after_shift(board, dir) {
            Some(next) => self.expectimax_parallel(&next, Node::Chance, move_depth, cum_prob, map, nodes),
            None => 0.0,
        };
        if move_depth >= max_par_depth {
            Direction::ALL.par_iter().map(|&dir| branch(dir)).reduce(|| 0.0, f64::max)
        } else {
            Direction::ALL.iter().fold(0.0, |acc, &dir| acc.max(branch(dir)))
        }
    }

    fn evaluate_chance_parallel(
        &self,
        board: &Board,
        move_depth: u64,
        cum_prob: f32,
        map: &Table,
        nodes: &AtomicU64,
    ) -> f64 {
        if move_depth == 0 || cum_prob < self.cfg.prob_cutoff {
            return get_heuristic_score(board);
        }
        if self.cfg.cache_enabled {
            if let Some(entry) = map.get(board.cells()) {
                if entry.move_depth >= move_depth {
                    return entry.score;
                }
            }
        }
        let slots: Vec<Cell> = board.free_cells().collect();
        if slots.is_empty() {
            return get_heuristic_score(board);
        }
        let base_prob = cum_prob / slots.len() as f32;
        let spawn_value = |cell: Cell| {
            let two = with_tile(board, cell, 2);
            let s2 = self.expectimax_parallel(&two, Node::Max, move_depth - 1, base_prob * TWO_PROBABILITY as f32, map, nodes);
            let four = with_tile(board, cell, 4);
            let s4 = self.expectimax_parallel(&four, Node::Max, move_depth - 1, base_prob * FOUR_PROBABILITY as f32, map, nodes);
            s2 * TWO_PROBABILITY + s4 * FOUR_PROBABILITY
        };
        let ParThresholds { par_depth, par_slots, cache_min_depth, .. } = self.cfg.par_thresholds;
        let sum: f64 = if move_depth >= par_depth && slots.len() >= par_slots {
            slots.par_iter().map(|&cell| spawn_value(cell)).sum()
        } else {
            slots.iter().map(|&cell| spawn_value(cell)).sum()
        };
        let score = sum / slots.len() as f64;
        if self.cfg.cache_enabled && move_depth >= cache_min_depth {
            map.insert(board.cells().to_vec(), TranspositionEntry { score, move_depth });
        }
        score
    }
}

impl Default for LookaheadParallel {
    fn default() -> Self {
        Self::new()
    }
}
