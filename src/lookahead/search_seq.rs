use std::collections::HashMap;

use log::debug;

use crate::engine::{Board, Direction};

use super::heuristic::get_heuristic_score;
use super::{after_shift, compute_depth, rank, with_tile, BranchEval, LookaheadConfig, SearchStats, TranspositionEntry, TWO_PROBABILITY};
use crate::engine::FOUR_PROBABILITY;

type Table = HashMap<Vec<u64>, TranspositionEntry>;

enum Node {
    Max,
    Chance,
}

/// Single-threaded expectimax over board snapshots.
pub struct Lookahead {
    cfg: LookaheadConfig,
    stats: SearchStats,
}

impl Lookahead {
    pub fn new() -> Self {
        Self::with_config(LookaheadConfig::default())
    }

    pub fn with_config(cfg: LookaheadConfig) -> Self {
        Self { cfg, stats: SearchStats::default() }
    }

    /// Best direction by expected value, or `None` if no move changes the board.
    ///
    /// ```
    /// use slide_2048::engine::{Board, Direction};
    /// use slide_2048::lookahead::Lookahead;
    /// let board = Board::from_rows(&[[2, 2, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
    /// let mut ex = Lookahead::new();
    /// assert!(ex.best_move(&board).is_some());
    /// ```
    pub fn best_move(&mut self, board: &Board) -> Option<Direction> {
        let mut map = Table::new();
        let mut state_count = 0u64;
        let depth = compute_depth(&self.cfg, board);
        let result = self.expectimax(board, Node::Max, depth, 1.0, &mut map, &mut state_count);
        self.record(state_count);
        result.move_dir
    }

    /// EV for each direction in order `[Up, Down, Left, Right]`; no-op moves
    /// are marked `legal = false`.
    pub fn branch_evals(&mut self, board: &Board) -> [BranchEval; 4] {
        let depth = compute_depth(&self.cfg, board);
        let mut map = Table::new();
        let mut state_count = 0u64;
        let out = Direction::ALL.map(|dir| match after_shift(board, dir) {
            Some(next) => {
                let ev = self.expectimax(&next, Node::Chance, depth, 1.0, &mut map, &mut state_count).score;
                BranchEval { dir, ev, legal: true }
            }
            None => BranchEval::illegal(dir),
        });
        self.record(state_count);
        out
    }

    /// Legal directions from best to worst.
    pub fn ranked_moves(&mut self, board: &Board) -> Vec<Direction> {
        rank(&self.branch_evals(board))
    }

    /// EV at the root (max node), equivalent to the best branch EV.
    pub fn state_value(&mut self, board: &Board) -> f64 {
        let mut map = Table::new();
        let mut state_count = 0u64;
        let depth = compute_depth(&self.cfg, board);
        let res = self.expectimax(board, Node::Max, depth, 1.0, &mut map, &mut state_count);
        self.record(state_count);
        res.score
    }

    /// Statistics from the last call to [`Self::best_move`],
    /// [`Self::branch_evals`] or [`Self::state_value`].
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    fn record(&mut self, state_count: u64) {
        self.stats.nodes = state_count;
        self.stats.peak_nodes = self.stats.peak_nodes.max(state_count);
        debug!("lookahead visited {state_count} nodes");
    }

    fn expectimax(
        &self,
        board: &Board,
        node: Node,
        move_depth: u64,
        cum_prob: f32,
        map: &mut Table,
        state_count: &mut u64,
    ) -> SearchResult {
        *state_count += 1;
        match node {
            Node::Max => self.evaluate_max(board, move_depth, cum_prob, map, state_count),
            Node::Chance => self.evaluate_chance(board, move_depth, cum_prob, map, state_count),
        }
    }

    fn evaluate_max(
        &self,
        board: &Board,
        move_depth: u64,
        cum_prob: f32,
        map: &mut Table,
        state_count: &mut u64,
    ) -> SearchResult {
        let mut best_score = 0.0;
        let mut best_move = None;
        for direction in Direction::ALL {
            if let Some(next) = after_shift(board, direction) {
                let score = self.expectimax(&next, Node::Chance, move_depth, cum_prob, map, state_count).score;
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(direction);
                }
            }
        }
        SearchResult { score: best_score, move_dir: best_move }
    }

    fn evaluate_chance(
        &self,
        board: &Board,
        move_depth: u64,
        cum_prob: f32,
        map: &mut Table,
        state_count: &mut u64,
    ) -> SearchResult {
        if move_depth == 0 || cum_prob < self.cfg.prob_cutoff {
            return SearchResult { score: get_heuristic_score(board), move_dir: None };
        }
        if self.cfg.cache_enabled {
            if let Some(entry) = map.get(board.cells()) {
                if entry.move_depth >= move_depth {
                    return SearchResult { score: entry.score, move_dir: None };
                }
            }
        }
        let free: Vec<_> = board.free_cells().collect();
        if free.is_empty() {
            return SearchResult { score: get_heuristic_score(board), move_dir: None };
        }
        let base_prob = cum_prob / free.len() as f32;
        let mut score = 0.0;
        for &cell in &free {
            let two = with_tile(board, cell, 2);
            score += self
                .expectimax(&two, Node::Max, move_depth - 1, base_prob * TWO_PROBABILITY as f32, map, state_count)
                .score
                * TWO_PROBABILITY;
            let four = with_tile(board, cell, 4);
            score += self
                .expectimax(&four, Node::Max, move_depth - 1, base_prob * FOUR_PROBABILITY as f32, map, state_count)
                .score
                * FOUR_PROBABILITY;
        }
        score /= free.len() as f64;
        if self.cfg.cache_enabled {
            map.insert(board.cells().to_vec(), TranspositionEntry { score, move_depth });
        }
        SearchResult { score, move_dir: None }
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchResult {
    score: f64,
    move_dir: Option<Direction>,
}

impl Default for Lookahead {
    fn default() -> Self {
        Self::new()
    }
}
