//! Game loop shared by the binaries: ask a policy for a move, apply it, repeat.

use log::debug;
use serde::Serialize;

use crate::engine::{Board, Direction};
use crate::lookahead::{Lookahead, LookaheadParallel};

/// Anything that can pick a move for a board without mutating it.
pub trait Policy {
    fn choose(&mut self, board: &Board) -> Option<Direction>;
}

impl Policy for Lookahead {
    fn choose(&mut self, board: &Board) -> Option<Direction> {
        self.best_move(board)
    }
}

impl Policy for LookaheadParallel {
    fn choose(&mut self, board: &Board) -> Option<Direction> {
        self.best_move(board)
    }
}

/// Final numbers of one finished (or truncated) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub size: usize,
    pub moves: u64,
    pub score: u64,
    pub max_value: u64,
}

/// Play `board` until no move is possible, the policy gives up, or `max_moves`
/// successful moves were made. `on_move` sees the board after every move.
///
/// ```
/// use slide_2048::engine::Board;
/// use slide_2048::lookahead::{Lookahead, LookaheadConfig};
/// use slide_2048::play::play_game;
/// let mut board = Board::with_seed(4, 1).unwrap();
/// let mut policy = Lookahead::with_config(LookaheadConfig { depth_cap: Some(1), ..Default::default() });
/// let summary = play_game(&mut board, &mut policy, Some(5), |_| {});
/// assert_eq!(summary.moves, 5);
/// ```
pub fn play_game<P, F>(board: &mut Board, policy: &mut P, max_moves: Option<u64>, mut on_move: F) -> GameSummary
where
    P: Policy + ?Sized,
    F: FnMut(&Board),
{
    let mut moves = 0u64;
    while board.check_continue() {
        if max_moves.is_some_and(|limit| moves >= limit) {
            break;
        }
        let Some(direction) = policy.choose(board) else {
            break;
        };
        let result = board.do_move(direction);
        if !result.success {
            debug!("policy picked no-op move {direction}; stopping");
            break;
        }
        moves += 1;
        on_move(board);
    }
    GameSummary { size: board.size(), moves, score: board.score(), max_value: board.max_value() }
}
