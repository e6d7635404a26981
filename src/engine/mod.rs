//! Engine module: N×N sliding-tile board, the per-line compaction pass and
//! the free-cell index used for spawning.
//!
//! - `Board` owns the grid, score, max value and free cells.
//! - `compact_line` is the pure slide/merge pass over one oriented line.
//! - Moves return their events (`MoveEvent`) directly to the caller.

mod board;
mod direction;
mod error;
mod event;
mod free_cells;
mod line;

pub use board::Board;
pub use direction::{Cell, Direction};
pub use error::EngineError;
pub use event::{MoveEvent, MoveResult};
pub use line::{compact_line, LineOutcome};

/// Smallest supported board side.
pub const MIN_SIZE: usize = 3;
/// Largest supported board side.
pub const MAX_SIZE: usize = 8;
/// Chance a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.05;
