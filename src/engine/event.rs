use serde::{Deserialize, Serialize};

use super::direction::{Cell, Direction};

/// What happened to a tile during one move.
///
/// `line`/`from`/`to`/`slot` are Line View coordinates for the move's
/// direction; decode them with [`Direction::cell`] (or
/// [`crate::engine::Board::cell_for`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEvent {
    /// Tile at `from` ended at `to`. Merges emit two of these back to back
    /// with the same `to` and `result == 2 * source`.
    Moved { line: usize, from: usize, to: usize, source: u64, result: u64 },
    /// Tile at `slot` kept its position (it preceded every gap and merge).
    Stayed { line: usize, slot: usize },
    /// New tile written at `cell`.
    Spawned { cell: Cell, value: u64 },
}

impl MoveEvent {
    /// Absolute (from, to) cells of a `Moved` event for `direction`.
    pub fn moved_cells(&self, direction: Direction, size: usize) -> Option<(Cell, Cell)> {
        match *self {
            MoveEvent::Moved { line, from, to, .. } => {
                Some((direction.cell(size, line, from), direction.cell(size, line, to)))
            }
            _ => None,
        }
    }
}

/// Outcome of [`crate::engine::Board::do_move`] / [`crate::engine::Board::shift`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub direction: Direction,
    /// True iff at least one line changed.
    pub success: bool,
    /// Sum of merge results produced by this move.
    pub score_gained: u64,
    /// Line events in line order, then the spawn event if any.
    pub events: Vec<MoveEvent>,
}

impl MoveResult {
    pub(crate) fn noop(direction: Direction) -> Self {
        MoveResult { direction, success: false, score_gained: 0, events: Vec::new() }
    }

    /// One value per merge performed, in event order.
    pub fn merged_values(&self) -> Vec<u64> {
        // Merge events come in adjacent pairs and are the only ones where the value changes.
        self.events
            .iter()
            .filter_map(|e| match *e {
                MoveEvent::Moved { source, result, .. } if result != source => Some(result),
                _ => None,
            })
            .step_by(2)
            .collect()
    }

    /// The spawn event, if this move spawned a tile.
    pub fn spawned(&self) -> Option<(Cell, u64)> {
        self.events.iter().rev().find_map(|e| match *e {
            MoveEvent::Spawned { cell, value } => Some((cell, value)),
            _ => None,
        })
    }
}
