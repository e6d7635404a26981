use serde::{Deserialize, Serialize};
use std::fmt;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in canonical order `[Up, Down, Left, Right]`.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Position of this direction in [`Direction::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Map a line/index pair to an absolute cell on a `size`-wide board.
    ///
    /// Index 0 is always the cell on the edge tiles slide toward. Rows are the
    /// lines for `Left`/`Right`, columns for `Up`/`Down`.
    ///
    /// ```
    /// use slide_2048::engine::{Cell, Direction};
    /// assert_eq!(Direction::Right.cell(4, 1, 0), Cell::new(1, 3));
    /// assert_eq!(Direction::Down.cell(4, 2, 0), Cell::new(3, 2));
    /// ```
    #[inline]
    pub fn cell(self, size: usize, line: usize, index: usize) -> Cell {
        debug_assert!(line < size && index < size);
        match self {
            Direction::Left => Cell::new(line, index),
            Direction::Right => Cell::new(line, size - 1 - index),
            Direction::Up => Cell::new(index, line),
            Direction::Down => Cell::new(size - 1 - index, line),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Absolute board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Row-major offset on a `size`-wide board.
    #[inline]
    pub const fn offset(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub const fn from_offset(offset: usize, size: usize) -> Self {
        Cell { row: offset / size, col: offset % size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mapping_is_bijective_for_every_direction() {
        for size in 3..=8 {
            for dir in Direction::ALL {
                let mut seen = HashSet::new();
                for line in 0..size {
                    for index in 0..size {
                        let cell = dir.cell(size, line, index);
                        assert!(cell.row < size && cell.col < size);
                        assert!(seen.insert(cell), "{dir} maps two slots to {cell:?}");
                    }
                }
                assert_eq!(seen.len(), size * size);
            }
        }
    }

    #[test]
    fn index_zero_is_target_edge() {
        let n = 5;
        for line in 0..n {
            assert_eq!(Direction::Left.cell(n, line, 0).col, 0);
            assert_eq!(Direction::Right.cell(n, line, 0).col, n - 1);
            assert_eq!(Direction::Up.cell(n, line, 0).row, 0);
            assert_eq!(Direction::Down.cell(n, line, 0).row, n - 1);
        }
    }

    #[test]
    fn offset_roundtrip() {
        let c = Cell::new(2, 3);
        assert_eq!(Cell::from_offset(c.offset(6), 6), c);
    }
}
