//! Renderer-side move animation state, driven purely by the events a move returns.
//!
//! The engine never knows about frames. A front end owns an [`Animator`],
//! forwards input through [`Animator::submit`], calls [`Animator::tick`] once
//! per frame and draws [`Animator::sprites`].

use serde::Serialize;

use crate::engine::{Board, Cell, Direction, MoveEvent};

/// Where the front end is between inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Accepting input.
    Idle,
    /// Interpolating the last move; input is ignored.
    Animating { frame: u32 },
    /// No further move is possible; only a restart is accepted.
    GameOver,
}

/// A tile to draw at a (possibly fractional) grid position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub row: f32,
    pub col: f32,
    pub value: u64,
}

#[derive(Debug, Clone, Copy)]
struct Track {
    from: Cell,
    to: Cell,
    value: u64,
}

#[derive(Debug, Clone)]
pub struct Animator {
    frames_per_move: u32,
    phase: Phase,
    tracks: Vec<Track>,
    spawned: Option<(Cell, u64)>,
    ends_game: bool,
}

impl Animator {
    pub fn new(frames_per_move: u32) -> Self {
        Animator {
            frames_per_move: frames_per_move.max(1),
            phase: Phase::Idle,
            tracks: Vec::new(),
            spawned: None,
            ends_game: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cell and value of the tile spawned by the last accepted move.
    #[inline]
    pub fn spawned(&self) -> Option<(Cell, u64)> {
        self.spawned
    }

    /// Apply `direction` to `board` if idle. Returns true if the board moved.
    pub fn submit(&mut self, board: &mut Board, direction: Direction) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        let result = board.do_move(direction);
        if !result.success {
            return false;
        }
        self.load_tracks(board, direction, &result.events);
        self.spawned = result.spawned();
        self.ends_game = !board.check_continue();
        self.phase = Phase::Animating { frame: 0 };
        true
    }

    /// Advance one frame and return the resulting phase.
    pub fn tick(&mut self) -> Phase {
        if let Phase::Animating { frame } = self.phase {
            let frame = frame + 1;
            self.phase = if frame < self.frames_per_move {
                Phase::Animating { frame }
            } else {
                self.tracks.clear();
                if self.ends_game { Phase::GameOver } else { Phase::Idle }
            };
        }
        self.phase
    }

    /// Reset `board` and return to idle; refused while animating.
    pub fn restart(&mut self, board: &mut Board) -> bool {
        if matches!(self.phase, Phase::Animating { .. }) {
            return false;
        }
        board.reset();
        self.phase = Phase::Idle;
        self.tracks.clear();
        self.spawned = None;
        self.ends_game = false;
        true
    }

    /// Tiles to draw this frame. While animating these are the interpolated
    /// pre-move tiles; otherwise every tile of `board` at rest.
    pub fn sprites(&self, board: &Board) -> Vec<Sprite> {
        match self.phase {
            Phase::Animating { frame } => {
                let t = frame as f32 / self.frames_per_move as f32;
                self.tracks
                    .iter()
                    .map(|tr| Sprite {
                        row: lerp(tr.from.row, tr.to.row, t),
                        col: lerp(tr.from.col, tr.to.col, t),
                        value: tr.value,
                    })
                    .collect()
            }
            Phase::Idle | Phase::GameOver => board
                .rows()
                .enumerate()
                .flat_map(|(r, row)| {
                    row.iter().enumerate().filter(|(_, &v)| v != 0).map(move |(c, &v)| Sprite {
                        row: r as f32,
                        col: c as f32,
                        value: v,
                    })
                })
                .collect(),
        }
    }

    fn load_tracks(&mut self, board: &Board, direction: Direction, events: &[MoveEvent]) {
        let size = board.size();
        // Keyed by source cell: a tile that first stayed and then merged keeps only its move.
        let mut by_source: Vec<Option<Track>> = vec![None; size * size];
        for event in events {
            match *event {
                MoveEvent::Moved { source, .. } => {
                    if let Some((from, to)) = event.moved_cells(direction, size) {
                        by_source[from.offset(size)] = Some(Track { from, to, value: source });
                    }
                }
                MoveEvent::Stayed { line, slot } => {
                    let cell = direction.cell(size, line, slot);
                    let slot = &mut by_source[cell.offset(size)];
                    if slot.is_none() {
                        *slot = Some(Track { from: cell, to: cell, value: board.get(cell.row, cell.col) });
                    }
                }
                MoveEvent::Spawned { .. } => {}
            }
        }
        self.tracks = by_source.into_iter().flatten().collect();
    }
}

#[inline]
fn lerp(from: usize, to: usize, t: f32) -> f32 {
    from as f32 + (to as f32 - from as f32) * t
}
