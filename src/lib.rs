//! slide-2048: an N×N sliding-tile merge game engine + look-ahead player
//!
//! This crate provides:
//! - A `Board` (3 ≤ N ≤ 8) with move, spawn, reset, copy and game-over checks (`engine`)
//! - Move events (moved / stayed / spawned) returned from every move for renderers
//! - An expectimax player over board snapshots, sequential and parallel (`lookahead`)
//! - A frame-driven animation state machine for front ends (`animation`)
//!
//! Quick start:
//! ```
//! use slide_2048::engine::{Board, Direction, MoveEvent};
//!
//! let mut board = Board::with_seed(4, 42).unwrap();
//! for dir in Direction::ALL {
//!     let result = board.do_move(dir);
//!     if result.success {
//!         // Exactly one spawn follows every successful move.
//!         assert!(matches!(result.events.last(), Some(MoveEvent::Spawned { .. })));
//!     }
//! }
//! assert!(board.check_continue());
//! ```
//!
//! Speculative evaluation works on copies; the canonical board is untouched:
//! ```
//! use slide_2048::engine::{Board, Direction};
//!
//! let board = Board::with_seed(4, 7).unwrap();
//! let legal: Vec<Direction> = Direction::ALL
//!     .into_iter()
//!     .filter(|&d| board.copy().do_move(d).success)
//!     .collect();
//! assert!(!legal.is_empty());
//! assert_eq!(board.score(), 0);
//! ```
//!
pub mod animation;
pub mod config;
pub mod engine;
pub mod lookahead;
pub mod play;
