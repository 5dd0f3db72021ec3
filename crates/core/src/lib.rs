//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for 2048.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces an identical tile stream
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with queries for emptiness, merges, and game over
//! - [`moves`]: Row compression and the rotation-based direction model
//! - [`spawn`]: Random tile placement on empty cells
//! - [`game`]: Complete game state tying moves, spawns, scoring, and status
//! - [`error`]: Construction and validation errors
//!
//! # Game Rules
//!
//! This implementation follows the classic 2048 rules:
//!
//! - **Slide**: Tiles slide as far as possible toward the chosen edge
//! - **Merge**: Adjacent equal tiles merge once per move, front to back
//! - **Spawn**: Every effective move drops a 2 or a 4 (even odds) on a
//!   random empty cell
//! - **Score**: Each merge scores the value of the tile it creates
//! - **Win**: Reaching the target tile (2048 by default) wins immediately
//! - **Lose**: A full board with no adjacent equal pair ends the game
//!
//! # Example
//!
//! ```
//! use twenty48_core::Game;
//! use twenty48_types::{Direction, GameStatus};
//!
//! // Create a seeded game on the standard 4x4 board
//! let mut game = Game::new(4, 12345).unwrap();
//! assert_eq!(game.board().tile_count(), 2);
//!
//! // A fresh board always has at least one effective direction
//! assert!(Direction::ALL.iter().any(|&d| game.apply(d).moved));
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod spawn;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GameError;
pub use game::{Game, MoveOutcome};
pub use moves::compress_line;
