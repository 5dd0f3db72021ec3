//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game core, terminal rendering, input mapping).
//!
//! # Board Conventions
//!
//! The board is a square N x N grid (4 x 4 by default). Cells hold `0` for
//! empty or a power-of-two tile value. Cells are addressed `(row, col)` with
//! row 0 at the top and col 0 on the left.
//!
//! # Direction Model
//!
//! Every directional move is expressed as "rotate, slide left, rotate back".
//! Each [`Direction`] therefore carries a fixed number of counter-clockwise
//! quarter turns to apply before compressing rows toward column 0:
//!
//! | Direction | Quarter turns |
//! |-----------|---------------|
//! | `Left`    | 0 |
//! | `Up`      | 1 |
//! | `Right`   | 2 |
//! | `Down`    | 3 |
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Direction, GameAction, GameStatus, DEFAULT_BOARD_SIZE};
//!
//! assert_eq!(Direction::Left.rotations(), 0);
//! assert_eq!(Direction::Up.rotations(), 1);
//!
//! let action = GameAction::Move(Direction::Right);
//! assert_eq!(action, GameAction::Move(Direction::Right));
//!
//! assert!(GameStatus::Won.is_terminal());
//! assert!(!GameStatus::Playing.is_terminal());
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! ```

/// Default board size (4 columns x 4 rows)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Default winning tile value
pub const DEFAULT_WIN_TILE: u32 = 2048;

/// Candidate values for a spawned tile, chosen uniformly at random
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Number of tiles placed when a game starts
pub const STARTING_TILES: usize = 2;

/// The four slide directions
///
/// A move slides every tile as far as it can go in one direction and merges
/// adjacent equal pairs along the way. Directions are a closed set: there is
/// no way to request an unrecognized direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a fixed scan order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Counter-clockwise quarter turns that map this direction onto "slide left"
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Direction;
    ///
    /// assert_eq!(Direction::Left.rotations(), 0);
    /// assert_eq!(Direction::Up.rotations(), 1);
    /// assert_eq!(Direction::Right.rotations(), 2);
    /// assert_eq!(Direction::Down.rotations(), 3);
    /// ```
    pub fn rotations(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle phase of a game
///
/// - **Playing**: moves are accepted
/// - **Won**: the winning tile is on the board
/// - **Over**: the board is full and no merge is possible
///
/// `Won` and `Over` are terminal: moves are ignored until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Over,
}

impl GameStatus {
    /// True for `Won` and `Over` (the states that lock further moves)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Game actions that can be applied to modify game state
///
/// Produced by the input layer from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide the board in one direction
    Move(Direction),
    /// Start a fresh game with the same size and winning tile
    Restart,
}
