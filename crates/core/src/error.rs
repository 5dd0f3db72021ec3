//! Error taxonomy for board and game construction.
//!
//! Movement, spawning, and terminal-state checks are total functions; errors
//! only arise when building a board or game from outside input.

/// Errors that can occur when constructing a board or game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size must be at least 1")]
    InvalidSize,

    #[error("winning tile must be a power of two of at least 2, got {0}")]
    InvalidTarget(u32),

    #[error("expected a square grid, got {rows} rows and a row of width {width}")]
    NotSquare { rows: usize, width: usize },

    #[error("tile value must be 0 or a power of two, got {0}")]
    InvalidTile(u32),
}
