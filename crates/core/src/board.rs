//! Board module - manages the game grid
//!
//! The board is a square N x N grid where each cell is empty (0) or holds a
//! power-of-two tile value. Cells live in a flat buffer, row-major order, for
//! better cache locality.
//! Boards are immutable values: every transformation produces a new board, so
//! callers can compare before and after to detect a no-op move.

use std::fmt;

use crate::error::GameError;

/// The game grid - a square N x N board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) size: usize,
    /// Flat array of tiles, row-major order (row * size + col)
    pub(crate) cells: Vec<u32>,
}

impl Board {
    /// Create a new empty board of the given size
    ///
    /// Rejects size 0 with [`GameError::InvalidSize`].
    pub fn empty(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a board from explicit rows (for tests, tools, and literals)
    ///
    /// Rejects empty or ragged input with [`GameError::NotSquare`] and cell
    /// values that are neither 0 nor a power of two (>= 2) with
    /// [`GameError::InvalidTile`].
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::NotSquare {
                    rows: size,
                    width: row.len(),
                });
            }
            for &value in row {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(GameError::InvalidTile(value));
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Board edge length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Get the tile at (row, col), or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Get a reference to the internal flat cell array
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate the board row by row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// An empty board of the same size (used when restarting)
    pub fn cleared(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![0; self.cells.len()],
        }
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Largest tile on the board (0 when the board is empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if any cell is empty
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|&v| v == 0)
    }

    /// True if some cell holds exactly `value`
    ///
    /// This is the win check: it ignores how full the board is, so a full
    /// board that contains the winning tile still reports a win.
    pub fn has_tile(&self, value: u32) -> bool {
        self.cells.iter().any(|&v| v == value)
    }

    /// True when the board is stuck: no empty cell and no merge available
    pub fn is_game_over(&self) -> bool {
        if self.has_empty_cell() {
            return false;
        }
        !self.has_adjacent_pair()
    }

    /// Check for a horizontally or vertically adjacent equal pair.
    /// Only meaningful on a full board (adjacent zeros would count as equal).
    fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let v = self.cells[row * n + col];
                if col + 1 < n && self.cells[row * n + col + 1] == v {
                    return true;
                }
                if row + 1 < n && self.cells[(row + 1) * n + col] == v {
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for row in self.rows() {
            for (i, &value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
