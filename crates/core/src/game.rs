//! Game state module - the move/spawn cycle, scoring, and win/lose rules.
//!
//! `Game` ties the pure board operations to a seeded RNG. Every effective
//! move scores its merges, drops one random tile, and re-derives the status;
//! a terminal status locks the board until restart.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twenty48_types::{Direction, GameStatus, DEFAULT_WIN_TILE, STARTING_TILES};

use crate::board::Board;
use crate::error::GameError;

/// What a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True when the move changed the board (and therefore spawned a tile).
    pub moved: bool,
    /// Points scored by this move's merges.
    pub score_delta: u32,
    /// Status after the move and spawn settled.
    pub status: GameStatus,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    score: u32,
    target: u32,
    status: GameStatus,
    rng: ChaCha8Rng,
}

impl Game {
    /// Create a game on a `size` x `size` board with the standard 2048 win
    /// target. The seed fixes the whole tile stream, so equal seeds replay
    /// identical games.
    pub fn new(size: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_target(size, DEFAULT_WIN_TILE, seed)
    }

    /// Create a game with a custom win target, which must be a power of two
    /// of at least 2.
    pub fn with_target(size: usize, target: u32, seed: u64) -> Result<Self, GameError> {
        if target < 2 || !target.is_power_of_two() {
            return Err(GameError::InvalidTarget(target));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = Board::empty(size)?;
        for _ in 0..STARTING_TILES {
            board = board.with_random_tile(&mut rng);
        }
        let status = derive_status(&board, target);

        Ok(Self {
            board,
            score: 0,
            target,
            status,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn has_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Apply one move. An effective move scores its merges, spawns one random
    /// tile, and re-derives the status; an ineffective move changes nothing,
    /// not even the RNG. Once the status is terminal every move is ignored
    /// until [`Game::restart`].
    pub fn apply(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_terminal() {
            return MoveOutcome {
                moved: false,
                score_delta: 0,
                status: self.status,
            };
        }

        let (shifted, score_delta) = self.board.shift(direction);
        if shifted == self.board {
            return MoveOutcome {
                moved: false,
                score_delta: 0,
                status: self.status,
            };
        }

        self.board = shifted.with_random_tile(&mut self.rng);
        self.score += score_delta;
        self.status = derive_status(&self.board, self.target);

        MoveOutcome {
            moved: true,
            score_delta,
            status: self.status,
        }
    }

    /// Start over on a fresh board with the score at zero. New starting tiles
    /// come from the ongoing generator state rather than a reseed, so each
    /// run within one session differs while the session as a whole stays
    /// reproducible from the original seed.
    pub fn restart(&mut self) {
        let mut board = self.board.cleared();
        for _ in 0..STARTING_TILES {
            board = board.with_random_tile(&mut self.rng);
        }

        self.board = board;
        self.score = 0;
        self.status = derive_status(&self.board, self.target);
    }
}

/// Winning beats losing: a full stuck board that holds the target is a win.
fn derive_status(board: &Board, target: u32) -> GameStatus {
    if board.has_tile(target) {
        GameStatus::Won
    } else if board.is_game_over() {
        GameStatus::Over
    } else {
        GameStatus::Playing
    }
}
