//! Random tile spawning.
//!
//! After every effective move one new tile lands on a uniformly chosen empty
//! cell, with its value drawn uniformly from [`SPAWN_VALUES`] (2 or 4, even
//! odds). Generators are injected so tests and the shell pick their own
//! seeding strategy.

use rand::Rng;
use twenty48_types::SPAWN_VALUES;

use crate::board::Board;

impl Board {
    /// Copy of `self` with one standard game tile on a random empty cell.
    ///
    /// The cell is chosen uniformly among empty cells, the value uniformly
    /// from [`SPAWN_VALUES`]. A full board comes back unchanged and draws
    /// nothing from `rng`.
    pub fn with_random_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        self.with_random_tile_from(rng, &SPAWN_VALUES)
    }

    /// Copy of `self` with one tile drawn from `values` on a random empty
    /// cell. With a full board or an empty value pool the copy is unchanged
    /// and `rng` is left untouched.
    pub fn with_random_tile_from<R: Rng + ?Sized>(&self, rng: &mut R, values: &[u32]) -> Board {
        let mut next = self.clone();
        let empties: Vec<usize> = next
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 0)
            .map(|(slot, _)| slot)
            .collect();
        if empties.is_empty() || values.is_empty() {
            return next;
        }
        let slot = empties[rng.gen_range(0..empties.len())];
        next.cells[slot] = values[rng.gen_range(0..values.len())];
        next
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_spawn_fills_exactly_one_empty_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let board = Board::empty(4).unwrap();
        let next = board.with_random_tile(&mut rng);

        assert_eq!(next.tile_count(), 1);
        assert_eq!(board.tile_count(), 0, "input board must stay untouched");
    }

    #[test]
    fn test_spawn_values_come_from_the_standard_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = Vec::new();
        for _ in 0..64 {
            let next = Board::empty(4).unwrap().with_random_tile(&mut rng);
            seen.push(next.max_tile());
        }

        assert!(seen.iter().all(|value| SPAWN_VALUES.contains(value)));
        // 64 even-odds draws miss a side with probability 2^-63.
        assert!(seen.contains(&2) && seen.contains(&4));
    }

    #[test]
    fn test_spawn_reaches_every_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let board = Board::empty(2).unwrap();
        let mut hit = [false; 4];
        for _ in 0..256 {
            let next = board.with_random_tile(&mut rng);
            let slot = next
                .cells()
                .iter()
                .position(|&cell| cell != 0)
                .unwrap();
            hit[slot] = true;
        }

        assert_eq!(hit, [true; 4]);
    }

    #[test]
    fn test_spawn_only_targets_empty_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        let board = Board::from_rows(&[[2, 0], [4, 8]]).unwrap();
        for _ in 0..32 {
            let next = board.with_random_tile(&mut rng);
            assert_eq!(next.get(0, 0), Some(2));
            assert_eq!(next.get(1, 0), Some(4));
            assert_eq!(next.get(1, 1), Some(8));
            assert!(SPAWN_VALUES.contains(&next.get(0, 1).unwrap()));
        }
    }

    #[test]
    fn test_full_board_spawn_is_a_no_op() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut pristine = rng.clone();
        let board = Board::from_rows(&[[2, 4], [8, 16]]).unwrap();
        let next = board.with_random_tile(&mut rng);

        assert_eq!(next, board);
        // No draws happened, so both generators continue in lockstep.
        assert_eq!(rng.gen::<u64>(), pristine.gen::<u64>());
    }

    #[test]
    fn test_custom_value_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        let board = Board::empty(3).unwrap();
        for _ in 0..16 {
            let next = board.with_random_tile_from(&mut rng, &[8]);
            assert_eq!(next.max_tile(), 8);
            assert_eq!(next.tile_count(), 1);
        }
    }

    #[test]
    fn test_empty_value_pool_is_a_no_op() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let board = Board::empty(3).unwrap();
        let next = board.with_random_tile_from(&mut rng, &[]);

        assert_eq!(next, board);
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let board = Board::empty(4).unwrap();
        let a = board.with_random_tile(&mut ChaCha8Rng::seed_from_u64(1234));
        let b = board.with_random_tile(&mut ChaCha8Rng::seed_from_u64(1234));

        assert_eq!(a, b);
    }
}
