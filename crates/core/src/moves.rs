//! Movement rules - row compression and the rotation-based direction model.
//!
//! A single primitive does all the work: compress one line toward index 0,
//! merging adjacent equal pairs once. Whole-board moves rotate the grid so the
//! requested direction becomes "left", compress every row, then rotate back.

use twenty48_types::Direction;

use crate::board::Board;

/// Compress one line toward index 0, merging adjacent equal pairs once.
///
/// Tiles slide over gaps, then each adjacent equal pair merges front to back.
/// A merged tile never merges again in the same pass, so `[2, 2, 2, 2]`
/// becomes `[4, 4, 0, 0]` and `[4, 4, 8, 0]` becomes `[8, 8, 0, 0]`, not
/// `[16, 0, 0, 0]`. Returns the score delta: the sum of merged tile values.
pub fn compress_line(line: &mut [u32]) -> u32 {
    // Slide every tile toward the front, preserving order.
    let mut tail = 0;
    for i in 0..line.len() {
        if line[i] != 0 {
            line.swap(tail, i);
            tail += 1;
        }
    }

    // Merge pass: read two where a pair matches, write one.
    let mut score = 0;
    let mut write = 0;
    let mut read = 0;
    while read < tail {
        if read + 1 < tail && line[read] == line[read + 1] {
            let merged = line[read] * 2;
            line[write] = merged;
            score += merged;
            read += 2;
        } else {
            line[write] = line[read];
            read += 1;
        }
        write += 1;
    }

    for cell in &mut line[write..tail] {
        *cell = 0;
    }

    score
}

impl Board {
    /// A copy of the board rotated by `times` counter-clockwise quarter turns
    ///
    /// Pure geometry: tile values move, nothing merges. `times` is taken
    /// mod 4, so `rotated(k)` followed by `rotated(4 - k)` is the identity.
    pub fn rotated(&self, times: usize) -> Board {
        let n = self.size;
        let source = |row: usize, col: usize| match times % 4 {
            0 => (row, col),
            1 => (col, n - 1 - row),
            2 => (n - 1 - row, n - 1 - col),
            _ => (n - 1 - col, row),
        };

        let mut cells = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                let (src_row, src_col) = source(row, col);
                cells[row * n + col] = self.cells[src_row * n + src_col];
            }
        }
        Board { size: n, cells }
    }

    /// Slide the whole board in `direction`, returning the successor board
    /// and the score gained from merges
    ///
    /// The input board is untouched. Callers compare the result against the
    /// input to detect a move that changed nothing.
    pub fn shift(&self, direction: Direction) -> (Board, u32) {
        let turns = direction.rotations();
        let mut working = self.rotated(turns);

        let size = working.size;
        let mut score = 0;
        for row in working.cells.chunks_mut(size) {
            score += compress_line(row);
        }

        (working.rotated((4 - turns) % 4), score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: &[u32]) -> Vec<u32> {
        cells.to_vec()
    }

    #[test]
    fn test_compress_slides_over_gaps() {
        let mut row = line(&[0, 2, 0, 4]);
        let score = compress_line(&mut row);
        assert_eq!(row, vec![2, 4, 0, 0]);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_compress_merges_adjacent_pair() {
        let mut row = line(&[2, 2, 4, 0]);
        let score = compress_line(&mut row);
        assert_eq!(row, vec![4, 4, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_compress_merges_each_pair_once() {
        let mut row = line(&[2, 2, 2, 2]);
        let score = compress_line(&mut row);
        assert_eq!(row, vec![4, 4, 0, 0]);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_compress_merge_result_does_not_cascade() {
        // The merged 4 must not immediately merge with the trailing pair's 4.
        let mut row = line(&[2, 2, 4, 0]);
        compress_line(&mut row);
        assert_eq!(row, vec![4, 4, 0, 0]);

        let mut row = line(&[4, 4, 8, 0]);
        let score = compress_line(&mut row);
        assert_eq!(row, vec![8, 8, 0, 0]);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_compress_prefers_front_pair_in_triple() {
        let mut row = line(&[2, 0, 2, 2]);
        let score = compress_line(&mut row);
        assert_eq!(row, vec![4, 2, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_compress_no_merge_between_unequal_tiles() {
        let mut row = line(&[2, 4, 2, 4]);
        let score = compress_line(&mut row);
        assert_eq!(row, vec![2, 4, 2, 4]);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_compress_empty_and_single() {
        let mut row = line(&[0, 0, 0, 0]);
        assert_eq!(compress_line(&mut row), 0);
        assert_eq!(row, vec![0, 0, 0, 0]);

        let mut row = line(&[0, 0, 8, 0]);
        assert_eq!(compress_line(&mut row), 0);
        assert_eq!(row, vec![8, 0, 0, 0]);
    }

    #[test]
    fn test_compress_is_idempotent() {
        let mut row = line(&[2, 2, 4, 4]);
        compress_line(&mut row);
        let settled = row.clone();
        let score = compress_line(&mut row);
        assert_eq!(row, settled);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_rotated_quarter_turn_is_counter_clockwise() {
        // Top-right corner moves to top-left after one counter-clockwise turn.
        let board = Board::from_rows(&[[2, 4], [8, 16]]).unwrap();
        let turned = board.rotated(1);
        assert_eq!(turned, Board::from_rows(&[[4, 16], [2, 8]]).unwrap());
    }

    #[test]
    fn test_rotated_half_turn() {
        let board = Board::from_rows(&[[2, 4], [8, 16]]).unwrap();
        let turned = board.rotated(2);
        assert_eq!(turned, Board::from_rows(&[[16, 8], [4, 2]]).unwrap());
    }

    #[test]
    fn test_rotated_inverse_identity() {
        let board =
            Board::from_rows(&[[2, 0, 4, 0], [0, 8, 0, 2], [16, 0, 2, 0], [0, 4, 0, 32]]).unwrap();
        for turns in 0..=4 {
            assert_eq!(
                board.rotated(turns).rotated((4 - turns) % 4),
                board,
                "rotation by {turns} should invert"
            );
        }
    }

    #[test]
    fn test_rotated_four_times_is_identity() {
        let board = Board::from_rows(&[[2, 4], [8, 16]]).unwrap();
        assert_eq!(board.rotated(4), board);
    }

    #[test]
    fn test_shift_left() {
        let board =
            Board::from_rows(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let (moved, score) = board.shift(Direction::Left);
        assert_eq!(
            moved,
            Board::from_rows(&[[4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap()
        );
        assert_eq!(score, 4);
    }

    #[test]
    fn test_shift_right_mirrors_left() {
        let board =
            Board::from_rows(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let (moved, score) = board.shift(Direction::Right);
        assert_eq!(
            moved,
            Board::from_rows(&[[0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap()
        );
        assert_eq!(score, 4);
    }

    #[test]
    fn test_shift_up_stacks_column_at_top() {
        let board =
            Board::from_rows(&[[0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0]]).unwrap();
        let (moved, score) = board.shift(Direction::Up);
        assert_eq!(
            moved,
            Board::from_rows(&[[4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap()
        );
        assert_eq!(score, 4);
    }

    #[test]
    fn test_shift_down_stacks_column_at_bottom() {
        let board =
            Board::from_rows(&[[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let (moved, score) = board.shift(Direction::Down);
        assert_eq!(
            moved,
            Board::from_rows(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0]]).unwrap()
        );
        assert_eq!(score, 4);
    }

    #[test]
    fn test_shift_down_keeps_order_without_merges() {
        let board =
            Board::from_rows(&[[2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let (moved, score) = board.shift(Direction::Down);
        assert_eq!(
            moved,
            Board::from_rows(&[[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]]).unwrap()
        );
        assert_eq!(score, 0);
    }

    #[test]
    fn test_shift_rows_compress_independently() {
        let board =
            Board::from_rows(&[[2, 2, 4, 4], [8, 0, 8, 0], [2, 4, 2, 4], [0, 0, 0, 16]]).unwrap();
        let (moved, score) = board.shift(Direction::Left);
        assert_eq!(
            moved,
            Board::from_rows(&[[4, 8, 0, 0], [16, 0, 0, 0], [2, 4, 2, 4], [16, 0, 0, 0]]).unwrap()
        );
        assert_eq!(score, 4 + 8 + 16);
    }

    #[test]
    fn test_shift_settles_after_one_pass() {
        // One pass packs every row and spends every merge; with no spawn in
        // between, repeating the move changes nothing.
        let board =
            Board::from_rows(&[[0, 2, 4, 2], [0, 8, 0, 8], [2, 0, 0, 2], [0, 0, 4, 4]]).unwrap();
        let (once, _) = board.shift(Direction::Left);
        let (twice, score) = once.shift(Direction::Left);
        assert_eq!(twice, once);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_shift_can_expose_new_merge_on_next_pass() {
        // Merges are single-pass: a merge result may sit next to an equal
        // tile and only combine on a later move.
        let board =
            Board::from_rows(&[[2, 2, 4, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let (once, first) = board.shift(Direction::Left);
        assert_eq!(
            once,
            Board::from_rows(&[[4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap()
        );
        assert_eq!(first, 4);

        let (twice, second) = once.shift(Direction::Left);
        assert_eq!(
            twice,
            Board::from_rows(&[[8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap()
        );
        assert_eq!(second, 8);
    }

    #[test]
    fn test_shift_leaves_input_untouched() {
        let board = Board::from_rows(&[[2, 2], [0, 0]]).unwrap();
        let before = board.clone();
        let _ = board.shift(Direction::Left);
        assert_eq!(board, before);
    }

    #[test]
    fn test_shift_full_board_without_moves_is_identity() {
        let board = Board::from_rows(&[[2, 4], [4, 2]]).unwrap();
        for direction in Direction::ALL {
            let (moved, score) = board.shift(direction);
            assert_eq!(moved, board, "{} should not change a stuck board", direction.as_str());
            assert_eq!(score, 0);
        }
    }
}
