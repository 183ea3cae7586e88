use once_cell::sync::Lazy;

use crate::board::Board;

/// Demonstration board with two 3s in the first row (columns 1 and 7).
pub static WRONG_BOARD: Lazy<Board> = Lazy::new(|| {
    Board::from_rows([
        [4, 3, 0, 0, 8, 0, 0, 3, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 2, 0, 0, 8, 0, 0, 7, 9],
    ])
});

/// Demonstration board with no row/column/block collisions.
pub static CORRECT_BOARD: Lazy<Board> = Lazy::new(|| {
    Board::from_rows([
        [0, 0, 9, 0, 0, 2, 0, 5, 8],
        [1, 5, 2, 0, 0, 4, 0, 0, 3],
        [0, 0, 0, 0, 1, 5, 7, 0, 0],
        [5, 1, 0, 6, 0, 0, 8, 0, 0],
        [0, 8, 0, 0, 4, 1, 0, 3, 0],
        [0, 0, 6, 0, 0, 8, 0, 1, 4],
        [0, 0, 8, 0, 5, 7, 3, 0, 0],
        [0, 0, 0, 1, 0, 0, 4, 0, 7],
        [2, 3, 1, 4, 0, 0, 6, 0, 0],
    ])
});
