use itertools::iproduct;
use rustc_hash::FxHashSet;

use crate::board::{Board, Digit, Pos};

/// Where a placed digit was seen. The kind lives in the variant, so a row
/// key can never collide with a column or block key for the same index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Placement {
    Row { r: usize, d: Digit },
    Col { c: usize, d: Digit },
    Block { br: usize, bc: usize, d: Digit },
}

/// Checks that no filled digit repeats within a row, a column, or a 3x3
/// block. Empty cells impose no constraint; a fully empty board is valid.
/// Returns at the first collision found.
pub fn is_valid_sudoku(board: &Board) -> bool {
    // worst case: 3 marks per filled cell
    let mut seen = FxHashSet::with_capacity_and_hasher(3 * 81, Default::default());
    for (r, c) in iproduct!(0..9, 0..9) {
        let d = board.get(Pos { r, c });
        if d == 0 { continue; }
        let (br, bc) = Pos { r, c }.block();
        let marks = [
            Placement::Row { r, d },
            Placement::Col { c, d },
            Placement::Block { br, bc, d },
        ];
        if marks.iter().any(|m| seen.contains(m)) { return false; }
        seen.extend(marks);
    }
    true
}
