pub mod board;
pub mod checker;
pub mod reporter;
pub mod samples;

pub use board::{Board, Pos};
pub use checker::is_valid_sudoku;
pub use reporter::VerdictReporter;
