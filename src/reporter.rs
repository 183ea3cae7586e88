use anyhow::Result;
use chrono::Local;
use colored::*;
use std::{fs::{self, File}, io::Write, path::PathBuf};

use crate::board::Board;

pub const CORRECT_VERDICT: &str = "Correct Sudoku Puzzle!";
pub const WRONG_VERDICT: &str = "Wrong Sudoku Puzzle!";

/// Prints one verdict line per checked board and, when a log directory is
/// given, writes a numbered report file alongside.
pub struct VerdictReporter {
    dir: Option<PathBuf>,
    color: bool,
    counter: usize,
}

impl VerdictReporter {
    pub fn new(dir: Option<PathBuf>, color: bool) -> Result<Self> {
        if let Some(d) = &dir { fs::create_dir_all(d)?; }
        Ok(Self { dir, color, counter: 0 })
    }

    pub fn report(&mut self, label: &str, board: &Board, valid: bool) -> Result<()> {
        let verdict = if valid { CORRECT_VERDICT } else { WRONG_VERDICT };
        if self.color {
            let line = if valid { verdict.green().bold() } else { verdict.red().bold() };
            println!("{line}");
        } else {
            println!("{verdict}");
        }

        if let Some(dir) = &self.dir {
            self.counter += 1;
            let mut path = dir.clone();
            path.push(format!("verdict({}).txt", self.counter));

            let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut f = File::create(&path)?;
            writeln!(f, "[{}] {}\n\n{}\n{}", ts, label, verdict, board.to_pretty_string())?;
        }
        Ok(())
    }

    pub fn reports_written(&self) -> usize { self.counter }
}
