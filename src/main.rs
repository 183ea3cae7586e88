use anyhow::{Context, Result};
use clap::Parser;
use std::{fs, path::PathBuf};
use sudoval::{board::Board, reporter::VerdictReporter, samples};

#[derive(Parser, Debug)]
#[command(name = "sudoval", version, about = "Validates 9x9 Sudoku placements")]
struct Cli {
    /// Path to a board file (81 cells of 1-9 with _ . or 0 for blanks). If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Check the two built-in demonstration boards instead of reading input
    #[arg(long)]
    demo: bool,

    /// Emit verdicts to console with colors
    #[arg(long)]
    color: bool,

    /// Also write each verdict to a numbered report file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn read_board(input: &Option<PathBuf>) -> Result<Board> {
    let text = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Board::parse(&text).context("parse board")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut reporter = VerdictReporter::new(cli.log_dir, cli.color)?;

    if cli.demo {
        for (label, board) in [
            ("demo board 1", &*samples::WRONG_BOARD),
            ("demo board 2", &*samples::CORRECT_BOARD),
        ] {
            reporter.report(label, board, board.is_valid())?;
        }
        return Ok(());
    }

    let board = read_board(&cli.input)?;
    reporter.report("input board", &board, board.is_valid())?;
    Ok(())
}
