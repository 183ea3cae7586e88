use anyhow::{bail, Result};
use std::fmt::{self, Display, Formatter};

pub type Digit = u8; // 0 = empty; 1..=9 digits

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    pub fn idx(self) -> usize { self.r * 9 + self.c }
    /// 3x3 block coordinate, each component in 0..=2.
    pub fn block(self) -> (usize, usize) { (self.r / 3, self.c / 3) }
}

/// A 9x9 board in row-major order. Read-only input to the validator;
/// nothing here mutates cells after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [Digit; 81],
}

impl Board {
    pub fn empty() -> Self { Self { cells: [0; 81] } }

    pub fn from_rows(rows: [[Digit; 9]; 9]) -> Self {
        let mut b = Self::empty();
        for r in 0..9 { for c in 0..9 { b.cells[r * 9 + c] = rows[r][c]; } }
        b
    }

    /// Strict parse: 81 cells of '1'..='9' with '_'/'.'/'0' for empty,
    /// whitespace ignored. Any other character or cell count is an error.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(81);
        for ch in text.chars() {
            match ch {
                '1'..='9' => cells.push(ch as u8 - b'0'),
                '_' | '.' | '0' => cells.push(0),
                c if c.is_whitespace() => {}
                c => bail!("invalid board character {c:?}"),
            }
        }
        if cells.len() != 81 { bail!("expected 81 cells, got {}", cells.len()) }
        let mut b = Self::empty();
        b.cells.copy_from_slice(&cells);
        Ok(b)
    }

    pub fn get(&self, p: Pos) -> Digit { self.cells[p.idx()] }

    pub fn is_empty(&self) -> bool { self.cells.iter().all(|&d| d == 0) }

    /// Row/column/block uniqueness among filled cells.
    pub fn is_valid(&self) -> bool { crate::checker::is_valid_sudoku(self) }

    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|&d| if d == 0 { '.' } else { (b'0' + d) as char }).collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..9 {
            if r % 3 == 0 { s.push_str("+-------+-------+-------+\n"); }
            for c in 0..9 {
                if c % 3 == 0 { s.push('|'); s.push(' '); }
                let d = self.get(Pos { r, c });
                s.push(if d == 0 { '·' } else { (b'0' + d) as char });
                s.push(' ');
            }
            s.push('|'); s.push('\n');
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string(self)?) }

    #[cfg(feature = "serde")]
    pub fn from_json(s: &str) -> Result<Self> { Ok(serde_json::from_str(s)?) }
}

// JSON form is the compact string; sidesteps serde's fixed-size array limits.
#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_compact())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(d)?;
        Board::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}
