use std::fmt;
use std::str::FromStr;

use super::EngineError;

/// A board coordinate. Row 0 is black's back rank, row 7 is white's.
/// Column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Square reached by stepping `(dr, dc)`, or `None` when it leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// `None` when the column is off the board
    pub fn file_char(&self) -> Option<char> {
        (self.col < 8).then(|| (b'a' + self.col) as char)
    }

    /// `None` when the row is off the board
    pub fn rank_char(&self) -> Option<char> {
        (self.row < 8).then(|| (b'8' - self.row) as char)
    }

    /// Iterates all 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file_char(), self.rank_char()) {
            (Some(file), Some(rank)) => write!(f, "{}{}", file, rank),
            // only reachable through a hand-built square
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(EngineError::InvalidSquare(s.to_string()));
        }
        match (bytes[0], bytes[1]) {
            (file @ b'a'..=b'h', rank @ b'1'..=b'8') => Ok(Square::new(b'8' - rank, file - b'a')),
            _ => Err(EngineError::InvalidSquare(s.to_string())),
        }
    }
}
