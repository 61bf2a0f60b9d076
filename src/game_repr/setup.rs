//! Starting-position configuration handed to [`GameState::from_setup`].
//!
//! A [`Setup`] carries everything needed to start a game: the board, the side
//! to move and the castling rights. Use [`Setup::standard`] for a normal game
//! or [`Setup::from_diagram`] to start from a hand-built position.
//!
//! [`GameState::from_setup`]: super::GameState::from_setup

use super::{Board, CastlingRights, Color, EngineError, Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
}

impl Default for Setup {
    fn default() -> Self {
        Self::standard()
    }
}

impl Setup {
    /// Standard starting position, white to move, all castling rights.
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
        }
    }

    /// Build a setup from eight row strings, row 0 (black's back rank) first.
    ///
    /// Uppercase letters are white pieces, lowercase black, `.` is empty.
    ///
    /// # Arguments
    /// * `rows` - exactly eight strings of eight characters each
    /// * `side_to_move` - the color to move first
    /// * `castling_rights` - rights granted at the start
    pub fn from_diagram(
        rows: &[&str],
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> Result<Self, EngineError> {
        if rows.len() != 8 {
            return Err(EngineError::InvalidDiagram(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 8 {
                return Err(EngineError::InvalidDiagram(format!(
                    "row {} has {} squares",
                    row,
                    chars.len()
                )));
            }
            for (col, c) in chars.into_iter().enumerate() {
                let piece = Piece::from_char(c).ok_or_else(|| {
                    EngineError::InvalidDiagram(format!("unknown piece '{}' in row {}", c, row))
                })?;
                board.set(Square::new(row as u8, col as u8), piece);
            }
        }

        Ok(Self {
            board,
            side_to_move,
            castling_rights,
        })
    }
}
