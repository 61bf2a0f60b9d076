use super::{Color, Square};

/// Four independent castling permissions. A right only ever goes from
/// `true` to `false` during play; undo restores it from the snapshot log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    /// King moved: both sides are gone for good
    pub fn revoke_all(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// A rook left (or was captured on) one of the four corners
    pub fn revoke_corner(&mut self, square: Square) {
        match (square.row, square.col) {
            (7, 7) => self.white_kingside = false,
            (7, 0) => self.white_queenside = false,
            (0, 7) => self.black_kingside = false,
            (0, 0) => self.black_queenside = false,
            _ => {}
        }
    }
}
