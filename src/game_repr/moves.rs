use std::fmt;

use super::{Board, Piece, Square, Type};

/// At most one special rule applies to a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal,
    EnPassant,
    /// Pawn reaches the far rank; the piece it becomes is picked at apply time
    Promotion,
    Castling,
}

/// What a promoting pawn turns into. Chosen by the caller, never by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    pub fn piece_type(&self) -> Type {
        match self {
            Promotion::Queen => Type::Queen,
            Promotion::Rook => Type::Rook,
            Promotion::Bishop => Type::Bishop,
            Promotion::Knight => Type::Knight,
        }
    }
}

/// A move together with the pieces it touches.
///
/// Equality only looks at `start`, `end` and `move_type`, so a move built by
/// a caller can be matched against the generated legal list.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the pawn beside `end`, not the piece on it
    pub piece_captured: Piece,
    pub move_type: MoveType,
}

impl Move {
    /// Builds a move by reading the moving and captured pieces off `board`.
    pub fn new(start: Square, end: Square, board: &Board, move_type: MoveType) -> Move {
        let captured_on = match move_type {
            MoveType::EnPassant => Square::new(start.row, end.col),
            _ => end,
        };
        Move {
            start,
            end,
            piece_moved: board[start],
            piece_captured: board[captured_on],
            move_type,
        }
    }

    pub fn is_en_passant(&self) -> bool {
        self.move_type == MoveType::EnPassant
    }

    pub fn is_castle(&self) -> bool {
        self.move_type == MoveType::Castling
    }

    pub fn is_pawn_promotion(&self) -> bool {
        self.move_type == MoveType::Promotion
    }

    pub fn is_capture(&self) -> bool {
        !self.piece_captured.is_none()
    }

    /// Square the captured piece stood on
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant() {
            Square::new(self.start.row, self.end.col)
        } else {
            self.end
        }
    }

    /// "e2 -> e4"
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.move_type == other.move_type
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Algebraic square pair of a move, e.g. "e2 -> e4".
pub fn move_notation(mv: &Move) -> String {
    mv.notation()
}
