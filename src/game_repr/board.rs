use std::fmt;
use std::ops::Index;

use super::{Color, Piece, Square, Type};

/// 8x8 mailbox of pieces, indexed by [`Square`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[Piece::none(); 8]; 8],
        }
    }

    /// Standard starting position
    pub fn standard() -> Self {
        const BACK: [Type; 8] = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];

        let mut board = Self::empty();
        for col in 0..8 {
            board.set(Square::new(0, col), Piece::new(Color::Black, BACK[col as usize]));
            board.set(Square::new(1, col), Piece::new(Color::Black, Type::Pawn));
            board.set(Square::new(6, col), Piece::new(Color::White, Type::Pawn));
            board.set(Square::new(7, col), Piece::new(Color::White, BACK[col as usize]));
        }
        board
    }

    pub fn get(&self, square: Square) -> Piece {
        self.squares[square.row as usize][square.col as usize]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    pub fn clear(&mut self, square: Square) {
        self.set(square, Piece::none());
    }

    /// Squares holding the given piece, row 0 first
    pub fn find(&self, color: Color, piece_type: Type) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.get(sq).is_kind(color, piece_type))
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.get(sq)))
            .filter(|(_, piece)| !piece.is_none())
    }
}

impl Index<Square> for Board {
    type Output = Piece;

    fn index(&self, square: Square) -> &Piece {
        &self.squares[square.row as usize][square.col as usize]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: String = row.iter().map(Piece::to_char).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
