use crate::game_repr::tables::ALL_DIRECTIONS;
use crate::game_repr::{Color, Move, MoveType, Type};

use super::super::{position::GameState, square::Square};

impl GameState {
    /// King steps plus castling. A step is only produced when a fresh scan
    /// from the destination shows the king would not be attacked there.
    pub(crate) fn king_moves_into(&self, square: Square, moves: &mut Vec<Move>) {
        let color = self.board[square].color;

        for &(dr, dc) in &ALL_DIRECTIONS {
            let Some(target) = square.offset(dr, dc) else {
                continue;
            };
            if self.board[target].is(color) {
                continue;
            }
            if !self.is_square_attacked(target, color) {
                moves.push(Move::new(square, target, &self.board, MoveType::Normal));
            }
        }

        self.castle_moves_into(square, color, moves);
    }

    fn castle_moves_into(&self, square: Square, color: Color, moves: &mut Vec<Move>) {
        let row = color.back_rank();
        if square != Square::new(row, 4) {
            return;
        }

        // never out of check, and confirm by attack detection as well
        if self.in_check || self.is_square_attacked(square, color) {
            return;
        }

        let empty = |cols: &[u8]| cols.iter().all(|&col| self.board[Square::new(row, col)].is_none());
        let safe = |cols: &[u8]| cols.iter().all(|&col| !self.is_square_attacked(Square::new(row, col), color));
        let rook_on = |col: u8| self.board[Square::new(row, col)].is_kind(color, Type::Rook);

        if self.castling_rights.kingside(color) && rook_on(7) && empty(&[5, 6]) && safe(&[5, 6]) {
            moves.push(Move::new(square, Square::new(row, 6), &self.board, MoveType::Castling));
        }

        // b-file must be empty but may be attacked
        if self.castling_rights.queenside(color) && rook_on(0) && empty(&[1, 2, 3]) && safe(&[3, 2]) {
            moves.push(Move::new(square, Square::new(row, 2), &self.board, MoveType::Castling));
        }
    }
}
