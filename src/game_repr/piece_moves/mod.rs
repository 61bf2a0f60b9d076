pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::tables::{along_axis, Direction};
use super::{GameState, Move, MoveType, Square, Type};

impl GameState {
    /// Pseudo-legal moves for the piece on `square`, restricted by the pins
    /// of the last refresh. Only valid inside a [`GameState::legal_moves`] query.
    pub(crate) fn piece_moves_into(&self, square: Square, moves: &mut Vec<Move>) {
        match self.board[square].piece_type {
            Type::Pawn => self.pawn_moves_into(square, moves),
            Type::Knight => self.knight_moves_into(square, moves),
            Type::Bishop => self.bishop_moves_into(square, moves),
            Type::Rook => self.rook_moves_into(square, moves),
            Type::Queen => self.queen_moves_into(square, moves),
            Type::King => self.king_moves_into(square, moves),
            Type::None => {}
        }
    }

    /// Every side-to-move piece's moves, in board order (row 0 first).
    pub(crate) fn all_piece_moves_into(&self, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for square in Square::all() {
            if self.board[square].is(color) {
                self.piece_moves_into(square, moves);
            }
        }
    }

    /// Walk each ray from `square`: quiet moves over empty squares, a capture
    /// on the first enemy, nothing on a friendly piece.
    pub(crate) fn slide_moves_into(&self, square: Square, directions: &[Direction], moves: &mut Vec<Move>) {
        let color = self.board[square].color;
        let pin = self.pin_on(square);

        for &dir in directions {
            if let Some(pin_dir) = pin {
                if !along_axis(dir, pin_dir) {
                    continue;
                }
            }

            let mut target = square;
            while let Some(next) = target.offset(dir.0, dir.1) {
                target = next;
                let piece = self.board[target];
                if piece.is_none() {
                    moves.push(Move::new(square, target, &self.board, MoveType::Normal));
                } else {
                    if piece.color != color {
                        moves.push(Move::new(square, target, &self.board, MoveType::Normal));
                    }
                    break;
                }
            }
        }
    }
}
