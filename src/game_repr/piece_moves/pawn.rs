use crate::game_repr::tables::{along_axis, Direction};
use crate::game_repr::{Move, MoveType};

use super::super::{position::GameState, square::Square};

impl GameState {
    pub(crate) fn pawn_moves_into(&self, square: Square, moves: &mut Vec<Move>) {
        let color = self.board[square].color;
        let forward = color.pawn_direction();
        let pin = self.pin_on(square);
        let allowed = |dir: Direction| pin.map_or(true, |pin_dir| along_axis(dir, pin_dir));
        let kind_for = |target: Square| {
            if target.row == color.promotion_rank() {
                MoveType::Promotion
            } else {
                MoveType::Normal
            }
        };

        // advances
        if allowed((forward, 0)) {
            if let Some(one) = square.offset(forward, 0) {
                if self.board[one].is_none() {
                    moves.push(Move::new(square, one, &self.board, kind_for(one)));

                    if square.row == color.pawn_rank() {
                        if let Some(two) = square.offset(2 * forward, 0) {
                            if self.board[two].is_none() {
                                moves.push(Move::new(square, two, &self.board, MoveType::Normal));
                            }
                        }
                    }
                }
            }
        }

        // captures, left then right
        for dc in [-1, 1] {
            if !allowed((forward, dc)) {
                continue;
            }
            let Some(target) = square.offset(forward, dc) else {
                continue;
            };

            let piece = self.board[target];
            if piece.is(color.opposite()) {
                moves.push(Move::new(square, target, &self.board, kind_for(target)));
            } else if self.en_passant_target == Some(target) {
                if !self.en_passant_exposes_king(square, target) {
                    moves.push(Move::new(square, target, &self.board, MoveType::EnPassant));
                }
            }
        }
    }

    /// En passant empties two squares and fills a third, which can uncover
    /// the king along a line no pin entry covers. Replays it on a scratch board.
    fn en_passant_exposes_king(&self, from: Square, target: Square) -> bool {
        let color = self.board[from].color;
        let mut board = self.board.clone();
        board.set(target, board.get(from));
        board.clear(from);
        board.clear(Square::new(from.row, target.col));

        Self::scan_board(&board, self.king_square(color), color).in_check
    }
}
