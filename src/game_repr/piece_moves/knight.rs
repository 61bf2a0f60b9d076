use crate::game_repr::tables::KNIGHT_JUMPS;
use crate::game_repr::{Move, MoveType};

use super::super::{position::GameState, square::Square};

impl GameState {
    /// Generate knight moves into a provided buffer
    pub(crate) fn knight_moves_into(&self, square: Square, moves: &mut Vec<Move>) {
        // a pinned knight can never stay on its pin line
        if self.pin_on(square).is_some() {
            return;
        }

        let color = self.board[square].color;
        for &(dr, dc) in &KNIGHT_JUMPS {
            let Some(target) = square.offset(dr, dc) else {
                continue;
            };
            if !self.board[target].is(color) {
                moves.push(Move::new(square, target, &self.board, MoveType::Normal));
            }
        }
    }
}
