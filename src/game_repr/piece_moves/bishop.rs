use crate::game_repr::tables::DIAGONAL;
use crate::game_repr::Move;

use super::super::{position::GameState, square::Square};

impl GameState {
    /// Generate bishop moves into a provided buffer
    pub(crate) fn bishop_moves_into(&self, square: Square, moves: &mut Vec<Move>) {
        self.slide_moves_into(square, &DIAGONAL, moves);
    }
}
