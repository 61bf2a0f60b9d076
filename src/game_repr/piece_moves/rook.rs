use crate::game_repr::tables::ORTHOGONAL;
use crate::game_repr::Move;

use super::super::{position::GameState, square::Square};

impl GameState {
    pub(crate) fn rook_moves_into(&self, square: Square, moves: &mut Vec<Move>) {
        self.slide_moves_into(square, &ORTHOGONAL, moves);
    }
}
