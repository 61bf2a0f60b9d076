use crate::game_repr::tables::ALL_DIRECTIONS;
use crate::game_repr::Move;

use super::super::{position::GameState, square::Square};

impl GameState {
    /// Generate queen moves into a provided buffer
    pub(crate) fn queen_moves_into(&self, square: Square, moves: &mut Vec<Move>) {
        self.slide_moves_into(square, &ALL_DIRECTIONS, moves);
    }
}
