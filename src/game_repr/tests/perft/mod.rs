use super::*;

// Reference node counts from the standard perft suite. A promotion counts
// once per piece the pawn can become.

mod starting_position;
mod kiwipete;
mod endgame;
mod complex_promotions;
mod middle_game;
