//! Rules engine for two-player chess.
//!
//! The engine owns the board, generates legal moves for the side to move,
//! detects check, checkmate and stalemate, and applies or takes back moves
//! including castling, en passant and promotion. Rendering and input handling
//! live in the caller; the caller proposes a move as a pair of squares,
//! picks the promotion piece itself, and asks for undo when it wants one.
//!
//! ```
//! use chess_rules::{new_game, Square};
//!
//! let mut game = new_game();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! let mv = game.find_move(e2, e4).unwrap();
//! game.make_move(mv, None).unwrap();
//! assert_eq!(mv.notation(), "e2 -> e4");
//!
//! game.undo_move();
//! assert_eq!(game.move_log().len(), 0);
//! ```

pub mod game_repr;

pub use game_repr::{
    move_notation, Board, CastlingRights, Check, Color, EngineError, GameState, Move, MoveType,
    Outcome, Piece, Pin, Promotion, Setup, Square, Type,
};

/// Standard starting position, white to move, full castling rights, empty history.
pub fn new_game() -> GameState {
    GameState::new()
}
