use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parse algebraic square names in tests
pub fn sq(name: &str) -> Square {
    name.parse().expect("test square should parse")
}

/// Build a game from an 8-row diagram, row 0 (rank 8) first
pub fn state_from(rows: [&str; 8], side_to_move: Color, rights: CastlingRights) -> GameState {
    let setup = Setup::from_diagram(&rows, side_to_move, rights).expect("test diagram should parse");
    GameState::from_setup(setup).expect("test diagram should have both kings")
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    let (from, to) = (sq(from), sq(to));
    moves.iter().any(|m| m.start == from && m.end == to)
}

/// Helper function to count moves of a specific type
pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves.iter().filter(|m| m.move_type == move_type).count()
}

/// Legal moves of the piece standing on `from`
pub fn moves_from(state: &mut GameState, from: &str) -> Vec<Move> {
    let from = sq(from);
    state
        .legal_moves()
        .into_iter()
        .filter(|m| m.start == from)
        .collect()
}

/// Play a legal non-promotion move given by square names
pub fn play(state: &mut GameState, from: &str, to: &str) {
    let mv = state
        .find_move(sq(from), sq(to))
        .unwrap_or_else(|| panic!("{} -> {} should be legal", from, to));
    state.make_move(mv, None).expect("move should apply");
}

/// Every field apply/undo must restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    board: Board,
    side_to_move: Color,
    white_king: Square,
    black_king: Square,
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
    history_len: usize,
}

pub fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        board: state.board().clone(),
        side_to_move: state.side_to_move(),
        white_king: state.king_square(Color::White),
        black_king: state.king_square(Color::Black),
        en_passant_target: state.en_passant_target(),
        castling_rights: state.castling_rights(),
        history_len: state.move_log().len(),
    }
}

// ==================== TEST MODULES ====================

mod checkmate;
mod stalemate;
mod perft;
