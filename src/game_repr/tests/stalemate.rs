use super::*;

// ==================== STALEMATE AND DRAW TESTS ====================

fn cornered_king(queen_row: &'static str, queen_row_index: usize, side_to_move: Color) -> GameState {
    let mut rows = [
        ".......k", ".....K..", "........", "........", "........", "........", "........",
        "........",
    ];
    rows[queen_row_index] = queen_row;
    state_from(rows, side_to_move, CastlingRights::none())
}

#[test]
fn test_king_with_no_moves_is_stalemate() {
    let mut state = cornered_king("......Q.", 2, Color::Black);

    let moves = state.legal_moves();
    assert!(moves.is_empty());
    assert!(!state.in_check());
    assert!(state.is_stalemate());
    assert!(!state.is_checkmate());
    assert_eq!(state.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn test_spare_pawn_move_prevents_stalemate() {
    let mut state = state_from(
        [
            ".......k", ".....K..", "......Q.", "p.......", "........", "........", "........",
            "........",
        ],
        Color::Black,
        CastlingRights::none(),
    );

    let moves = state.legal_moves();
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "a5", "a4"));
    assert!(!state.is_stalemate());
}

#[test]
fn test_flags_reset_after_undo() {
    let mut state = cornered_king("......Q.", 3, Color::White);
    play(&mut state, "g5", "g6");

    assert!(state.legal_moves().is_empty());
    assert!(state.is_stalemate());

    state.undo_move();
    assert!(!state.is_stalemate(), "undo clears the query flags");

    let moves = state.legal_moves();
    assert!(!moves.is_empty());
    assert!(!state.is_stalemate());
    assert_eq!(state.outcome(), None);
}

#[test]
fn test_insufficient_material() {
    let bare_kings = state_from(
        [
            "....k...", "........", "........", "........", "........", "........", "........",
            "....K...",
        ],
        Color::White,
        CastlingRights::none(),
    );
    assert!(bare_kings.is_insufficient_material());

    let lone_knight = state_from(
        [
            "....k...", "........", "........", "........", "...N....", "........", "........",
            "....K...",
        ],
        Color::White,
        CastlingRights::none(),
    );
    assert!(lone_knight.is_insufficient_material());

    let rook = state_from(
        [
            "....k...", "........", "........", "........", "...R....", "........", "........",
            "....K...",
        ],
        Color::White,
        CastlingRights::none(),
    );
    assert!(!rook.is_insufficient_material());

    assert!(!GameState::new().is_insufficient_material());
}
