use super::*;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_back_rank_mate() {
    let mut state = state_from(
        [
            "......k.", ".....ppp", "........", "........", "........", "........", "........",
            "R......K",
        ],
        Color::White,
        CastlingRights::none(),
    );
    play(&mut state, "a1", "a8");

    let moves = state.legal_moves();
    assert!(moves.is_empty());
    assert!(state.in_check());
    assert!(state.is_checkmate());
    assert!(!state.is_stalemate());
    assert_eq!(
        state.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_fools_mate() {
    let mut state = GameState::new();
    play(&mut state, "f2", "f3");
    play(&mut state, "e7", "e5");
    play(&mut state, "g2", "g4");
    play(&mut state, "d8", "h4");

    assert!(state.legal_moves().is_empty());
    assert!(state.is_checkmate());
    assert_eq!(
        state.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn test_check_with_escape_is_not_mate() {
    // h7 is free for the king
    let mut state = state_from(
        [
            "......k.", ".....pp.", "........", "........", "........", "........", "........",
            "R......K",
        ],
        Color::White,
        CastlingRights::none(),
    );
    play(&mut state, "a1", "a8");

    let moves = state.legal_moves();
    assert!(state.in_check());
    assert!(!state.is_checkmate());
    assert!(has_move(&moves, "g8", "h7"));
    assert_eq!(state.outcome(), None);
}

#[test]
fn test_knight_breaks_back_rank_mate() {
    // the knight on b6 can take the rook or block on c8
    let mut state = state_from(
        [
            "......k.", ".....ppp", ".n......", "........", "........", "........", "........",
            "R......K",
        ],
        Color::White,
        CastlingRights::none(),
    );
    play(&mut state, "a1", "a8");

    let moves = state.legal_moves();
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "b6", "a8"));
    assert!(has_move(&moves, "b6", "c8"));
    assert!(!state.is_checkmate());
}
