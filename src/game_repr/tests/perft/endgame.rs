use super::*;

// ==================== ENDGAME POSITION PERFT TESTS ====================
// Position 3: en passant next to a king on an open rank

fn endgame() -> GameState {
    state_from(
        [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
        Color::White,
        CastlingRights::none(),
    )
}

#[test]
fn test_perft_endgame_depth_1() {
    assert_eq!(endgame().perft(1), 14);
}

#[test]
fn test_perft_endgame_depth_2() {
    assert_eq!(endgame().perft(2), 191);
}

#[test]
fn test_perft_endgame_depth_3() {
    assert_eq!(endgame().perft(3), 2812);
}

#[test]
fn test_perft_endgame_depth_4() {
    assert_eq!(endgame().perft(4), 43238);
}
