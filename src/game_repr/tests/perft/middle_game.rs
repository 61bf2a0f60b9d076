use super::*;

// ==================== MIDDLE GAME WITH PROMOTION PERFT TESTS ====================
// Position 5: a pawn one step from promoting with a capture available

fn middle_game() -> GameState {
    state_from(
        [
            "rnbq.k.r", "pp.Pbppp", "..p.....", "........", "..B.....", "........", "PPP.NnPP",
            "RNBQK..R",
        ],
        Color::White,
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: false,
            black_queenside: false,
        },
    )
}

#[test]
fn test_perft_middle_game_promotion_depth_1() {
    assert_eq!(middle_game().perft(1), 44);
}

#[test]
fn test_perft_middle_game_promotion_depth_2() {
    assert_eq!(middle_game().perft(2), 1486);
}

#[test]
fn test_perft_middle_game_promotion_depth_3() {
    assert_eq!(middle_game().perft(3), 62379);
}
