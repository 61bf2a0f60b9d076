use super::*;

// ==================== COMPLEX POSITION WITH PROMOTIONS PERFT TESTS ====================
// Position 4: promotion captures and underpromotion, white in check

fn complex_promotions() -> GameState {
    state_from(
        [
            "r...k..r", "Pppp.ppp", ".b...nbN", "nP......", "BBP.P...", "q....N..", "Pp.P..PP",
            "R..Q.RK.",
        ],
        Color::White,
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: true,
            black_queenside: true,
        },
    )
}

#[test]
fn test_perft_complex_promotions_depth_1() {
    assert_eq!(complex_promotions().perft(1), 6);
}

#[test]
fn test_perft_complex_promotions_depth_2() {
    assert_eq!(complex_promotions().perft(2), 264);
}

#[test]
fn test_perft_complex_promotions_depth_3() {
    assert_eq!(complex_promotions().perft(3), 9467);
}
