use super::*;

// ==================== KIWIPETE PERFT TESTS ====================
// Position 2: castling on both wings, en passant, pins and promotions

fn kiwipete() -> GameState {
    state_from(
        [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        Color::White,
        CastlingRights::all(),
    )
}

#[test]
fn test_perft_kiwipete_depth_1() {
    assert_eq!(kiwipete().perft(1), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    assert_eq!(kiwipete().perft(2), 2039);
}

#[test]
fn test_perft_kiwipete_depth_3() {
    assert_eq!(kiwipete().perft(3), 97862);
}
