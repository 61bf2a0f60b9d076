use super::*;

#[test]
fn test_perft_starting_position_depth_1() {
    let mut state = GameState::new();
    assert_eq!(state.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let mut state = GameState::new();
    assert_eq!(state.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let mut state = GameState::new();
    assert_eq!(state.perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    let mut state = GameState::new();
    assert_eq!(state.perft(4), 197281);
}

#[test]
fn test_perft_leaves_state_untouched() {
    let mut state = GameState::new();
    let before = snapshot(&state);
    state.perft(3);
    assert_eq!(snapshot(&state), before);
}
