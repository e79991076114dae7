use crate::domain::game_flow::submit_value;
use crate::domain::scoring::{final_rankings, total_score, winner};
use crate::domain::test_state_helpers::{make_game_state, submit_all, MakeGameStateArgs};

#[test]
fn totals_are_running_sums() {
    let mut state = make_game_state(MakeGameStateArgs::default());
    assert_eq!(total_score(&state, 0), 0);

    submit_all(&mut state, &[2, 0, 1, 2, 0, 0]); // A 12, B 10, C -11
    assert_eq!(total_score(&state, 0), 12);
    assert_eq!(total_score(&state, 1), 10);
    assert_eq!(total_score(&state, 2), -11);

    // Partially scored round: only B has reported.
    submit_all(&mut state, &[1, 0, 0, 1]);
    assert_eq!(total_score(&state, 1), 21);
    assert_eq!(total_score(&state, 2), -11);
}

#[test]
fn rankings_sort_descending() {
    let mut state = make_game_state(MakeGameStateArgs::default());
    submit_all(&mut state, &[2, 0, 1, 2, 0, 0]); // A 12, B 10, C -11
    submit_all(&mut state, &[1, 0, 0, 1, 0, 0]); // B 11, C 10, A 10
    submit_all(&mut state, &[2, 1, 0, 2, 0, 0]); // C 12, A -11, B 10

    let rankings = final_rankings(&state);
    let order: Vec<(&str, i32)> = rankings.iter().map(|s| (s.name.as_str(), s.total)).collect();
    assert_eq!(order, vec![("B", 31), ("A", 11), ("C", 11)]);

    let w = winner(&state).expect("game over");
    assert_eq!(w.name, "B");
    assert_eq!(w.total, 31);
}

#[test]
fn ties_keep_base_player_order() {
    let mut state = make_game_state(MakeGameStateArgs {
        players: 3,
        cards: vec![1],
        ..MakeGameStateArgs::default()
    });
    submit_all(&mut state, &[0, 0, 0, 0, 0, 0]);
    let names: Vec<String> = final_rankings(&state).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn no_winner_before_the_end() {
    let mut state = make_game_state(MakeGameStateArgs::default());
    assert!(winner(&state).is_none());
    submit_value(&mut state, "1").unwrap();
    assert!(winner(&state).is_none());
    // Rankings are available on demand mid-game.
    assert_eq!(final_rankings(&state).len(), 3);
}
