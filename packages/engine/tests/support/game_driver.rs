//! Helpers that drive a game through the public engine API only.

use judgement_engine::domain::round_plan::RoundPlan;
use judgement_engine::domain::state::{GameState, Phase};
use judgement_engine::domain::Trump;
use judgement_engine::prelude::*;

pub const TRUMPS: [Trump; 5] = [
    Trump::Diamonds,
    Trump::Clubs,
    Trump::Hearts,
    Trump::Spades,
    Trump::NoTrumps,
];

/// Seeded game with the default config.
pub fn seeded_game(names: &[&str], seed: u64) -> GameState {
    let config = GameConfig::default().with_seed(Some(seed));
    initialize(names.iter().copied(), &config).expect("valid roster")
}

/// Game with an explicit schedule and a fixed trump order.
pub fn planned_game(names: &[&str], cards: &[u8], config: &GameConfig) -> GameState {
    initialize_with_plan(
        names.iter().copied(),
        RoundPlan::from_parts(cards, TRUMPS),
        config,
    )
    .expect("valid roster")
}

/// Play one round. `predictions` and `tricks` are keyed by player name, so
/// callers need not track the rotating turn order.
pub fn play_round(state: &mut GameState, predictions: &[(&str, u8)], tricks: &[(&str, u8)]) {
    assert_eq!(state.phase(), Phase::Predicting, "round must start with predictions");
    submit_by_name(state, predictions);
    assert_eq!(state.phase(), Phase::ReportingTricks);
    submit_by_name(state, tricks);
}

fn submit_by_name(state: &mut GameState, values: &[(&str, u8)]) {
    for _ in 0..state.player_count() {
        let who = state
            .current_player_name()
            .expect("game in progress")
            .to_owned();
        let value = values
            .iter()
            .find(|(name, _)| *name == who)
            .map(|(_, v)| *v)
            .unwrap_or_else(|| panic!("no value scripted for {who}"));
        submit_value(state, &value.to_string())
            .unwrap_or_else(|e| panic!("{who} submitting {value}: {e}"));
    }
}

/// Play every remaining round with everyone predicting and winning zero.
/// Requires the last-prediction restriction to be off.
pub fn play_out_with_zeros(state: &mut GameState) {
    while !state.is_terminal() {
        submit_value(state, "0").expect("zero is always legal");
    }
}
