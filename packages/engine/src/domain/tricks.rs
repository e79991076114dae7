//! Tricks-won reporting.

use crate::domain::rules::valid_value_range;
use crate::domain::scoring::apply_round_score;
use crate::domain::state::{GameState, PlayerId};

/// Values the current player may report in the tricks phase.
pub fn legal_tricks(state: &GameState) -> Vec<u8> {
    state
        .current_bound()
        .map(|cards| valid_value_range(cards).collect())
        .unwrap_or_default()
}

/// Record `who`'s tricks for the current round and score the round for them.
///
/// Returns the score written.
pub(crate) fn record_tricks(state: &mut GameState, who: PlayerId, tricks: u8) -> Option<i16> {
    let round = state.current_round;
    state.tricks_won.set(who, round, tricks);
    tracing::debug!(round_no = round + 1, player = who, tricks, "tricks recorded");
    apply_round_score(state, who)
}
