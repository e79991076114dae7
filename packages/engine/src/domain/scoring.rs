use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, PlayerId};

/// Score for one player in one round.
///
/// An exact prediction earns `bonus + tricks`; a miss costs `bonus + prediction`
/// regardless of how many tricks were actually won.
pub fn round_score(prediction: u8, tricks: u8, bonus: i16) -> i16 {
    if prediction == tricks {
        bonus + i16::from(tricks)
    } else {
        -(bonus + i16::from(prediction))
    }
}

/// Write the score for `who` in the current round from the recorded cells.
///
/// Called exactly once, right after `who`'s tricks are recorded.
pub(crate) fn apply_round_score(state: &mut GameState, who: PlayerId) -> Option<i16> {
    let round = state.current_round;
    let prediction = state.predictions.get(who, round)?;
    let tricks = state.tricks_won.get(who, round)?;
    let score = round_score(prediction, tricks, state.config.exact_bonus);
    state.scores.set(who, round, score);
    tracing::debug!(round_no = round + 1, player = who, prediction, tricks, score, "round scored");
    Some(score)
}

/// Sum of recorded round scores; missing rounds count as zero.
pub fn total_score(state: &GameState, player: PlayerId) -> i32 {
    state
        .scores
        .row(player)
        .iter()
        .flatten()
        .map(|&s| i32::from(s))
        .sum()
}

/// One line of the final standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub total: i32,
}

/// Players by descending total. Ties keep base player order.
pub fn final_rankings(state: &GameState) -> Vec<Standing> {
    let mut standings: Vec<Standing> = state
        .players
        .iter()
        .enumerate()
        .map(|(player, name)| Standing {
            player,
            name: name.clone(),
            total: total_score(state, player),
        })
        .collect();
    // sort_by is stable
    standings.sort_by(|a, b| b.total.cmp(&a.total));
    standings
}

/// Leader of the final standings once the game is over.
pub fn winner(state: &GameState) -> Option<Standing> {
    if !state.is_terminal() {
        return None;
    }
    final_rankings(state).into_iter().next()
}
