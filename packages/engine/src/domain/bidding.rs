//! Prediction (bid) rules.

use crate::domain::rules::valid_value_range;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Prediction(pub u8);

/// The value the current player may not predict, if any.
///
/// Only applies with `restrict_last_prediction` enabled, to the last player
/// in turn order, and only while the forbidden value is itself in range.
pub fn forbidden_prediction(state: &GameState) -> Option<u8> {
    if !state.config.restrict_last_prediction || state.phase != Phase::Predicting {
        return None;
    }
    let cards = state.current_bound()?;
    if state.current_player_index + 1 != state.turn_order.len() {
        return None;
    }

    let round = state.current_round;
    let predicted: u32 = state
        .turn_order
        .iter()
        .filter_map(|&p| state.predictions.get(p, round))
        .map(u32::from)
        .sum();

    let remaining = u32::from(cards).checked_sub(predicted)?;
    u8::try_from(remaining).ok()
}

/// Values the current player may enter in the prediction phase.
pub fn legal_predictions(state: &GameState) -> Vec<Prediction> {
    let Some(cards) = state.current_bound() else {
        return Vec::new();
    };
    let forbidden = forbidden_prediction(state);
    valid_value_range(cards)
        .filter(|v| Some(*v) != forbidden)
        .map(Prediction)
        .collect()
}

/// Check a prediction against the round rules without recording it.
pub fn validate_prediction(state: &GameState, value: u8) -> Result<(), DomainError> {
    if forbidden_prediction(state) == Some(value) {
        let cards = state.current_bound().unwrap_or_default();
        return Err(DomainError::validation(
            ValidationKind::ForbiddenPrediction,
            format!(
                "Predictions may not add up to {cards}; please choose a value other than {value}."
            ),
        ));
    }
    Ok(())
}

/// Record `who`'s prediction for the current round.
///
/// Range and turn checks happen in `game_flow`; this only writes the cell.
pub(crate) fn record_prediction(state: &mut GameState, who: PlayerId, bid: Prediction) {
    let round = state.current_round;
    state.predictions.set(who, round, bid.0);
    tracing::debug!(round_no = round + 1, player = who, prediction = bid.0, "prediction recorded");
}
