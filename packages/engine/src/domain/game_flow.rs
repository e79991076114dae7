//! Game lifecycle: start a game and advance it one turn at a time.
//!
//! [`submit_value`] is the only entry point that mutates a [`GameState`].
//! Every check runs before the first write, so a rejected call leaves the
//! state exactly as it was.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::domain::bidding::{legal_predictions, record_prediction, validate_prediction, Prediction};
use crate::domain::game_transition::{derive_game_transitions, GameTransition, TurnView};
use crate::domain::input_parsing::parse_value;
use crate::domain::players::normalize_players;
use crate::domain::round_plan::RoundPlan;
use crate::domain::rules::{valid_value_range, MIN_PLAYERS};
use crate::domain::scoring::winner;
use crate::domain::state::{rotate_turn_order, GameState, Phase, PlayerId};
use crate::domain::tricks::{legal_tricks, record_tricks};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a successful [`submit_value`] recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// 0-based round the value belongs to.
    pub round: usize,
    pub player: PlayerId,
    /// Phase the value was recorded in.
    pub phase: Phase,
    pub value: u8,
    /// Round score, present when a tricks report completed the player's round.
    pub score: Option<i16>,
    pub transitions: Vec<GameTransition>,
}

impl SubmitOutcome {
    pub fn game_ended(&self) -> bool {
        self.transitions.contains(&GameTransition::GameEnded)
    }
}

/// Start a game. The trump order comes from a ChaCha RNG seeded with
/// `config.seed` when set, otherwise from the thread RNG.
pub fn initialize<I, S>(names: I, config: &GameConfig) -> Result<GameState, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match config.seed {
        Some(seed) => initialize_with_rng(names, config, &mut ChaCha20Rng::seed_from_u64(seed)),
        None => initialize_with_rng(names, config, &mut rand::rng()),
    }
}

/// Start a game drawing the trump order from `rng`.
pub fn initialize_with_rng<I, S, R>(
    names: I,
    config: &GameConfig,
    rng: &mut R,
) -> Result<GameState, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    config.validate()?;
    let players = normalize_players(names, MIN_PLAYERS, config.deck_size as usize)?;
    let plan = RoundPlan::generate(players.len(), config.deck_size, rng);
    Ok(start(players, plan, config))
}

/// Start a game with an explicit round plan.
pub fn initialize_with_plan<I, S>(
    names: I,
    plan: RoundPlan,
    config: &GameConfig,
) -> Result<GameState, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    config.validate()?;
    if plan.is_empty() {
        return Err(DomainError::config("round plan must contain at least one round"));
    }
    let players = normalize_players(names, MIN_PLAYERS, usize::MAX)?;
    Ok(start(players, plan, config))
}

fn start(players: Vec<String>, plan: RoundPlan, config: &GameConfig) -> GameState {
    info!(
        players = players.len(),
        rounds = plan.len(),
        trump_order = ?plan.trump_order(),
        "game started"
    );
    GameState::new(players, plan, config.clone())
}

/// Record the current player's value and advance the turn.
pub fn submit_value(state: &mut GameState, raw: &str) -> Result<SubmitOutcome, DomainError> {
    let (player, value) = validate_input(state, raw).inspect_err(|e| {
        debug!(round_no = state.round_no(), error = %e, "input rejected");
    })?;

    let before = TurnView::of(state);
    let round = state.current_round;
    let phase = state.phase;

    let score = match phase {
        Phase::Predicting => {
            record_prediction(state, player, Prediction(value));
            None
        }
        Phase::ReportingTricks => record_tricks(state, player, value),
    };

    advance_turn(state);

    let after = TurnView::of(state);
    let transitions = derive_game_transitions(&before, &after);

    if after.terminal {
        if let Some(w) = winner(state) {
            info!(winner = %w.name, total = w.total, "game over");
        }
    }

    Ok(SubmitOutcome {
        round,
        player,
        phase,
        value,
        score,
        transitions,
    })
}

/// Values the current player may enter right now.
pub fn legal_values(state: &GameState) -> Vec<u8> {
    match state.phase {
        Phase::Predicting => legal_predictions(state).into_iter().map(|b| b.0).collect(),
        Phase::ReportingTricks => legal_tricks(state),
    }
}

fn validate_input(state: &GameState, raw: &str) -> Result<(PlayerId, u8), DomainError> {
    let game_over =
        || DomainError::validation(ValidationKind::GameOver, "The game is over; no further input.");

    let bound = state.current_bound().ok_or_else(game_over)?;
    let player = state.current_player().ok_or_else(game_over)?;

    let parsed = parse_value(raw)?;
    let value = u8::try_from(parsed)
        .ok()
        .filter(|v| valid_value_range(bound).contains(v))
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::OutOfRange,
                format!("Please enter a valid number between 0 and {bound}."),
            )
        })?;

    if state.phase == Phase::Predicting {
        validate_prediction(state, value)?;
    }

    Ok((player, value))
}

fn advance_turn(state: &mut GameState) {
    state.current_player_index += 1;
    if state.current_player_index < state.turn_order.len() {
        return;
    }

    state.current_player_index = 0;
    match state.phase {
        Phase::Predicting => {
            state.phase = Phase::ReportingTricks;
        }
        Phase::ReportingTricks => {
            info!(round_no = state.round_no(), "round complete");
            state.phase = Phase::Predicting;
            state.current_round += 1;
            rotate_turn_order(&mut state.turn_order);
        }
    }
}
