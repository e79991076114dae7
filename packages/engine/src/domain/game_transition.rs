use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, Phase, PlayerId};

/// The parts of the state that decide who acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnView {
    pub round: usize,
    pub phase: Phase,
    pub turn: Option<PlayerId>,
    pub terminal: bool,
}

impl TurnView {
    pub fn of(state: &GameState) -> Self {
        Self {
            round: state.current_round(),
            phase: state.phase(),
            turn: state.current_player(),
            terminal: state.is_terminal(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: predictions closed and tricks reporting opened, or the
    /// reverse at the start of a new round.
    PhaseChanged { phase: Phase },

    /// Edge-triggered: every player's score for `round` is recorded.
    RoundCompleted { round: usize },

    /// Edge-triggered: the last round was scored.
    GameEnded,
}

/// Derive transitions from before/after turn views.
pub fn derive_game_transitions(before: &TurnView, after: &TurnView) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Round completion
    if after.round > before.round {
        transitions.push(GameTransition::RoundCompleted {
            round: before.round,
        });
    }

    // 2. Game end
    if !before.terminal && after.terminal {
        transitions.push(GameTransition::GameEnded);
        return transitions;
    }

    // 3. Phase change
    if before.phase != after.phase {
        transitions.push(GameTransition::PhaseChanged { phase: after.phase });
    }

    // 4. Turn change (re-announced when the phase or round moved on)
    if let Some(player_id) = after.turn {
        if before.turn != Some(player_id) || !transitions.is_empty() {
            transitions.push(GameTransition::TurnBecame { player_id });
        }
    }

    transitions
}
