//! Public snapshot API for rendering a game without reaching into the state.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::forbidden_prediction;
use crate::domain::game_flow::legal_values;
use crate::domain::scoring::{final_rankings, total_score, Standing};
use crate::domain::state::{Column, GameState, Phase, PlayerId};
use crate::domain::Trump;

/// One player's cells in one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellsPublic {
    pub prediction: Option<u8>,
    pub tricks: Option<u8>,
    pub score: Option<i16>,
}

/// One row of the score grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRow {
    /// 1-based.
    pub round_no: usize,
    pub cards_dealt: u8,
    pub trump: Trump,
    /// Indexed by base player order.
    pub cells: Vec<CellsPublic>,
}

/// The input the engine is waiting for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPublic {
    pub round_no: usize,
    pub cards_dealt: u8,
    pub trump: Trump,
    pub phase: Phase,
    pub to_act: PlayerId,
    pub to_act_name: String,
    pub legal_values: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_prediction: Option<u8>,
    /// Cell to highlight: (0-based round, player, column).
    pub cell: (usize, PlayerId, Column),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<String>,
    pub turn_order: Vec<PlayerId>,
    pub rows: Vec<RoundRow>,
    /// Running totals, indexed by base player order.
    pub totals: Vec<i32>,
    /// `None` once the game is over.
    pub turn: Option<TurnPublic>,
    /// Present once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rankings: Option<Vec<Standing>>,
}

impl GameSnapshot {
    pub fn is_terminal(&self) -> bool {
        self.turn.is_none()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn snapshot(state: &GameState) -> GameSnapshot {
    let players = state.players().len();

    let rows = state
        .plan()
        .iter()
        .enumerate()
        .map(|(round, spec)| RoundRow {
            round_no: round + 1,
            cards_dealt: spec.cards_dealt,
            trump: spec.trump,
            cells: (0..players)
                .map(|p| CellsPublic {
                    prediction: state.prediction(p, round),
                    tricks: state.tricks(p, round),
                    score: state.score(p, round),
                })
                .collect(),
        })
        .collect();

    let totals = (0..players).map(|p| total_score(state, p)).collect();

    let turn = match (state.current_spec(), state.current_player(), state.current_cell()) {
        (Some(spec), Some(to_act), Some(cell)) => Some(TurnPublic {
            round_no: state.round_no(),
            cards_dealt: spec.cards_dealt,
            trump: spec.trump,
            phase: state.phase(),
            to_act,
            to_act_name: state.player_name(to_act).unwrap_or_default().to_owned(),
            legal_values: legal_values(state),
            forbidden_prediction: forbidden_prediction(state),
            cell,
        }),
        _ => None,
    };

    let rankings = state.is_terminal().then(|| final_rankings(state));

    GameSnapshot {
        players: state.players().to_vec(),
        turn_order: state.turn_order().to_vec(),
        rows,
        totals,
        turn,
        rankings,
    }
}
