use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::domain::round_plan::{RoundPlan, RoundSpec};
use crate::domain::Trump;

/// Seat in the base player order (the order names were entered).
pub type PlayerId = usize;

/// What the current player is asked for.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Each player declares how many tricks they expect to win.
    Predicting,
    /// Each player reports the tricks actually won; scores follow.
    ReportingTricks,
}

/// Per-player columns of the score grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Column {
    Prediction,
    Tricks,
    Score,
}

impl Phase {
    /// Grid column written by this phase.
    pub const fn column(self) -> Column {
        match self {
            Phase::Predicting => Column::Prediction,
            Phase::ReportingTricks => Column::Tricks,
        }
    }
}

/// Dense per-player, per-round grid. A cell is `None` until recorded.
///
/// Every player of the game has exactly one row, sized to the round count,
/// so the key set always equals the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundGrid<T> {
    rows: Vec<Vec<Option<T>>>,
}

impl<T: Copy> RoundGrid<T> {
    pub fn new(players: usize, rounds: usize) -> Self {
        Self {
            rows: vec![vec![None; rounds]; players],
        }
    }

    pub fn get(&self, player: PlayerId, round: usize) -> Option<T> {
        self.rows.get(player)?.get(round).copied().flatten()
    }

    pub fn row(&self, player: PlayerId) -> &[Option<T>] {
        self.rows.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Values recorded for `round`, in base player order.
    pub fn column(&self, round: usize) -> Vec<Option<T>> {
        self.rows
            .iter()
            .map(|row| row.get(round).copied().flatten())
            .collect()
    }

    pub(crate) fn set(&mut self, player: PlayerId, round: usize, value: T) {
        if let Some(cell) = self.rows.get_mut(player).and_then(|row| row.get_mut(round)) {
            debug_assert!(cell.is_none(), "cell ({player}, {round}) written twice");
            *cell = Some(value);
        }
    }
}

/// Entire game container. Mutated only through
/// [`crate::domain::game_flow::submit_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Base player order; fixed for the whole game.
    pub(crate) players: Vec<String>,
    /// Acting order for the current round, a rotation of the base order.
    pub(crate) turn_order: Vec<PlayerId>,
    pub(crate) predictions: RoundGrid<u8>,
    pub(crate) tricks_won: RoundGrid<u8>,
    pub(crate) scores: RoundGrid<i16>,
    /// 0-based; equals `plan.len()` once the game is over.
    pub(crate) current_round: usize,
    /// Index into `turn_order`.
    pub(crate) current_player_index: usize,
    pub(crate) phase: Phase,
    pub(crate) plan: RoundPlan,
    pub(crate) config: GameConfig,
}

impl GameState {
    pub(crate) fn new(players: Vec<String>, plan: RoundPlan, config: GameConfig) -> Self {
        let player_count = players.len();
        let rounds = plan.len();
        Self {
            turn_order: (0..player_count).collect(),
            predictions: RoundGrid::new(player_count, rounds),
            tricks_won: RoundGrid::new(player_count, rounds),
            scores: RoundGrid::new(player_count, rounds),
            current_round: 0,
            current_player_index: 0,
            phase: Phase::Predicting,
            players,
            plan,
            config,
        }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.players.get(player).map(String::as_str)
    }

    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.players.iter().position(|p| p == name)
    }

    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    pub fn turn_order_names(&self) -> Vec<&str> {
        self.turn_order
            .iter()
            .filter_map(|&p| self.player_name(p))
            .collect()
    }

    pub fn plan(&self) -> &RoundPlan {
        &self.plan
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 0-based round index.
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// 1-based round number for display.
    pub fn round_no(&self) -> usize {
        self.current_round + 1
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.current_round >= self.plan.len()
    }

    /// Cards and trump of the round being played; `None` once the game is over.
    pub fn current_spec(&self) -> Option<&RoundSpec> {
        if self.is_terminal() {
            return None;
        }
        self.plan.get(self.current_round)
    }

    /// Upper bound for the value the current player may enter.
    pub fn current_bound(&self) -> Option<u8> {
        self.current_spec().map(|r| r.cards_dealt)
    }

    pub fn current_trump(&self) -> Option<Trump> {
        self.current_spec().map(|r| r.trump)
    }

    /// Player whose turn it is; `None` once the game is over.
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.is_terminal() {
            return None;
        }
        self.turn_order.get(self.current_player_index).copied()
    }

    pub fn current_player_name(&self) -> Option<&str> {
        self.current_player().and_then(|p| self.player_name(p))
    }

    /// Grid cell awaiting input: (round, player, column).
    pub fn current_cell(&self) -> Option<(usize, PlayerId, Column)> {
        let player = self.current_player()?;
        Some((self.current_round, player, self.phase.column()))
    }

    pub fn predictions(&self) -> &RoundGrid<u8> {
        &self.predictions
    }

    pub fn tricks_won(&self) -> &RoundGrid<u8> {
        &self.tricks_won
    }

    pub fn scores(&self) -> &RoundGrid<i16> {
        &self.scores
    }

    pub fn prediction(&self, player: PlayerId, round: usize) -> Option<u8> {
        self.predictions.get(player, round)
    }

    pub fn tricks(&self, player: PlayerId, round: usize) -> Option<u8> {
        self.tricks_won.get(player, round)
    }

    pub fn score(&self, player: PlayerId, round: usize) -> Option<i16> {
        self.scores.get(player, round)
    }
}

/// Rotate the acting order one seat: the first player moves to the back.
pub fn rotate_turn_order(order: &mut [PlayerId]) {
    if !order.is_empty() {
        order.rotate_left(1);
    }
}
