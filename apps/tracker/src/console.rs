//! Line-oriented prompt loop driving a game from a reader to a writer.

use std::io::{self, BufRead, Write};

use judgement_engine::domain::game_transition::GameTransition;
use judgement_engine::domain::parse_player_list;
use judgement_engine::prelude::*;
use judgement_engine::{GameState, Phase};
use thiserror::Error;
use tracing::debug;

use crate::render::Grid;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("input closed before the game finished")]
    InputClosed,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Build the game from `players` when given; otherwise ask until the
    /// roster is acceptable.
    pub fn setup(
        &mut self,
        players: Option<&str>,
        config: &GameConfig,
    ) -> Result<GameState, ConsoleError> {
        if let Some(raw) = players {
            return Ok(initialize(parse_player_list(raw), config)?);
        }

        loop {
            let line = self.prompt("Enter player names separated by commas: ")?;
            match initialize(parse_player_list(&line), config) {
                Ok(state) => return Ok(state),
                Err(DomainError::Validation(ValidationKind::InvalidPlayerCount, msg)) => {
                    writeln!(self.output, "{msg}")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Prompt for every remaining value, printing the grid as each round
    /// completes.
    pub fn play(&mut self, state: &mut GameState) -> Result<(), ConsoleError> {
        while !state.is_terminal() {
            let header = turn_header(state);
            let line = self.prompt(&header)?;
            match submit_value(state, &line) {
                Ok(outcome) => {
                    let round_done = outcome
                        .transitions
                        .iter()
                        .any(|t| matches!(t, GameTransition::RoundCompleted { .. }));
                    if round_done {
                        writeln!(self.output, "\n{}", Grid(&snapshot(state)))?;
                    }
                }
                Err(DomainError::Validation(kind, msg)) => {
                    debug!(code = kind.as_str(), "re-prompting");
                    writeln!(self.output, "{msg}")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    pub fn announce_results(&mut self, state: &GameState) -> Result<(), ConsoleError> {
        writeln!(self.output, "Final scores:")?;
        for (rank, standing) in final_rankings(state).iter().enumerate() {
            writeln!(self.output, "{:>3}. {}: {}", rank + 1, standing.name, standing.total)?;
        }
        if let Some(w) = winner(state) {
            writeln!(
                self.output,
                "The winner is {} with {} points!",
                w.name, w.total
            )?;
        }
        Ok(())
    }

    pub fn print_json(&mut self, state: &GameState) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", snapshot(state).to_json()?)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

fn turn_header(state: &GameState) -> String {
    let cards = state.current_bound().unwrap_or(0);
    let trump = state
        .current_trump()
        .map(|t| t.to_string())
        .unwrap_or_default();
    let label = match state.phase() {
        Phase::Predicting => "Prediction",
        Phase::ReportingTricks => "Tricks",
    };
    let who = state.current_player_name().unwrap_or_default();
    format!(
        "Round {}, Cards: {cards}, Trump: {trump}, {label} for {who} {}: ",
        state.round_no(),
        describe_options(&legal_values(state)),
    )
}

/// `[0-3]` for a contiguous range, `[0, 2, 3]` when a value is excluded.
fn describe_options(values: &[u8]) -> String {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) if usize::from(last - first) + 1 == values.len() => {
            format!("[{first}-{last}]")
        }
        _ => {
            let list: Vec<String> = values.iter().map(u8::to_string).collect();
            format!("[{}]", list.join(", "))
        }
    }
}
