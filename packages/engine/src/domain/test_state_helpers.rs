//! Test-only game state helper for domain unit tests.

use crate::config::GameConfig;
use crate::domain::game_flow::submit_value;
use crate::domain::round_plan::RoundPlan;
use crate::domain::state::GameState;
use crate::domain::Trump;

pub const FIXED_TRUMPS: [Trump; 5] = [
    Trump::Hearts,
    Trump::Spades,
    Trump::Diamonds,
    Trump::Clubs,
    Trump::NoTrumps,
];

#[derive(Debug, Clone)]
pub struct MakeGameStateArgs {
    pub players: usize,
    pub cards: Vec<u8>,
    pub exact_bonus: i16,
    pub restrict_last_prediction: bool,
}

impl Default for MakeGameStateArgs {
    fn default() -> Self {
        Self {
            players: 3,
            cards: vec![2, 1, 2],
            exact_bonus: 10,
            restrict_last_prediction: false,
        }
    }
}

/// Player names "A", "B", "C", ... for `n` players.
pub fn names(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let letter = (b'A' + (i % 26) as u8) as char;
            if i < 26 {
                letter.to_string()
            } else {
                format!("{letter}{}", i / 26)
            }
        })
        .collect()
}

/// Fresh game with an explicit schedule and a fixed trump order.
pub fn make_game_state(args: MakeGameStateArgs) -> GameState {
    let config = GameConfig {
        exact_bonus: args.exact_bonus,
        restrict_last_prediction: args.restrict_last_prediction,
        ..GameConfig::default()
    };
    GameState::new(
        names(args.players),
        RoundPlan::from_parts(&args.cards, FIXED_TRUMPS),
        config,
    )
}

/// Submit each value in order, panicking on the first rejection.
pub fn submit_all(state: &mut GameState, values: &[u8]) {
    for v in values {
        submit_value(state, &v.to_string())
            .unwrap_or_else(|e| panic!("submit {v} rejected: {e}"));
    }
}
