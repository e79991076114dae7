//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_types;
pub mod game_flow;
pub mod game_transition;
pub mod input_parsing;
pub mod players;
pub mod round_plan;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod trump_order;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_rankings;

// Re-exports for ergonomics
pub use cards_types::{Colour, Suit, Trump};
pub use game_flow::legal_values;
pub use players::parse_player_list;
pub use rules::cards_per_round;
pub use scoring::{final_rankings, round_score, total_score, winner, Standing};
pub use snapshot::{snapshot, GameSnapshot};
pub use trump_order::generate_trump_order;
