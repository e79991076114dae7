#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Score tracking engine for "Judgement" (Oh Hell) style trick-taking games.
//!
//! The crate owns the round plan, the prediction / tricks turn sequencing,
//! and the scoring rule. Presentation layers drive a game through
//! [`domain::game_flow::submit_value`] and render from the read accessors or
//! a [`domain::snapshot::GameSnapshot`].

pub mod config;
pub mod domain;
pub mod errors;


// Re-exports for public API
pub use config::GameConfig;
pub use domain::game_flow::{initialize, initialize_with_rng, submit_value, SubmitOutcome};
pub use domain::round_plan::{RoundPlan, RoundSpec};
pub use domain::state::{Column, GameState, Phase, PlayerId};
pub use domain::{Suit, Trump};
pub use errors::domain::{DomainError, ValidationKind};

// Prelude for presentation layers and tests
pub mod prelude {
    pub use super::config::GameConfig;
    pub use super::domain::game_flow::{
        initialize, initialize_with_plan, initialize_with_rng, legal_values, submit_value,
        SubmitOutcome,
    };
    pub use super::domain::scoring::{final_rankings, total_score, winner, Standing};
    pub use super::domain::snapshot::{snapshot, GameSnapshot};
    pub use super::errors::domain::{DomainError, ValidationKind};
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
