//! The fixed round structure of a game: cards dealt and trump per round.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::rules::cards_per_round_for_deck;
use crate::domain::trump_order::{generate_trump_order, trump_for_round, TRUMP_CYCLE};
use crate::domain::Trump;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSpec {
    pub cards_dealt: u8,
    pub trump: Trump,
}

/// Ordered round specs, one per round. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlan {
    trump_order: [Trump; TRUMP_CYCLE],
    rounds: Vec<RoundSpec>,
}

impl RoundPlan {
    /// Build the plan for `player_count` players, drawing the trump order
    /// from `rng`.
    pub fn generate<R: Rng + ?Sized>(player_count: usize, deck_size: u8, rng: &mut R) -> Self {
        let trump_order = generate_trump_order(rng);
        Self::from_parts(&cards_per_round_for_deck(player_count, deck_size), trump_order)
    }

    /// Build a plan from an explicit schedule and trump order.
    pub fn from_parts(cards_per_round: &[u8], trump_order: [Trump; TRUMP_CYCLE]) -> Self {
        let rounds = cards_per_round
            .iter()
            .enumerate()
            .map(|(i, &cards_dealt)| RoundSpec {
                cards_dealt,
                trump: trump_for_round(&trump_order, i),
            })
            .collect();
        Self {
            trump_order,
            rounds,
        }
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn get(&self, round: usize) -> Option<&RoundSpec> {
        self.rounds.get(round)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.rounds.len().checked_sub(1)
    }

    pub fn rounds(&self) -> &[RoundSpec] {
        &self.rounds
    }

    pub fn trump_order(&self) -> &[Trump; TRUMP_CYCLE] {
        &self.trump_order
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoundSpec> {
        self.rounds.iter()
    }
}
