//! Trump rotation for a game.
//!
//! The order is drawn once per game: each colour pair is shuffled on its
//! own, the pairs are interleaved red/black, and "no trump" closes the
//! cycle. Rounds beyond the fifth reuse the order cyclically.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Suit, Trump};

pub const TRUMP_CYCLE: usize = 5;

/// Draw a trump order from `rng`.
///
/// The caller supplies the RNG so tests and seeded games get a reproducible
/// order.
pub fn generate_trump_order<R: Rng + ?Sized>(rng: &mut R) -> [Trump; TRUMP_CYCLE] {
    let mut red = Suit::RED;
    let mut black = Suit::BLACK;
    red.shuffle(rng);
    black.shuffle(rng);

    [
        red[0].into(),
        black[0].into(),
        red[1].into(),
        black[1].into(),
        Trump::NoTrumps,
    ]
}

/// Trump for a 0-based round index.
pub fn trump_for_round(order: &[Trump; TRUMP_CYCLE], round: usize) -> Trump {
    order[round % TRUMP_CYCLE]
}
