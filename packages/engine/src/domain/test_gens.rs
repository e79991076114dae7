// Proptest generators for domain types.
// Generate valid inputs by construction rather than filtering.

use proptest::prelude::*;

use crate::domain::rules::cards_per_round_for_deck;
use crate::domain::Trump;

/// Generate a random Trump (including NoTrumps)
pub fn trump() -> impl Strategy<Value = Trump> {
    prop_oneof![
        Just(Trump::Clubs),
        Just(Trump::Diamonds),
        Just(Trump::Hearts),
        Just(Trump::Spades),
        Just(Trump::NoTrumps),
    ]
}

/// Any valid player count for a standard deck.
pub fn player_count() -> impl Strategy<Value = usize> {
    2usize..=52usize
}

/// Small games: (player_count, schedule) drawn from a reduced deck so a full
/// game stays short.
pub fn small_game() -> impl Strategy<Value = (usize, Vec<u8>)> {
    (2usize..=5usize).prop_flat_map(|n| {
        let min_deck = n as u8;
        (Just(n), min_deck..=(n as u8 * 4))
            .prop_map(|(n, deck)| (n, cards_per_round_for_deck(n, deck)))
    })
}

/// (prediction, tricks) pairs for `players` players in a round dealing `cards`.
pub fn round_values(cards: u8, players: usize) -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0..=cards, 0..=cards), players)
}

/// Per-round values for a whole schedule.
pub fn game_script(
    players: usize,
    cards: Vec<u8>,
) -> impl Strategy<Value = Vec<Vec<(u8, u8)>>> {
    cards
        .into_iter()
        .map(|c| round_values(c, players))
        .collect::<Vec<_>>()
}

/// Input that never parses as an integer.
pub fn junk_input() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z_]{1,8}",
        "[0-9]{1,2}\\.[0-9]",
    ]
}
