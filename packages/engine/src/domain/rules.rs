use std::ops::RangeInclusive;

pub const DECK_SIZE: u8 = 52;
pub const MIN_PLAYERS: usize = 2;
pub const EXACT_BONUS: i16 = 10;
// Keeps bonus + a u8 bid inside i16.
pub const MAX_EXACT_BONUS: i16 = 1000;

/// Largest hand for `player_count` players sharing a `deck_size` deck.
pub fn max_cards(player_count: usize, deck_size: u8) -> u8 {
    if player_count == 0 {
        return 0;
    }
    (deck_size as usize / player_count) as u8
}

// Hand-size schedule: max → max-1 → ... → 1 → 2 → ... → max
// The 1-card round is the only pivot; the peak appears once.
pub fn cards_per_round_for_deck(player_count: usize, deck_size: u8) -> Vec<u8> {
    let max = max_cards(player_count, deck_size);
    if max < 1 {
        return Vec::new();
    }
    (1..=max).rev().chain(2..=max).collect()
}

/// Schedule for a standard 52-card deck.
pub fn cards_per_round(player_count: usize) -> Vec<u8> {
    cards_per_round_for_deck(player_count, DECK_SIZE)
}

pub fn round_count(player_count: usize, deck_size: u8) -> usize {
    match max_cards(player_count, deck_size) {
        0 => 0,
        max => 2 * (max as usize - 1) + 1,
    }
}

/// Values accepted for a prediction or a tricks report.
pub fn valid_value_range(cards_dealt: u8) -> RangeInclusive<u8> {
    0..=cards_dealt
}
