//! Player roster normalisation.

use crate::errors::domain::{DomainError, ValidationKind};

/// Split a comma-separated roster line into names.
///
/// Names are trimmed and blank entries dropped; duplicates are kept here and
/// resolved by [`normalize_players`].
pub fn parse_player_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Trim names, drop blanks, drop repeated names (first occurrence keeps its
/// seat), then enforce `min..=max` players.
pub fn normalize_players<I, S>(names: I, min: usize, max: usize) -> Result<Vec<String>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut players: Vec<String> = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() || players.iter().any(|p| p == name) {
            continue;
        }
        players.push(name.to_owned());
    }

    if players.len() < min {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Please enter at least {min} players."),
        ));
    }
    if players.len() > max {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("At most {max} players can share the deck."),
        ));
    }
    Ok(players)
}
