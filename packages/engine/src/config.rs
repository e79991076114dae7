//! Game configuration handling.
//!
//! Provides a typed, serde-backed configuration for a single game session.
//! Every field has a default, so a partial JSON document (or none at all)
//! yields a usable config.
//!
//! # Example JSON Config
//!
//! ```json
//! {"seed": 12345, "restrict_last_prediction": true}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::rules::{DECK_SIZE, EXACT_BONUS, MAX_EXACT_BONUS, MIN_PLAYERS};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards in the deck; the largest round deals `deck_size / players`.
    pub deck_size: u8,

    /// Constant added to the bid for an exact prediction, and the base of
    /// the penalty for a missed one.
    pub exact_bonus: i16,

    /// Optional RNG seed for a reproducible trump order.
    ///
    /// When absent the trump order is drawn from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Forbid the last player in turn order from predicting the value that
    /// makes the round's predictions add up to the cards dealt.
    pub restrict_last_prediction: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_size: DECK_SIZE,
            exact_bonus: EXACT_BONUS,
            seed: None,
            restrict_last_prediction: false,
        }
    }
}

impl GameConfig {
    /// Parse from optional JSON, falling back to defaults for a missing
    /// document.
    pub fn from_json(json: Option<&JsonValue>) -> Result<Self, DomainError> {
        let config = match json {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| DomainError::config(format!("invalid game config: {e}")))?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, DomainError> {
        let value: JsonValue = serde_json::from_str(raw)
            .map_err(|e| DomainError::config(format!("invalid game config: {e}")))?;
        Self::from_json(Some(&value))
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if (self.deck_size as usize) < MIN_PLAYERS {
            return Err(DomainError::config(format!(
                "deck_size must be at least {MIN_PLAYERS} (got {})",
                self.deck_size
            )));
        }
        if !(0..=MAX_EXACT_BONUS).contains(&self.exact_bonus) {
            return Err(DomainError::config(format!(
                "exact_bonus must be within 0..={MAX_EXACT_BONUS} (got {})",
                self.exact_bonus
            )));
        }
        Ok(())
    }
}
