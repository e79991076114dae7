//! Domain-level error type returned by every engine entry point.
//!
//! All variants are recoverable: the caller re-prompts for the same turn and
//! the engine state is left untouched.

use thiserror::Error;

/// Validation failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// Fewer than two distinct non-blank names, or more players than cards.
    InvalidPlayerCount,
    /// Input does not parse as an integer (blank input included).
    NotANumber,
    /// Integer outside `0..=cards_dealt` for the current round.
    OutOfRange,
    /// Last prediction of the round would let the predictions sum to the
    /// cards dealt (only when the restriction is enabled).
    ForbiddenPrediction,
    /// The game has ended; no further input is accepted.
    GameOver,
}

impl ValidationKind {
    /// Stable SCREAMING_SNAKE_CASE code for presentation layers.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValidationKind::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ValidationKind::NotANumber => "NOT_A_NUMBER",
            ValidationKind::OutOfRange => "OUT_OF_RANGE",
            ValidationKind::ForbiddenPrediction => "FORBIDDEN_PREDICTION",
            ValidationKind::GameOver => "GAME_OVER",
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("{1}")]
    Validation(ValidationKind, String),
    /// Rejected game configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Config(_) => None,
        }
    }
}
