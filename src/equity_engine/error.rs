use thiserror::Error;

use crate::equity_engine::models::Card;

/// Errors raised by the card model, the evaluator, the deck and the simulator.
///
/// Every error is raised at the point where a precondition is violated; nothing
/// inside the engine retries or substitutes a default result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A card token whose rank or suit is not recognised.
    #[error("cannot parse card token {token:?}: {reason}")]
    Parse { token: String, reason: String },

    /// A card whose rank lies outside `2..=14`.
    #[error("invalid rank {0}: expected 2 to 14")]
    InvalidRank(u8),

    /// The same card appears twice among known cards or inside a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),

    #[error("invalid {what} size: expected {expected}, found {found}")]
    InvalidHandSize {
        what: &'static str,
        expected: &'static str,
        found: usize,
    },

    /// More cards requested than remain unseen in the deck.
    #[error("insufficient cards: requested {requested}, only {available} available")]
    InsufficientCards { requested: usize, available: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub(crate) fn parse(token: &str, reason: impl Into<String>) -> Self {
        EngineError::Parse {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
