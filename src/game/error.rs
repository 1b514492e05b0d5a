//! Rejection reasons for game actions
//!
//! Every variant is recoverable: the rejected action leaves the game unchanged
//! and the front end shows the message to the player.

use crate::core::WordError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the word must have {expected} letters (got {actual})")]
    InvalidLength { expected: usize, actual: usize },
    #[error("only letters are allowed: {0}")]
    InvalidCharacters(#[from] WordError),
    #[error("'{}' is not in the word list", .0.to_uppercase())]
    NotInDictionary(String),
    #[error("the game is over, start a new one")]
    GameOver,
    #[error("word length must be between {min} and {max} letters (got {length})")]
    UnsupportedLength { length: usize, min: usize, max: usize },
}
