//! Game configuration

use super::GameError;

/// Shortest supported secret
pub const MIN_WORD_LENGTH: usize = 4;
/// Longest supported secret
pub const MAX_WORD_LENGTH: usize = 8;
pub const DEFAULT_WORD_LENGTH: usize = 5;
/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Settings applied when a new game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    /// Reject guesses that are not in the word pool
    pub validate_dictionary: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            validate_dictionary: true,
        }
    }
}

impl GameConfig {
    /// Default configuration for a given word length
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnsupportedLength` outside `4..=8`.
    pub fn new(word_length: usize) -> Result<Self, GameError> {
        Ok(Self {
            word_length: validate_word_length(word_length)?,
            ..Self::default()
        })
    }

    /// Enable or disable dictionary validation
    #[must_use]
    pub const fn with_dictionary(mut self, validate: bool) -> Self {
        self.validate_dictionary = validate;
        self
    }

    /// Change the number of attempts (at least one)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}

/// Check that `length` is a playable word length
///
/// # Errors
///
/// Returns `GameError::UnsupportedLength` outside `4..=8`.
pub const fn validate_word_length(length: usize) -> Result<usize, GameError> {
    if matches!(length, MIN_WORD_LENGTH..=MAX_WORD_LENGTH) {
        Ok(length)
    } else {
        Err(GameError::UnsupportedLength {
            length,
            min: MIN_WORD_LENGTH,
            max: MAX_WORD_LENGTH,
        })
    }
}
