//! Game state machine
//!
//! A [`Game`] starts `InProgress` and moves once, to `Won` or `Lost`. State is
//! committed synchronously inside [`Game::submit_guess`]; a rejected guess
//! leaves the game untouched.

use super::GameError;
use crate::core::{Feedback, KeyboardState, Word};
use log::{debug, info};
use rustc_hash::FxHashSet;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// True for `Won` and `Lost`
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One evaluated row of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Word,
    feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub feedback: Feedback,
    /// Outcome after this guess was applied
    pub outcome: Outcome,
    pub attempts_used: usize,
}

/// A single game: secret, board, outcome and keyboard hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: Word,
    max_attempts: usize,
    attempts: Vec<Attempt>,
    outcome: Outcome,
    keyboard: KeyboardState,
    dictionary: Option<FxHashSet<Word>>,
}

impl Game {
    /// Start a game for `secret` that accepts any same-length guess
    #[must_use]
    pub fn new(secret: Word, max_attempts: usize) -> Self {
        let max_attempts = max_attempts.max(1);
        Self {
            secret,
            max_attempts,
            attempts: Vec::with_capacity(max_attempts),
            outcome: Outcome::InProgress,
            keyboard: KeyboardState::new(),
            dictionary: None,
        }
    }

    /// Only accept guesses found in `words`
    ///
    /// Words of other lengths are ignored. The secret is always accepted.
    #[must_use]
    pub fn with_dictionary(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        let length = self.secret.len();
        let mut dictionary: FxHashSet<Word> =
            words.into_iter().filter(|w| w.len() == length).collect();
        dictionary.insert(self.secret.clone());
        self.dictionary = Some(dictionary);
        self
    }

    /// Letters per word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts - self.attempts.len()
    }

    /// Evaluated attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn validates_dictionary(&self) -> bool {
        self.dictionary.is_some()
    }

    /// The secret, available only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.is_over().then_some(&self.secret)
    }

    /// Validate raw input as a guess for this game without changing state
    ///
    /// Input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// - `InvalidLength` if the letter count differs from the secret's
    /// - `InvalidCharacters` if it contains anything but letters
    /// - `NotInDictionary` if dictionary validation is on and the word is unknown
    pub fn parse_guess(&self, raw: &str) -> Result<Word, GameError> {
        let trimmed = raw.trim();
        let expected = self.word_length();
        let actual = trimmed.chars().count();
        if actual != expected {
            return Err(GameError::InvalidLength { expected, actual });
        }

        let guess = Word::new(trimmed)?;

        if let Some(dictionary) = &self.dictionary
            && !dictionary.contains(&guess)
        {
            return Err(GameError::NotInDictionary(guess.text().to_owned()));
        }

        Ok(guess)
    }

    /// Submit a guess
    ///
    /// On success the attempt is recorded, the keyboard is updated and the
    /// outcome moves to `Won` (all letters correct) or `Lost` (last attempt
    /// used) when applicable.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, otherwise any error from
    /// [`Game::parse_guess`]. Errors never change the game.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, Outcome};
    ///
    /// let mut game = Game::new(Word::new("casa").unwrap(), 6);
    /// let evaluation = game.submit_guess("CASA").unwrap();
    ///
    /// assert!(evaluation.feedback.is_perfect());
    /// assert_eq!(evaluation.outcome, Outcome::Won);
    /// assert_eq!(game.attempts_used(), 1);
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<Evaluation, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let guess = self.parse_guess(raw)?;
        let feedback = Feedback::calculate(&guess, &self.secret);
        debug!("Guess {guess} -> {}", feedback.to_code());

        self.keyboard.record(&guess, &feedback);
        self.attempts.push(Attempt {
            guess,
            feedback: feedback.clone(),
        });

        if feedback.is_perfect() {
            self.outcome = Outcome::Won;
            info!("Game won in {} attempts", self.attempts.len());
        } else if self.attempts.len() >= self.max_attempts {
            self.outcome = Outcome::Lost;
            info!("Game lost, the word was {}", self.secret);
        }

        Ok(Evaluation {
            feedback,
            outcome: self.outcome,
            attempts_used: self.attempts.len(),
        })
    }
}
