//! Per-letter keyboard hints
//!
//! Tracks the best result seen for every guessed letter across a game.

use super::{CellResult, Feedback, Word};
use rustc_hash::FxHashMap;

/// Best-seen [`CellResult`] per letter
///
/// Results only ever upgrade (`Absent` → `Present` → `Correct`); a letter
/// marked correct stays correct for the rest of the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, CellResult>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the feedback of one evaluated guess into the keyboard
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.letters().iter().zip(feedback.cells()) {
            self.upgrade(letter, result);
        }
    }

    /// Set `letter` to `result` unless it already holds something stronger
    pub fn upgrade(&mut self, letter: char, result: CellResult) {
        self.letters
            .entry(letter)
            .and_modify(|best| *best = (*best).max(result))
            .or_insert(result);
    }

    /// Best result seen for a letter, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<CellResult> {
        self.letters.get(&letter).copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
