//! Play session: the state a front end drives
//!
//! A [`Session`] owns the word source, the current [`Game`], the row the
//! player is typing and the statistics for this run. Front ends call the
//! action methods and re-render from the accessors afterwards.

use super::config::validate_word_length;
use super::{Evaluation, Game, GameConfig, GameError, Outcome};
use crate::core::CellResult;
use crate::wordlists::WordSource;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One board position as a front end draws it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    /// `None` for typed-but-unsubmitted letters and empty cells
    pub result: Option<CellResult>,
}

/// In-memory results for the current run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` counts games won in `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, outcome: Outcome, attempts_used: usize) {
        self.games_played += 1;
        match outcome {
            Outcome::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if self.guess_distribution.len() <= attempts_used {
                    self.guess_distribution.resize(attempts_used + 1, 0);
                }
                self.guess_distribution[attempts_used] += 1;
            }
            Outcome::Lost => self.current_streak = 0,
            Outcome::InProgress => {}
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// Game session with a pending input row
#[derive(Debug)]
pub struct Session {
    source: WordSource,
    config: GameConfig,
    rng: StdRng,
    game: Game,
    input: String,
    stats: Statistics,
}

impl Session {
    /// Create a session and start its first game
    ///
    /// With a `seed` secret selection is reproducible.
    #[must_use]
    pub fn new(source: WordSource, config: GameConfig, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let game = Self::start_game(&source, &config, &mut rng);

        Self {
            source,
            config,
            rng,
            game,
            input: String::new(),
            stats: Statistics::default(),
        }
    }

    fn start_game(source: &WordSource, config: &GameConfig, rng: &mut StdRng) -> Game {
        let length = config.word_length;
        let secret = source.pick_word_or_fallback(length, rng);
        trace!("Secret chosen: {secret}");

        let game = Game::new(secret, config.max_attempts);
        let game = if config.validate_dictionary {
            game.with_dictionary(source.words_of_length(length).iter().cloned())
        } else {
            game
        };

        info!(
            "New game: {length} letters, {} attempts, dictionary {}",
            config.max_attempts,
            if config.validate_dictionary { "on" } else { "off" }
        );
        game
    }

    /// Start a new game with `length` letters
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnsupportedLength` outside `4..=8`; the current game
    /// is kept in that case.
    pub fn new_game(&mut self, length: usize) -> Result<(), GameError> {
        self.config.word_length = validate_word_length(length)?;
        self.restart();
        Ok(())
    }

    /// Start a new game with the current length
    pub fn restart(&mut self) {
        self.game = Self::start_game(&self.source, &self.config, &mut self.rng);
        self.input.clear();
    }

    /// Append a letter to the pending row
    ///
    /// Ignored (returns `false`) when the game is over, the row is full or
    /// `letter` is not alphabetic. The row length is checked after
    /// lowercasing, since some letters lowercase to more than one char.
    pub fn insert_letter(&mut self, letter: char) -> bool {
        if self.game.is_over() || !letter.is_alphabetic() {
            return false;
        }
        let lower: String = letter.to_lowercase().collect();
        if self.input.chars().count() + lower.chars().count() > self.game.word_length() {
            return false;
        }
        self.input.push_str(&lower);
        true
    }

    /// Remove the last letter of the pending row
    pub fn delete_last_letter(&mut self) -> bool {
        if self.game.is_over() {
            return false;
        }
        self.input.pop().is_some()
    }

    /// Submit the pending row
    ///
    /// The row is cleared only when the guess is accepted.
    ///
    /// # Errors
    ///
    /// Any [`GameError`] from [`Game::submit_guess`].
    pub fn submit(&mut self) -> Result<Evaluation, GameError> {
        let row = self.input.clone();
        self.submit_guess(&row)
    }

    /// Submit free text as a guess
    ///
    /// # Errors
    ///
    /// Any [`GameError`] from [`Game::submit_guess`].
    pub fn submit_guess(&mut self, text: &str) -> Result<Evaluation, GameError> {
        let evaluation = self.game.submit_guess(text).inspect_err(|err| {
            debug!("Guess rejected: {err}");
        })?;

        self.input.clear();
        if evaluation.outcome.is_over() {
            self.stats
                .record(evaluation.outcome, evaluation.attempts_used);
        }
        Ok(evaluation)
    }

    /// All board rows: attempts, then the pending row, then empty rows
    #[must_use]
    pub fn board(&self) -> Vec<Vec<Cell>> {
        let length = self.game.word_length();

        let mut rows: Vec<Vec<Cell>> = self
            .game
            .attempts()
            .iter()
            .map(|attempt| {
                attempt
                    .guess()
                    .letters()
                    .iter()
                    .zip(attempt.feedback().cells())
                    .map(|(&letter, &result)| Cell {
                        letter: Some(letter),
                        result: Some(result),
                    })
                    .collect()
            })
            .collect();

        if !self.game.is_over() {
            let mut pending: Vec<Cell> = self
                .input
                .chars()
                .map(|letter| Cell {
                    letter: Some(letter),
                    result: None,
                })
                .collect();
            pending.resize(length, Cell::default());
            rows.push(pending);
        }

        rows.resize(self.game.max_attempts(), vec![Cell::default(); length]);
        rows
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn source(&self) -> &WordSource {
        &self.source
    }

    /// Letters typed in the pending row
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }
}
