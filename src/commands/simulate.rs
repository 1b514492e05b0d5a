//! Simulate command
//!
//! Plays many games with a random guesser that only picks words consistent
//! with the feedback so far. Games run in parallel; each game gets its own
//! seeded RNG so a run is reproducible.

use crate::core::{Feedback, Word};
use crate::game::{Game, MAX_ATTEMPTS, Outcome};
use crate::wordlists::{WordSource, WordSourceError};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub games: usize,
    pub word_length: usize,
    pub max_attempts: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            games: 100,
            word_length: 5,
            max_attempts: MAX_ATTEMPTS,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Aggregate results of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub max_attempts: usize,
    /// Attempts used by won games
    pub distribution: HashMap<usize, usize>,
    pub average_attempts: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}

struct GameRecord {
    won: bool,
    attempts: usize,
}

/// Run `config.games` games against `source`
///
/// # Errors
///
/// Returns `WordSourceError::NoWordsAvailable` if the pool has no word of the
/// requested length.
pub fn run_simulation(
    source: &WordSource,
    config: &SimulateConfig,
) -> Result<SimulationResult, WordSourceError> {
    let pool = source.words_of_length(config.word_length);
    if pool.is_empty() {
        return Err(WordSourceError::NoWordsAvailable {
            length: config.word_length,
        });
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
            let record = play_one(pool, config.max_attempts, &mut rng);
            pb.inc(1);
            record
        })
        .collect();
    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut wins = 0;
    let mut winning_attempts = 0;
    for record in records.iter().filter(|record| record.won) {
        wins += 1;
        winning_attempts += record.attempts;
        *distribution.entry(record.attempts).or_insert(0) += 1;
    }

    debug!("Simulated {} games, {wins} won", records.len());

    Ok(SimulationResult {
        games: records.len(),
        wins,
        max_attempts: config.max_attempts.max(1),
        distribution,
        average_attempts: if wins == 0 {
            0.0
        } else {
            winning_attempts as f64 / wins as f64
        },
        duration,
        games_per_second: records.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn play_one(pool: &[Word], max_attempts: usize, rng: &mut StdRng) -> GameRecord {
    // Callers guarantee a non-empty pool
    let Some(secret) = pool.choose(rng) else {
        return GameRecord {
            won: false,
            attempts: 0,
        };
    };

    let mut game = Game::new(secret.clone(), max_attempts);
    let mut candidates: Vec<&Word> = pool.iter().collect();

    while !game.is_over() {
        let Some(&guess) = candidates.choose(rng) else {
            break;
        };
        let Ok(evaluation) = game.submit_guess(guess.text()) else {
            break;
        };
        candidates.retain(|candidate| {
            Feedback::calculate(guess, candidate) == evaluation.feedback
        });
    }

    GameRecord {
        won: game.outcome() == Outcome::Won,
        attempts: game.attempts_used(),
    }
}
