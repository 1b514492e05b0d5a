//! Wordle Game
//!
//! A word-guessing game with 4 to 8 letter secrets, six attempts and exact
//! duplicate-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, Outcome};
//!
//! let mut game = Game::new(Word::new("robot").unwrap(), 6);
//!
//! // Five O's, but ROBOT only has two
//! let evaluation = game.submit_guess("ooooo").unwrap();
//! assert_eq!(evaluation.feedback.to_code(), "-G-G-");
//! assert_eq!(evaluation.outcome, Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Game state machine and session
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
