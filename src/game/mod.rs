//! Game engine
//!
//! [`Game`] is the state machine for one secret; [`Session`] drives a series
//! of games for a front end.

mod config;
mod engine;
mod error;
mod session;

pub use config::{
    DEFAULT_WORD_LENGTH, GameConfig, MAX_ATTEMPTS, MAX_WORD_LENGTH, MIN_WORD_LENGTH,
    validate_word_length,
};
pub use engine::{Attempt, Evaluation, Game, Outcome};
pub use error::GameError;
pub use session::{Cell, Session, Statistics};
