//! Core domain types for the game
//!
//! Words, per-guess feedback and keyboard hints. Everything here is pure and
//! has no I/O.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{CellResult, Feedback, ParseFeedbackError, evaluate};
pub use keyboard::KeyboardState;
pub use word::{Word, WordError};
