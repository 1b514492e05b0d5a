//! Word lists and the word source
//!
//! The bundled pool is compiled into the binary; custom pools are loaded from
//! newline-delimited files.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use source::{FALLBACK_WORDS, WordSource, WordSourceError};
