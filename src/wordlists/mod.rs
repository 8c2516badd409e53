//! Word lists for Hangman solving
//!
//! Provides the shared `Vocabulary`, the word sources that build it, and the
//! embedded lists compiled into the binary.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{COMMON_WORDS, COMMON_WORDS_COUNT, WORDS, WORDS_COUNT};
pub use loader::{EmbeddedWordSource, FileWordSource, WordSource};
pub use vocabulary::Vocabulary;
