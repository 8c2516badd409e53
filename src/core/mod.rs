//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod feedback;
mod letters;
mod pattern;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackSource, KnownWord};
pub use letters::{ALPHABET_SIZE, LetterSet};
pub use pattern::{BLANK, RevealedPattern};
pub use word::{Word, WordError};
