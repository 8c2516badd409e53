//! Hangman word representation
//!
//! A Word stores a lowercase word of any length along with letter position
//! indices for feedback filtering.

use super::LetterSet;
use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase dictionary word with letter position tracking
///
/// Stores the word as bytes and maintains a map of letter positions so that
/// exact-position filtering does not rescan the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: LetterSet,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("Puzzle").unwrap();
    /// assert_eq!(word.text(), "puzzle");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("can't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = LetterSet::new();
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            letters.insert(ch);
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected by `Word::new`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Get all 0-based positions where a letter appears, in ascending order
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
