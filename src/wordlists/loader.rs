//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{Vocabulary, WORDS};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies the dictionary for a solver
pub trait WordSource {
    /// Load the vocabulary
    ///
    /// Sources never fail: an unavailable source yields an empty vocabulary.
    fn load(&self) -> Vocabulary;
}

/// Word source reading one word per line from a file
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load(&self) -> Vocabulary {
        load_vocabulary(&self.path)
    }
}

/// Word source backed by the list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn load(&self) -> Vocabulary {
        Vocabulary::new(words_from_slice(WORDS))
    }
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and entries
/// with anything other than letters. Trailing `\r` from Windows line endings
/// is trimmed along with other surrounding whitespace.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Load a vocabulary, degrading to an empty one if the file is unavailable
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::load_vocabulary;
///
/// let vocabulary = load_vocabulary("definitely/not/here.txt");
/// assert!(vocabulary.is_empty());
/// ```
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Vocabulary {
    load_from_file(path).map_or_else(|_| Vocabulary::empty(), Vocabulary::new)
}

/// Parse newline-delimited words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
