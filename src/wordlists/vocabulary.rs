//! The dictionary shared by every game
//!
//! A `Vocabulary` is built once and then only read. Games borrow it, so many
//! solvers can share one instance across threads.

use crate::core::Word;
use std::collections::BTreeMap;

/// Deduplicated set of dictionary words, kept in alphabetical order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping duplicate entries
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::wordlists::Vocabulary;
    ///
    /// let words = ["dog", "cat", "dog"].map(|w| Word::new(w).unwrap());
    /// let vocabulary = Vocabulary::new(words);
    /// assert_eq!(vocabulary.len(), 2);
    /// assert!(vocabulary.contains("cat"));
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_by(|a, b| a.text().cmp(b.text()));
        words.dedup_by(|a, b| a.text() == b.text());
        Self { words }
    }

    /// Empty vocabulary, the result of an unavailable word source
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in alphabetical order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Dictionary membership check
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words
            .binary_search_by(|w| w.text().cmp(text))
            .is_ok()
    }

    /// Words with exactly `length` letters
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.len() == length)
    }

    /// Number of words per word length
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in &self.words {
            *histogram.entry(word.len()).or_insert(0) += 1;
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn deduplicates_and_sorts() {
        let vocabulary = Vocabulary::new(words_from_slice(&["dog", "can", "dog", "cat"]));
        let texts: Vec<&str> = vocabulary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["can", "cat", "dog"]);
    }

    #[test]
    fn contains_uses_exact_text() {
        let vocabulary = Vocabulary::new(words_from_slice(&["car", "cart"]));
        assert!(vocabulary.contains("car"));
        assert!(vocabulary.contains("cart"));
        assert!(!vocabulary.contains("ca"));
        assert!(!vocabulary.contains("carts"));
    }

    #[test]
    fn filters_by_length() {
        let vocabulary = Vocabulary::new(words_from_slice(&["a", "cat", "dog", "goose"]));
        let three: Vec<&str> = vocabulary.words_of_length(3).map(Word::text).collect();
        assert_eq!(three, ["cat", "dog"]);
        assert_eq!(vocabulary.words_of_length(4).count(), 0);
    }

    #[test]
    fn histogram_counts_lengths() {
        let vocabulary = Vocabulary::new(words_from_slice(&["a", "cat", "dog", "goose"]));
        let histogram = vocabulary.length_histogram();
        assert_eq!(histogram.get(&1), Some(&1));
        assert_eq!(histogram.get(&3), Some(&2));
        assert_eq!(histogram.get(&5), Some(&1));
    }

    #[test]
    fn empty_vocabulary() {
        let vocabulary = Vocabulary::empty();
        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary, Vocabulary::default());
    }
}
