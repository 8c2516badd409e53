//! Compact set of lowercase ASCII letters
//!
//! Stored as a 26-bit mask; bit `n` is set when letter `b'a' + n` is present.

use std::fmt;

/// Number of letters in the alphabet the solver works with
pub const ALPHABET_SIZE: usize = 26;

/// Set of lowercase letters `a..=z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Insert a letter, returning `true` if it was not already present
    ///
    /// Bytes outside `a..=z` are ignored and return `false`.
    pub fn insert(&mut self, letter: u8) -> bool {
        let Some(bit) = Self::bit(letter) else {
            return false;
        };
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }

    /// Map a letter to its alphabet index (0-25)
    #[inline]
    #[must_use]
    pub fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }

    fn bit(letter: u8) -> Option<u32> {
        Self::index(letter).map(|i| 1 << i)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self
            .iter()
            .map(|l| char::from(l.to_ascii_uppercase()).to_string())
            .collect();
        write!(f, "{}", letters.join(" "))
    }
}
