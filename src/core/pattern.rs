//! Revealed letter pattern of the secret word
//!
//! One slot per letter of the secret word. A slot is either unknown or holds
//! the confirmed letter. Slots are only ever filled, never cleared.

use std::fmt;

/// Placeholder shown for unknown slots
pub const BLANK: char = '_';

/// The known letters of the secret word, interleaved with unknown slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPattern {
    slots: Vec<Option<u8>>,
}

impl RevealedPattern {
    /// Create an all-unknown pattern for a word of `length` letters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::RevealedPattern;
    ///
    /// let pattern = RevealedPattern::new(3);
    /// assert_eq!(pattern.to_string(), "_ _ _");
    /// assert!(!pattern.is_complete());
    /// ```
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Letter at a 0-based slot, lowercase, if revealed
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    /// Fill the given 0-based slots with `letter`
    ///
    /// Callers validate positions first; out-of-range indices are skipped.
    pub(crate) fn reveal(&mut self, letter: u8, positions: &[usize]) {
        for &i in positions {
            if let Some(slot) = self.slots.get_mut(i) {
                *slot = Some(letter);
            }
        }
    }

    /// Fill every slot from a known word of the same length
    pub(crate) fn reveal_word(&mut self, word: &[u8]) {
        for (slot, &letter) in self.slots.iter_mut().zip(word) {
            *slot = Some(letter);
        }
    }

    /// True once every slot holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots still unknown
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// 1-based position of the only unknown slot, if exactly one remains
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::RevealedPattern;
    ///
    /// let pattern = RevealedPattern::new(2);
    /// assert_eq!(pattern.single_unknown(), None);
    ///
    /// let pattern = RevealedPattern::new(1);
    /// assert_eq!(pattern.single_unknown(), Some(1));
    /// ```
    #[must_use]
    pub fn single_unknown(&self) -> Option<usize> {
        let mut unknown = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i + 1);
        match (unknown.next(), unknown.next()) {
            (Some(position), None) => Some(position),
            _ => None,
        }
    }

    /// The revealed word in lowercase, once complete
    #[must_use]
    pub fn word(&self) -> Option<String> {
        self.slots
            .iter()
            .map(|s| s.map(char::from))
            .collect::<Option<String>>()
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .slots
            .iter()
            .map(|s| s.map_or(BLANK, |c| char::from(c.to_ascii_uppercase())).to_string())
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pattern_is_unknown() {
        let pattern = RevealedPattern::new(4);
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.unknown_count(), 4);
        assert_eq!(pattern.word(), None);
    }

    #[test]
    fn reveal_fills_slots() {
        let mut pattern = RevealedPattern::new(3);
        pattern.reveal(b'a', &[1]);
        assert_eq!(pattern.to_string(), "_ A _");
        assert_eq!(pattern.get(1), Some(b'a'));
        assert_eq!(pattern.get(0), None);
        assert_eq!(pattern.get(7), None);
    }

    #[test]
    fn complete_pattern_yields_word() {
        let mut pattern = RevealedPattern::new(3);
        pattern.reveal(b'd', &[0]);
        pattern.reveal(b'o', &[1]);
        assert_eq!(pattern.single_unknown(), Some(3));
        pattern.reveal(b'g', &[2]);
        assert!(pattern.is_complete());
        assert_eq!(pattern.single_unknown(), None);
        assert_eq!(pattern.word().as_deref(), Some("dog"));
        assert_eq!(pattern.to_string(), "D O G");
    }

    #[test]
    fn reveal_word_fills_everything() {
        let mut pattern = RevealedPattern::new(5);
        pattern.reveal_word(b"queen");
        assert!(pattern.is_complete());
        assert_eq!(pattern.word().as_deref(), Some("queen"));
    }
}
