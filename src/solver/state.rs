//! Per-game solver state
//!
//! A `GameState` lives for exactly one game. Starting a new game builds a
//! fresh one instead of clearing fields in place.

use crate::core::{Feedback, FeedbackError, LetterSet, RevealedPattern, Word};
use crate::wordlists::Vocabulary;

/// Everything the solver knows about the game in progress
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    word_length: usize,
    candidates: Vec<&'a Word>,
    guessed: LetterSet,
    applied: LetterSet,
    hits: LetterSet,
    misses: LetterSet,
    wrong_guesses: usize,
    revealed: RevealedPattern,
}

impl<'a> GameState<'a> {
    /// Fresh game: every vocabulary word of `word_length` letters is a candidate
    ///
    /// `word_length` must be positive; `Solver::start_game` checks it.
    #[must_use]
    pub(crate) fn new(vocabulary: &'a Vocabulary, word_length: usize) -> Self {
        Self {
            word_length,
            candidates: vocabulary.words_of_length(word_length).collect(),
            guessed: LetterSet::new(),
            applied: LetterSet::new(),
            hits: LetterSet::new(),
            misses: LetterSet::new(),
            wrong_guesses: 0,
            revealed: RevealedPattern::new(word_length),
        }
    }

    /// Words still consistent with every applied feedback
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Letters proposed or answered this game
    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Letters confirmed present
    #[inline]
    #[must_use]
    pub const fn hits(&self) -> LetterSet {
        self.hits
    }

    /// Letters confirmed absent
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> LetterSet {
        self.misses
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> &RevealedPattern {
        &self.revealed
    }

    /// Record a letter chosen by the heuristic
    pub(crate) fn commit(&mut self, letter: u8) {
        self.guessed.insert(letter);
    }

    /// Check feedback against the current state without changing anything
    ///
    /// Returns the lowercase letter and the 0-based positions it must occupy.
    pub(crate) fn validate(
        &self,
        letter: char,
        feedback: &Feedback,
    ) -> Result<(u8, Vec<usize>), FeedbackError> {
        let lower = letter.to_ascii_lowercase();
        let byte = u8::try_from(lower)
            .ok()
            .filter(u8::is_ascii_lowercase)
            .ok_or(FeedbackError::InvalidLetter(letter))?;

        if self.applied.contains(byte) {
            return Err(FeedbackError::AlreadyApplied(lower));
        }

        let mut positions = Vec::with_capacity(feedback.positions().len());
        for &position in feedback.positions() {
            if position == 0 || position > self.word_length {
                return Err(FeedbackError::PositionOutOfRange {
                    position,
                    word_length: self.word_length,
                });
            }
            if let Some(existing) = self.revealed.get(position - 1)
                && existing != byte
            {
                return Err(FeedbackError::PositionConflict {
                    position,
                    revealed: char::from(existing),
                });
            }
            positions.push(position - 1);
        }
        positions.sort_unstable();
        positions.dedup();

        Ok((byte, positions))
    }

    /// Apply validated feedback and return how many candidates were removed
    ///
    /// A candidate survives only if its occurrences of `letter` are exactly
    /// `positions`; for absent feedback that means no occurrence at all.
    pub(crate) fn apply(&mut self, letter: u8, positions: &[usize]) -> usize {
        self.guessed.insert(letter);
        self.applied.insert(letter);

        if positions.is_empty() {
            self.wrong_guesses += 1;
            self.misses.insert(letter);
        } else {
            self.hits.insert(letter);
            self.revealed.reveal(letter, positions);
        }

        let before = self.candidates.len();
        self.candidates
            .retain(|word| word.positions_of(letter) == positions);
        before - self.candidates.len()
    }

    /// The driver confirmed the sole remaining candidate
    pub(crate) fn accept(&mut self, word: &'a Word) {
        for letter in word.letters().iter() {
            self.guessed.insert(letter);
            self.applied.insert(letter);
            self.hits.insert(letter);
        }
        self.revealed.reveal_word(word.chars());
        self.candidates.retain(|w| w.text() == word.text());
    }

    /// The driver rejected the sole remaining candidate
    pub(crate) fn reject(&mut self) {
        self.candidates.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&["cat", "car", "can", "dog", "moose"]))
    }

    #[test]
    fn new_state_filters_by_length() {
        let vocabulary = vocabulary();
        let state = GameState::new(&vocabulary, 3);

        assert_eq!(state.candidates().len(), 4);
        assert_eq!(state.revealed().len(), 3);
        assert!(state.guessed().is_empty());
        assert_eq!(state.wrong_guesses(), 0);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let vocabulary = vocabulary();
        let state = GameState::new(&vocabulary, 3);

        assert_eq!(
            state.validate('a', &Feedback::Present(vec![0])),
            Err(FeedbackError::PositionOutOfRange {
                position: 0,
                word_length: 3
            })
        );
        assert_eq!(
            state.validate('a', &Feedback::Present(vec![2, 4])),
            Err(FeedbackError::PositionOutOfRange {
                position: 4,
                word_length: 3
            })
        );
    }

    #[test]
    fn validate_rejects_non_letters() {
        let vocabulary = vocabulary();
        let state = GameState::new(&vocabulary, 3);

        assert_eq!(
            state.validate('7', &Feedback::Absent),
            Err(FeedbackError::InvalidLetter('7'))
        );
        assert_eq!(
            state.validate('é', &Feedback::Absent),
            Err(FeedbackError::InvalidLetter('é'))
        );
    }

    #[test]
    fn validate_converts_to_zero_based() {
        let vocabulary = vocabulary();
        let state = GameState::new(&vocabulary, 3);

        assert_eq!(
            state.validate('A', &Feedback::Present(vec![2])),
            Ok((b'a', vec![1]))
        );
    }

    #[test]
    fn exact_position_match_required() {
        let vocabulary = Vocabulary::new(words_from_slice(&["eel", "elk", "lee", "eve"]));
        let mut state = GameState::new(&vocabulary, 3);

        let (letter, positions) = state.validate('e', &Feedback::Present(vec![1])).unwrap();
        let removed = state.apply(letter, &positions);

        // "eel", "eve" and "lee" have extra or misplaced e's
        let texts: Vec<&str> = state.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["elk"]);
        assert_eq!(removed, 3);
    }

    #[test]
    fn conflicting_position_rejected() {
        let vocabulary = vocabulary();
        let mut state = GameState::new(&vocabulary, 3);
        let (letter, positions) = state.validate('a', &Feedback::Present(vec![2])).unwrap();
        state.apply(letter, &positions);

        assert_eq!(
            state.validate('t', &Feedback::Present(vec![2])),
            Err(FeedbackError::PositionConflict {
                position: 2,
                revealed: 'a'
            })
        );
        assert_eq!(
            state.validate('a', &Feedback::Absent),
            Err(FeedbackError::AlreadyApplied('a'))
        );
    }

    #[test]
    fn accept_reveals_word() {
        let vocabulary = vocabulary();
        let mut state = GameState::new(&vocabulary, 3);
        let dog = state
            .candidates()
            .iter()
            .copied()
            .find(|w| w.text() == "dog")
            .unwrap();

        state.accept(dog);

        assert!(state.revealed().is_complete());
        assert_eq!(state.candidates().len(), 1);
        assert!(state.guessed().contains(b'g'));
    }

    #[test]
    fn reject_empties_candidates() {
        let vocabulary = vocabulary();
        let mut state = GameState::new(&vocabulary, 3);
        state.reject();
        assert!(state.candidates().is_empty());
        assert!(!state.revealed().is_complete());
    }
}
