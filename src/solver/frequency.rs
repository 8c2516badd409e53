//! Letter coverage over the candidate set
//!
//! For each letter, counts how many candidate words contain it. A word adds at
//! most one to a letter's count no matter how often the letter repeats in it,
//! so the count is the number of candidates a "present" answer would keep.

use crate::core::{ALPHABET_SIZE, LetterSet, Word};
use rayon::prelude::*;

/// Candidate sets at least this large are counted in parallel
const PARALLEL_THRESHOLD: usize = 4096;

/// Per-letter count of candidate words containing the letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [usize; ALPHABET_SIZE],
    total_words: usize,
}

impl LetterCounts {
    /// Count letters across `candidates`, skipping every letter in `excluded`
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{LetterSet, Word};
    /// use hangman_solver::solver::LetterCounts;
    ///
    /// let words = ["cat", "car", "dog"].map(|w| Word::new(w).unwrap());
    /// let candidates: Vec<&Word> = words.iter().collect();
    ///
    /// let counts = LetterCounts::count(&candidates, LetterSet::new());
    /// assert_eq!(counts.get(b'c'), 2);
    /// assert_eq!(counts.get(b'o'), 1);
    /// assert_eq!(counts.get(b'z'), 0);
    /// ```
    #[must_use]
    pub fn count(candidates: &[&Word], excluded: LetterSet) -> Self {
        let counts = if candidates.len() >= PARALLEL_THRESHOLD {
            candidates
                .par_iter()
                .fold(
                    || [0usize; ALPHABET_SIZE],
                    |mut acc, word| {
                        tally(&mut acc, word, excluded);
                        acc
                    },
                )
                .reduce(|| [0usize; ALPHABET_SIZE], merge)
        } else {
            let mut acc = [0usize; ALPHABET_SIZE];
            for word in candidates {
                tally(&mut acc, word, excluded);
            }
            acc
        };

        Self {
            counts,
            total_words: candidates.len(),
        }
    }

    /// Number of candidates containing `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> usize {
        LetterSet::index(letter).map_or(0, |i| self.counts[i])
    }

    /// Size of the candidate set that was counted
    #[inline]
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    /// True when no letter occurs in any counted candidate
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Fraction of candidates containing `letter`
    #[must_use]
    pub fn coverage(&self, letter: u8) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.get(letter) as f64 / self.total_words as f64
    }

    /// Letters sharing the highest positive count, alphabetically, with that count
    ///
    /// Returns `None` when every count is zero.
    #[must_use]
    pub fn best(&self) -> Option<(Vec<u8>, usize)> {
        let max = self.counts.iter().copied().max().filter(|&m| m > 0)?;
        let tied = (b'a'..=b'z').filter(|&l| self.get(l) == max).collect();
        Some((tied, max))
    }

    /// Letters with a positive count, most common first, ties alphabetical
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, usize)> {
        let mut ranked: Vec<(u8, usize)> = (b'a'..=b'z')
            .map(|l| (l, self.get(l)))
            .filter(|&(_, count)| count > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

fn tally(acc: &mut [usize; ALPHABET_SIZE], word: &Word, excluded: LetterSet) {
    for letter in word.letters().iter() {
        if !excluded.contains(letter)
            && let Some(i) = LetterSet::index(letter)
        {
            acc[i] += 1;
        }
    }
}

fn merge(
    mut a: [usize; ALPHABET_SIZE],
    b: [usize; ALPHABET_SIZE],
) -> [usize; ALPHABET_SIZE] {
    for (x, y) in a.iter_mut().zip(b) {
        *x += y;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn repeated_letters_count_once_per_word() {
        let words = words_from_slice(&["banana", "bandana", "cabana"]);
        let candidates: Vec<&Word> = words.iter().collect();

        let counts = LetterCounts::count(&candidates, LetterSet::new());

        assert_eq!(counts.get(b'a'), 3);
        assert_eq!(counts.get(b'n'), 3);
        assert_eq!(counts.get(b'd'), 1);
        assert_eq!(counts.get(b'c'), 1);
        assert_eq!(counts.total_words(), 3);
    }

    #[test]
    fn excluded_letters_are_skipped() {
        let words = words_from_slice(&["cat", "car", "can"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let excluded: LetterSet = b"ac".iter().copied().collect();

        let counts = LetterCounts::count(&candidates, excluded);

        assert_eq!(counts.get(b'a'), 0);
        assert_eq!(counts.get(b'c'), 0);
        assert_eq!(counts.get(b't'), 1);
    }

    #[test]
    fn best_collects_ties_alphabetically() {
        let words = words_from_slice(&["cat", "car", "can", "dog"]);
        let candidates: Vec<&Word> = words.iter().collect();

        let counts = LetterCounts::count(&candidates, LetterSet::new());

        assert_eq!(counts.best(), Some((vec![b'a', b'c'], 3)));
    }

    #[test]
    fn best_is_none_when_everything_excluded() {
        let words = words_from_slice(&["dog"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let excluded: LetterSet = b"dog".iter().copied().collect();

        let counts = LetterCounts::count(&candidates, excluded);

        assert!(counts.is_empty());
        assert_eq!(counts.best(), None);
    }

    #[test]
    fn empty_candidates() {
        let counts = LetterCounts::count(&[], LetterSet::new());
        assert!(counts.is_empty());
        assert_eq!(counts.best(), None);
        assert!((counts.coverage(b'e') - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ranked_orders_by_count() {
        let words = words_from_slice(&["cat", "car", "cab"]);
        let candidates: Vec<&Word> = words.iter().collect();

        let ranked = LetterCounts::count(&candidates, LetterSet::new()).ranked();

        assert_eq!(ranked[0], (b'a', 3));
        assert_eq!(ranked[1], (b'c', 3));
        assert_eq!(ranked[2], (b'b', 1));
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let base = words_from_slice(&["apple", "berry", "cherry", "date", "fig"]);
        let many: Vec<&Word> = base.iter().cycle().take(PARALLEL_THRESHOLD + 5).collect();
        let few: Vec<&Word> = base.iter().collect();

        let big = LetterCounts::count(&many, LetterSet::new());
        let small = LetterCounts::count(&few, LetterSet::new());

        for letter in b'a'..=b'z' {
            let expected: usize = many.iter().filter(|w| w.has_letter(letter)).count();
            assert_eq!(big.get(letter), expected);
            assert!(small.get(letter) <= few.len());
        }
    }
}
