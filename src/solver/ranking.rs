//! Adaptive common-words ranking
//!
//! A rank-ordered list of common words (index 0 is the most common) used as a
//! secondary heuristic when several letters share the best coverage. Every
//! solved game nudges its word toward the front of the list, so words people
//! actually pick are preferred over time.

use crate::core::Word;
use crate::wordlists::COMMON_WORDS;
use rustc_hash::FxHashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Ordered list of common words with rank lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonWords {
    words: Vec<String>,
    ranks: FxHashMap<String, usize>,
}

impl CommonWords {
    /// Build a ranking from words in order, keeping the first occurrence of duplicates
    #[must_use]
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut ranking = Self::default();
        for word in words {
            let word = word.into();
            if !ranking.ranks.contains_key(&word) {
                ranking.ranks.insert(word.clone(), ranking.words.len());
                ranking.words.push(word);
            }
        }
        ranking
    }

    /// Ranking seeded from the embedded common-words list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(COMMON_WORDS.iter().copied())
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

    /// Words from most to least common
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// 0-based rank of a word, if listed
    #[inline]
    #[must_use]
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// Move a solved word toward the front and return its new rank
    ///
    /// A listed word at rank `r` moves to `r / 2`; an unlisted word is
    /// inserted at the middle of the list.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::CommonWords;
    ///
    /// let mut ranking = CommonWords::new(["the", "of", "and", "to", "in"]);
    /// assert_eq!(ranking.promote("in"), 2);
    /// assert_eq!(ranking.words(), ["the", "of", "in", "and", "to"]);
    ///
    /// assert_eq!(ranking.promote("hangman"), 2);
    /// assert_eq!(ranking.words(), ["the", "of", "hangman", "in", "and", "to"]);
    /// ```
    pub fn promote(&mut self, word: &str) -> usize {
        let target = match self.rank(word) {
            Some(current) => {
                self.words.remove(current);
                current / 2
            }
            None => self.words.len() / 2,
        };
        self.words.insert(target, word.to_string());
        self.reindex(target);
        target
    }

    fn reindex(&mut self, from: usize) {
        for (rank, word) in self.words.iter().enumerate().skip(from) {
            self.ranks.insert(word.clone(), rank);
        }
    }
}

/// Narrow `tied` letters using the ranking
///
/// Counts, for each tied letter, the candidates that are also common words and
/// contain it. Letters with the highest positive count survive; among those,
/// the letters whose common candidates have the lowest average rank are kept.
/// If no tied letter appears in any common candidate, `tied` is returned as is.
#[must_use]
pub fn prefer_common(tied: &[u8], candidates: &[&Word], ranking: &CommonWords) -> Vec<u8> {
    let common: Vec<(&Word, usize)> = candidates
        .iter()
        .filter_map(|&w| ranking.rank(w.text()).map(|r| (w, r)))
        .collect();

    // (letter, common candidates containing it, sum of their ranks)
    let stats: Vec<(u8, usize, usize)> = tied
        .iter()
        .map(|&letter| {
            common
                .iter()
                .filter(|(w, _)| w.has_letter(letter))
                .fold((letter, 0, 0), |(l, n, sum), (_, rank)| (l, n + 1, sum + rank))
        })
        .collect();

    let best_count = stats.iter().map(|&(_, n, _)| n).max().unwrap_or(0);
    if best_count == 0 {
        return tied.to_vec();
    }

    // Equal counts make the lowest average rank the lowest rank sum
    let shortlist: Vec<(u8, usize)> = stats
        .into_iter()
        .filter(|&(_, n, _)| n == best_count)
        .map(|(l, _, sum)| (l, sum))
        .collect();
    let best_sum = shortlist.iter().map(|&(_, sum)| sum).min().unwrap_or(0);

    shortlist
        .into_iter()
        .filter(|&(_, sum)| sum == best_sum)
        .map(|(l, _)| l)
        .collect()
}

/// Reads and writes the persisted ranking
pub trait RankingStore {
    /// Load the ranking; unavailable storage yields a usable default
    fn load(&self) -> CommonWords;

    /// Persist the ranking
    ///
    /// # Errors
    /// Returns an I/O error if the ranking cannot be written.
    fn save(&self, ranking: &CommonWords) -> io::Result<()>;
}

/// Ranking stored as a text file, one word per line, most common first
#[derive(Debug, Clone)]
pub struct FileRankingStore {
    path: PathBuf,
}

impl FileRankingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RankingStore for FileRankingStore {
    /// Falls back to the embedded list when the file cannot be read
    fn load(&self) -> CommonWords {
        fs::read_to_string(&self.path).map_or_else(
            |_| CommonWords::embedded(),
            |content| {
                CommonWords::new(
                    content
                        .lines()
                        .map(|line| line.trim().to_lowercase())
                        .filter(|line| !line.is_empty()),
                )
            },
        )
    }

    fn save(&self, ranking: &CommonWords) -> io::Result<()> {
        let mut file = io::BufWriter::new(fs::File::create(&self.path)?);
        for word in ranking.words() {
            writeln!(file, "{word}")?;
        }
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn new_skips_duplicates() {
        let ranking = CommonWords::new(["the", "of", "the"]);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking.rank("of"), Some(1));
        assert_eq!(ranking.rank("and"), None);
    }

    #[test]
    fn promote_halves_rank() {
        let mut ranking = CommonWords::new(["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(ranking.promote("g"), 3);
        assert_eq!(ranking.words(), ["a", "b", "c", "g", "d", "e", "f"]);
        for (i, word) in ranking.words().iter().enumerate() {
            assert_eq!(ranking.rank(word), Some(i));
        }
    }

    #[test]
    fn promote_front_word_stays() {
        let mut ranking = CommonWords::new(["a", "b"]);
        assert_eq!(ranking.promote("a"), 0);
        assert_eq!(ranking.words(), ["a", "b"]);
    }

    #[test]
    fn promote_into_empty_ranking() {
        let mut ranking = CommonWords::default();
        assert_eq!(ranking.promote("dog"), 0);
        assert_eq!(ranking.rank("dog"), Some(0));
    }

    #[test]
    fn prefer_common_picks_higher_common_count() {
        let words = words_from_slice(&["cat", "car", "dot", "dig"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let ranking = CommonWords::new(["car", "cat"]);

        // 'c' appears in two common candidates, 'd' in none
        assert_eq!(prefer_common(b"cd", &candidates, &ranking), vec![b'c']);
    }

    #[test]
    fn prefer_common_breaks_count_tie_by_rank() {
        let words = words_from_slice(&["cat", "dog"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let ranking = CommonWords::new(["the", "dog", "of", "cat"]);

        // Both letters cover one common word; "dog" ranks higher than "cat"
        assert_eq!(prefer_common(b"cd", &candidates, &ranking), vec![b'd']);
    }

    #[test]
    fn prefer_common_keeps_exact_ties() {
        let words = words_from_slice(&["cat"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let ranking = CommonWords::new(["cat"]);

        assert_eq!(prefer_common(b"act", &candidates, &ranking), b"act".to_vec());
    }

    #[test]
    fn prefer_common_without_common_candidates() {
        let words = words_from_slice(&["zyx", "wvu"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let ranking = CommonWords::embedded();

        assert_eq!(prefer_common(b"uz", &candidates, &ranking), vec![b'u', b'z']);
    }

    #[test]
    fn file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "hangman_solver_{}_ranking.txt",
            std::process::id()
        ));
        let store = FileRankingStore::new(&path);

        let mut ranking = CommonWords::new(["the", "of", "and"]);
        ranking.promote("and");
        store.save(&ranking).unwrap();

        let loaded = store.load();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.words(), ["the", "and", "of"]);
    }

    #[test]
    fn file_store_missing_file_uses_embedded() {
        let store = FileRankingStore::new("no/such/dir/ranking.txt");
        assert_eq!(store.load(), CommonWords::embedded());
        assert!(store.save(&CommonWords::default()).is_err());
    }
}
