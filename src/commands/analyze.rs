//! Letter coverage analysis command
//!
//! Reports how many words of a given length contain each letter, which is
//! what the solver looks at before its first guess.

use crate::core::{LetterSet, Word};
use crate::solver::{CommonWords, LetterCounts};
use crate::wordlists::Vocabulary;

/// Coverage of one letter
#[derive(Debug, Clone, PartialEq)]
pub struct LetterCoverage {
    pub letter: char,
    pub words: usize,
    pub fraction: f64,
}

/// Result of analyzing a word length
#[derive(Debug)]
pub struct AnalysisResult {
    pub length: usize,
    pub total_candidates: usize,
    /// Candidates that also appear in the common-words ranking
    pub common_candidates: Option<usize>,
    /// Letters ordered by coverage, most common first
    pub letters: Vec<LetterCoverage>,
    /// Letters tied for the best coverage
    pub best: Vec<char>,
}

/// Analyze letter coverage for words of `length` letters
///
/// # Errors
///
/// Returns an error if the length is zero or the vocabulary has no word of
/// that length.
pub fn analyze_length(
    vocabulary: &Vocabulary,
    length: usize,
    ranking: Option<&CommonWords>,
) -> Result<AnalysisResult, String> {
    if length == 0 {
        return Err("Word length must be at least 1".to_string());
    }

    let candidates: Vec<&Word> = vocabulary.words_of_length(length).collect();
    if candidates.is_empty() {
        let lengths: Vec<String> = vocabulary
            .length_histogram()
            .keys()
            .map(ToString::to_string)
            .collect();
        return Err(format!(
            "No {length}-letter words in the word list (available lengths: {})",
            if lengths.is_empty() {
                "none".to_string()
            } else {
                lengths.join(", ")
            }
        ));
    }

    let counts = LetterCounts::count(&candidates, LetterSet::new());
    let letters = counts
        .ranked()
        .into_iter()
        .map(|(letter, words)| LetterCoverage {
            letter: char::from(letter),
            words,
            fraction: counts.coverage(letter),
        })
        .collect();
    let best = counts
        .best()
        .map(|(tied, _)| tied.into_iter().map(char::from).collect())
        .unwrap_or_default();

    let common_candidates = ranking.map(|ranking| {
        candidates
            .iter()
            .filter(|w| ranking.rank(w.text()).is_some())
            .count()
    });

    Ok(AnalysisResult {
        length,
        total_candidates: candidates.len(),
        common_candidates,
        letters,
        best,
    })
}
