//! Benchmark command
//!
//! Plays every selected vocabulary word against the solver in parallel and
//! collects wrong-guess statistics.

use crate::core::{KnownWord, Word};
use crate::solver::{CommonWords, Solver, TieBreak};
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Number of hardest words kept in the result
const HARDEST_WORDS: usize = 10;

/// Outcome of playing a single word
#[derive(Debug, Clone)]
pub struct WordResult {
    pub word: String,
    pub letters: String,
    pub wrong_guesses: usize,
    pub solved: bool,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Average wrong guesses over solved words
    pub average_wrong_guesses: f64,
    pub min_wrong_guesses: usize,
    pub max_wrong_guesses: usize,
    /// Wrong guesses to number of solved words
    pub distribution: BTreeMap<usize, usize>,
    /// Solved words needing the most wrong guesses, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Vocabulary words to benchmark: optionally one length, optionally the first `limit`
#[must_use]
pub fn select_words(
    vocabulary: &Vocabulary,
    length: Option<usize>,
    limit: Option<usize>,
) -> Vec<&Word> {
    vocabulary
        .words()
        .iter()
        .filter(|w| length.is_none_or(|len| w.len() == len))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Run the solver on every word in `words`
///
/// Each rayon worker owns its own solver built from `make_tie_break` and a copy
/// of `ranking`. The ranking is not updated during a benchmark.
pub fn run_benchmark<T, F>(
    vocabulary: &Vocabulary,
    words: &[&Word],
    ranking: Option<&CommonWords>,
    make_tie_break: F,
    show_progress: bool,
) -> BenchmarkResult
where
    T: TieBreak,
    F: Fn() -> T + Sync + Send,
{
    let pb = if show_progress {
        progress_bar(words.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<WordResult> = words
        .par_iter()
        .map_init(
            || {
                let solver = Solver::new(vocabulary, make_tie_break());
                match ranking {
                    Some(ranking) => solver.with_ranking(ranking.clone()),
                    None => solver,
                }
            },
            |solver, &word| {
                let result = match solver.play(word.len(), &mut KnownWord(word)) {
                    Ok(record) => WordResult {
                        word: word.text().to_string(),
                        letters: record.letters().into_iter().collect(),
                        wrong_guesses: record.outcome.wrong_guesses(),
                        solved: record.outcome.is_solved(),
                    },
                    // Unreachable for dictionary words; counted as a failure
                    Err(_) => WordResult {
                        word: word.text().to_string(),
                        letters: String::new(),
                        wrong_guesses: 0,
                        solved: false,
                    },
                };
                pb.inc(1);
                result
            },
        )
        .collect();
    pb.finish_with_message("Complete!");

    summarize(&results, start.elapsed())
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

fn summarize(results: &[WordResult], duration: Duration) -> BenchmarkResult {
    let solved: Vec<&WordResult> = results.iter().filter(|r| r.solved).collect();

    let mut distribution = BTreeMap::new();
    for r in &solved {
        *distribution.entry(r.wrong_guesses).or_insert(0) += 1;
    }

    let total_wrong: usize = solved.iter().map(|r| r.wrong_guesses).sum();
    let average_wrong_guesses = if solved.is_empty() {
        0.0
    } else {
        total_wrong as f64 / solved.len() as f64
    };

    let mut hardest_words: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.word.clone(), r.wrong_guesses))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(HARDEST_WORDS);

    let failed_words: Vec<String> = results
        .iter()
        .filter(|r| !r.solved)
        .map(|r| r.word.clone())
        .collect();

    let secs = duration.as_secs_f64();
    BenchmarkResult {
        total_words: results.len(),
        solved: solved.len(),
        failed: failed_words.len(),
        average_wrong_guesses,
        min_wrong_guesses: solved.iter().map(|r| r.wrong_guesses).min().unwrap_or(0),
        max_wrong_guesses: solved.iter().map(|r| r.wrong_guesses).max().unwrap_or(0),
        distribution,
        hardest_words,
        failed_words,
        duration,
        words_per_second: if secs > 0.0 {
            results.len() as f64 / secs
        } else {
            0.0
        },
    }
}
