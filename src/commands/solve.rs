//! Word solving command
//!
//! Plays a known secret word against the solver and returns every step.

use crate::core::{KnownWord, Word};
use crate::solver::{GameOutcome, Solver, TieBreak, Turn};

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    /// Whether the target is in the dictionary at all
    pub in_vocabulary: bool,
    /// Candidates of the target's length before the first guess
    pub initial_candidates: usize,
    pub steps: Vec<Turn>,
    pub outcome: GameOutcome,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Letters proposed, in order
    #[must_use]
    pub fn letters(&self) -> String {
        self.steps.iter().map(|s| s.letter).collect()
    }
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if the target contains characters other than ASCII letters
/// or is empty, or if the game rejects the target's feedback.
pub fn solve_word<T: TieBreak>(target: &str, solver: &mut Solver<T>) -> Result<SolveResult, String> {
    let word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let in_vocabulary = solver.vocabulary().contains(word.text());
    let initial_candidates = solver.vocabulary().words_of_length(word.len()).count();

    let record = solver
        .play(word.len(), &mut KnownWord(&word))
        .map_err(|e| format!("Could not play '{}': {e}", word.text()))?;

    Ok(SolveResult {
        target: word.text().to_string(),
        in_vocabulary,
        initial_candidates,
        steps: record.turns,
        outcome: record.outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FirstAlphabetic;
    use crate::wordlists::Vocabulary;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&["cat", "car", "can", "dog", "moose"]))
    }

    #[test]
    fn solve_word_succeeds() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        let result = solve_word("dog", &mut solver).unwrap();

        assert!(result.success());
        assert!(result.in_vocabulary);
        assert_eq!(result.initial_candidates, 4);
        assert_eq!(result.letters(), "adgo");
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        let result = solve_word("CAR", &mut solver).unwrap();

        assert_eq!(result.target, "car");
        assert!(result.success());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.steps.last().map(|s| s.candidates_after), Some(1));
    }

    #[test]
    fn solve_unknown_word_is_not_recognized() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        let result = solve_word("zzz", &mut solver).unwrap();

        assert!(!result.in_vocabulary);
        assert!(!result.success());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        assert!(solve_word("c4t", &mut solver).is_err());
        assert!(solve_word("", &mut solver).is_err());
    }
}
