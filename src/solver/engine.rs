//! Main Hangman solver interface

use super::frequency::LetterCounts;
use super::ranking::{CommonWords, prefer_common};
use super::state::GameState;
use super::tiebreak::TieBreak;
use crate::core::{Feedback, FeedbackError, FeedbackSource, KnownWord, Word};
use crate::wordlists::Vocabulary;

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every letter was revealed
    Solved { word: String, wrong_guesses: usize },
    /// The dictionary ran out of candidates, or the feedback was contradictory
    NotRecognized { wrong_guesses: usize },
}

impl GameOutcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        match self {
            Self::Solved { wrong_guesses, .. } | Self::NotRecognized { wrong_guesses } => {
                *wrong_guesses
            }
        }
    }
}

/// What the driver should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move<'a> {
    /// Only one candidate remains: ask whether it is the secret word
    ProposeWord(&'a Word),
    /// Ask whether this letter is in the word
    Letter(char),
    /// The game is over
    Finished(GameOutcome),
}

/// One proposed letter and its consequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub letter: char,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of an autonomously played game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub turns: Vec<Turn>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Letters proposed, in order
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.turns.iter().map(|t| t.letter).collect()
    }
}

/// Main Hangman solver
///
/// Holds a shared read-only vocabulary, a tie-break policy, the optional
/// common-words ranking, and the state of the current game. One solver plays
/// one game at a time; starting a game discards the previous one.
pub struct Solver<'a, T: TieBreak> {
    vocabulary: &'a Vocabulary,
    tie_break: T,
    ranking: Option<CommonWords>,
    game: Option<GameState<'a>>,
}

impl<'a, T: TieBreak> Solver<'a, T> {
    /// Create a solver over `vocabulary` using `tie_break` for equal letters
    pub const fn new(vocabulary: &'a Vocabulary, tie_break: T) -> Self {
        Self {
            vocabulary,
            tie_break,
            ranking: None,
            game: None,
        }
    }

    /// Enable the common-words heuristic
    #[must_use]
    pub fn with_ranking(mut self, ranking: CommonWords) -> Self {
        self.ranking = Some(ranking);
        self
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn ranking(&self) -> Option<&CommonWords> {
        self.ranking.as_ref()
    }

    /// Mutable access for the adaptive update after a solved game
    pub const fn ranking_mut(&mut self) -> Option<&mut CommonWords> {
        self.ranking.as_mut()
    }

    /// Start a new game for a secret word of `word_length` letters
    ///
    /// Returns the number of initial candidates.
    ///
    /// # Errors
    /// Returns `FeedbackError::ZeroLength` for a length of 0. Any game in
    /// progress is kept in that case.
    pub fn start_game(&mut self, word_length: usize) -> Result<usize, FeedbackError> {
        if word_length == 0 {
            return Err(FeedbackError::ZeroLength);
        }
        let game = GameState::new(self.vocabulary, word_length);
        let count = game.candidates().len();
        self.game = Some(game);
        Ok(count)
    }

    /// State of the current game, if one was started
    #[must_use]
    pub const fn game(&self) -> Option<&GameState<'a>> {
        self.game.as_ref()
    }

    /// Number of remaining candidates (0 without a game)
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.game.as_ref().map_or(0, |g| g.candidates().len())
    }

    /// Propose the next letter and commit it as guessed
    ///
    /// Picks the un-guessed letter contained in the most candidates. Returns
    /// `None` when no game is running, the pattern is fully revealed, or no
    /// candidate contains an un-guessed letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Feedback, Word};
    /// use hangman_solver::solver::{FirstAlphabetic, Solver};
    /// use hangman_solver::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::new(["cat", "car", "can", "dog"].map(|w| Word::new(w).unwrap()));
    /// let mut solver = Solver::new(&vocabulary, FirstAlphabetic);
    /// assert_eq!(solver.start_game(3), Ok(4));
    ///
    /// assert_eq!(solver.choose_letter(), Some('a'));
    /// solver.apply_feedback('a', &Feedback::Present(vec![2])).unwrap();
    /// assert_eq!(solver.candidate_count(), 3);
    /// ```
    pub fn choose_letter(&mut self) -> Option<char> {
        let game = self.game.as_ref()?;
        if game.revealed().is_complete() {
            return None;
        }

        let counts = LetterCounts::count(game.candidates(), game.guessed());
        let (tied, _) = counts.best()?;
        let shortlist = match &self.ranking {
            Some(ranking) if tied.len() > 1 => prefer_common(&tied, game.candidates(), ranking),
            _ => tied,
        };

        let letter = match shortlist.as_slice() {
            [only] => *only,
            several => self.tie_break.pick(several)?,
        };

        self.game.as_mut()?.commit(letter);
        Some(char::from(letter))
    }

    /// Apply feedback for `letter` and return how many candidates were removed
    ///
    /// Absent feedback counts a wrong guess and drops every candidate
    /// containing the letter. Present feedback reveals the letter and keeps
    /// only candidates with the letter at exactly the given positions.
    ///
    /// # Errors
    /// Returns `FeedbackError` if no game is running, the letter is invalid or
    /// already answered, or a position is out of range or conflicts with a
    /// revealed letter. The state is unchanged on error.
    pub fn apply_feedback(
        &mut self,
        letter: char,
        feedback: &Feedback,
    ) -> Result<usize, FeedbackError> {
        let game = self.game.as_mut().ok_or(FeedbackError::NoActiveGame)?;
        let (letter, positions) = game.validate(letter, feedback)?;
        Ok(game.apply(letter, &positions))
    }

    /// The only remaining candidate, while the word is not yet revealed
    #[must_use]
    pub fn sole_candidate(&self) -> Option<&'a Word> {
        let game = self.game.as_ref()?;
        match game.candidates() {
            [only] if !game.revealed().is_complete() => Some(*only),
            _ => None,
        }
    }

    /// Decide the next step for an interactive driver
    ///
    /// Offers the word itself once a single candidate is left, otherwise
    /// proposes a letter, otherwise reports the outcome.
    pub fn next_move(&mut self) -> Move<'a> {
        if let Some(word) = self.sole_candidate() {
            return Move::ProposeWord(word);
        }
        match self.choose_letter() {
            Some(letter) => Move::Letter(letter),
            None => Move::Finished(self.final_outcome()),
        }
    }

    /// Answer a `Move::ProposeWord` question and return the resulting outcome
    ///
    /// A confirmed word is revealed in full; a rejected one empties the
    /// candidate set.
    pub fn confirm_word(&mut self, correct: bool) -> GameOutcome {
        if let Some(word) = self.sole_candidate()
            && let Some(game) = self.game.as_mut()
        {
            if correct {
                game.accept(word);
            } else {
                game.reject();
            }
        }
        self.final_outcome()
    }

    /// Terminal outcome judged from the revealed pattern
    ///
    /// `None` when no game was started.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        let game = self.game.as_ref()?;
        let wrong_guesses = game.wrong_guesses();
        Some(match game.revealed().word() {
            Some(word) => GameOutcome::Solved {
                word,
                wrong_guesses,
            },
            None => GameOutcome::NotRecognized { wrong_guesses },
        })
    }

    fn final_outcome(&self) -> GameOutcome {
        self.outcome()
            .unwrap_or(GameOutcome::NotRecognized { wrong_guesses: 0 })
    }

    /// Play a whole game against a feedback source
    ///
    /// Stops when no letter can be proposed.
    ///
    /// # Errors
    /// Returns `FeedbackError::ZeroLength` for a length of 0, or the first
    /// error raised by feedback the game rejects (for example a source whose
    /// word is longer than `word_length`).
    pub fn play<F: FeedbackSource>(
        &mut self,
        word_length: usize,
        source: &mut F,
    ) -> Result<GameRecord, FeedbackError> {
        self.start_game(word_length)?;
        let mut turns = Vec::new();

        while let Some(letter) = self.choose_letter() {
            let feedback = source.feedback(letter);
            let candidates_before = self.candidate_count();
            self.apply_feedback(letter, &feedback)?;
            turns.push(Turn {
                letter,
                feedback,
                candidates_before,
                candidates_after: self.candidate_count(),
            });
        }

        Ok(GameRecord {
            turns,
            outcome: self.final_outcome(),
        })
    }

    /// Letters the solver would guess, in order, for a known secret word
    ///
    /// The word does not need to be in the vocabulary.
    ///
    /// # Errors
    /// Propagates any error from [`Solver::play`].
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::solver::{FirstAlphabetic, Solver};
    /// use hangman_solver::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::new(["cat", "car", "can", "dog"].map(|w| Word::new(w).unwrap()));
    /// let mut solver = Solver::new(&vocabulary, FirstAlphabetic);
    ///
    /// let dog = Word::new("dog").unwrap();
    /// assert_eq!(solver.guesses(&dog), Ok(vec!['a', 'd', 'g', 'o']));
    /// ```
    pub fn guesses(&mut self, word: &Word) -> Result<Vec<char>, FeedbackError> {
        Ok(self.play(word.len(), &mut KnownWord(word))?.letters())
    }
}
