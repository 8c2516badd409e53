//! Ground truth for a guessed letter
//!
//! Feedback is either "absent" or "present at these 1-based positions".

use super::Word;
use std::fmt;

/// Result of guessing one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The letter does not occur in the secret word
    Absent,
    /// The letter occurs exactly at these 1-based positions (sorted, no duplicates)
    Present(Vec<usize>),
}

/// Errors raised while validating or applying feedback
///
/// The solver state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// No game has been started
    NoActiveGame,
    /// A game was requested for a word of zero letters
    ZeroLength,
    /// The guessed character is not a letter
    InvalidLetter(char),
    /// Position outside `1..=word_length`
    PositionOutOfRange { position: usize, word_length: usize },
    /// Position already revealed as a different letter
    PositionConflict { position: usize, revealed: char },
    /// Feedback for this letter was already applied in the current game
    AlreadyApplied(char),
    /// Position input contained something other than numbers
    MalformedPositions(String),
    /// Position input contained no numbers at all
    NoPositions,
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveGame => write!(f, "No game in progress"),
            Self::ZeroLength => write!(f, "The word must have at least one letter"),
            Self::InvalidLetter(c) => write!(f, "'{c}' is not a letter"),
            Self::PositionOutOfRange {
                position,
                word_length,
            } => write!(
                f,
                "Position {position} is outside the word (1-{word_length})"
            ),
            Self::PositionConflict { position, revealed } => write!(
                f,
                "Position {position} is already revealed as '{}'",
                revealed.to_ascii_uppercase()
            ),
            Self::AlreadyApplied(c) => write!(
                f,
                "Feedback for '{}' was already given",
                c.to_ascii_uppercase()
            ),
            Self::MalformedPositions(token) => write!(f, "'{token}' is not a valid position"),
            Self::NoPositions => write!(f, "Enter at least one position"),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Build feedback from 1-based positions; no positions means absent
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::from_positions([3, 1, 3]), Feedback::Present(vec![1, 3]));
    /// assert_eq!(Feedback::from_positions(Vec::new()), Feedback::Absent);
    /// ```
    #[must_use]
    pub fn from_positions(positions: impl IntoIterator<Item = usize>) -> Self {
        let mut positions: Vec<usize> = positions.into_iter().collect();
        if positions.is_empty() {
            return Self::Absent;
        }
        positions.sort_unstable();
        positions.dedup();
        Self::Present(positions)
    }

    /// Feedback for `letter` when the secret word is known
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Feedback, Word};
    ///
    /// let secret = Word::new("banana").unwrap();
    /// assert_eq!(Feedback::from_word(&secret, 'a'), Feedback::Present(vec![2, 4, 6]));
    /// assert_eq!(Feedback::from_word(&secret, 'z'), Feedback::Absent);
    /// ```
    #[must_use]
    pub fn from_word(secret: &Word, letter: char) -> Self {
        let Ok(byte) = u8::try_from(letter.to_ascii_lowercase()) else {
            return Self::Absent;
        };
        Self::from_positions(secret.positions_of(byte).iter().map(|&i| i + 1))
    }

    /// Parse user-entered positions such as `"1 3"`, `"1,3"` or `"2; 5"`
    ///
    /// Any run of non-digit characters separates numbers.
    ///
    /// # Errors
    /// Returns `FeedbackError::NoPositions` if no number is present, or
    /// `FeedbackError::MalformedPositions` for a number that does not fit.
    pub fn parse_positions(input: &str) -> Result<Self, FeedbackError> {
        let positions = input
            .split(|c: char| !c.is_ascii_digit())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| FeedbackError::MalformedPositions(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if positions.is_empty() {
            return Err(FeedbackError::NoPositions);
        }
        Ok(Self::from_positions(positions))
    }

    /// True for `Feedback::Absent`
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// 1-based positions; empty when absent
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        match self {
            Self::Absent => &[],
            Self::Present(positions) => positions,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Present(positions) => {
                let list: Vec<String> = positions.iter().map(ToString::to_string).collect();
                write!(f, "at {}", list.join(", "))
            }
        }
    }
}

/// Supplies ground truth for each letter the solver proposes
pub trait FeedbackSource {
    /// Report where `letter` occurs in the secret word
    fn feedback(&mut self, letter: char) -> Feedback;
}

/// Feedback source backed by a known secret word
pub struct KnownWord<'w>(pub &'w Word);

impl FeedbackSource for KnownWord<'_> {
    fn feedback(&mut self, letter: char) -> Feedback {
        Feedback::from_word(self.0, letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_space_separated() {
        assert_eq!(
            Feedback::parse_positions("1 3"),
            Ok(Feedback::Present(vec![1, 3]))
        );
    }

    #[test]
    fn parse_comma_separated_unsorted() {
        assert_eq!(
            Feedback::parse_positions(" 4,2 , 2"),
            Ok(Feedback::Present(vec![2, 4]))
        );
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(
            Feedback::parse_positions("  "),
            Err(FeedbackError::NoPositions)
        );
        assert_eq!(
            Feedback::parse_positions("abc"),
            Err(FeedbackError::NoPositions)
        );
    }

    #[test]
    fn parse_overflowing_number() {
        assert!(matches!(
            Feedback::parse_positions("99999999999999999999999"),
            Err(FeedbackError::MalformedPositions(_))
        ));
    }

    #[test]
    fn from_word_uppercase_letter() {
        let secret = Word::new("dog").unwrap();
        assert_eq!(Feedback::from_word(&secret, 'G'), Feedback::Present(vec![3]));
    }

    #[test]
    fn known_word_source() {
        let secret = Word::new("level").unwrap();
        let mut source = KnownWord(&secret);
        assert_eq!(source.feedback('l'), Feedback::Present(vec![1, 5]));
        assert!(source.feedback('x').is_absent());
    }

    #[test]
    fn positions_accessor() {
        assert!(Feedback::Absent.positions().is_empty());
        assert_eq!(Feedback::Present(vec![2]).positions(), &[2]);
    }

    #[test]
    fn display_feedback() {
        assert_eq!(Feedback::Absent.to_string(), "absent");
        assert_eq!(Feedback::Present(vec![1, 4]).to_string(), "at 1, 4");
    }

    #[test]
    fn error_messages() {
        let err = FeedbackError::PositionOutOfRange {
            position: 9,
            word_length: 3,
        };
        assert_eq!(err.to_string(), "Position 9 is outside the word (1-3)");
        assert_eq!(
            FeedbackError::AlreadyApplied('e').to_string(),
            "Feedback for 'E' was already given"
        );
    }
}
