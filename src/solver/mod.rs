//! Hangman solving algorithms
//!
//! Letter selection by candidate coverage, with an optional common-words
//! ranking and a pluggable tie-break policy.

mod engine;
mod frequency;
mod ranking;
mod state;
mod tiebreak;

pub use engine::{GameOutcome, GameRecord, Move, Solver, Turn};
pub use frequency::LetterCounts;
pub use ranking::{CommonWords, FileRankingStore, RankingStore, prefer_common};
pub use state::GameState;
pub use tiebreak::{FirstAlphabetic, LastAlphabetic, RandomTieBreak, TieBreak, TieBreakType};
