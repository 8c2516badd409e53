//! Hangman Solver
//!
//! Guesses a secret word letter by letter. Each turn the solver proposes the
//! un-guessed letter found in the most remaining dictionary words, then narrows
//! the candidates with the player's answer.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{Feedback, Word};
//! use hangman_solver::solver::{FirstAlphabetic, Solver};
//! use hangman_solver::wordlists::Vocabulary;
//!
//! let vocabulary = Vocabulary::new(["cat", "car", "can", "dog"].map(|w| Word::new(w).unwrap()));
//! let mut solver = Solver::new(&vocabulary, FirstAlphabetic);
//! solver.start_game(3)?;
//!
//! let letter = solver.choose_letter().unwrap();
//! assert_eq!(letter, 'a');
//!
//! // The secret word has an 'a' in position 2
//! solver.apply_feedback(letter, &Feedback::Present(vec![2])).unwrap();
//! assert_eq!(solver.candidate_count(), 3);
//! # Ok::<(), hangman_solver::core::FeedbackError>(())
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
