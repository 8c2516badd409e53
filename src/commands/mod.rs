//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, LetterCoverage, analyze_length};
pub use benchmark::{BenchmarkResult, WordResult, run_benchmark, select_words};
pub use simple::{Console, run_session, run_simple};
pub use solve::{SolveResult, solve_word};
