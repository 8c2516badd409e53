//! Formatting utilities for terminal output

use crate::core::RevealedPattern;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pattern with slots, e.g. `C A _`, plus a miss counter
#[must_use]
pub fn pattern_line(pattern: &RevealedPattern, wrong_guesses: usize) -> String {
    format!("{pattern}   ({wrong_guesses} wrong)")
}
