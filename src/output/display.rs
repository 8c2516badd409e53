//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::GameOutcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.in_vocabulary {
        eprintln!(
            "{}",
            format!("Warning: '{}' is not in the word list", result.target).yellow()
        );
    }
    if verbose {
        println!("Starting candidates: {}", result.initial_candidates);
    }

    for (i, step) in result.steps.iter().enumerate() {
        let answer = step.feedback.to_string();
        let answer = if step.feedback.is_absent() {
            answer.red()
        } else {
            answer.green()
        };
        println!(
            "Turn {:2}: {}  {}",
            i + 1,
            step.letter.to_ascii_uppercase().to_string().bold(),
            answer
        );

        if verbose {
            println!(
                "         Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!("\nLetters: {}", result.letters().to_uppercase());
    match &result.outcome {
        GameOutcome::Solved { wrong_guesses, .. } => println!(
            "{}",
            format!(
                "✅ Solved with {} letters, {wrong_guesses} wrong",
                result.steps.len()
            )
            .green()
            .bold()
        ),
        GameOutcome::NotRecognized { wrong_guesses } => println!(
            "{}",
            format!("❌ Word not recognized after {wrong_guesses} wrong guesses")
                .red()
                .bold()
        ),
    }
}

/// Print the result of letter coverage analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER COVERAGE:".bright_cyan().bold(),
        format!("{}-letter words", result.length)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} candidate words", result.total_candidates);
    if let Some(common) = result.common_candidates {
        println!("   {common} of them in the common-words ranking");
    }
    let best: String = result
        .best
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "   Best first letter{}: {}\n",
        if result.best.len() == 1 { "" } else { "s" },
        best.bright_yellow().bold()
    );

    for coverage in &result.letters {
        let bar = create_progress_bar(coverage.fraction, 1.0, 30);
        println!(
            "   {}  [{}] {:5} ({:5.1}%)",
            coverage.letter.to_ascii_uppercase(),
            bar.green(),
            coverage.words,
            coverage.fraction * 100.0
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if result.total_words == 0 {
        println!("\nNo words to test.");
        return;
    }

    let pct = |n: usize| n as f64 / result.total_words as f64 * 100.0;

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", pct(result.solved)).green()
    );
    if result.failed > 0 {
        println!(
            "   Not recognized:   {} {}",
            result.failed,
            format!("({:.1}%)", pct(result.failed)).red()
        );
    }
    println!(
        "   Average wrong:    {}",
        format!("{:.2}", result.average_wrong_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_wrong_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_wrong_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong-guess distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for (&wrong, &count) in &result.distribution {
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {wrong:2}: {bar} {count:5} ({:5.1}%)", pct(count));
    }

    if !result.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, wrong) in &result.hardest_words {
            println!("   {} ({wrong} wrong)", word.to_uppercase().yellow());
        }
    }

    if !result.failed_words.is_empty() {
        println!("\n❌ {}", "Not recognized:".red().bold());
        for word in result.failed_words.iter().take(10) {
            println!("   {}", word.to_uppercase().red());
        }
    }
}
