//! Hangman Solver - CLI
//!
//! Guesses the word you are thinking of, one letter at a time, with TUI and
//! CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman_solver::{
    commands::{analyze_length, run_benchmark, run_simple, select_words, solve_word},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{CommonWords, FileRankingStore, RankingStore, Solver, TieBreakType},
    wordlists::{EmbeddedWordSource, FileWordSource, Vocabulary, WordSource},
};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver that guesses your word by letter coverage",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Tie-break between equally good letters: random (default), first, last
    #[arg(short, long, global = true, default_value = "random")]
    tie_break: String,

    /// Seed for the random tie-break
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Common-words ranking file, updated after every solved game
    #[arg(short, long, global = true)]
    ranking: Option<String>,

    /// Disable the common-words heuristic
    #[arg(long, global = true)]
    no_ranking: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Show the letters the solver would guess for a word
    Solve {
        /// The secret word
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Letter coverage for words of a given length
    Analyze {
        /// Word length
        length: usize,
    },

    /// Solve every dictionary word and report statistics
    Benchmark {
        /// Only words of this length
        #[arg(short, long)]
        length: Option<usize>,

        /// Limit number of words to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
fn load_vocabulary(wordlist: &str) -> Vocabulary {
    let vocabulary = match wordlist {
        "embedded" => EmbeddedWordSource.load(),
        path => FileWordSource::new(path).load(),
    };
    if vocabulary.is_empty() {
        eprintln!(
            "{}",
            format!("Warning: no words loaded from '{wordlist}'; every word will be unrecognized")
                .yellow()
        );
    }
    vocabulary
}

/// Load the ranking based on the -r and --no-ranking flags
fn load_ranking(cli: &Cli) -> (Option<CommonWords>, Option<FileRankingStore>) {
    if cli.no_ranking {
        return (None, None);
    }
    match &cli.ranking {
        Some(path) => {
            let store = FileRankingStore::new(path);
            (Some(store.load()), Some(store))
        }
        None => (Some(CommonWords::embedded()), None),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(&cli.wordlist);
    let (ranking, store) = load_ranking(&cli);
    let tie_break = TieBreakType::from_name(&cli.tie_break, cli.seed);

    let mut solver = Solver::new(&vocabulary, tie_break);
    if let Some(ranking) = ranking.clone() {
        solver = solver.with_ranking(ranking);
    }
    let store = store.as_ref().map(|s| s as &dyn RankingStore);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(solver, store),
        Commands::Simple => run_simple(&mut solver, store).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&word, &mut solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { length } => {
            let result = analyze_length(&vocabulary, length, ranking.as_ref())
                .map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { length, limit } => {
            run_benchmark_command(
                &vocabulary,
                length,
                limit,
                ranking.as_ref(),
                &cli.tie_break,
                cli.seed,
            );
            Ok(())
        }
    }
}

fn run_benchmark_command(
    vocabulary: &Vocabulary,
    length: Option<usize>,
    limit: Option<usize>,
    ranking: Option<&CommonWords>,
    tie_break: &str,
    seed: Option<u64>,
) {
    let words = select_words(vocabulary, length, limit);

    println!("\n{}", "═".repeat(60));
    println!(" Hangman Solver Benchmark ");
    println!("{}", "═".repeat(60));
    println!("\n🎯 Testing {} words", words.len());
    println!("Tie-break: {tie_break}");
    println!(
        "Common-words ranking: {}\n",
        if ranking.is_some() { "on" } else { "off" }
    );

    let result = run_benchmark(
        vocabulary,
        &words,
        ranking,
        || TieBreakType::from_name(tie_break, seed),
        true,
    );
    print_benchmark_result(&result);
}

fn run_play_command(
    solver: Solver<'_, TieBreakType>,
    store: Option<&dyn RankingStore>,
) -> Result<()> {
    use hangman_solver::interactive::{App, run_tui};

    let app = App::new(solver, store);
    run_tui(app)
}
