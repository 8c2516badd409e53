//! Simple interactive CLI mode
//!
//! Line-oriented Hangman session without TUI. The user thinks of a word, the
//! solver asks about letters, and the user answers yes/no and positions.

use crate::core::Feedback;
use crate::output::formatters::pattern_line;
use crate::solver::{GameOutcome, Move, RankingStore, Solver, TieBreak};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// `store`, when given, persists the common-words ranking after each solved
/// game.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple<T: TieBreak>(
    solver: &mut Solver<T>,
    store: Option<&dyn RankingStore>,
) -> Result<(), String> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_session(solver, store, &mut console)
}

/// Reply to a prompt
enum Reply<T> {
    Value(T),
    Quit,
}

/// Prompt-and-answer wrapper around any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a captured transcript
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl std::fmt::Display) -> Result<(), String> {
        writeln!(self.output, "{text}").map_err(|e| e.to_string())
    }

    /// Print a prompt and read one trimmed line; end of input counts as quit
    fn ask(&mut self, prompt: &str) -> Result<Reply<String>, String> {
        write!(self.output, "{prompt}: ").map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        let line = line.trim().to_lowercase();
        if read == 0 || matches!(line.as_str(), "q" | "quit" | "exit") {
            return Ok(Reply::Quit);
        }
        Ok(Reply::Value(line))
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<Reply<bool>, String> {
        loop {
            let Reply::Value(answer) = self.ask(&format!("{prompt} (y/n)"))? else {
                return Ok(Reply::Quit);
            };
            match answer.as_str() {
                "y" | "yes" => return Ok(Reply::Value(true)),
                "n" | "no" => return Ok(Reply::Value(false)),
                _ => self.say("Please answer 'y' or 'n'.".yellow())?,
            }
        }
    }

    fn ask_length(&mut self) -> Result<Reply<usize>, String> {
        loop {
            let Reply::Value(answer) = self.ask("How many letters are in your word")? else {
                return Ok(Reply::Quit);
            };
            match answer.parse::<usize>() {
                Ok(length) if length > 0 => return Ok(Reply::Value(length)),
                _ => self.say("Please enter a positive whole number.".yellow())?,
            }
        }
    }
}

/// Run games until the user quits or declines to play again
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_session<T: TieBreak, R: BufRead, W: Write>(
    solver: &mut Solver<T>,
    store: Option<&dyn RankingStore>,
    console: &mut Console<R, W>,
) -> Result<(), String> {
    console.say(format!("\n{}", "═".repeat(60).cyan()))?;
    console.say(format!("{}", "  Hangman Solver - Interactive Mode".bright_cyan().bold()))?;
    console.say(format!("{}", "═".repeat(60).cyan()))?;
    console.say("Think of a word and I'll try to guess it, one letter at a time.")?;
    console.say("Answer with y/n; give positions as numbers starting at 1, e.g. '1 3'.")?;
    console.say("Type 'q' at any prompt to quit.\n")?;

    loop {
        let Reply::Value(length) = console.ask_length()? else {
            break;
        };
        let Reply::Value(outcome) = play_game(solver, length, console)? else {
            break;
        };
        report_outcome(&outcome, console)?;

        if let GameOutcome::Solved { word, .. } = &outcome {
            remember(solver, store, word, console)?;
        }

        match console.ask_yes_no("Play again?")? {
            Reply::Value(true) => console.say("")?,
            _ => break,
        }
    }

    console.say("\nThanks for playing!")?;
    Ok(())
}

fn play_game<T: TieBreak, R: BufRead, W: Write>(
    solver: &mut Solver<T>,
    length: usize,
    console: &mut Console<R, W>,
) -> Result<Reply<GameOutcome>, String> {
    if solver.start_game(length).map_err(|e| e.to_string())? == 0 {
        console.say(
            format!("I don't know any {length}-letter words.")
                .yellow()
                .to_string(),
        )?;
    }

    loop {
        match solver.next_move() {
            Move::Finished(outcome) => return Ok(Reply::Value(outcome)),
            Move::ProposeWord(word) => {
                let prompt = format!("Is your word {}?", word.text().to_uppercase().bold());
                let Reply::Value(correct) = console.ask_yes_no(&prompt)? else {
                    return Ok(Reply::Quit);
                };
                return Ok(Reply::Value(solver.confirm_word(correct)));
            }
            Move::Letter(letter) => {
                if let Some(game) = solver.game() {
                    console.say(format!(
                        "\n  {}, {} candidates",
                        pattern_line(game.revealed(), game.wrong_guesses())
                            .bright_white()
                            .bold(),
                        game.candidates().len()
                    ))?;
                }
                let Reply::Value(feedback) = ask_feedback(solver, letter, console)? else {
                    return Ok(Reply::Quit);
                };
                if let Err(e) = solver.apply_feedback(letter, &feedback) {
                    console.say(format!("{}", e.to_string().red()))?;
                }
            }
        }
    }
}

/// Ask whether `letter` is present and where, until the answer is valid
fn ask_feedback<T: TieBreak, R: BufRead, W: Write>(
    solver: &Solver<T>,
    letter: char,
    console: &mut Console<R, W>,
) -> Result<Reply<Feedback>, String> {
    let upper = letter.to_ascii_uppercase();
    let Reply::Value(present) =
        console.ask_yes_no(&format!("Is the letter '{}' in your word?", upper.to_string().bold()))?
    else {
        return Ok(Reply::Quit);
    };
    if !present {
        return Ok(Reply::Value(Feedback::Absent));
    }

    // Only one blank left: the letter can only go there
    if let Some(position) = solver.game().and_then(|g| g.revealed().single_unknown()) {
        return Ok(Reply::Value(Feedback::Present(vec![position])));
    }

    loop {
        let Reply::Value(answer) = console.ask(&format!("Where is {upper}? (positions)"))? else {
            return Ok(Reply::Quit);
        };
        let checked = Feedback::parse_positions(&answer).and_then(|feedback| {
            // Checked here so a typo can be corrected
            solver
                .game()
                .map_or(Ok(()), |g| g.validate(letter, &feedback).map(|_| ()))
                .map(|()| feedback)
        });
        match checked {
            Ok(feedback) => return Ok(Reply::Value(feedback)),
            Err(e) => console.say(format!("{}", e.to_string().red()))?,
        }
    }
}

fn report_outcome<R: BufRead, W: Write>(
    outcome: &GameOutcome,
    console: &mut Console<R, W>,
) -> Result<(), String> {
    match outcome {
        GameOutcome::Solved {
            word,
            wrong_guesses,
        } => {
            console.say(format!(
                "\n{} {} with {} wrong {}.",
                "Got it! Your word is".green().bold(),
                word.to_uppercase().bright_green().bold(),
                wrong_guesses,
                if *wrong_guesses == 1 { "guess" } else { "guesses" }
            ))?;
        }
        GameOutcome::NotRecognized { wrong_guesses } => {
            console.say(format!(
                "\n{} ({wrong_guesses} wrong guesses)",
                "I don't recognize your word.".red().bold()
            ))?;
        }
    }
    Ok(())
}

/// Promote a solved word in the ranking and persist it
fn remember<T: TieBreak, R: BufRead, W: Write>(
    solver: &mut Solver<T>,
    store: Option<&dyn RankingStore>,
    word: &str,
    console: &mut Console<R, W>,
) -> Result<(), String> {
    let Some(ranking) = solver.ranking_mut() else {
        return Ok(());
    };
    ranking.promote(word);
    if let Some(store) = store
        && let Err(e) = store.save(ranking)
    {
        console.say(
            format!("Warning: could not save word ranking: {e}")
                .yellow()
                .to_string(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CommonWords, FirstAlphabetic};
    use crate::wordlists::Vocabulary;
    use crate::wordlists::loader::words_from_slice;
    use std::cell::RefCell;
    use std::io::Cursor;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&["cat", "car", "can", "dog"]))
    }

    fn transcript<T: TieBreak>(
        solver: &mut Solver<T>,
        store: Option<&dyn RankingStore>,
        input: &str,
    ) -> String {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        run_session(solver, store, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    /// Keeps the last saved ranking in memory
    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Option<CommonWords>>,
    }

    impl RankingStore for MemoryStore {
        fn load(&self) -> CommonWords {
            self.saved.borrow().clone().unwrap_or_default()
        }

        fn save(&self, ranking: &CommonWords) -> io::Result<()> {
            *self.saved.borrow_mut() = Some(ranking.clone());
            Ok(())
        }
    }

    #[test]
    fn guesses_word_with_positions() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        // A at 2, C at 1, no N, then R fills the last blank without a position prompt
        let out = transcript(&mut solver, None, "3\ny\n2\ny\n1\nn\ny\nn\n");

        assert_eq!(out.matches("Where is").count(), 2);
        assert_eq!(out.matches("Is the letter '").count(), 4);
        assert!(!out.contains("Is your word"));
        assert!(out.contains("CAR"));
        assert!(out.contains("Got it!"));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn sole_candidate_is_proposed() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        // 'a' absent leaves dog, which is proposed directly
        let out = transcript(&mut solver, None, "3\nn\ny\nn\n");

        assert!(out.contains("DOG"));
        assert!(out.contains("Got it!"));
        assert!(!out.contains("Where is"));
    }

    #[test]
    fn rejected_word_is_not_recognized() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        let out = transcript(&mut solver, None, "3\nn\nn\nn\n");

        assert!(out.contains("I don't recognize your word."));
    }

    #[test]
    fn invalid_input_is_reprompted() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        let out = transcript(&mut solver, None, "zero\n0\n3\nmaybe\ny\n7\n2\nq\n");

        assert!(out.contains("Please enter a positive whole number."));
        assert!(out.contains("Please answer 'y' or 'n'."));
        assert!(out.contains("is outside the word"));
        let game = solver.game().unwrap();
        assert_eq!(game.revealed().get(1), Some(b'a'));
    }

    #[test]
    fn unknown_length_reports_and_continues() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        let out = transcript(&mut solver, None, "7\n");

        assert!(out.contains("I don't know any 7-letter words."));
        assert!(out.contains("I don't recognize your word."));
    }

    #[test]
    fn solved_word_is_promoted_and_saved() {
        let vocabulary = vocabulary();
        let ranking = CommonWords::new(["the", "of", "and", "to"]);
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic).with_ranking(ranking);
        let store = MemoryStore::default();

        transcript(&mut solver, Some(&store), "3\nn\ny\nn\n");

        assert_eq!(solver.ranking().unwrap().rank("dog"), Some(2));
        assert_eq!(store.load().rank("dog"), Some(2));
    }

    #[test]
    fn end_of_input_quits() {
        let vocabulary = vocabulary();
        let mut solver = Solver::new(&vocabulary, FirstAlphabetic);

        let out = transcript(&mut solver, None, "");

        assert!(out.contains("Thanks for playing!"));
    }
}
