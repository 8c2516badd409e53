//! TUI application state and logic

use crate::core::{Feedback, Word};
use crate::solver::{GameOutcome, Move, RankingStore, Solver, TieBreak, Turn};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;

/// Digits accepted at the word-length prompt
const MAX_LENGTH_DIGITS: usize = 2;

/// Application state
pub struct App<'a, T: TieBreak> {
    pub solver: Solver<'a, T>,
    pub store: Option<&'a dyn RankingStore>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Letter the solver is currently asking about
    pub current_letter: Option<char>,
    /// Word offered when a single candidate is left
    pub proposed_word: Option<&'a Word>,
    pub history: Vec<Turn>,
    pub outcome: Option<GameOutcome>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the number of letters
    WordLength,
    /// Answering whether the current letter is present
    LetterPresent,
    /// Typing the positions of a present letter
    Positions,
    /// Answering whether the proposed word is right
    ConfirmWord,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wrong guesses to number of solved games
    pub wrong_distribution: BTreeMap<usize, usize>,
}

impl<'a, T: TieBreak> App<'a, T> {
    #[must_use]
    pub fn new(solver: Solver<'a, T>, store: Option<&'a dyn RankingStore>) -> Self {
        Self {
            solver,
            store,
            input_mode: InputMode::WordLength,
            input_buffer: String::new(),
            current_letter: None,
            proposed_word: None,
            history: Vec::new(),
            outcome: None,
            messages: vec![
                Message {
                    text: "Welcome! Think of a word and I'll guess it letter by letter."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type the number of letters and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Remaining candidates in the current game
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        match self.solver.game() {
            Some(game) => game.candidates(),
            None => &[],
        }
    }

    pub fn submit_length(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match input.trim().parse::<usize>() {
            Ok(length) => {
                let count = match self.solver.start_game(length) {
                    Ok(count) => count,
                    Err(e) => {
                        self.add_message(&e.to_string(), MessageStyle::Error);
                        return;
                    }
                };
                self.history.clear();
                self.outcome = None;
                if count == 0 {
                    self.add_message(
                        &format!("I don't know any {length}-letter words."),
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("{count} possible {length}-letter words"),
                        MessageStyle::Info,
                    );
                }
                self.advance();
            }
            _ => self.add_message("Enter a positive number of letters", MessageStyle::Error),
        }
    }

    /// Ask the solver for its next move and switch mode accordingly
    fn advance(&mut self) {
        match self.solver.next_move() {
            Move::Letter(letter) => {
                self.current_letter = Some(letter);
                self.proposed_word = None;
                self.input_mode = InputMode::LetterPresent;
            }
            Move::ProposeWord(word) => {
                self.current_letter = None;
                self.proposed_word = Some(word);
                self.input_mode = InputMode::ConfirmWord;
            }
            Move::Finished(outcome) => self.finish(outcome),
        }
    }

    /// The user answered whether the current letter is in the word
    pub fn answer_letter(&mut self, present: bool) {
        if !present {
            self.submit_feedback(&Feedback::Absent);
            return;
        }
        // With one blank left the position is implied
        match self
            .solver
            .game()
            .and_then(|g| g.revealed().single_unknown())
        {
            Some(position) => self.submit_feedback(&Feedback::Present(vec![position])),
            None => self.input_mode = InputMode::Positions,
        }
    }

    pub fn submit_positions(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match Feedback::parse_positions(&input) {
            Ok(feedback) => self.submit_feedback(&feedback),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn submit_feedback(&mut self, feedback: &Feedback) {
        let Some(letter) = self.current_letter else {
            return;
        };
        let candidates_before = self.solver.candidate_count();
        match self.solver.apply_feedback(letter, feedback) {
            Ok(_) => {
                self.history.push(Turn {
                    letter,
                    feedback: feedback.clone(),
                    candidates_before,
                    candidates_after: self.solver.candidate_count(),
                });
                self.advance();
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::Positions;
            }
        }
    }

    /// The user answered whether the proposed word is theirs
    pub fn answer_word(&mut self, correct: bool) {
        let outcome = self.solver.confirm_word(correct);
        self.proposed_word = None;
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.current_letter = None;
        self.stats.total_games += 1;

        match &outcome {
            GameOutcome::Solved {
                word,
                wrong_guesses,
            } => {
                self.stats.games_won += 1;
                *self.stats.wrong_distribution.entry(*wrong_guesses).or_insert(0) += 1;
                self.add_message(
                    &format!(
                        "Got it! Your word is {} ({wrong_guesses} wrong)",
                        word.to_uppercase()
                    ),
                    MessageStyle::Success,
                );
                self.remember(word);
            }
            GameOutcome::NotRecognized { .. } => {
                self.add_message("I don't recognize your word.", MessageStyle::Error);
            }
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.outcome = Some(outcome);
        self.input_mode = InputMode::GameOver;
    }

    fn remember(&mut self, word: &str) {
        let Some(ranking) = self.solver.ranking_mut() else {
            return;
        };
        ranking.promote(word);
        if let Some(store) = self.store
            && let Err(e) = store.save(ranking)
        {
            self.add_message(
                &format!("Could not save word ranking: {e}"),
                MessageStyle::Error,
            );
        }
    }

    pub fn new_game(&mut self) {
        self.history.clear();
        self.current_letter = None;
        self.proposed_word = None;
        self.outcome = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::WordLength;
        self.add_message(
            "New game! Type the number of letters in your word.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Update state for one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WordLength => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c)
                    if c.is_ascii_digit() && self.input_buffer.len() < MAX_LENGTH_DIGITS =>
                {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_length(),
                _ => {}
            },
            InputMode::LetterPresent => match key.code {
                KeyCode::Char('y') => self.answer_letter(true),
                KeyCode::Char('n') => self.answer_letter(false),
                KeyCode::Char('r') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            InputMode::Positions => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' || c == ',' => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_positions(),
                KeyCode::Esc => {
                    self.input_buffer.clear();
                    self.input_mode = InputMode::LetterPresent;
                }
                _ => {}
            },
            InputMode::ConfirmWord => match key.code {
                KeyCode::Char('y') => self.answer_word(true),
                KeyCode::Char('n') => self.answer_word(false),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<T: TieBreak>(app: App<'_, T>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, T: TieBreak>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, T>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CommonWords, FirstAlphabetic};
    use crate::wordlists::Vocabulary;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&["cat", "car", "can", "dog"]))
    }

    fn press(app: &mut App<'_, FirstAlphabetic>, keys: &str) {
        for c in keys.chars() {
            let code = match c {
                '\n' => KeyCode::Enter,
                '\u{8}' => KeyCode::Backspace,
                '\u{1b}' => KeyCode::Esc,
                c => KeyCode::Char(c),
            };
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        }
    }

    #[test]
    fn full_game_with_positions() {
        let vocabulary = vocabulary();
        let mut app = App::new(Solver::new(&vocabulary, FirstAlphabetic), None);

        press(&mut app, "3\n");
        assert_eq!(app.input_mode, InputMode::LetterPresent);
        assert_eq!(app.current_letter, Some('a'));

        press(&mut app, "y");
        assert_eq!(app.input_mode, InputMode::Positions);
        press(&mut app, "2\n");
        assert_eq!(app.current_letter, Some('c'));

        // c at 1, no n, then r fills the last blank
        press(&mut app, "y1\nny");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(
            app.outcome,
            Some(GameOutcome::Solved {
                word: "car".to_string(),
                wrong_guesses: 1
            })
        );
        assert_eq!(app.history.len(), 4);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.wrong_distribution.get(&1), Some(&1));
    }

    #[test]
    fn sole_candidate_is_confirmed() {
        let vocabulary = vocabulary();
        let mut app = App::new(Solver::new(&vocabulary, FirstAlphabetic), None);

        press(&mut app, "3\nn");
        assert_eq!(app.input_mode, InputMode::ConfirmWord);
        assert_eq!(app.proposed_word.map(Word::text), Some("dog"));

        press(&mut app, "n");
        assert_eq!(
            app.outcome,
            Some(GameOutcome::NotRecognized { wrong_guesses: 1 })
        );
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn bad_positions_keep_asking() {
        let vocabulary = vocabulary();
        let mut app = App::new(Solver::new(&vocabulary, FirstAlphabetic), None);

        press(&mut app, "3\ny9\n");

        assert_eq!(app.input_mode, InputMode::Positions);
        assert_eq!(app.current_letter, Some('a'));
        assert!(app.history.is_empty());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn invalid_length_is_rejected() {
        let vocabulary = vocabulary();
        let mut app = App::new(Solver::new(&vocabulary, FirstAlphabetic), None);

        press(&mut app, "0\n");
        assert_eq!(app.input_mode, InputMode::WordLength);
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text.contains("at least one letter"))
        );

        press(&mut app, "x\n");
        assert_eq!(app.input_mode, InputMode::WordLength);
        assert!(app.solver.game().is_none());
    }

    #[test]
    fn new_game_after_finish() {
        let vocabulary = vocabulary();
        let ranking = CommonWords::new(["the", "of"]);
        let mut app = App::new(
            Solver::new(&vocabulary, FirstAlphabetic).with_ranking(ranking),
            None,
        );

        press(&mut app, "3\nny");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.solver.ranking().and_then(|r| r.rank("dog")), Some(1));

        press(&mut app, "n");
        assert_eq!(app.input_mode, InputMode::WordLength);
        assert!(app.history.is_empty());
        assert!(app.outcome.is_none());
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let vocabulary = vocabulary();
        let mut app = App::new(Solver::new(&vocabulary, FirstAlphabetic), None);
        press(&mut app, "3\n");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit);
    }
}
