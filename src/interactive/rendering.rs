//! TUI rendering with ratatui
//!
//! Visualizations for the Hangman solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Feedback;
use crate::solver::{GameOutcome, TieBreak};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name when at most this many remain
const LISTED_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui<T: TieBreak>(f: &mut Frame, app: &App<'_, T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HANGMAN SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(area);

    render_word(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_word<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let mut content = Vec::new();

    if let Some(game) = app.solver.game() {
        content.push(Line::from(Span::styled(
            game.revealed().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::raw("Hits: "),
            Span::styled(game.hits().to_string(), Style::default().fg(Color::Green)),
            Span::raw("  Misses: "),
            Span::styled(
                game.misses().to_string(),
                Style::default().fg(Color::Red),
            ),
            Span::raw(format!("  ({} wrong)", game.wrong_guesses())),
        ]));
    } else {
        content.push(Line::from("No game yet"));
    }

    content.push(Line::from(""));
    content.push(question(app));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Your Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn question<T: TieBreak>(app: &App<'_, T>) -> Line<'static> {
    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    match (app.input_mode, app.current_letter, app.proposed_word) {
        (InputMode::LetterPresent, Some(letter), _) => Line::from(vec![
            Span::raw("Is the letter '"),
            Span::styled(letter.to_ascii_uppercase().to_string(), highlight),
            Span::raw("' in your word?"),
        ]),
        (InputMode::Positions, Some(letter), _) => Line::from(vec![
            Span::raw("Where is "),
            Span::styled(letter.to_ascii_uppercase().to_string(), highlight),
            Span::raw("?"),
        ]),
        (InputMode::ConfirmWord, _, Some(word)) => Line::from(vec![
            Span::raw("Is your word "),
            Span::styled(word.text().to_uppercase(), highlight),
            Span::raw("?"),
        ]),
        (InputMode::GameOver, _, _) => match &app.outcome {
            Some(GameOutcome::Solved { word, .. }) => Line::from(Span::styled(
                format!("🎉 Solved: {}", word.to_uppercase()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            _ => Line::from(Span::styled(
                "I don't recognize your word",
                Style::default().fg(Color::Red),
            )),
        },
        _ => Line::from("How many letters are in your word?"),
    }
}

fn render_history<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, turn)| {
            let color = match turn.feedback {
                Feedback::Absent => Color::Red,
                Feedback::Present(_) => Color::Green,
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:2}: ", i + 1)),
                Span::styled(
                    turn.letter.to_ascii_uppercase().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {:<14}", turn.feedback.to_string()),
                    Style::default().fg(color),
                ),
                Span::raw(format!(
                    "{} → {}",
                    turn.candidates_before, turn.candidates_after
                )),
            ]))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Elimination gauge
            Constraint::Percentage(60), // Candidates
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let current = app.candidates().len();
    let initial = app
        .history
        .first()
        .map_or(current, |turn| turn.candidates_before);
    let eliminated = initial.saturating_sub(current);
    let percent = if initial == 0 {
        0
    } else {
        (eliminated * 100 / initial).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Candidates Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{eliminated}/{initial} | {current} remain"));

    f.render_widget(gauge, area);
}

fn render_candidates<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let candidates = app.candidates();

    let content: Vec<Line> = if app.solver.game().is_none() {
        vec![Line::from(format!(
            "{} words in the dictionary",
            app.solver.vocabulary().len()
        ))]
    } else if candidates.is_empty() {
        vec![Line::from("No candidates left")]
    } else if candidates.len() <= LISTED_CANDIDATES {
        candidates
            .iter()
            .map(|word| {
                let common = app
                    .solver
                    .ranking()
                    .is_some_and(|r| r.rank(word.text()).is_some());
                let style = if common {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(word.text().to_uppercase(), style),
                ])
            })
            .collect()
    } else {
        vec![Line::from(format!("{} candidates remaining", candidates.len()))]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WordLength => (
            " Number of letters | Enter to start ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::LetterPresent => (" y: yes | n: no ", "", Color::Yellow),
        InputMode::Positions => (
            " Positions starting at 1, e.g. '1 3' | ESC to go back ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::ConfirmWord => (" y: that's it | n: not my word ", "", Color::Magenta),
        InputMode::GameOver => (
            " Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<T: TieBreak>(f: &mut Frame, app: &App<'_, T>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Solved: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let guessed = app
        .solver
        .game()
        .map(|g| g.guessed().to_string())
        .unwrap_or_default();
    f.render_widget(
        Paragraph::new(format!("Guessed: {guessed}")).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::LetterPresent => "q: Quit | r: Restart",
        InputMode::GameOver => "q: Quit | n: New Game",
        _ => "Ctrl-C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstAlphabetic, Solver};
    use crate::wordlists::Vocabulary;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen<T: TieBreak>(app: &App<'_, T>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_letter_question() {
        let vocabulary = Vocabulary::new(words_from_slice(&["cat", "car", "can", "dog"]));
        let mut app = App::new(Solver::new(&vocabulary, FirstAlphabetic), None);
        app.input_buffer.push('3');
        app.submit_length();

        let text = screen(&app);

        assert!(text.contains("HANGMAN SOLVER"));
        assert!(text.contains("Is the letter 'A' in your word?"));
        assert!(text.contains("_ _ _"));
        assert!(text.contains("CAT"));
    }

    #[test]
    fn renders_hits_and_misses() {
        let vocabulary = Vocabulary::new(words_from_slice(&["cat", "car", "can", "dog"]));
        let mut app = App::new(Solver::new(&vocabulary, FirstAlphabetic), None);
        app.input_buffer.push('3');
        app.submit_length();

        app.answer_letter(true);
        app.input_buffer.push('2');
        app.submit_positions();
        assert_eq!(app.current_letter, Some('c'));
        app.answer_letter(true);
        app.input_buffer.push('1');
        app.submit_positions();
        assert_eq!(app.current_letter, Some('n'));
        app.answer_letter(false);

        let text = screen(&app);

        assert!(text.contains("C A _"));
        assert!(text.contains("Hits: A C"));
        assert!(text.contains("Misses: N"));
        assert!(text.contains("(1 wrong)"));
    }

    #[test]
    fn renders_before_first_game() {
        let vocabulary = Vocabulary::new(words_from_slice(&["dog"]));
        let app = App::new(Solver::new(&vocabulary, FirstAlphabetic), None);

        let text = screen(&app);

        assert!(text.contains("How many letters are in your word?"));
        assert!(text.contains("1 words in the dictionary"));
    }
}
