//! TUI rendering with ratatui
//!
//! Board, keyboard, and status visualizations for the Numberle game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Equation, Symbol, SymbolFeedback, Verdict};
use crate::game::Status;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧮 NUMBERLE - Guess the Equation")
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

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.game.max_attempts());

    for attempt in app.game.history() {
        let spans: Vec<Span> = attempt
            .guess()
            .symbols()
            .iter()
            .zip(attempt.feedback().verdicts())
            .map(|(&symbol, verdict)| {
                Span::styled(
                    format!(" {symbol} "),
                    verdict_style(verdict).add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    // The row being typed, then the unused rows
    if app.game.status() == Status::InProgress {
        let mut spans: Vec<Span> = app
            .input_buffer
            .chars()
            .map(|c| {
                Span::styled(
                    format!(" {c} "),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        for _ in app.input_buffer.chars().count()..Equation::LENGTH {
            spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < app.game.max_attempts() {
        lines.push(Line::from(Span::styled(
            " · ".repeat(Equation::LENGTH),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app.game.keyboard(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn keyboard_line(keyboard: &SymbolFeedback, symbols: &[Symbol]) -> Line<'static> {
    let spans: Vec<Span> = symbols
        .iter()
        .map(|&symbol| match keyboard.verdict(symbol) {
            Some(verdict) => Span::styled(format!(" {symbol} "), verdict_style(verdict)),
            None => Span::raw(format!(" {symbol} ")),
        })
        .collect();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, keyboard: &SymbolFeedback, area: Rect) {
    let (digits, operators) = Symbol::ALL.split_at(10);
    let lines = vec![
        keyboard_line(keyboard, digits),
        keyboard_line(keyboard, operators),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => match app.game.status() {
            Status::Won => (
                " 🎉 SOLVED! | Press 'n' for new game or 'q' to quit ",
                "",
                Color::Green,
            ),
            _ => (
                " Game over | Press 'n' for new game or 'q' to quit ",
                "",
                Color::Red,
            ),
        },
        InputMode::Guessing => (
            " Enter Equation (digits and + - * / =) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempts: {}/{}",
        app.game.remaining_attempts(),
        app.game.max_attempts()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let guesses_text = format!("Guesses made: {}", app.game.history().len());
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
