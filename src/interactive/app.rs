//! TUI application state and logic

use crate::core::{Equation, Symbol};
use crate::equations::loader::pick_secret;
use crate::game::{Game, Status, Submission};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pool: Vec<Equation>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(pool: Vec<Equation>, secret: Equation, max_attempts: usize) -> Self {
        Self {
            game: Game::with_max_attempts(secret, max_attempts),
            pool,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden 7-character equation.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type an equation like 7/1=2+5 and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Submit the current input buffer as a guess
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();
        if input.is_empty() {
            return;
        }

        match self.game.submit_guess(&input) {
            Err(_) => {
                self.add_message("The game is over. Press 'n' for a new game.", MessageStyle::Error);
            }
            Ok(Submission::Rejected(outcome)) => {
                self.add_message(&outcome.to_string(), MessageStyle::Error);
            }
            Ok(Submission::Accepted { status, .. }) => {
                self.input_buffer.clear();
                match status {
                    Status::Won => self.finish_won(),
                    Status::Lost => self.finish_lost(),
                    Status::InProgress => {
                        let remaining = self.game.remaining_attempts();
                        self.add_message(
                            &format!("{remaining} attempts remaining"),
                            MessageStyle::Info,
                        );
                    }
                }
            }
        }
    }

    fn finish_won(&mut self) {
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        self.input_mode = InputMode::GameOver;

        let celebration = match self.game.history().len() {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            _ => "🎊 SOLVED! 🎊",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn finish_lost(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        let secret = self.game.secret().text().to_string();
        self.add_message(
            &format!("Out of attempts! The equation was {secret}"),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a new game with a fresh secret from the pool
    pub fn new_game(&mut self) {
        let secret = pick_secret(&self.pool)
            .unwrap_or(self.game.secret())
            .clone();
        self.game.reset(secret);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Enter your first guess.", MessageStyle::Info);
    }

    /// Append a typed character to the input buffer
    ///
    /// Only equation symbols are accepted, and the buffer is capped at the
    /// equation length.
    pub fn push_char(&mut self, c: char) {
        if Symbol::from_char(c).is_some() && self.input_buffer.len() < Equation::LENGTH {
            self.input_buffer.push(c);
        }
    }

    /// Remove the last typed character
    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In game-over mode, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char(c) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_char();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                },
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

    fn test_app() -> App {
        let pool = vec![Equation::new("7/1=2+5").unwrap()];
        App::new(pool, Equation::new("1+3=1+3").unwrap(), 7)
    }

    #[test]
    fn push_char_accepts_only_equation_symbols() {
        let mut app = test_app();

        app.push_char('7');
        app.push_char('+');
        app.push_char('x');
        app.push_char(' ');

        assert_eq!(app.input_buffer, "7+");
    }

    #[test]
    fn push_char_caps_at_equation_length() {
        let mut app = test_app();
        for c in "1+3=1+3=99".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "1+3=1+3");
    }

    #[test]
    fn rejected_input_keeps_buffer() {
        let mut app = test_app();
        for c in "1+2=3+4".chars() {
            app.push_char(c);
        }
        app.submit_input();

        // Buffer stays so the user can edit the rejected guess
        assert_eq!(app.input_buffer, "1+2=3+4");
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn winning_guess_enters_game_over_mode() {
        let mut app = test_app();
        for c in "1+3=1+3".chars() {
            app.push_char(c);
        }
        app.submit_input();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn new_game_resets_state() {
        let mut app = test_app();
        for c in "1+3=1+3".chars() {
            app.push_char(c);
        }
        app.submit_input();

        app.new_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());
        assert!(app.game.history().is_empty());
        // New secret comes from the pool
        assert_eq!(app.game.secret().text(), "7/1=2+5");
    }
}
