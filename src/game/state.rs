//! Game state and the turn protocol
//!
//! A [`Game`] owns the secret equation, the append-only attempt history, and
//! the keyboard feedback table. Remaining attempts and the win/loss status
//! are derived from the history rather than stored as separate flags, so
//! there is exactly one source of truth per fact.

use crate::core::{Equation, Feedback, SymbolFeedback, ValidationOutcome};
use std::fmt;

/// Default number of attempts per game
pub const MAX_ATTEMPTS: usize = 7;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Guesses are still being accepted
    InProgress,
    /// A guess matched the secret
    Won,
    /// The attempt budget ran out
    Lost,
}

impl Status {
    /// Whether the game accepts no further guesses
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One accepted guess and its verdict row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Equation,
    feedback: Feedback,
}

impl Attempt {
    /// The guessed equation
    #[must_use]
    pub const fn guess(&self) -> &Equation {
        &self.guess
    }

    /// The verdict row computed for this guess
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Error returned when a guess is submitted after the game has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverError;

impl fmt::Display for GameOverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the game is over; reset to play again")
    }
}

impl std::error::Error for GameOverError {}

/// Result of one [`Game::submit_guess`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The input failed validation; nothing changed and no attempt was
    /// consumed
    Rejected(ValidationOutcome),
    /// The guess was scored and recorded
    Accepted {
        /// Verdict row for the guess
        feedback: Feedback,
        /// Game status after recording the attempt
        status: Status,
    },
}

/// One game of Numberle
///
/// # Example
///
/// ```
/// use numberle::core::Equation;
/// use numberle::game::{Game, Status, Submission};
///
/// let secret = Equation::new("7/1=2+5").unwrap();
/// let mut game = Game::new(secret);
///
/// match game.submit_guess("7/1=2+5").unwrap() {
///     Submission::Accepted { status, .. } => assert_eq!(status, Status::Won),
///     Submission::Rejected(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    secret: Equation,
    history: Vec<Attempt>,
    keyboard: SymbolFeedback,
    max_attempts: usize,
}

impl Game {
    /// Start a game with the default attempt budget
    #[must_use]
    pub fn new(secret: Equation) -> Self {
        Self::with_max_attempts(secret, MAX_ATTEMPTS)
    }

    /// Start a game with a custom attempt budget
    ///
    /// # Panics
    /// Panics if `max_attempts` is zero.
    #[must_use]
    pub fn with_max_attempts(secret: Equation, max_attempts: usize) -> Self {
        assert!(max_attempts > 0, "max_attempts must be at least 1");
        Self {
            secret,
            history: Vec::with_capacity(max_attempts),
            keyboard: SymbolFeedback::new(),
            max_attempts,
        }
    }

    /// Submit one guess
    ///
    /// Invalid input is reported as [`Submission::Rejected`] and consumes no
    /// attempt. A valid guess is scored against the secret, appended to the
    /// history, and merged into the keyboard table.
    ///
    /// # Errors
    /// Returns [`GameOverError`] if the game is already won or lost; the
    /// state is not touched.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Submission, GameOverError> {
        if self.status().is_terminal() {
            return Err(GameOverError);
        }

        let guess = match Equation::new(raw) {
            Ok(guess) => guess,
            Err(outcome) => return Ok(Submission::Rejected(outcome)),
        };

        let feedback = Feedback::score(&guess, &self.secret);
        for (&symbol, verdict) in guess.symbols().iter().zip(feedback.verdicts()) {
            self.keyboard.record(symbol, verdict);
        }
        self.history.push(Attempt { guess, feedback });

        Ok(Submission::Accepted {
            feedback,
            status: self.status(),
        })
    }

    /// Clear all progress and start over with a new secret
    pub fn reset(&mut self, secret: Equation) {
        self.secret = secret;
        self.history.clear();
        self.keyboard.clear();
    }

    /// The secret equation (for the reveal affordance)
    #[must_use]
    pub const fn secret(&self) -> &Equation {
        &self.secret
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// The configured attempt budget
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    /// Current status, derived from the history
    #[must_use]
    pub fn status(&self) -> Status {
        if self
            .history
            .last()
            .is_some_and(|attempt| attempt.feedback.is_perfect())
        {
            Status::Won
        } else if self.history.len() >= self.max_attempts {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Whether no further guesses are accepted
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Whether a guess matched the secret
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status() == Status::Won
    }

    /// Best verdict observed per symbol this game
    #[must_use]
    pub const fn keyboard(&self) -> &SymbolFeedback {
        &self.keyboard
    }

    /// Owned immutable view of the game for presentation layers
    ///
    /// The presentation layer pulls a snapshot after each call and redraws
    /// from it; the game pushes no notifications.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            attempts: self.history.clone(),
            keyboard: self.keyboard,
            remaining_attempts: self.remaining_attempts(),
            max_attempts: self.max_attempts,
            status: self.status(),
        }
    }
}

/// Immutable view of a game taken by [`Game::snapshot`]
#[derive(Debug, Clone)]
pub struct Snapshot {
    attempts: Vec<Attempt>,
    keyboard: SymbolFeedback,
    remaining_attempts: usize,
    max_attempts: usize,
    status: Status,
}

impl Snapshot {
    /// Accepted guesses in submission order
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Best verdict observed per symbol
    #[must_use]
    pub const fn keyboard(&self) -> &SymbolFeedback {
        &self.keyboard
    }

    /// Attempts left
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.remaining_attempts
    }

    /// Configured attempt budget
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Status at the time of the snapshot
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Symbol, Verdict};

    fn game_with_secret(text: &str) -> Game {
        Game::new(Equation::new(text).unwrap())
    }

    #[test]
    fn new_game_is_pristine() {
        let game = game_with_secret("1+3=1+3");

        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS);
        assert!(game.history().is_empty());
        assert!(game.keyboard().is_empty());
        assert!(!game.is_over());
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut game = game_with_secret("1+3=1+3");

        let submission = game.submit_guess("1+3=1+3").unwrap();
        assert_eq!(
            submission,
            Submission::Accepted {
                feedback: Feedback::PERFECT,
                status: Status::Won,
            }
        );
        assert!(game.is_won());
        assert!(game.is_over());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn invalid_guess_consumes_no_attempt() {
        let mut game = game_with_secret("1+3=1+3");

        assert_eq!(
            game.submit_guess("7*8=56").unwrap(),
            Submission::Rejected(ValidationOutcome::TooShort)
        );
        assert_eq!(
            game.submit_guess("1+2=3+4").unwrap(),
            Submission::Rejected(ValidationOutcome::UnbalancedSides)
        );

        assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS);
        assert!(game.history().is_empty());
        assert!(game.keyboard().is_empty());
        assert_eq!(game.status(), Status::InProgress);
    }

    #[test]
    fn attempt_budget_exhaustion_loses() {
        let mut game = game_with_secret("1+3=1+3");

        for turn in 1..=MAX_ATTEMPTS {
            let submission = game.submit_guess("2+4=6-0").unwrap();
            match submission {
                Submission::Accepted { status, .. } => {
                    if turn == MAX_ATTEMPTS {
                        assert_eq!(status, Status::Lost);
                    } else {
                        assert_eq!(status, Status::InProgress);
                    }
                }
                Submission::Rejected(_) => unreachable!("guess is valid"),
            }
        }

        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn terminal_game_rejects_submissions() {
        let mut game = game_with_secret("1+3=1+3");
        game.submit_guess("1+3=1+3").unwrap();

        assert_eq!(game.submit_guess("2+4=6-0"), Err(GameOverError));
        // No mutation happened
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn keyboard_accumulates_across_attempts() {
        let mut game = game_with_secret("1+3=1+3");

        game.submit_guess("2+4=6-0").unwrap();
        assert_eq!(game.keyboard().verdict(Symbol::Plus), Some(Verdict::Correct));
        assert_eq!(game.keyboard().verdict(Symbol::D2), Some(Verdict::Absent));

        game.submit_guess("3+1=3+1").unwrap();
        assert_eq!(game.keyboard().verdict(Symbol::D3), Some(Verdict::Present));
        assert_eq!(game.keyboard().verdict(Symbol::D1), Some(Verdict::Present));
    }

    #[test]
    fn keyboard_never_downgrades() {
        let mut game = game_with_secret("1+3=1+3");

        // 1 correct at position 0
        game.submit_guess("1+1=1+1").unwrap();
        assert_eq!(game.keyboard().verdict(Symbol::D1), Some(Verdict::Correct));

        // 1 only present in this guess; stored verdict must stay Correct
        game.submit_guess("3+1=3+1").unwrap();
        assert_eq!(game.keyboard().verdict(Symbol::D1), Some(Verdict::Correct));
    }

    #[test]
    fn reset_restores_pristine_state() {
        let mut game = game_with_secret("1+3=1+3");
        game.submit_guess("2+4=6-0").unwrap();
        game.submit_guess("1+3=1+3").unwrap();
        assert!(game.is_over());

        game.reset(Equation::new("7/1=2+5").unwrap());

        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS);
        assert!(game.history().is_empty());
        assert!(game.keyboard().is_empty());
        assert_eq!(game.secret().text(), "7/1=2+5");
    }

    #[test]
    fn custom_attempt_budget() {
        let secret = Equation::new("1+3=1+3").unwrap();
        let mut game = Game::with_max_attempts(secret, 2);

        game.submit_guess("2+4=6-0").unwrap();
        assert_eq!(game.remaining_attempts(), 1);

        game.submit_guess("3+1=3+1").unwrap();
        assert_eq!(game.status(), Status::Lost);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut game = game_with_secret("1+3=1+3");
        game.submit_guess("3+1=3+1").unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.attempts().len(), 1);
        assert_eq!(snapshot.attempts()[0].guess().text(), "3+1=3+1");
        assert_eq!(snapshot.remaining_attempts(), MAX_ATTEMPTS - 1);
        assert_eq!(snapshot.max_attempts(), MAX_ATTEMPTS);
        assert_eq!(snapshot.status(), Status::InProgress);
        assert_eq!(
            snapshot.keyboard().verdict(Symbol::Plus),
            Some(Verdict::Correct)
        );
    }

    #[test]
    fn win_on_last_attempt_is_won_not_lost() {
        let secret = Equation::new("1+3=1+3").unwrap();
        let mut game = Game::with_max_attempts(secret, 1);

        let submission = game.submit_guess("1+3=1+3").unwrap();
        assert_eq!(
            submission,
            Submission::Accepted {
                feedback: Feedback::PERFECT,
                status: Status::Won,
            }
        );
    }
}
