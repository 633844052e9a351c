//! Numberle
//!
//! A Wordle-style game where the secret is a 7-character arithmetic equation
//! like `7/1=2+5`. Guesses must themselves be valid equations; feedback marks
//! each symbol correct, present, or absent, and a persistent keyboard tracks
//! the best verdict seen per symbol.
//!
//! # Quick Start
//!
//! ```rust
//! use numberle::core::Equation;
//! use numberle::game::{Game, Submission};
//!
//! let secret = Equation::new("7/1=2+5").unwrap();
//! let mut game = Game::new(secret);
//!
//! match game.submit_guess("1+3=1+3").unwrap() {
//!     Submission::Accepted { feedback, .. } => {
//!         println!("Feedback: {}", feedback.to_emoji());
//!     }
//!     Submission::Rejected(outcome) => println!("Invalid: {outcome}"),
//! }
//! ```

// Core domain types
pub mod core;

// Game state and turn protocol
pub mod game;

// Equation corpus
pub mod equations;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
