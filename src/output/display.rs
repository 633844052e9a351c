//! Terminal display for the plain CLI game

use crate::core::{SymbolFeedback, ValidationOutcome};
use crate::game::Snapshot;
use crate::output::formatters::{attempt_row, empty_row, keyboard_rows};
use colored::Colorize;

/// Print the game board: accepted guesses first, then unused rows
pub fn print_board(snapshot: &Snapshot) {
    println!();
    for attempt in snapshot.attempts() {
        println!("  {}", attempt_row(attempt));
    }
    for _ in 0..snapshot.remaining_attempts() {
        println!("  {}", empty_row());
    }
    println!();
}

/// Print the keyboard hint rows
pub fn print_keyboard(keyboard: &SymbolFeedback) {
    let [digits, operators] = keyboard_rows(keyboard);
    println!("  {digits}");
    println!("  {operators}");
    println!();
}

/// Print why a guess was rejected
pub fn print_rejection(outcome: ValidationOutcome) {
    println!("{} {outcome}", "✗".red().bold());
}
