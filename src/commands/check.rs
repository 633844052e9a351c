//! Check command: validate one candidate equation
//!
//! Runs the same validator the game uses and prints the outcome, with the
//! evaluated side values when the candidate is well formed.

use crate::core::{Equation, ValidationOutcome, eval};
use colored::Colorize;

/// Validate a candidate equation and print the verdict
///
/// Returns the validation outcome so the caller can map it to an exit code.
pub fn run_check(candidate: &str) -> ValidationOutcome {
    let outcome = Equation::validate(candidate);

    match outcome {
        ValidationOutcome::Valid => {
            let cleaned: String = candidate.split_whitespace().collect();
            let mut sides = cleaned.split('=');
            let left = sides.next().unwrap_or("");
            let right = sides.next().unwrap_or("");

            println!(
                "{} {} is valid",
                "✓".green().bold(),
                cleaned.bright_white().bold()
            );
            if let (Ok(left_value), Ok(right_value)) = (eval::evaluate(left), eval::evaluate(right))
            {
                println!("  {left} = {left_value}");
                println!("  {right} = {right_value}");
            }
        }
        outcome => {
            println!("{} {candidate}: {outcome}", "✗".red().bold());
        }
    }

    outcome
}
