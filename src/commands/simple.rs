//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI

use crate::core::Equation;
use crate::equations::loader::pick_secret;
use crate::game::{Game, Status, Submission};
use crate::output::{print_board, print_keyboard, print_rejection};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(pool: &[Equation], secret: Equation, max_attempts: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Numberle - Guess the Equation                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find the hidden 7-character equation, e.g. 7/1=2+5");
    println!("After each guess the board shows:\n");
    println!("  - green: symbol in the correct position");
    println!("  - yellow: symbol in the equation, wrong position");
    println!("  - gray: symbol not in the equation\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'reveal' to give up\n");

    let mut game = Game::with_max_attempts(secret, max_attempts);

    loop {
        print_board(&game.snapshot());
        print_keyboard(game.keyboard());

        if game.is_over() {
            match game.status() {
                Status::Won => print_victory(game.history().len()),
                Status::Lost => {
                    println!(
                        "\n{} The equation was {}\n",
                        "Out of attempts!".red().bold(),
                        game.secret().text().bright_white().bold()
                    );
                }
                Status::InProgress => unreachable!("game is over"),
            }

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    game.reset(next_secret(pool, game.secret()));
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        println!(
            "Turn {}: {} attempts remaining",
            game.history().len() + 1,
            game.remaining_attempts()
        );

        let input = get_user_input("Enter your guess")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.reset(next_secret(pool, game.secret()));
                println!("\n🔄 New game started!\n");
                continue;
            }
            "reveal" => {
                println!(
                    "\nThe equation is {}\n",
                    game.secret().text().bright_white().bold()
                );
                continue;
            }
            _ => {}
        }

        match game.submit_guess(&input) {
            Ok(Submission::Rejected(outcome)) => {
                print_rejection(outcome);
            }
            Ok(Submission::Accepted { .. }) | Err(_) => {}
        }
    }
}

/// Pick a fresh secret, falling back to the current one for an empty pool
fn next_secret(pool: &[Equation], current: &Equation) -> Equation {
    pick_secret(pool).unwrap_or(current).clone()
}

fn print_victory(attempts_used: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  E Q U A T I O N   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match attempts_used {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solution found in {} {}",
        attempts_used.to_string().bright_cyan().bold(),
        if attempts_used == 1 { "guess" } else { "guesses" }
    );
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
