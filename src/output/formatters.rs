//! Formatting utilities for terminal output

use crate::core::{Symbol, SymbolFeedback, Verdict};
use crate::game::Attempt;
use colored::Colorize;

/// Render one symbol cell colored by its verdict
#[must_use]
pub fn verdict_cell(symbol: Symbol, verdict: Verdict) -> String {
    let cell = format!(" {symbol} ");
    match verdict {
        Verdict::Correct => cell.black().on_green().bold().to_string(),
        Verdict::Present => cell.black().on_yellow().bold().to_string(),
        Verdict::Absent => cell.white().on_bright_black().to_string(),
    }
}

/// Render one accepted guess as a colored board row
#[must_use]
pub fn attempt_row(attempt: &Attempt) -> String {
    attempt
        .guess()
        .symbols()
        .iter()
        .zip(attempt.feedback().verdicts())
        .map(|(&symbol, verdict)| verdict_cell(symbol, verdict))
        .collect()
}

/// Render an unused board row
#[must_use]
pub fn empty_row() -> String {
    " · ".repeat(crate::core::Equation::LENGTH)
        .bright_black()
        .to_string()
}

/// Render the keyboard as two rows: digits, then operators
///
/// Symbols keep their plain color until they appear in an accepted guess.
#[must_use]
pub fn keyboard_rows(keyboard: &SymbolFeedback) -> [String; 2] {
    let render = |symbols: &[Symbol]| -> String {
        symbols
            .iter()
            .map(|&symbol| match keyboard.verdict(symbol) {
                Some(verdict) => verdict_cell(symbol, verdict),
                None => format!(" {symbol} "),
            })
            .collect()
    };

    let (digits, operators) = Symbol::ALL.split_at(10);
    [render(digits), render(operators)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Equation;
    use crate::game::Game;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match c {
                '\x1b' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if !in_escape => out.push(c),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn attempt_row_shows_all_symbols() {
        let mut game = Game::new(Equation::new("1+3=1+3").unwrap());
        game.submit_guess("3+1=3+1").unwrap();

        let row = strip_ansi(&attempt_row(&game.history()[0]));
        assert_eq!(row, " 3  +  1  =  3  +  1 ");
    }

    #[test]
    fn empty_row_spans_seven_cells() {
        let row = strip_ansi(&empty_row());
        assert_eq!(row.matches('·').count(), 7);
    }

    #[test]
    fn keyboard_rows_cover_all_symbols() {
        let keyboard = SymbolFeedback::new();
        let [digits, operators] = keyboard_rows(&keyboard);

        for symbol in "0123456789".chars() {
            assert!(digits.contains(symbol), "digit row missing {symbol}");
        }
        for symbol in "+-*/=".chars() {
            assert!(operators.contains(symbol), "operator row missing {symbol}");
        }
    }
}
