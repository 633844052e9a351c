//! Equation representation and validation
//!
//! An Equation stores a validated 7-character equation along with symbol
//! position indices for feedback calculation.

use crate::core::eval::{self, EvalError};
use crate::core::symbol::Symbol;
use rustc_hash::FxHashMap;
use std::fmt;

/// Result of validating a candidate equation string
///
/// Exactly one outcome per call; checks run in variant order, so the first
/// failed check decides the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Length is not exactly 7 after whitespace removal
    TooShort,
    /// No `=`, or the first or last character is not a digit
    MalformedBoundary,
    /// Two adjacent non-digits, a character outside the equation alphabet,
    /// or a side that does not tokenize to a single value
    IllegalAdjacency,
    /// Both sides evaluate, but to different values
    UnbalancedSides,
    /// The string is a well-formed, balanced equation
    Valid,
}

impl ValidationOutcome {
    /// Whether the outcome is [`Valid`](Self::Valid)
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "equation must have exactly 7 characters"),
            Self::MalformedBoundary => {
                write!(f, "equation must contain '=' and start and end with a digit")
            }
            Self::IllegalAdjacency => write!(f, "equation is not a well-formed expression"),
            Self::UnbalancedSides => write!(f, "the left side does not equal the right side"),
            Self::Valid => write!(f, "equation is valid"),
        }
    }
}

impl std::error::Error for ValidationOutcome {}

/// A validated 7-character equation
///
/// Valid by construction: every `Equation` value has passed
/// [`Equation::validate`], so its sides are guaranteed to evaluate and
/// balance. Stores the symbols and a position map for feedback calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    text: String,
    symbols: [Symbol; Self::LENGTH],
    positions: FxHashMap<Symbol, Vec<usize>>,
}

impl Equation {
    /// Equation length in characters
    pub const LENGTH: usize = 7;

    /// Create an `Equation` from a string, validating it first
    ///
    /// Whitespace is stripped before validation, matching user input
    /// handling.
    ///
    /// # Errors
    /// Returns the failing [`ValidationOutcome`] (never
    /// [`ValidationOutcome::Valid`]) if the string does not validate.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Equation;
    ///
    /// let equation = Equation::new("7/1=2+5").unwrap();
    /// assert_eq!(equation.text(), "7/1=2+5");
    ///
    /// assert!(Equation::new("1+2=3+4").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationOutcome> {
        let cleaned: String = text.into().split_whitespace().collect();

        match Self::validate(&cleaned) {
            ValidationOutcome::Valid => {}
            outcome => return Err(outcome),
        }

        // validate() guarantees length and alphabet
        let mut symbols = [Symbol::Equals; Self::LENGTH];
        for (i, c) in cleaned.chars().enumerate() {
            symbols[i] = Symbol::from_char(c).expect("alphabet already validated");
        }

        let mut positions: FxHashMap<Symbol, Vec<usize>> = FxHashMap::default();
        for (i, &symbol) in symbols.iter().enumerate() {
            positions.entry(symbol).or_default().push(i);
        }

        Ok(Self {
            text: cleaned,
            symbols,
            positions,
        })
    }

    /// Validate a candidate equation string
    ///
    /// Pure function: no state is read or written, and calling it twice on
    /// the same input yields the same outcome. Checks run in order: length,
    /// boundary, adjacency/alphabet, then arithmetic balance.
    ///
    /// When a string contains more than one `=`, only the first two
    /// `=`-separated sides are compared; `1=1=111` is therefore `Valid`.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Equation, ValidationOutcome};
    ///
    /// assert_eq!(Equation::validate("1+3=1+3"), ValidationOutcome::Valid);
    /// assert_eq!(Equation::validate("7*8=56"), ValidationOutcome::TooShort);
    /// assert_eq!(Equation::validate("1+2=3+4"), ValidationOutcome::UnbalancedSides);
    /// ```
    #[must_use]
    pub fn validate(raw: &str) -> ValidationOutcome {
        let cleaned: String = raw.split_whitespace().collect();
        let chars: Vec<char> = cleaned.chars().collect();

        if chars.len() != Self::LENGTH {
            return ValidationOutcome::TooShort;
        }

        if !chars.contains(&'=')
            || !chars[0].is_ascii_digit()
            || !chars[Self::LENGTH - 1].is_ascii_digit()
        {
            return ValidationOutcome::MalformedBoundary;
        }

        if chars.iter().any(|&c| Symbol::from_char(c).is_none()) {
            return ValidationOutcome::IllegalAdjacency;
        }

        for pair in chars.windows(2) {
            if !pair[0].is_ascii_digit() && !pair[1].is_ascii_digit() {
                return ValidationOutcome::IllegalAdjacency;
            }
        }

        let mut sides = cleaned.split('=');
        let left = sides.next().unwrap_or("");
        let right = sides.next().unwrap_or("");

        let left = match eval::evaluate(left) {
            Ok(value) => value,
            Err(error) => return Self::structural_outcome(error),
        };
        let right = match eval::evaluate(right) {
            Ok(value) => value,
            Err(error) => return Self::structural_outcome(error),
        };

        if left == right {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::UnbalancedSides
        }
    }

    /// Evaluator failures inside validation surface as structural outcomes,
    /// never as panics
    const fn structural_outcome(error: EvalError) -> ValidationOutcome {
        match error {
            EvalError::Malformed => ValidationOutcome::IllegalAdjacency,
            EvalError::DivisionByZero => ValidationOutcome::MalformedBoundary,
        }
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation as a symbol array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; Self::LENGTH] {
        &self.symbols
    }

    /// Get the symbol at a specific position (0-6)
    ///
    /// # Panics
    /// Panics if position >= 7
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Symbol {
        self.symbols[position]
    }

    /// Check whether the equation contains a specific symbol anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// Get all positions where a symbol appears
    ///
    /// Returns an empty slice if the symbol does not appear.
    #[inline]
    pub fn positions_of(&self, symbol: Symbol) -> &[usize] {
        self.positions
            .get(&symbol)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Equation {
    type Err = ValidationOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
