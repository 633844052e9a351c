//! Guess feedback calculation and representation
//!
//! Feedback for one guess is encoded in base 3:
//! - 0 = Absent (symbol not in the target)
//! - 1 = Present (symbol in the target, wrong position)
//! - 2 = Correct (symbol in the correct position)
//!
//! The row is stored as a single u16 value (0-2186), where each position
//! contributes digit × 3^position to the total.

use crate::core::equation::Equation;
use crate::core::symbol::Verdict;

/// Verdict row for one scored guess
///
/// Represents the per-position feedback as a single packed value.
/// Value range: 0-2186 (3^7 - 1 = 2187 possible rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u16);

impl Feedback {
    /// All correct (winning guess)
    pub const PERFECT: Self = Self(2186); // sum of 2×3^i for i in 0..7

    /// Create feedback from a raw packed value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 2187
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        debug_assert!(value < 2187, "Feedback value must be < 3^7");
        Self(value)
    }

    /// Get the raw packed value (0-2186)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if every position is correct (the guess won)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 2186
    }

    /// Score a guess against the target equation
    ///
    /// Positional matches are `Correct`; a symbol that occurs nowhere in the
    /// target is `Absent`; anything else is `Present`. Presence is decided
    /// against the whole target, not a depleting pool, so a repeated symbol
    /// in the guess can be marked `Present` for every copy even when the
    /// target holds it only once. Deliberate: the rule is per-position
    /// containment, pinned by tests.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Equation, Feedback};
    ///
    /// let guess = Equation::new("3+1=3+1").unwrap();
    /// let target = Equation::new("1+3=1+3").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // 3(present) +(correct) 1(present) =(correct) 3(present) +(correct) 1(present)
    /// // 1 + 2×3 + 1×9 + 2×27 + 1×81 + 2×243 + 1×729 = 1366
    /// assert_eq!(feedback.value(), 1366);
    /// assert!(!feedback.is_perfect());
    /// ```
    #[must_use]
    pub fn score(guess: &Equation, target: &Equation) -> Self {
        let mut value = 0u16;
        let mut multiplier = 1u16;

        for position in 0..Equation::LENGTH {
            let symbol = guess.symbol_at(position);

            let verdict = if target.symbol_at(position) == symbol {
                Verdict::Correct
            } else if target.contains(symbol) {
                Verdict::Present
            } else {
                Verdict::Absent
            };

            value += verdict.trit() * multiplier;
            multiplier *= 3;
        }

        Self(value)
    }

    /// The verdict at a specific position (0-6)
    #[must_use]
    pub const fn verdict_at(self, position: usize) -> Verdict {
        debug_assert!(position < Equation::LENGTH);
        Verdict::from_trit((self.0 / 3u16.pow(position as u32)) % 3)
    }

    /// Unpack the row into a verdict array
    #[must_use]
    pub fn verdicts(self) -> [Verdict; Equation::LENGTH] {
        let mut result = [Verdict::Absent; Equation::LENGTH];
        let mut value = self.0;

        for verdict in &mut result {
            *verdict = Verdict::from_trit(value % 3);
            value /= 3;
        }

        result
    }

    /// Count the positions marked `Correct`
    #[must_use]
    pub fn count_correct(self) -> u8 {
        let mut count = 0;
        let mut value = self.0;

        for _ in 0..Equation::LENGTH {
            if value % 3 == 2 {
                count += 1;
            }
            value /= 3;
        }

        count
    }

    /// Count the positions marked `Present`
    #[must_use]
    pub fn count_present(self) -> u8 {
        let mut count = 0;
        let mut value = self.0;

        for _ in 0..Equation::LENGTH {
            if value % 3 == 1 {
                count += 1;
            }
            value /= 3;
        }

        count
    }

    /// Convert the row to an emoji string like `"🟩🟧⬜🟩🟧⬜🟩"`
    #[must_use]
    pub fn to_emoji(self) -> String {
        let mut result = String::with_capacity(4 * Equation::LENGTH);
        let mut value = self.0;

        for _ in 0..Equation::LENGTH {
            result.push(match value % 3 {
                2 => '🟩', // Correct
                1 => '🟧', // Present
                _ => '⬜', // Absent
            });
            value /= 3;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equation(text: &str) -> Equation {
        Equation::new(text).unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert_eq!(Feedback::PERFECT.value(), 2186);
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_correct(), 7);
        assert_eq!(Feedback::PERFECT.count_present(), 0);
    }

    #[test]
    fn score_identical_equations() {
        let target = equation("1+3=1+3");
        let feedback = Feedback::score(&target, &target);

        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.verdicts().iter().all(|&v| v == Verdict::Correct));
    }

    #[test]
    fn score_rearranged_symbols() {
        let guess = equation("3+1=3+1");
        let target = equation("1+3=1+3");
        let feedback = Feedback::score(&guess, &target);

        // P C P C P C P
        assert_eq!(feedback.value(), 1366);
        assert_eq!(
            feedback.verdicts(),
            [
                Verdict::Present,
                Verdict::Correct,
                Verdict::Present,
                Verdict::Correct,
                Verdict::Present,
                Verdict::Correct,
                Verdict::Present,
            ]
        );
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn score_absent_symbols() {
        let guess = equation("2+4=6-0");
        let target = equation("1+3=1+3");
        let feedback = Feedback::score(&guess, &target);

        // A C A C A A A: only the + and = line up; 2, 4, 6, -, 0 are absent
        assert_eq!(feedback.value(), 60);
        assert_eq!(feedback.count_correct(), 2);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn score_mixed_row() {
        let guess = equation("7/1=2+5");
        let target = equation("1+3=1+3");
        let feedback = Feedback::score(&guess, &target);

        // A A P C A C A
        assert_eq!(feedback.value(), 549);
        assert_eq!(feedback.count_correct(), 2);
        assert_eq!(feedback.count_present(), 1);
    }

    #[test]
    fn score_repeated_symbol_over_credit() {
        // Presence is checked against the whole target, not a depleting
        // count: both unmatched 1s in the guess are marked Present even
        // though every 1 in the target is already matched in place.
        let guess = equation("1+1=1+1");
        let target = equation("1+3=1+3");
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.value(), 1448);
        assert_eq!(feedback.verdict_at(2), Verdict::Present);
        assert_eq!(feedback.verdict_at(6), Verdict::Present);
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.count_present(), 2);
    }

    #[test]
    fn verdict_at_matches_verdicts() {
        let guess = equation("6*2=3*4");
        let target = equation("1+3=1+3");
        let feedback = Feedback::score(&guess, &target);

        let verdicts = feedback.verdicts();
        for (position, &verdict) in verdicts.iter().enumerate() {
            assert_eq!(feedback.verdict_at(position), verdict);
        }
    }

    #[test]
    fn feedback_to_emoji() {
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩🟩🟩");
        assert_eq!(Feedback::new(0).to_emoji(), "⬜⬜⬜⬜⬜⬜⬜");

        let guess = equation("3+1=3+1");
        let target = equation("1+3=1+3");
        let feedback = Feedback::score(&guess, &target);
        assert_eq!(feedback.to_emoji(), "🟧🟩🟧🟩🟧🟩🟧");
    }

    #[test]
    fn score_symmetry_on_self() {
        for text in ["1+3=1+3", "7/1=2+5", "43*2=86", "46=2*23"] {
            let target = equation(text);
            assert_eq!(Feedback::score(&target, &target), Feedback::PERFECT);
        }
    }
}
