//! Equation corpus loading utilities
//!
//! Provides functions to load equation lists from files or use the embedded
//! corpus, and to pick a secret from a loaded pool.

use crate::core::Equation;
use std::fs;
use std::io;
use std::path::Path;

/// Load equations from a file
///
/// Returns a vector of valid `Equation` instances, skipping any lines that
/// do not validate. Use `numberle corpus <path>` to see which lines were
/// skipped and why.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use numberle::equations::loader::load_from_file;
///
/// let pool = load_from_file("data/equations.txt").unwrap();
/// println!("Loaded {} equations", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Equation>> {
    let content = fs::read_to_string(path)?;

    let equations = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Equation::new(trimmed).ok()
            }
        })
        .collect();

    Ok(equations)
}

/// Convert the embedded string slice to an `Equation` vector
///
/// # Examples
/// ```
/// use numberle::equations::loader::equations_from_slice;
/// use numberle::equations::EQUATIONS;
///
/// let pool = equations_from_slice(EQUATIONS);
/// assert_eq!(pool.len(), EQUATIONS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Vec<Equation> {
    slice.iter().filter_map(|&s| Equation::new(s).ok()).collect()
}

/// Pick a random secret from a pool
///
/// Returns `None` when the pool is empty.
#[must_use]
pub fn pick_secret(pool: &[Equation]) -> Option<&Equation> {
    use rand::prelude::IndexedRandom;

    pool.choose(&mut rand::rng())
}
