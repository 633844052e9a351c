//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_rejection};
