//! Game state and turn protocol

mod state;

pub use state::{Attempt, Game, GameOverError, MAX_ATTEMPTS, Snapshot, Status, Submission};
