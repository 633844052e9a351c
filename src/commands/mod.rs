//! Command implementations

pub mod check;
pub mod corpus;
pub mod simple;

pub use check::run_check;
pub use corpus::{CorpusReport, print_corpus_report, verify_corpus};
pub use simple::run_simple;
