//! Corpus verification: batch-validate an equations file
//!
//! The secret source only works if every line of its corpus is a valid
//! equation; this command checks a whole file and reports every line that
//! would be skipped at load time.

use crate::core::{Equation, ValidationOutcome};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;

/// One line that failed validation
#[derive(Debug, Clone)]
pub struct LineFailure {
    pub line_number: usize,
    pub text: String,
    pub outcome: ValidationOutcome,
}

/// Result of verifying a corpus file
#[derive(Debug)]
pub struct CorpusReport {
    pub total: usize,
    pub valid: usize,
    pub failures: Vec<LineFailure>,
}

/// Validate every non-empty line of an equations file
///
/// Lines are validated in parallel; the report lists failures in line order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn verify_corpus<P: AsRef<Path>>(path: P) -> io::Result<CorpusReport> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut failures: Vec<LineFailure> = lines
        .par_iter()
        .filter_map(|&(index, line)| {
            let outcome = Equation::validate(line);
            pb.inc(1);

            if outcome.is_valid() {
                None
            } else {
                Some(LineFailure {
                    line_number: index + 1,
                    text: line.trim().to_string(),
                    outcome,
                })
            }
        })
        .collect();
    pb.finish_and_clear();

    failures.sort_by_key(|failure| failure.line_number);

    Ok(CorpusReport {
        total: lines.len(),
        valid: lines.len() - failures.len(),
        failures,
    })
}

/// Print a corpus verification report
pub fn print_corpus_report(report: &CorpusReport) {
    println!(
        "\nChecked {} equations: {} valid, {} invalid\n",
        report.total,
        report.valid.to_string().green().bold(),
        report.failures.len().to_string().red().bold()
    );

    for failure in &report.failures {
        println!(
            "  line {:>4}: {} — {}",
            failure.line_number,
            failure.text.bright_white(),
            failure.outcome.to_string().red()
        );
    }

    if report.failures.is_empty() {
        println!("{}", "Corpus is ready to use as a secret source.".green());
    } else {
        println!(
            "\n{}",
            "Invalid lines are skipped when the corpus is loaded.".yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_corpus(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn verify_corpus_all_valid() {
        let path = write_temp_corpus("numberle_corpus_valid.txt", "1+3=1+3\n7/1=2+5\n43*2=86\n");
        let report = verify_corpus(&path).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.valid, 3);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn verify_corpus_reports_failures_in_order() {
        let path = write_temp_corpus(
            "numberle_corpus_mixed.txt",
            "1+3=1+3\n1+2=3+4\n\n7*8=56\n2+4=6-0\n",
        );
        let report = verify_corpus(&path).unwrap();

        assert_eq!(report.total, 4); // blank line skipped
        assert_eq!(report.valid, 2);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].line_number, 2);
        assert_eq!(report.failures[0].outcome, ValidationOutcome::UnbalancedSides);
        assert_eq!(report.failures[1].line_number, 4);
        assert_eq!(report.failures[1].outcome, ValidationOutcome::TooShort);
    }

    #[test]
    fn verify_corpus_missing_file() {
        assert!(verify_corpus("/nonexistent/numberle_equations.txt").is_err());
    }
}
