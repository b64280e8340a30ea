//! Batch file processing
//!
//! Solves every pattern listed in a file, one per line. Blank lines and
//! `#` comments are skipped. Individual pattern errors are recorded per
//! line rather than aborting the run; only failing to read the file at all
//! is fatal.

use crate::core::PatternError;
use crate::solver::{SolveOptions, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// One line's outcome in a batch run
#[derive(Debug, Clone)]
pub struct BatchLine {
    pub line_number: usize,
    pub pattern: String,
    /// Match count on success, the parse failure otherwise
    pub outcome: Result<usize, PatternError>,
}

/// Aggregate result of a batch run
#[derive(Debug)]
pub struct BatchReport {
    pub lines: Vec<BatchLine>,
    pub total_matches: usize,
    pub error_count: usize,
    pub duration: Duration,
}

/// Solve every pattern in `path`
///
/// # Errors
///
/// Returns an I/O error if the pattern file cannot be read.
pub fn run_batch<P: AsRef<Path>>(
    path: P,
    solver: &Solver<'_>,
    allow_subset: bool,
) -> io::Result<BatchReport> {
    let content = fs::read_to_string(path)?;

    let patterns: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    // Progress bar
    let pb = ProgressBar::new(patterns.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let options = SolveOptions { allow_subset };
    let started = Instant::now();

    let mut lines = Vec::with_capacity(patterns.len());
    let mut total_matches = 0;
    let mut error_count = 0;

    for (line_number, pattern) in patterns {
        let outcome = match solver.solve(pattern, options) {
            Ok(report) => {
                total_matches += report.match_count();
                Ok(report.match_count())
            }
            Err(e) => {
                error_count += 1;
                Err(e)
            }
        };

        lines.push(BatchLine {
            line_number,
            pattern: pattern.to_string(),
            outcome,
        });
        pb.set_message(pattern.to_string());
        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(BatchReport {
        lines,
        total_matches,
        error_count,
        duration: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::path::PathBuf;

    fn dictionary(entries: &[&str]) -> Vec<Word> {
        entries.iter().map(|e| Word::new(*e).unwrap()).collect()
    }

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let file_name = format!("anagrams-batch-{}-{name}", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn batch_solves_each_line() {
        let dict = dictionary(&["cat", "act", "cot", "dog"]);
        let solver = Solver::new(&dict);

        let path = scratch_file("basic.txt", "cat\nc.t\n");
        let report = run_batch(&path, &solver, false).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].outcome, Ok(2)); // cat, act
        assert_eq!(report.lines[1].outcome, Ok(2)); // cat, cot
        assert_eq!(report.total_matches, 4);
        assert_eq!(report.error_count, 0);
    }

    #[test]
    fn batch_skips_comments_and_blanks() {
        let dict = dictionary(&["cat", "act"]);
        let solver = Solver::new(&dict);

        let path = scratch_file("comments.txt", "# header\n\ncat\n   \n# trailing\n");
        let report = run_batch(&path, &solver, false).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].line_number, 3);
        assert_eq!(report.lines[0].pattern, "cat");
    }

    #[test]
    fn batch_records_pattern_errors_per_line() {
        let dict = dictionary(&["cat", "act"]);
        let solver = Solver::new(&dict);

        let path = scratch_file("errors.txt", "cat\nca7\nact\n");
        let report = run_batch(&path, &solver, false).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(report.lines.len(), 3);
        assert!(report.lines[0].outcome.is_ok());
        assert_eq!(
            report.lines[1].outcome,
            Err(PatternError::InvalidCharacter('7'))
        );
        assert!(report.lines[2].outcome.is_ok());
        assert_eq!(report.error_count, 1);
    }

    #[test]
    fn batch_missing_file_is_an_error() {
        let dict = dictionary(&["cat"]);
        let solver = Solver::new(&dict);

        let path = std::env::temp_dir().join("anagrams-no-such-batch.txt");
        assert!(run_batch(&path, &solver, false).is_err());
    }
}
