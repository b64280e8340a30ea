//! One-shot solve command
//!
//! Runs a single query against the dictionary and times it.

use crate::core::PatternError;
use crate::solver::{SolveOptions, SolveReport, Solver, SortOrder};
use std::time::{Duration, Instant};

/// Configuration for a one-shot solve
pub struct SolveRequest {
    pub query: String,
    pub allow_subset: bool,
    pub sort: Option<SortOrder>,
}

impl SolveRequest {
    #[must_use]
    pub const fn new(query: String) -> Self {
        Self {
            query,
            allow_subset: false,
            sort: None,
        }
    }
}

/// Result of a one-shot solve
pub struct SolveOutcome {
    pub report: SolveReport,
    pub duration: Duration,
}

/// Solve one query, optionally reordering the results
///
/// # Errors
///
/// Returns a `PatternError` if the query fails to parse or combines subset
/// matching with wildcards.
pub fn run_solve(
    request: &SolveRequest,
    solver: &Solver<'_>,
) -> Result<SolveOutcome, PatternError> {
    let started = Instant::now();

    let mut report = solver.solve(
        &request.query,
        SolveOptions {
            allow_subset: request.allow_subset,
        },
    )?;

    if let Some(order) = request.sort {
        report.sort(order);
    }

    Ok(SolveOutcome {
        report,
        duration: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn dictionary(entries: &[&str]) -> Vec<Word> {
        entries.iter().map(|e| Word::new(*e).unwrap()).collect()
    }

    #[test]
    fn run_solve_returns_matches() {
        let dict = dictionary(&["stop", "pots", "tops"]);
        let solver = Solver::new(&dict);

        let request = SolveRequest::new("post".to_string());
        let outcome = run_solve(&request, &solver).unwrap();

        assert_eq!(outcome.report.words(), ["stop", "pots", "tops"]);
    }

    #[test]
    fn run_solve_applies_sort() {
        let dict = dictionary(&["stop", "pots", "tops"]);
        let solver = Solver::new(&dict);

        let mut request = SolveRequest::new("post".to_string());
        request.sort = Some(SortOrder::LexAsc);
        let outcome = run_solve(&request, &solver).unwrap();

        assert_eq!(outcome.report.words(), ["pots", "stop", "tops"]);
    }

    #[test]
    fn run_solve_respects_subset_flag() {
        let dict = dictionary(&["at", "cat", "cats"]);
        let solver = Solver::new(&dict);

        let mut request = SolveRequest::new("cat".to_string());
        request.allow_subset = true;
        let outcome = run_solve(&request, &solver).unwrap();

        assert_eq!(outcome.report.words(), ["at", "cat"]);
    }

    #[test]
    fn run_solve_propagates_pattern_errors() {
        let dict = dictionary(&["cat"]);
        let solver = Solver::new(&dict);

        let mut request = SolveRequest::new("c.t".to_string());
        request.allow_subset = true;

        assert!(matches!(
            run_solve(&request, &solver),
            Err(PatternError::IncompatibleOptions)
        ));
    }
}
