//! Main solve pipeline
//!
//! `Solver` borrows the dictionary and runs parse, length filter, predicate
//! pass, and collection for each request. Every call builds a fresh report;
//! nothing is accumulated between requests.

use super::collector::{DEFAULT_RESULT_CAP, SolveStatus, collect_unique};
use super::filter::filter_by_length;
use super::predicate;
use super::sort::SortOrder;
use crate::core::{MatchMode, Pattern, PatternError, Word};
use rayon::prelude::*;

/// Per-request matching configuration
///
/// Replaces ambient UI state: callers say explicitly, per request, whether
/// sub-anagram (Scrabble) matching is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Accept words using only a subset of the pattern's letters
    pub allow_subset: bool,
}

/// Result of one solve request
///
/// Holds the normalized pattern, the mode it resolved to, the unique matches
/// in collection order, and how collection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pattern: String,
    mode: MatchMode,
    words: Vec<String>,
    status: SolveStatus,
}

impl SolveReport {
    /// The normalized pattern this report answers
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The mode the pattern resolved to
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The matched words, unique, in collection order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// How collection ended
    #[inline]
    #[must_use]
    pub const fn status(&self) -> SolveStatus {
        self.status
    }

    /// Number of matched words
    #[inline]
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.words.len()
    }

    /// Whether the result cap cut the match list short
    #[inline]
    #[must_use]
    pub const fn is_capped(&self) -> bool {
        matches!(self.status, SolveStatus::CapReached)
    }

    /// Reorder the matched words in place
    ///
    /// Matching is not re-run; only the held list moves.
    pub fn sort(&mut self, order: SortOrder) {
        order.apply(&mut self.words);
    }
}

/// Dictionary word finder
///
/// Borrows an immutable dictionary; one instance serves any number of
/// sequential requests.
pub struct Solver<'a> {
    dictionary: &'a [Word],
    result_cap: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver over a dictionary with the default result cap
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            result_cap: DEFAULT_RESULT_CAP,
        }
    }

    /// Override the result cap
    #[must_use]
    pub const fn with_result_cap(mut self, cap: usize) -> Self {
        self.result_cap = cap;
        self
    }

    /// The configured result cap
    #[inline]
    #[must_use]
    pub const fn result_cap(&self) -> usize {
        self.result_cap
    }

    /// The dictionary this solver searches
    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Solve one query
    ///
    /// Parses the query into a pattern, length-filters the dictionary, runs
    /// the mode's predicate over the candidates in parallel, and collects
    /// unique matches up to the cap. Candidate order is preserved
    /// throughout, so results arrive in dictionary order.
    ///
    /// # Errors
    /// Returns `PatternError` if the query contains invalid characters or
    /// combines subset matching with wildcards. An empty query is not an
    /// error; it yields zero matches.
    ///
    /// # Examples
    /// ```
    /// use anagrams::core::Word;
    /// use anagrams::solver::{SolveOptions, Solver};
    ///
    /// let dictionary = vec![
    ///     Word::new("listen").unwrap(),
    ///     Word::new("silent").unwrap(),
    ///     Word::new("stones").unwrap(),
    /// ];
    /// let solver = Solver::new(&dictionary);
    ///
    /// let report = solver.solve("listen", SolveOptions::default()).unwrap();
    /// assert_eq!(report.words(), ["listen", "silent"]);
    /// assert_eq!(report.match_count(), 2);
    /// ```
    pub fn solve(&self, query: &str, options: SolveOptions) -> Result<SolveReport, PatternError> {
        let pattern = Pattern::parse(query, options.allow_subset)?;

        let candidates = filter_by_length(self.dictionary, &pattern);

        // Predicate pass in parallel; rayon's ordered collect keeps
        // candidates in dictionary order
        let matched: Vec<&Word> = candidates
            .into_par_iter()
            .filter(|word| predicate::matches(&pattern, word))
            .collect();

        let (words, status) = collect_unique(matched, self.result_cap);

        Ok(SolveReport {
            pattern: pattern.text().to_string(),
            mode: pattern.mode(),
            words,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(entries: &[&str]) -> Vec<Word> {
        entries.iter().map(|e| Word::new(*e).unwrap()).collect()
    }

    #[test]
    fn complete_mode_finds_anagrams() {
        let dict = dictionary(&["cat", "act", "tac", "dog"]);
        let solver = Solver::new(&dict);

        let report = solver.solve("cat", SolveOptions::default()).unwrap();
        assert_eq!(report.mode(), MatchMode::Complete);
        assert_eq!(report.words(), ["cat", "act", "tac"]);
        assert_eq!(report.match_count(), 3);
        assert_eq!(report.status(), SolveStatus::DictionaryExhausted);
    }

    #[test]
    fn missing_letters_mode_fills_wildcards() {
        let dict = dictionary(&["cat", "cot", "bat", "cut"]);
        let solver = Solver::new(&dict);

        let report = solver.solve("c+t", SolveOptions::default()).unwrap();
        assert_eq!(report.mode(), MatchMode::MissingLetters);
        assert_eq!(report.words(), ["cat", "cot", "cut"]);
    }

    #[test]
    fn crossword_mode_matches_positionally() {
        let dict = dictionary(&["cat", "cot", "cup", "bat"]);
        let solver = Solver::new(&dict);

        let report = solver.solve("c.t", SolveOptions::default()).unwrap();
        assert_eq!(report.mode(), MatchMode::Crossword);
        assert_eq!(report.words(), ["cat", "cot"]);
    }

    #[test]
    fn scrabble_mode_accepts_subsets() {
        let dict = dictionary(&["at", "ca", "cat", "cats"]);
        let solver = Solver::new(&dict);

        let options = SolveOptions { allow_subset: true };
        let report = solver.solve("cat", options).unwrap();
        assert_eq!(report.mode(), MatchMode::Scrabble);
        assert_eq!(report.words(), ["at", "ca", "cat"]);
    }

    #[test]
    fn subset_with_wildcard_is_rejected() {
        let dict = dictionary(&["cat"]);
        let solver = Solver::new(&dict);

        let options = SolveOptions { allow_subset: true };
        assert_eq!(
            solver.solve("c+t", options),
            Err(PatternError::IncompatibleOptions)
        );
        assert_eq!(
            solver.solve("c.t", options),
            Err(PatternError::IncompatibleOptions)
        );
    }

    #[test]
    fn invalid_character_is_rejected() {
        let dict = dictionary(&["cat"]);
        let solver = Solver::new(&dict);

        assert_eq!(
            solver.solve("ca#", SolveOptions::default()),
            Err(PatternError::InvalidCharacter('#'))
        );
    }

    #[test]
    fn empty_query_yields_no_matches() {
        let dict = dictionary(&["cat", "dog"]);
        let solver = Solver::new(&dict);

        let report = solver.solve("", SolveOptions::default()).unwrap();
        assert_eq!(report.match_count(), 0);
        assert_eq!(report.status(), SolveStatus::DictionaryExhausted);
    }

    #[test]
    fn empty_dictionary_yields_no_matches() {
        let dict: Vec<Word> = Vec::new();
        let solver = Solver::new(&dict);

        let report = solver.solve("cat", SolveOptions::default()).unwrap();
        assert_eq!(report.match_count(), 0);
    }

    #[test]
    fn solve_is_idempotent() {
        let dict = dictionary(&["stop", "pots", "tops", "spot", "opts"]);
        let solver = Solver::new(&dict);

        let first = solver.solve("stop", SolveOptions::default()).unwrap();
        let second = solver.solve("stop", SolveOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_dictionary_entries_collapse() {
        let dict = dictionary(&["cat", "act", "cat"]);
        let solver = Solver::new(&dict);

        let report = solver.solve("cat", SolveOptions::default()).unwrap();
        assert_eq!(report.words(), ["cat", "act"]);
    }

    #[test]
    fn cap_truncates_and_flags() {
        let dict = dictionary(&["stop", "pots", "tops", "spot", "opts"]);
        let solver = Solver::new(&dict).with_result_cap(3);

        let report = solver.solve("post", SolveOptions::default()).unwrap();
        assert_eq!(report.words(), ["stop", "pots", "tops"]);
        assert!(report.is_capped());
        assert_eq!(report.status(), SolveStatus::CapReached);
    }

    #[test]
    fn results_arrive_in_dictionary_order() {
        let dict = dictionary(&["tops", "spot", "opts", "pots", "stop"]);
        let solver = Solver::new(&dict);

        let report = solver.solve("post", SolveOptions::default()).unwrap();
        assert_eq!(report.words(), ["tops", "spot", "opts", "pots", "stop"]);
    }

    #[test]
    fn report_sort_reorders_in_place() {
        let dict = dictionary(&["tops", "spot", "opts", "pots", "stop"]);
        let solver = Solver::new(&dict);

        let mut report = solver.solve("post", SolveOptions::default()).unwrap();
        report.sort(SortOrder::LexAsc);
        assert_eq!(report.words(), ["opts", "pots", "spot", "stop", "tops"]);
        assert_eq!(report.match_count(), 5);
    }

    #[test]
    fn query_is_normalized_before_matching() {
        let dict = dictionary(&["cat", "act"]);
        let solver = Solver::new(&dict);

        let report = solver.solve("  CAT  ", SolveOptions::default()).unwrap();
        assert_eq!(report.pattern(), "cat");
        assert_eq!(report.match_count(), 2);
    }
}
