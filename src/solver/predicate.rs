//! The four matching predicates
//!
//! Each predicate is a pure function of a pattern and a candidate word.
//! Callers are expected to have length-filtered candidates already; the
//! predicates still hold without that, they just reject more slowly.

use crate::core::{MatchMode, Pattern, Word};

/// Check a candidate against the pattern under the pattern's mode
#[inline]
#[must_use]
pub fn matches(pattern: &Pattern, word: &Word) -> bool {
    match pattern.mode() {
        MatchMode::Complete => matches_complete(pattern, word),
        MatchMode::MissingLetters => matches_missing_letters(pattern, word),
        MatchMode::Crossword => matches_crossword(pattern, word),
        MatchMode::Scrabble => matches_subset(pattern, word),
    }
}

/// Exact anagram: the word uses the pattern's letters exactly once each
///
/// Realized as letter-multiset equality, which also enforces equal length.
#[must_use]
pub fn matches_complete(pattern: &Pattern, word: &Word) -> bool {
    word.letter_counts() == pattern.letter_counts()
}

/// Every non-`+` pattern character must occur somewhere in the word
///
/// Presence only: duplicate pattern letters do not demand duplicate word
/// letters. A non-letter character such as `.` can never be present in a
/// word, so patterns mixing `+` and `.` match nothing.
#[must_use]
pub fn matches_missing_letters(pattern: &Pattern, word: &Word) -> bool {
    pattern
        .text()
        .bytes()
        .filter(|&b| b != b'+')
        .all(|b| word.has_letter(b))
}

/// Positional match: each pattern character is `.` or equals the word's
/// letter at that position
#[must_use]
pub fn matches_crossword(pattern: &Pattern, word: &Word) -> bool {
    if word.len() != pattern.len() {
        return false;
    }
    pattern
        .text()
        .bytes()
        .zip(word.text().bytes())
        .all(|(p, w)| p == b'.' || p == w)
}

/// Sub-anagram: the word's letter multiset fits inside the pattern's
#[must_use]
pub fn matches_subset(pattern: &Pattern, word: &Word) -> bool {
    word.letter_counts()
        .iter()
        .all(|(&letter, &count)| count <= pattern.count_of(letter))
}
