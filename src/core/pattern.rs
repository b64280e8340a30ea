//! Query pattern parsing and mode derivation
//!
//! A pattern is the normalized query string plus the matching mode derived
//! from its content:
//! - `+` anywhere makes it a missing-letters pattern
//! - otherwise `.` anywhere makes it a crossword pattern
//! - otherwise the subset flag selects Scrabble (sub-anagram) matching
//! - otherwise it is a complete anagram pattern
//!
//! `+` takes precedence over `.` when both appear, so a stray `.` inside a
//! missing-letters pattern is treated as a required literal that no
//! letters-only word can satisfy.

use rustc_hash::FxHashMap;
use std::fmt;

/// Matching mode derived from pattern content and the subset flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Word is an exact anagram of the pattern
    Complete,
    /// Every non-`+` pattern letter must occur somewhere in the word
    MissingLetters,
    /// Positional match, `.` accepts any letter
    Crossword,
    /// Word's letters form a sub-multiset of the pattern's letters
    Scrabble,
}

impl MatchMode {
    /// Whether candidates shorter than the pattern can match
    ///
    /// Only Scrabble mode accepts shorter words; the other three require
    /// candidates of exactly the pattern's length.
    #[inline]
    #[must_use]
    pub const fn allows_shorter_words(self) -> bool {
        matches!(self, Self::Scrabble)
    }
}

/// Error type for invalid query patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Subset matching combined with `+` or `.` wildcards
    IncompatibleOptions,
    /// A character outside `a-z`, `+`, `.`
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleOptions => {
                write!(f, "Subset matching cannot be combined with '+' or '.' wildcards")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Pattern contains invalid character {c:?} (allowed: a-z, '+', '.')")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// A parsed query pattern
///
/// Holds the normalized (trimmed, lowercased) text, the derived mode, and a
/// letter-frequency multiset over the non-wildcard characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    mode: MatchMode,
    // Counts are bounded by the pattern's length, same type as len()
    counts: FxHashMap<u8, usize>,
}

impl Pattern {
    /// Parse a query string into a pattern
    ///
    /// The query is trimmed and lowercased first. `allow_subset` is the
    /// per-request Scrabble flag; it only takes effect on wildcard-free
    /// patterns and is rejected otherwise.
    ///
    /// # Errors
    /// Returns `PatternError::IncompatibleOptions` if `allow_subset` is set
    /// and the query contains `+` or `.`, and
    /// `PatternError::InvalidCharacter` for anything outside `a-z`, `+`, `.`.
    ///
    /// # Examples
    /// ```
    /// use anagrams::core::{MatchMode, Pattern};
    ///
    /// let exact = Pattern::parse("Listen", false).unwrap();
    /// assert_eq!(exact.text(), "listen");
    /// assert_eq!(exact.mode(), MatchMode::Complete);
    ///
    /// let crossword = Pattern::parse("c.t", false).unwrap();
    /// assert_eq!(crossword.mode(), MatchMode::Crossword);
    ///
    /// let rack = Pattern::parse("cat", true).unwrap();
    /// assert_eq!(rack.mode(), MatchMode::Scrabble);
    ///
    /// assert!(Pattern::parse("c.t", true).is_err());
    /// ```
    pub fn parse(query: &str, allow_subset: bool) -> Result<Self, PatternError> {
        let text = query.trim().to_lowercase();

        let mut has_plus = false;
        let mut has_dot = false;
        for c in text.chars() {
            match c {
                'a'..='z' => {}
                '+' => has_plus = true,
                '.' => has_dot = true,
                other => return Err(PatternError::InvalidCharacter(other)),
            }
        }

        if allow_subset && (has_plus || has_dot) {
            return Err(PatternError::IncompatibleOptions);
        }

        // '+' wins over '.' when both appear
        let mode = if has_plus {
            MatchMode::MissingLetters
        } else if has_dot {
            MatchMode::Crossword
        } else if allow_subset {
            MatchMode::Scrabble
        } else {
            MatchMode::Complete
        };

        // Multiset over the non-wildcard characters only
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for b in text.bytes() {
            if b.is_ascii_lowercase() {
                *counts.entry(b).or_insert(0) += 1;
            }
        }

        Ok(Self { text, mode, counts })
    }

    /// Get the normalized pattern text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the pattern length in characters, wildcards included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check whether the pattern is empty
    ///
    /// An empty pattern is valid and matches nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the derived matching mode
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Get how many times a letter appears among the pattern's non-wildcard
    /// characters
    ///
    /// Returns 0 for letters that don't appear and for wildcards.
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Get the count of each non-wildcard letter in the pattern
    #[inline]
    pub(crate) fn letter_counts(&self) -> &FxHashMap<u8, usize> {
        &self.counts
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
