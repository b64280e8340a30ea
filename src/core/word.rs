//! Dictionary word representation
//!
//! A Word stores a normalized lowercase word along with its letter-frequency
//! multiset for anagram and subset checks.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase dictionary word with letter-frequency tracking
///
/// Stores the word text and maintains a count per letter for multiset
/// comparison against query patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    // Counts are bounded by the word's length, same type as len()
    counts: FxHashMap<u8, usize>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation, so `"Listen"` and
    /// `"listen"` produce equal words.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use anagrams::core::Word;
    ///
    /// let word = Word::new("Listen").unwrap();
    /// assert_eq!(word.text(), "listen");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("dog!").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Build letter-frequency map for multiset comparison
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for b in text.bytes() {
            *counts.entry(b).or_insert(0) += 1;
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// A valid word is never empty, so this always returns false
    ///
    /// Present to pair with `len` for callers that expect the pair.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.counts.contains_key(&letter)
    }

    /// Get how many times a letter appears in the word
    ///
    /// Returns 0 if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn letter_counts(&self) -> &FxHashMap<u8, usize> {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
