//! Length pre-filter over the dictionary
//!
//! Every mode except Scrabble requires candidates of exactly the pattern's
//! length, so the cheap length check runs before any predicate does.

use crate::core::{Pattern, Word};

/// Select candidates whose length is compatible with the pattern's mode
///
/// Complete, missing-letters and crossword matching need candidates of
/// exactly the pattern's length; Scrabble also admits shorter words.
/// Dictionary order is preserved.
///
/// # Examples
/// ```
/// use anagrams::core::{Pattern, Word};
/// use anagrams::solver::filter_by_length;
///
/// let dictionary = vec![
///     Word::new("at").unwrap(),
///     Word::new("cat").unwrap(),
///     Word::new("cats").unwrap(),
/// ];
///
/// let exact = Pattern::parse("cat", false).unwrap();
/// assert_eq!(filter_by_length(&dictionary, &exact).len(), 1);
///
/// let rack = Pattern::parse("cat", true).unwrap();
/// assert_eq!(filter_by_length(&dictionary, &rack).len(), 2);
/// ```
#[must_use]
pub fn filter_by_length<'a>(dictionary: &'a [Word], pattern: &Pattern) -> Vec<&'a Word> {
    let target = pattern.len();
    if pattern.mode().allows_shorter_words() {
        dictionary.iter().filter(|word| word.len() <= target).collect()
    } else {
        dictionary.iter().filter(|word| word.len() == target).collect()
    }
}
