//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! dictionary. Loading is line-oriented: blank lines are dropped, entries
//! that fail word validation are skipped, and a line that cannot be read is
//! logged and skipped without aborting the load. Only failing to open the
//! file is fatal.

use crate::core::Word;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words from a file, one word per line
///
/// Returns a vector of valid `Word` instances in file order. Blank lines
/// and invalid entries are skipped; unreadable lines are logged as warnings
/// and skipped. Loading the same file twice yields equal vectors.
///
/// # Errors
///
/// Returns an I/O error only if the file cannot be opened.
///
/// # Examples
/// ```no_run
/// use anagrams::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("skipping unreadable line {}: {e}", index + 1);
                continue;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => words.push(word),
            Err(e) => debug!("skipping invalid entry {trimmed:?} on line {}: {e}", index + 1),
        }
    }

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// Invalid entries are skipped, though the embedded dictionary is expected
/// to contain none.
///
/// # Examples
/// ```
/// use anagrams::wordlists::DICTIONARY;
/// use anagrams::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
