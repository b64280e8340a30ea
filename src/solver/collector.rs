//! Result collection with deduplication and capping
//!
//! Matches are walked in candidate order. Duplicate texts (a dictionary may
//! list the same word twice) collapse to one result, and collection stops
//! once the cap is full.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Default ceiling on collected results per request
pub const DEFAULT_RESULT_CAP: usize = 1000;

/// How a collection pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Every matching candidate was collected
    DictionaryExhausted,
    /// A unique match was discarded because the cap was already full
    CapReached,
}

/// Collect matched words in order, skipping duplicates, up to `cap` results
///
/// Returns the collected words and whether the walk ran out of matches or
/// hit the cap. The status is `CapReached` only if a unique match was
/// actually dropped; exactly `cap` unique matches still count as exhausting
/// the dictionary.
pub fn collect_unique<'a, I>(matches: I, cap: usize) -> (Vec<String>, SolveStatus)
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut words: Vec<String> = Vec::new();
    let mut status = SolveStatus::DictionaryExhausted;

    for word in matches {
        let text = word.text();
        if !seen.insert(text) {
            continue;
        }
        if words.len() >= cap {
            status = SolveStatus::CapReached;
            break;
        }
        words.push(text.to_string());
    }

    (words, status)
}
