//! Result ordering
//!
//! Sorting reorders an already-collected result set in place; it never
//! re-runs matching. Length orders are stable, so words of equal length
//! keep their first-found order.

/// Available result orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Alphabetical, a to z
    LexAsc,
    /// Alphabetical, z to a
    LexDesc,
    /// Shortest words first
    LenAsc,
    /// Longest words first
    LenDesc,
}

impl SortOrder {
    /// Every order, in the sequence the TUI cycles through them
    pub const ALL: [Self; 4] = [Self::LexAsc, Self::LexDesc, Self::LenAsc, Self::LenDesc];

    /// Parse a user-facing order name
    ///
    /// Returns `None` for unrecognized names; callers leave the result set
    /// untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use anagrams::solver::SortOrder;
    ///
    /// assert_eq!(SortOrder::from_name("alpha"), Some(SortOrder::LexAsc));
    /// assert_eq!(SortOrder::from_name("longest"), Some(SortOrder::LenDesc));
    /// assert_eq!(SortOrder::from_name("random"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "alpha" | "az" | "lex" => Some(Self::LexAsc),
            "alpha-desc" | "za" | "lex-desc" => Some(Self::LexDesc),
            "len" | "shortest" => Some(Self::LenAsc),
            "len-desc" | "longest" => Some(Self::LenDesc),
            _ => None,
        }
    }

    /// Human-readable name for status lines and confirmations
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LexAsc => "alphabetical",
            Self::LexDesc => "reverse alphabetical",
            Self::LenAsc => "shortest first",
            Self::LenDesc => "longest first",
        }
    }

    /// Reorder `words` in place
    ///
    /// Membership and count are unchanged; only the order moves.
    pub fn apply(self, words: &mut [String]) {
        match self {
            Self::LexAsc => words.sort_unstable(),
            Self::LexDesc => words.sort_unstable_by(|a, b| b.cmp(a)),
            Self::LenAsc => words.sort_by_key(String::len),
            Self::LenDesc => words.sort_by(|a, b| b.len().cmp(&a.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<String> {
        ["stone", "at", "tones", "cat", "notes"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn lex_asc_sorts_alphabetically() {
        let mut words = sample();
        SortOrder::LexAsc.apply(&mut words);
        assert_eq!(words, vec!["at", "cat", "notes", "stone", "tones"]);
    }

    #[test]
    fn lex_desc_is_reverse_of_lex_asc() {
        let mut asc = sample();
        let mut desc = sample();
        SortOrder::LexAsc.apply(&mut asc);
        SortOrder::LexDesc.apply(&mut desc);

        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn len_asc_sorts_shortest_first() {
        let mut words = sample();
        SortOrder::LenAsc.apply(&mut words);
        let lengths: Vec<usize> = words.iter().map(String::len).collect();
        assert_eq!(lengths, vec![2, 3, 5, 5, 5]);
    }

    #[test]
    fn length_orders_are_reversed_sequences() {
        let mut asc = sample();
        let mut desc = sample();
        SortOrder::LenAsc.apply(&mut asc);
        SortOrder::LenDesc.apply(&mut desc);

        let asc_lengths: Vec<usize> = asc.iter().map(String::len).collect();
        let mut desc_lengths: Vec<usize> = desc.iter().map(String::len).collect();
        desc_lengths.reverse();
        assert_eq!(asc_lengths, desc_lengths);
    }

    #[test]
    fn length_sort_keeps_tie_order() {
        // stone, tones, notes all have length 5 and keep first-found order
        let mut words = sample();
        SortOrder::LenAsc.apply(&mut words);
        assert_eq!(words, vec!["at", "cat", "stone", "tones", "notes"]);

        let mut words = sample();
        SortOrder::LenDesc.apply(&mut words);
        assert_eq!(words, vec!["stone", "tones", "notes", "at", "cat"]);
    }

    #[test]
    fn sorting_preserves_membership() {
        for order in SortOrder::ALL {
            let mut words = sample();
            order.apply(&mut words);
            assert_eq!(words.len(), 5);
            for original in sample() {
                assert!(words.contains(&original));
            }
        }
    }

    #[test]
    fn from_name_recognizes_all_orders() {
        assert_eq!(SortOrder::from_name("alpha"), Some(SortOrder::LexAsc));
        assert_eq!(SortOrder::from_name("ALPHA"), Some(SortOrder::LexAsc));
        assert_eq!(SortOrder::from_name("za"), Some(SortOrder::LexDesc));
        assert_eq!(SortOrder::from_name("shortest"), Some(SortOrder::LenAsc));
        assert_eq!(SortOrder::from_name(" len-desc "), Some(SortOrder::LenDesc));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(SortOrder::from_name("random"), None);
        assert_eq!(SortOrder::from_name(""), None);
    }
}
