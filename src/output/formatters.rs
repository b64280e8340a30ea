//! Formatting utilities for terminal output

use crate::core::MatchMode;

/// Human-readable name for a matching mode
#[must_use]
pub const fn mode_label(mode: MatchMode) -> &'static str {
    match mode {
        MatchMode::Complete => "complete anagram",
        MatchMode::MissingLetters => "missing letters",
        MatchMode::Crossword => "crossword",
        MatchMode::Scrabble => "scrabble rack",
    }
}

/// Lay words out in rows of equal-width columns
///
/// Column width is the longest word plus two spaces; as many columns fit in
/// `total_width` as possible, at least one. Words flow left to right, then
/// wrap. Rows carry no trailing spaces.
#[must_use]
pub fn format_columns(words: &[String], total_width: usize) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }

    let longest = words.iter().map(String::len).max().unwrap_or(0);
    let col_width = longest + 2;
    let columns = (total_width / col_width).max(1);

    let mut rows = Vec::with_capacity(words.len().div_ceil(columns));
    for chunk in words.chunks(columns) {
        let mut row = String::with_capacity(chunk.len() * col_width);
        for word in chunk {
            row.push_str(word);
            for _ in word.len()..col_width {
                row.push(' ');
            }
        }
        rows.push(row.trim_end().to_string());
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(entries: &[&str]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn mode_labels() {
        assert_eq!(mode_label(MatchMode::Complete), "complete anagram");
        assert_eq!(mode_label(MatchMode::MissingLetters), "missing letters");
        assert_eq!(mode_label(MatchMode::Crossword), "crossword");
        assert_eq!(mode_label(MatchMode::Scrabble), "scrabble rack");
    }

    #[test]
    fn format_columns_empty() {
        assert!(format_columns(&[], 80).is_empty());
    }

    #[test]
    fn format_columns_single_row() {
        let words = strings(&["cat", "act"]);
        let rows = format_columns(&words, 80);
        assert_eq!(rows, vec!["cat  act"]);
    }

    #[test]
    fn format_columns_wraps() {
        // Column width 5 ("cat" + 2), so width 12 fits two columns
        let words = strings(&["cat", "act", "tac"]);
        let rows = format_columns(&words, 12);
        assert_eq!(rows, vec!["cat  act", "tac"]);
    }

    #[test]
    fn format_columns_narrow_width_still_one_column() {
        let words = strings(&["stone", "tones"]);
        let rows = format_columns(&words, 3);
        assert_eq!(rows, vec!["stone", "tones"]);
    }

    #[test]
    fn format_columns_no_trailing_spaces() {
        let words = strings(&["at", "stone", "cat"]);
        for row in format_columns(&words, 20) {
            assert_eq!(row, row.trim_end());
        }
    }
}
