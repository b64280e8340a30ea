//! Word Finder
//!
//! An anagram and word-pattern search engine for puzzles, crosswords, and
//! Scrabble racks, with exact, missing-letter, crossword, and subset modes.
//!
//! # Quick Start
//!
//! ```rust
//! use anagrams::core::Word;
//! use anagrams::solver::{SolveOptions, Solver};
//!
//! let dictionary: Vec<Word> = ["cat", "act", "dog"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let solver = Solver::new(&dictionary);
//! let report = solver.solve("tac", SolveOptions::default()).unwrap();
//! assert_eq!(report.words(), ["cat", "act"]);
//! ```

// Core domain types
pub mod core;

// Pattern matching engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
