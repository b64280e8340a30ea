//! Core domain types for the word finder
//!
//! This module contains the fundamental domain types with zero dependencies
//! on the rest of the crate. All types here are pure and directly testable.

mod pattern;
mod word;

pub use pattern::{MatchMode, Pattern, PatternError};
pub use word::{Word, WordError};
