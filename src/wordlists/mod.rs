//! Word lists for the finder
//!
//! Provides the embedded dictionary compiled into the binary plus loading
//! utilities for user-supplied word lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
