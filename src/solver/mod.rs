//! Pattern matching engine
//!
//! The pipeline for one request: parse the query into a `Pattern`, length-
//! filter the dictionary, run the mode's predicate over the candidates,
//! then collect unique matches up to the result cap. Sorting is a separate
//! in-place step over the collected words.

pub mod collector;
mod engine;
pub mod filter;
pub mod predicate;
pub mod sort;

pub use collector::{DEFAULT_RESULT_CAP, SolveStatus, collect_unique};
pub use engine::{SolveOptions, SolveReport, Solver};
pub use filter::filter_by_length;
pub use sort::SortOrder;
