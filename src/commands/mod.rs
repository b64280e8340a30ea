//! Command implementations

pub mod batch;
pub mod practice;
pub mod simple;
pub mod solve;

pub use batch::{BatchLine, BatchReport, run_batch};
pub use practice::{PracticeConfig, run_practice};
pub use simple::run_simple;
pub use solve::{SolveOutcome, SolveRequest, run_solve};
