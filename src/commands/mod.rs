//! Command implementations
//!
//! Orchestration for the CLI binary; produces structured results that the
//! output module renders.

mod benchmark;
mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
