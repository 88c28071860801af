//! Elimination-based solver
//!
//! Candidate reduction from feedback history, a shrinking per-game pool, and
//! pluggable guess-selection strategies on top of it.

mod player;
mod pool;
pub mod reducer;
mod strategy;

pub use player::{AutoPlayer, PlayError};
pub use pool::{CandidatePool, SolverError};
pub use reducer::{reduce, satisfies};
pub use strategy::{FirstCandidate, RandomCandidate, Strategy, StrategyType};
