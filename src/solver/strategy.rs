//! Guess selection strategies
//!
//! Reduction correctness lives in the reducer; which surviving candidate
//! becomes the next guess is a pluggable policy. Any selection over the
//! surviving pool is valid.

use crate::core::Word;

/// A policy for picking the next guess from the surviving candidates
pub trait Strategy {
    /// Select the next guess, or `None` if the pool is empty
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Deterministic: first surviving candidate in catalog order
    First(FirstCandidate),
    /// Uniformly random surviving candidate
    Random(RandomCandidate),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "random". Defaults to first if the name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomCandidate),
            _ => Self::First(FirstCandidate),
        }
    }
}

/// Deterministic strategy: always the first surviving candidate
///
/// Keeps solver runs reproducible, which the benchmark relies on.
pub struct FirstCandidate;

impl Strategy for FirstCandidate {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.first()
    }
}

/// Random strategy: a uniformly random surviving candidate
pub struct RandomCandidate;

impl Strategy for RandomCandidate {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}
