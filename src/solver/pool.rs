//! Monotonically shrinking candidate pool
//!
//! A [`CandidatePool`] is owned by one solver for the duration of one game.
//! It starts as the full catalog and only ever shrinks as guess records are
//! observed; an empty pool is an error condition, never a state to guess
//! from.

use super::reducer::reduce;
use crate::catalog::WordCatalog;
use crate::core::Word;
use crate::game::GuessRecord;
use std::fmt;

/// Error type for solver failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No candidate is consistent with the observed feedback; the feedback
    /// sequence is inconsistent or the catalog has a gap
    UnsatisfiableConstraints,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsatisfiableConstraints => {
                write!(
                    f,
                    "No candidates remain consistent with the observed feedback"
                )
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// The set of catalog words still consistent with all observed feedback
#[derive(Debug, Clone)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Start a pool containing the whole catalog
    #[must_use]
    pub fn new(catalog: &WordCatalog) -> Self {
        Self {
            words: catalog.all().to_vec(),
        }
    }

    /// Start a pool from an explicit word list (mainly for tests)
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Fold one guess record into the pool
    ///
    /// Because each record's constraints are independent, observing records
    /// one at a time is equivalent to re-filtering the original pool against
    /// the full history.
    ///
    /// # Errors
    /// Returns `SolverError::UnsatisfiableConstraints` if no candidate
    /// survives the record; the pool is left unchanged in that case.
    pub fn observe(&mut self, record: &GuessRecord) -> Result<usize, SolverError> {
        let survivors = reduce(&self.words, std::slice::from_ref(record));
        if survivors.is_empty() {
            return Err(SolverError::UnsatisfiableConstraints);
        }

        self.words = survivors;
        Ok(self.words.len())
    }

    /// Surviving candidates, in catalog order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of surviving candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool has been emptied by contradictory feedback
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
