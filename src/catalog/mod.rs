//! The shared, read-only word catalog
//!
//! A [`WordCatalog`] is built once at process start and passed by shared
//! reference into anything that needs membership checks, enumeration, or a
//! random secret. It is immutable after construction, so it can be shared
//! across concurrent games without locking.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{WORD_LEN, Word};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::Path;

/// Immutable set of valid words for one word length
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<Word>,
    members: FxHashSet<[u8; WORD_LEN]>,
}

/// Error type for catalog construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No valid words were supplied
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word catalog must contain at least one word"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl WordCatalog {
    /// Build a catalog from a list of words
    ///
    /// Duplicate words are kept once.
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if the list contains no words.
    pub fn from_words(words: Vec<Word>) -> Result<Self, CatalogError> {
        if words.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut members = FxHashSet::default();
        let mut unique = Vec::with_capacity(words.len());
        for word in words {
            if members.insert(*word.letters()) {
                unique.push(word);
            }
        }

        Ok(Self {
            words: unique,
            members,
        })
    }

    /// Build the default catalog from the embedded word list
    ///
    /// # Panics
    /// Will not panic - the embedded list is generated at build time and is
    /// never empty.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(loader::words_from_slice(WORDS))
            .expect("embedded word list is non-empty")
    }

    /// Load a catalog from a newline-separated word file
    ///
    /// Entries that are not valid five-letter words are skipped.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, or if it yields no valid
    /// words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let words = loader::load_from_file(path)?;
        Ok(Self::from_words(words)?)
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word.letters())
    }

    /// All words, in catalog order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the catalog
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty catalog cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sample a uniformly random word, e.g. as a fresh secret
    ///
    /// # Panics
    /// Will not panic - the catalog is non-empty by construction.
    #[must_use]
    pub fn sample_random(&self) -> &Word {
        self.words
            .choose(&mut rand::rng())
            .expect("catalog is non-empty by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> WordCatalog {
        let words = loader::words_from_slice(&["crane", "slate", "irate"]);
        WordCatalog::from_words(words).unwrap()
    }

    #[test]
    fn from_words_rejects_empty() {
        assert_eq!(
            WordCatalog::from_words(Vec::new()).unwrap_err(),
            CatalogError::Empty
        );
    }

    #[test]
    fn from_words_deduplicates() {
        let words = loader::words_from_slice(&["crane", "crane", "slate"]);
        let catalog = WordCatalog::from_words(words).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn contains_members_only() {
        let catalog = small_catalog();
        assert!(catalog.contains(&Word::new("crane").unwrap()));
        assert!(catalog.contains(&Word::new("SLATE").unwrap()));
        assert!(!catalog.contains(&Word::new("zesty").unwrap()));
    }

    #[test]
    fn sample_random_returns_member() {
        let catalog = small_catalog();
        for _ in 0..20 {
            let word = catalog.sample_random();
            assert!(catalog.contains(word));
        }
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = WordCatalog::embedded();
        assert_eq!(catalog.len(), WORDS_COUNT);
        assert!(catalog.contains(&Word::new("crane").unwrap()));
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in &WORDS[..20.min(WORDS.len())] {
            assert_eq!(word.len(), WORD_LEN, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }
}
