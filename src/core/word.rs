//! Validated word representation
//!
//! A `Word` is an immutable sequence of exactly [`WORD_LEN`] lowercase ASCII
//! letters. Validation happens once, in the constructor; every other part of
//! the engine can rely on the length and alphabet being correct.

use rustc_hash::FxHashMap;
use std::fmt;

/// Fixed word length for the whole engine
pub const WORD_LEN: usize = 5;

/// A validated five-letter word
///
/// Stores the word as bytes and maintains a map of letter positions for
/// duplicate-letter handling in scoring and candidate filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("cran3").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-based)
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LEN`]
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Number of occurrences of a letter in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letter_positions.get(&letter).map_or(0, Vec::len)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the feedback scorer to handle duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(1), b'r');
        assert_eq!(word.letter_at(2), b'a');
        assert_eq!(word.letter_at(3), b'n');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'r'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_count_of() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.positions_of(b'e'), &[2, 3]);
        assert_eq!(word.positions_of(b's'), &[0]);
        assert_eq!(word.positions_of(b'z'), &[]);
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'p'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'd'), Some(&1));
    }

    #[test]
    fn word_letter_counts_repeats() {
        let word = Word::new("lolly").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'l'), Some(&3));
        assert_eq!(counts.get(&b'o'), Some(&1));
        assert_eq!(counts.get(&b'y'), Some(&1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
