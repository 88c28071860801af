//! Feedback scoring for a guess against a secret
//!
//! Each position of a guess is classified as one of:
//! - `Absent`: the letter does not occur in the secret (after exact matches
//!   are accounted for)
//! - `Present`: the letter occurs in the secret, but not at this position
//! - `Correct`: the letter occurs at exactly this position
//!
//! Scoring is two-pass so that repeated letters are never over-credited:
//! exact matches consume occurrences from the secret's letter multiset first,
//! and only the remaining occurrences can produce `Present` marks.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Per-position classification of a guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Letter does not occur in the secret (post exact-match accounting)
    Absent,
    /// Letter occurs in the secret, but at a different position
    Present,
    /// Letter occurs at exactly this position
    Correct,
}

/// Feedback for one guess: a [`LetterScore`] per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    scores: [LetterScore; WORD_LEN],
}

impl Feedback {
    /// All positions correct (winning feedback)
    pub const WIN: Self = Self {
        scores: [LetterScore::Correct; WORD_LEN],
    };

    /// Build feedback directly from per-position scores
    #[inline]
    #[must_use]
    pub const fn from_scores(scores: [LetterScore; WORD_LEN]) -> Self {
        Self { scores }
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and consume one occurrence
    ///    of the letter from the secret's letter-count multiset
    /// 2. Second pass: for positions not yet `Correct`, mark `Present` if the
    ///    letter still has occurrences remaining, consuming one; otherwise
    ///    mark `Absent`
    ///
    /// Exact matches are resolved before misplaced matches, so a letter that
    /// appears twice in the guess but once in the secret is credited at most
    /// once.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, LetterScore, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// // T(absent) R(correct) A(correct) C(present) E(correct)
    /// assert_eq!(
    ///     feedback.scores(),
    ///     &[
    ///         LetterScore::Absent,
    ///         LetterScore::Correct,
    ///         LetterScore::Correct,
    ///         LetterScore::Present,
    ///         LetterScore::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut scores = [LetterScore::Absent; WORD_LEN];
        let mut remaining = secret.letter_counts();

        // First pass: exact matches consume from the multiset
        // Allow: index needed to compare guess[i] against secret[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.letters()[i] == secret.letters()[i] {
                scores[i] = LetterScore::Correct;

                let letter = guess.letters()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters drawn from what's left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if scores[i] != LetterScore::Correct {
                let letter = guess.letters()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    scores[i] = LetterScore::Present;
                    *count -= 1;
                }
            }
        }

        Self { scores }
    }

    /// Per-position scores
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LEN] {
        &self.scores
    }

    /// Score at a specific position
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LEN`]
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterScore {
        self.scores[position]
    }

    /// Check if this is a winning feedback (all `Correct`)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.scores == [LetterScore::Correct; WORD_LEN]
    }

    /// Number of positions where `guess` carries `letter` and the score
    /// credits it (`Correct` or `Present`)
    ///
    /// This is the repeated-letter guard shared by knowledge folding and
    /// candidate filtering: an `Absent` mark for one occurrence of a letter
    /// does not rule the letter out when another occurrence was credited in
    /// the same guess.
    #[must_use]
    pub fn credits(&self, guess: &Word, letter: u8) -> usize {
        (0..WORD_LEN)
            .filter(|&i| guess.letters()[i] == letter && self.scores[i] != LetterScore::Absent)
            .count()
    }

    /// Parse feedback from a string like "CP--C"
    ///
    /// Accepts:
    /// - 'C'/'c'/'G'/'g' for correct (green)
    /// - 'P'/'p'/'Y'/'y' for present (yellow)
    /// - '-'/'_' for absent (gray)
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut scores = [LetterScore::Absent; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            scores[i] = match ch {
                'C' | 'c' | 'G' | 'g' => LetterScore::Correct,
                'P' | 'p' | 'Y' | 'y' => LetterScore::Present,
                '-' | '_' => LetterScore::Absent,
                _ => return None,
            };
        }

        Some(Self { scores })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.scores {
            f.write_str(match score {
                LetterScore::Correct => "C",
                LetterScore::Present => "P",
                LetterScore::Absent => "-",
            })?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
