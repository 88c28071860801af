//! Game state and status derivation
//!
//! A [`GameState`] owns the secret for one game, the ordered guess history,
//! and the letter knowledge folded from that history. It is mutated through
//! exactly one operation, [`GameState::apply_guess`], which validates before
//! touching any state.

use crate::catalog::WordCatalog;
use crate::core::{Feedback, LetterKnowledge, Word};
use std::fmt;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 5;

/// Game status, derived purely from the guess history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Guesses remain and the secret has not been found
    InProgress,
    /// The most recent guess matched the secret exactly
    Won,
    /// All guesses used without finding the secret
    Lost,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One guess and its feedback, in submission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    index: usize,
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Build a record directly, e.g. when replaying an externally observed
    /// game into the solver
    #[must_use]
    pub const fn new(index: usize, guess: Word, feedback: Feedback) -> Self {
        Self {
            index,
            guess,
            feedback,
        }
    }

    /// Zero-based ordinal of this guess within its game
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Feedback the guess received
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Error type for rejected guesses
///
/// A rejected guess leaves the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The game is already won or lost
    GameOver,
    /// The word is not in the catalog
    UnknownWord(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over; no further guesses are accepted"),
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word catalog"),
        }
    }
}

impl std::error::Error for GuessError {}

/// State of one game: secret, history, and folded letter knowledge
///
/// The catalog is borrowed, shared, and read-only; each game session owns its
/// own `GameState` exclusively.
pub struct GameState<'a> {
    catalog: &'a WordCatalog,
    secret: Word,
    records: Vec<GuessRecord>,
    knowledge: LetterKnowledge,
}

impl<'a> GameState<'a> {
    /// Start a game with a chosen secret
    #[must_use]
    pub fn new(catalog: &'a WordCatalog, secret: Word) -> Self {
        Self {
            catalog,
            secret,
            records: Vec::new(),
            knowledge: LetterKnowledge::new(),
        }
    }

    /// Start a game with a secret sampled from the catalog
    #[must_use]
    pub fn with_random_secret(catalog: &'a WordCatalog) -> Self {
        let secret = catalog.sample_random().clone();
        Self::new(catalog, secret)
    }

    /// Submit a guess
    ///
    /// Validates first, mutates second: a rejected guess leaves the record
    /// sequence and letter knowledge exactly as they were.
    ///
    /// # Errors
    /// - `GuessError::GameOver` if the game is already won or lost
    /// - `GuessError::UnknownWord` if the guess is not in the catalog
    pub fn apply_guess(&mut self, guess: Word) -> Result<(Feedback, Status), GuessError> {
        if self.status() != Status::InProgress {
            return Err(GuessError::GameOver);
        }

        if !self.catalog.contains(&guess) {
            return Err(GuessError::UnknownWord(guess.text().to_string()));
        }

        let feedback = Feedback::score(&self.secret, &guess);
        self.knowledge.fold(&guess, &feedback);
        self.records
            .push(GuessRecord::new(self.records.len(), guess, feedback));

        Ok((feedback, self.status()))
    }

    /// Current status, derived from the record sequence
    ///
    /// A winning guess on the final attempt is a win: the win check comes
    /// before the attempt-count check.
    #[must_use]
    pub fn status(&self) -> Status {
        if let Some(last) = self.records.last()
            && last.feedback().is_win()
        {
            return Status::Won;
        }

        if self.records.len() >= MAX_GUESSES {
            return Status::Lost;
        }

        Status::InProgress
    }

    /// Whether the game has ended
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != Status::InProgress
    }

    /// Guesses remaining
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.records.len())
    }

    /// Guess history, oldest first
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Letter knowledge folded from the history so far
    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    /// The secret, revealed only once the game is over
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        if self.is_over() {
            Some(&self.secret)
        } else {
            None
        }
    }
}
