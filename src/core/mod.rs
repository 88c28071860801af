//! Core domain types for the game engine
//!
//! Fundamental types with no I/O: validated words, per-position feedback
//! scoring, and cumulative letter knowledge. Everything here is pure and
//! directly testable.

mod feedback;
mod knowledge;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use knowledge::LetterKnowledge;
pub use word::{WORD_LEN, Word, WordError};
