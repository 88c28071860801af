//! Wordle Engine
//!
//! A word-guessing game engine: multiset-correct feedback scoring, cumulative
//! letter knowledge, game state with a bounded attempt budget, and an
//! elimination solver that narrows a candidate pool against the full
//! feedback history.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Feedback, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert!(!feedback.is_win());
//! println!("{feedback}"); // -CCPC
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word catalog
pub mod catalog;

// Elimination solver
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
