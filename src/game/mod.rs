//! Game session types
//!
//! One [`GameState`] per game session, mutated only through `apply_guess`.

mod state;

pub use state::{GameState, GuessError, GuessRecord, MAX_GUESSES, Status};
