//! Word solving command
//!
//! Plays the automated solver against a target word and returns the solution
//! path with per-turn candidate counts.

use crate::catalog::WordCatalog;
use crate::core::{Feedback, Word};
use crate::game::{GameState, MAX_GUESSES, Status};
use crate::solver::{AutoPlayer, Strategy};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word with the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid five-letter word
/// - The target is not in the catalog (the solver could never find it)
/// - The candidate pool becomes unsatisfiable mid-game
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    catalog: &WordCatalog,
    strategy: S,
) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    if !catalog.contains(&target) {
        return Err(format!("'{target}' is not in the word catalog"));
    }

    let mut game = GameState::new(catalog, target);
    let mut player = AutoPlayer::new(catalog, strategy);
    let mut steps: Vec<GuessStep> = Vec::with_capacity(MAX_GUESSES);

    while !game.is_over() {
        let guess = player
            .next_guess(game.records())
            .map_err(|e| e.to_string())?;
        let candidates_before = player.candidates_left();

        let (feedback, _) = game.apply_guess(guess.clone()).map_err(|e| e.to_string())?;
        let candidates_after = player.sync(game.records()).map_err(|e| e.to_string())?;

        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveResult {
        success: game.status() == Status::Won,
        steps,
        target: config.target.clone(),
    })
}
