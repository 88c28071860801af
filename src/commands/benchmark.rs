//! Benchmark command
//!
//! Plays the solver against many catalog words and aggregates win rate and
//! guess distribution.

use crate::catalog::WordCatalog;
use crate::game::{GameState, Status};
use crate::solver::{AutoPlayer, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub unsolved_words: Vec<String>,
    pub duration: Duration,
}

/// Run the solver over the first `count` catalog words
///
/// Each game gets a fresh player and candidate pool. A solver error
/// (unsatisfiable pool) counts as a failed game; with a consistent catalog it
/// cannot happen, since every secret is also a candidate.
#[must_use]
pub fn run_benchmark(catalog: &WordCatalog, strategy_name: &str, count: usize) -> BenchmarkResult {
    let targets: Vec<_> = catalog.all().iter().take(count).collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut unsolved_words: Vec<String> = Vec::new();

    for target in &targets {
        let mut game = GameState::new(catalog, (*target).clone());
        let mut player = AutoPlayer::new(catalog, StrategyType::from_name(strategy_name));

        let won = matches!(player.play(&mut game), Ok(Status::Won));
        let guesses = game.records().len();

        if won {
            solved += 1;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
        } else {
            unsolved_words.push(target.text().to_string());
        }

        total_guesses += guesses;
        *distribution.entry(guesses).or_insert(0) += 1;

        pb.set_message(target.text().to_string());
        pb.inc(1);
    }

    pb.finish_and_clear();

    let total_words = targets.len();
    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        unsolved_words,
        duration: start.elapsed(),
    }
}
