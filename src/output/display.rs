//! Display functions for command results

use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Feedback, LetterScore, WORD_LEN};
use colored::Colorize;

/// Render a guessed word with its feedback coloring
///
/// Correct letters green, present letters yellow, absent letters dimmed.
#[must_use]
pub fn colorize_guess(word: &str, feedback: &Feedback) -> String {
    word.to_uppercase()
        .chars()
        .take(WORD_LEN)
        .enumerate()
        .map(|(i, ch)| match feedback.at(i) {
            LetterScore::Correct => ch.to_string().green().bold().to_string(),
            LetterScore::Present => ch.to_string().yellow().bold().to_string(),
            LetterScore::Absent => ch.to_string().dimmed().to_string(),
        })
        .collect()
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {}  [{}]",
            turn,
            colorize_guess(&step.word, &step.feedback),
            step.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark run
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nWords tested:     {}", result.total_words);
    println!(
        "Solved:           {} ({:.1}%)",
        result.solved.to_string().green(),
        if result.total_words == 0 {
            0.0
        } else {
            100.0 * result.solved as f64 / result.total_words as f64
        }
    );
    if result.failed > 0 {
        println!("Failed:           {}", result.failed.to_string().red());
    }
    println!("Average guesses:  {:.3}", result.average_guesses);
    println!(
        "Guess range:      {}-{}",
        result.min_guesses, result.max_guesses
    );
    println!("Time:             {:.2?}", result.duration);

    println!("\nDistribution:");
    let mut counts: Vec<(usize, usize)> = result.distribution.iter().map(|(k, v)| (*k, *v)).collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let bar_len = if result.total_words == 0 {
            0
        } else {
            (count * 40).div_ceil(result.total_words)
        };
        println!("  {guesses}: {:5}  {}", count, "█".repeat(bar_len).cyan());
    }

    if !result.unsolved_words.is_empty() {
        println!("\n{}", "Unsolved words:".red().bold());
        for word in &result.unsolved_words {
            println!("  • {}", word.to_uppercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_guess_emits_one_cell_per_letter() {
        colored::control::set_override(false);

        let feedback = Feedback::from_str("CP--C").unwrap();
        let rendered = colorize_guess("trace", &feedback);
        assert_eq!(rendered, "TRACE");
    }
}
