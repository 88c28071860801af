//! Wordle Engine - CLI
//!
//! Thin command-line front end over the library: watch the elimination
//! solver work a target word, or benchmark it across the catalog.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_engine::{
    catalog::WordCatalog,
    commands::{SolveConfig, run_benchmark, solve_word},
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Word-guessing game engine with an elimination-based solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: first (default, deterministic) or random
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a target word (random secret if omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Show per-turn candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver across catalog words
    Benchmark {
        /// Number of catalog words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the catalog based on the -w flag
fn load_catalog(wordlist_mode: &str) -> Result<WordCatalog> {
    match wordlist_mode {
        "embedded" => Ok(WordCatalog::embedded()),
        path => WordCatalog::from_file(path).map_err(|e| anyhow::anyhow!(e.to_string())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.wordlist)?;

    // Default to solving a random secret if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        word: None,
        verbose: true,
    });

    match command {
        Commands::Solve { word, verbose } => {
            let target = word.unwrap_or_else(|| catalog.sample_random().text().to_string());
            let strategy = StrategyType::from_name(&cli.strategy);

            let config = SolveConfig::new(target);
            let result = solve_word(&config, &catalog, strategy).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {} words with the '{}' strategy...",
                count.min(catalog.len()),
                cli.strategy
            );
            let result = run_benchmark(&catalog, &cli.strategy, count);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
