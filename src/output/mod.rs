//! Terminal output formatting
//!
//! Rendering of command results. Core types never format; only this module
//! does.

mod display;

pub use display::{colorize_guess, print_benchmark_result, print_solve_result};
