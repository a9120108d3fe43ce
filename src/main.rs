//! Evaluar CLI
//!
//! Speech-to-text evaluation entry point for the evaluar library.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate a corpus (greedy decoding only)
//! evaluar run data/corpus
//!
//! # Include the language-model-assisted variant
//! evaluar run data/corpus --use-lm
//!
//! # Quick check on a corpus subset
//! evaluar run data/corpus --max-items 50 --iterations 500
//!
//! # Re-run statistics from a previous run
//! evaluar analyze results_detailed.csv --format json
//!
//! # Show corpus composition
//! evaluar info data/corpus
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
