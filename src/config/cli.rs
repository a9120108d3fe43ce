//! CLI types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Evaluar: speech-to-text evaluation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(version)]
#[command(
    about = "Word error rate evaluation with bootstrap confidence intervals, stratified by corpus metadata"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate a corpus: transcribe, score, and summarize
    Run(RunArgs),

    /// Recompute summary statistics from an existing results table
    Analyze(AnalyzeArgs),

    /// Display corpus composition without evaluating
    Info(InfoArgs),
}

/// Output format for printed summaries
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Corpus root directory
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Also evaluate the language-model-assisted decoding variant
    #[arg(long)]
    pub use_lm: bool,

    /// Audio file extension to scan for
    #[arg(long, default_value = "wav")]
    pub extension: String,

    /// Number of bootstrap iterations
    #[arg(long, default_value = "2000")]
    pub iterations: usize,

    /// Significance level for the confidence intervals
    #[arg(long, default_value = "0.05")]
    pub alpha: f64,

    /// Seed for bootstrap reproducibility
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Cap the number of processed items (for quick checks)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Where to write the per-item results table
    #[arg(long, default_value = "results_detailed.csv")]
    pub results_csv: PathBuf,

    /// Where to write the summary statistics
    #[arg(long, default_value = "results_stats.csv")]
    pub stats_csv: PathBuf,
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// Previously exported results table
    #[arg(value_name = "RESULTS")]
    pub results: PathBuf,

    /// Number of bootstrap iterations
    #[arg(long, default_value = "2000")]
    pub iterations: usize,

    /// Significance level for the confidence intervals
    #[arg(long, default_value = "0.05")]
    pub alpha: f64,

    /// Seed for bootstrap reproducibility
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Also write the summary statistics to this file
    #[arg(long)]
    pub stats_csv: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Corpus root directory
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Audio file extension to scan for
    #[arg(long, default_value = "wav")]
    pub extension: String,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::parse_from(["evaluar", "run", "corpus"]);
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.iterations, 2000);
        assert_eq!(args.alpha, 0.05);
        assert_eq!(args.seed, 42);
        assert!(!args.use_lm);
        assert_eq!(args.extension, "wav");
        assert_eq!(args.results_csv, PathBuf::from("results_detailed.csv"));
    }

    #[test]
    fn test_run_overrides() {
        let cli = Cli::parse_from([
            "evaluar",
            "run",
            "corpus",
            "--use-lm",
            "--iterations",
            "500",
            "--seed",
            "7",
            "--max-items",
            "10",
        ]);
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.use_lm);
        assert_eq!(args.iterations, 500);
        assert_eq!(args.seed, 7);
        assert_eq!(args.max_items, Some(10));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["evaluar", "info", "corpus", "--verbose"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_analyze_format() {
        let cli = Cli::parse_from(["evaluar", "analyze", "results.csv", "--format", "json"]);
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.stats_csv, None);
    }
}
