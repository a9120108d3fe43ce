//! CLI command implementations

mod analyses;
mod analyze;
mod info;
mod run;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Run(args) => run::run_eval(args, log_level),
        Command::Analyze(args) => analyze::run_analyze(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}
