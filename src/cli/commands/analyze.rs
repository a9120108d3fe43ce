//! Analyze command implementation

use super::analyses::{overall_comparison, print_analysis, print_comparison, run_analyses};
use crate::bootstrap::BootstrapConfig;
use crate::cli::{log, LogLevel};
use crate::config::{AnalyzeArgs, OutputFormat};
use crate::table::{read_results_csv, write_stats_csv, write_stats_json};

pub fn run_analyze(args: AnalyzeArgs, level: LogLevel) -> Result<(), String> {
    let table = read_results_csv(&args.results)
        .map_err(|e| format!("reading {}: {e}", args.results.display()))?;
    if table.is_empty() {
        return Err(format!("{} holds no rows", args.results.display()));
    }
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "loaded {} rows, variants: {}",
            table.len(),
            table.variants().join(", ")
        ),
    );

    let bootstrap = BootstrapConfig {
        iterations: args.iterations,
        alpha: args.alpha,
        seed: args.seed,
    };
    let analyses = run_analyses(&table, &bootstrap, level)?;

    if let Some(path) = &args.stats_csv {
        write_stats_csv(&analyses, path)
            .map_err(|e| format!("writing {}: {e}", path.display()))?;
        log(
            level,
            LogLevel::Normal,
            &format!("statistics written to {}", path.display()),
        );
    }

    match args.format {
        OutputFormat::Text => {
            for analysis in &analyses {
                print_analysis(analysis, level);
            }
            let comparison = overall_comparison(&table, &bootstrap)?;
            print_comparison(&comparison, level);
        }
        OutputFormat::Json => {
            let json =
                write_stats_json(&analyses).map_err(|e| format!("JSON error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
