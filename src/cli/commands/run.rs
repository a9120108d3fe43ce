//! Run command implementation

use super::analyses::{overall_comparison, print_comparison, run_analyses};
use crate::batch::{BatchOrchestrator, FileHypothesisSource, FsReferenceSource};
use crate::bootstrap::BootstrapConfig;
use crate::cli::{log, LogLevel};
use crate::config::RunArgs;
use crate::corpus;
use crate::table::{write_results_csv, write_stats_csv};

/// Decoding variant evaluated on every run.
pub const VARIANT_NO_LM: &str = "no-lm";
/// Variant added by `--use-lm`.
pub const VARIANT_WITH_LM: &str = "with-lm";

/// Hypothesis file suffixes produced by the external transcription
/// system, one per variant.
const SUFFIX_NO_LM: &str = "greedy";
const SUFFIX_WITH_LM: &str = "lm";

pub fn run_eval(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let mut items =
        corpus::scan(&args.corpus, &args.extension).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!("found {} items under {}", items.len(), args.corpus.display()),
    );

    if let Some(max) = args.max_items {
        if items.len() > max {
            items.truncate(max);
            log(level, LogLevel::Normal, &format!("capped to {max} items"));
        }
    }

    let reference = FsReferenceSource;
    let mut orchestrator = BatchOrchestrator::new(&reference)
        .with_variant(VARIANT_NO_LM, FileHypothesisSource::new(SUFFIX_NO_LM));
    if args.use_lm {
        orchestrator = orchestrator
            .with_variant(VARIANT_WITH_LM, FileHypothesisSource::new(SUFFIX_WITH_LM));
    }

    let outcome = orchestrator.run(&items).map_err(|e| e.to_string())?;
    for skip in &outcome.skipped {
        log(
            level,
            LogLevel::Normal,
            &format!("skipped {}: {}", skip.id, skip.reason),
        );
    }
    log(
        level,
        LogLevel::Normal,
        &format!(
            "processed {} items, skipped {}",
            outcome.processed(),
            outcome.skipped_count()
        ),
    );
    if outcome.table.is_empty() {
        return Err("no item produced a results row".to_string());
    }
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "noise levels: {}",
            outcome.table.metadata_values("snr").join(", ")
        ),
    );

    write_results_csv(&outcome.table, &args.results_csv)
        .map_err(|e| format!("writing {}: {e}", args.results_csv.display()))?;
    log(
        level,
        LogLevel::Normal,
        &format!("results written to {}", args.results_csv.display()),
    );

    let bootstrap = BootstrapConfig {
        iterations: args.iterations,
        alpha: args.alpha,
        seed: args.seed,
    };
    let analyses = run_analyses(&outcome.table, &bootstrap, level)?;
    write_stats_csv(&analyses, &args.stats_csv)
        .map_err(|e| format!("writing {}: {e}", args.stats_csv.display()))?;
    log(
        level,
        LogLevel::Normal,
        &format!("statistics written to {}", args.stats_csv.display()),
    );

    let comparison = overall_comparison(&outcome.table, &bootstrap)?;
    print_comparison(&comparison, level);

    Ok(())
}
