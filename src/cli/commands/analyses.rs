//! Stock stratification analyses shared by the run and analyze commands

use crate::bootstrap::BootstrapConfig;
use crate::cli::{log, LogLevel};
use crate::stratify::{aggregate, AnalysisResult, AnalysisSpec, GroupKey, GroupOrder};
use crate::table::{ResultsRow, ResultsTable};

/// Severity order for the noise dimension. Natural string sort would
/// put SNR15dB before SNR05dB's neighbors, so the order is explicit.
const SNR_ORDER: [&str; 4] = ["SNR05dB", "SNR15dB", "SNR25dB", "SNR35dB"];
const LENGTH_ORDER: [&str; 3] = ["1", "3", "5"];

/// Speaker held fixed when isolating the noise effect.
const SNR_ANALYSIS_SPEAKER: &str = "man";
/// Noise level held fixed when isolating the speaker effect; the level
/// at which every speaker is present.
const SPEAKER_ANALYSIS_SNR: &str = "SNR35dB";

/// The three stock analyses: noise at a fixed speaker, speaker at a
/// fixed noise level, utterance length over the whole table.
pub fn stock_analyses(table: &ResultsTable) -> Vec<AnalysisSpec> {
    let variants = table.variants().to_vec();

    let snr_filter =
        |row: &ResultsRow| row.metadata_value("speaker") == Some(SNR_ANALYSIS_SPEAKER);
    let speaker_filter =
        |row: &ResultsRow| row.metadata_value("snr") == Some(SPEAKER_ANALYSIS_SNR);

    vec![
        AnalysisSpec::new(
            format!("snr (speaker={SNR_ANALYSIS_SPEAKER})"),
            vec!["snr".to_string()],
            variants.clone(),
        )
        .with_filter(snr_filter)
        .with_order(explicit_order(table, "snr", &SNR_ORDER, snr_filter)),
        AnalysisSpec::new(
            format!("speaker (snr={SPEAKER_ANALYSIS_SNR})"),
            vec!["speaker".to_string()],
            variants.clone(),
        )
        .with_filter(speaker_filter),
        AnalysisSpec::new("length (all)", vec!["length".to_string()], variants)
            .with_order(explicit_order(table, "length", &LENGTH_ORDER, |_| true)),
    ]
}

/// Build an explicit group order from a canonical value list, keeping
/// only the values that actually occur among rows passing the filter so
/// a partial corpus never trips the empty-group check.
fn explicit_order(
    table: &ResultsTable,
    key: &str,
    canonical: &[&str],
    filter: impl Fn(&ResultsRow) -> bool,
) -> GroupOrder {
    let keys: Vec<GroupKey> = canonical
        .iter()
        .copied()
        .filter(|value| {
            table
                .rows()
                .iter()
                .any(|row| filter(row) && row.metadata_value(key) == Some(*value))
        })
        .map(|value| vec![value.to_string()])
        .collect();
    GroupOrder::Explicit(keys)
}

/// Run the stock analyses, skipping any whose filter leaves no rows
/// (for example a corpus without the fixed speaker).
pub fn run_analyses(
    table: &ResultsTable,
    bootstrap: &BootstrapConfig,
    level: LogLevel,
) -> Result<Vec<AnalysisResult>, String> {
    let mut results = Vec::new();
    for spec in stock_analyses(table) {
        let rows = table.rows().iter().filter(|r| spec.matches(r)).count();
        if rows == 0 {
            log(
                level,
                LogLevel::Normal,
                &format!("skipping analysis '{}': no rows after filtering", spec.label),
            );
            continue;
        }
        log(
            level,
            LogLevel::Verbose,
            &format!("analysis '{}' over {rows} rows", spec.label),
        );
        let result = aggregate(table, &spec, bootstrap)
            .map_err(|e| format!("analysis '{}' failed: {e}", spec.label))?;
        results.push(result);
    }
    Ok(results)
}

/// Whole-table per-variant comparison (a single overall group).
pub fn overall_comparison(
    table: &ResultsTable,
    bootstrap: &BootstrapConfig,
) -> Result<AnalysisResult, String> {
    let spec = AnalysisSpec::new("overall", vec![], table.variants().to_vec());
    aggregate(table, &spec, bootstrap).map_err(|e| format!("overall comparison failed: {e}"))
}

/// Print the overall comparison as an aligned table.
pub fn print_comparison(result: &AnalysisResult, level: LogLevel) {
    let Some(overall) = result.groups.first() else {
        return;
    };
    log(level, LogLevel::Normal, "");
    log(
        level,
        LogLevel::Normal,
        &format!("{:<16} {:>6} {:>9} {:>22}", "configuration", "n", "wer", "ci95"),
    );
    for stats in &overall.variants {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "{:<16} {:>6} {:>8.2}% [{:>6.2}%, {:>6.2}%]",
                stats.tag, overall.n, stats.mean, stats.ci_low, stats.ci_high
            ),
        );
    }
}

/// Print one analysis block per group row.
pub fn print_analysis(result: &AnalysisResult, level: LogLevel) {
    log(level, LogLevel::Normal, &format!("\n# {}", result.label));
    for group in &result.groups {
        let key = if group.key.is_empty() {
            "(overall)".to_string()
        } else {
            group.key.join("/")
        };
        let stats: Vec<String> = group
            .variants
            .iter()
            .map(|s| {
                format!(
                    "{}: {:.2}% [{:.2}%, {:.2}%]",
                    s.tag, s.mean, s.ci_low, s.ci_high
                )
            })
            .collect();
        log(
            level,
            LogLevel::Normal,
            &format!("{:<12} n={:<5} {}", key, group.n, stats.join("  ")),
        );
    }
}
