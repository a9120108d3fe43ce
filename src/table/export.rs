//! Delimited export of results and summary statistics

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::Result;
use super::results::ResultsTable;
use crate::stratify::AnalysisResult;

/// Column name for a variant's hypothesis, e.g. `no-lm` -> `hyp_no_lm`.
pub fn hypothesis_column(tag: &str) -> String {
    format!("hyp_{}", sanitize(tag))
}

fn sanitize(tag: &str) -> String {
    tag.replace('-', "_")
}

/// Quote a field when it contains the delimiter, a quote, or a newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_record<W: Write>(out: &mut W, fields: &[String]) -> std::io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
    writeln!(out, "{}", line.join(","))
}

/// Write the detailed results table: one header row, then one row per
/// item in table order. Column order is fixed: `filename`, the metadata
/// columns, `reference`, one hypothesis column per variant.
pub fn write_results_csv(table: &ResultsTable, path: impl AsRef<Path>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);

    let mut header = vec!["filename".to_string()];
    header.extend(table.metadata_keys().iter().cloned());
    header.push("reference".to_string());
    header.extend(table.variants().iter().map(|t| hypothesis_column(t)));
    write_record(&mut out, &header)?;

    for row in table.rows() {
        let mut fields = vec![row.id.clone()];
        fields.extend(row.metadata.iter().map(|(_, v)| v.clone()));
        fields.push(row.reference.clone());
        fields.extend(row.hypotheses.iter().map(|(_, h)| h.clone()));
        write_record(&mut out, &fields)?;
    }

    out.flush()?;
    Ok(())
}

/// Write summary statistics: one block per analysis, each prefixed by a
/// `# <label>` line, with group key columns, the group size, and three
/// numeric columns per variant.
pub fn write_stats_csv(analyses: &[AnalysisResult], path: impl AsRef<Path>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);

    for (i, analysis) in analyses.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "# {}", analysis.label)?;

        let mut header: Vec<String> = analysis.group_by.clone();
        header.push("n".to_string());
        for tag in &analysis.variants {
            let tag = sanitize(tag);
            header.push(format!("wer_{tag}"));
            header.push(format!("ci_low_{tag}"));
            header.push(format!("ci_high_{tag}"));
        }
        write_record(&mut out, &header)?;

        for group in &analysis.groups {
            let mut fields = group.key.clone();
            fields.push(group.n.to_string());
            for stats in &group.variants {
                fields.push(format!("{:.4}", stats.mean));
                fields.push(format!("{:.4}", stats.ci_low));
                fields.push(format!("{:.4}", stats.ci_high));
            }
            write_record(&mut out, &fields)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Render summary statistics as pretty-printed JSON.
pub fn write_stats_json(analyses: &[AnalysisResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(analyses)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypothesis_column_names() {
        assert_eq!(hypothesis_column("no-lm"), "hyp_no_lm");
        assert_eq!(hypothesis_column("with-lm"), "hyp_with_lm");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
