//! Delimited import of a previously exported results table

use std::fs;
use std::path::Path;

use super::error::{Result, TableError};
use super::results::{ResultsRow, ResultsTable};

/// Read a results table written by
/// [`write_results_csv`](super::write_results_csv), so stratified
/// analyses can be re-run without re-transcribing the corpus.
///
/// The header must start with `filename`, contain a `reference` column,
/// and every column after `reference` must be a `hyp_<tag>` hypothesis
/// column. Metadata columns are the ones in between.
pub fn read_results_csv(path: impl AsRef<Path>) -> Result<ResultsTable> {
    let content = fs::read_to_string(path.as_ref())?;
    let mut lines = content.lines().enumerate();

    let (_, header_line) = lines.next().ok_or_else(|| TableError::Parse {
        line: 1,
        message: "missing header row".to_string(),
    })?;
    let header = parse_record(header_line).map_err(|message| TableError::Parse {
        line: 1,
        message,
    })?;

    if header.first().map(String::as_str) != Some("filename") {
        return Err(TableError::Parse {
            line: 1,
            message: "first column must be 'filename'".to_string(),
        });
    }
    let reference_idx = header
        .iter()
        .position(|c| c == "reference")
        .ok_or_else(|| TableError::Parse {
            line: 1,
            message: "missing 'reference' column".to_string(),
        })?;

    let metadata_keys: Vec<String> = header[1..reference_idx].to_vec();
    let mut variants = Vec::new();
    for column in &header[reference_idx + 1..] {
        let tag = column
            .strip_prefix("hyp_")
            .ok_or_else(|| TableError::Parse {
                line: 1,
                message: format!("unexpected column after 'reference': {column}"),
            })?;
        variants.push(tag.replace('_', "-"));
    }

    let mut table = ResultsTable::new(metadata_keys.clone(), variants.clone());
    for (index, line) in lines {
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;
        let fields = parse_record(line).map_err(|message| TableError::Parse {
            line: line_no,
            message,
        })?;
        if fields.len() != header.len() {
            return Err(TableError::Parse {
                line: line_no,
                message: format!(
                    "expected {} fields, found {}",
                    header.len(),
                    fields.len()
                ),
            });
        }

        let metadata = metadata_keys
            .iter()
            .cloned()
            .zip(fields[1..reference_idx].iter().cloned())
            .collect();
        let hypotheses = variants
            .iter()
            .cloned()
            .zip(fields[reference_idx + 1..].iter().cloned())
            .collect();

        table.push(ResultsRow {
            id: fields[0].clone(),
            metadata,
            reference: fields[reference_idx].clone(),
            hypotheses,
        })?;
    }

    Ok(table)
}

/// Split one delimited record, honoring quoted fields with doubled
/// quotes. Embedded newlines are not supported; normalized transcripts
/// cannot contain them.
fn parse_record(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if quoted {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => quoted = false,
                _ => field.push(c),
            }
        } else {
            match c {
                '"' if field.is_empty() => quoted = true,
                '"' => return Err("unexpected quote inside unquoted field".to_string()),
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    if quoted {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}
