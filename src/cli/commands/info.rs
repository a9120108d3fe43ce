//! Info command implementation

use serde::Serialize;

use crate::cli::{log, LogLevel};
use crate::config::{InfoArgs, OutputFormat};
use crate::corpus::{self, parse_metadata};

/// Corpus composition: total items plus value counts per metadata
/// dimension, in discovery order.
#[derive(Debug, Serialize)]
struct CorpusSummary {
    root: String,
    items: usize,
    dimensions: Vec<DimensionSummary>,
}

#[derive(Debug, Serialize)]
struct DimensionSummary {
    key: String,
    values: Vec<ValueCount>,
}

#[derive(Debug, Serialize)]
struct ValueCount {
    value: String,
    count: usize,
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let items = corpus::scan(&args.corpus, &args.extension).map_err(|e| e.to_string())?;
    let summary = summarize(&args.corpus.display().to_string(), &items);

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, &format!("corpus: {}", summary.root));
            log(level, LogLevel::Normal, &format!("items: {}", summary.items));
            for dimension in &summary.dimensions {
                let counts: Vec<String> = dimension
                    .values
                    .iter()
                    .map(|v| format!("{} ({})", v.value, v.count))
                    .collect();
                log(
                    level,
                    LogLevel::Normal,
                    &format!("{}: {}", dimension.key, counts.join(", ")),
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn summarize(root: &str, items: &[corpus::CorpusItem]) -> CorpusSummary {
    let mut dimensions: Vec<DimensionSummary> = Vec::new();
    for item in items {
        for (key, value) in parse_metadata(&item.path) {
            let index = match dimensions.iter().position(|d| d.key == key) {
                Some(i) => i,
                None => {
                    dimensions.push(DimensionSummary {
                        key: key.clone(),
                        values: Vec::new(),
                    });
                    dimensions.len() - 1
                }
            };
            let dimension = &mut dimensions[index];
            match dimension.values.iter_mut().find(|v| v.value == value) {
                Some(v) => v.count += 1,
                None => dimension.values.push(ValueCount { value, count: 1 }),
            }
        }
    }
    CorpusSummary {
        root: root.to_string(),
        items: items.len(),
        dimensions,
    }
}
