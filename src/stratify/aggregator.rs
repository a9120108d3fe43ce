//! Grouped bootstrap estimation over results rows

use serde::Serialize;

use super::error::{Result, StratifyError};
use crate::bootstrap::{estimate, BootstrapConfig};
use crate::table::{ResultsRow, ResultsTable};
use crate::text::normalize;
use crate::wer::word_error_rate;

/// Values of the group-by dimensions identifying one group.
pub type GroupKey = Vec<String>;

/// Output ordering policy for group rows.
///
/// Natural string sort does not match domain order ("SNR5dB" vs
/// "SNR15dB"), so an override is always explicit, never inferred.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GroupOrder {
    /// First-seen order of group keys in the (filtered) table.
    #[default]
    Discovery,
    /// The listed keys in exactly this order, then any unlisted
    /// discovered groups in discovery order. A listed key with no rows
    /// fails with [`StratifyError::EmptyGroup`].
    Explicit(Vec<GroupKey>),
}

/// One stratification analysis: which dimensions to group by, which
/// variants to estimate, an optional row filter, and the ordering
/// policy. An empty `group_by` forms a single overall group.
pub struct AnalysisSpec {
    pub label: String,
    pub group_by: Vec<String>,
    pub variants: Vec<String>,
    pub order: GroupOrder,
    filter: Option<Box<dyn Fn(&ResultsRow) -> bool>>,
}

impl AnalysisSpec {
    pub fn new(
        label: impl Into<String>,
        group_by: Vec<String>,
        variants: Vec<String>,
    ) -> Self {
        Self {
            label: label.into(),
            group_by,
            variants,
            order: GroupOrder::Discovery,
            filter: None,
        }
    }

    pub fn with_order(mut self, order: GroupOrder) -> Self {
        self.order = order;
        self
    }

    /// Restrict rows before grouping, e.g. hold the speaker fixed while
    /// varying the noise level.
    pub fn with_filter(mut self, filter: impl Fn(&ResultsRow) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Whether a row passes the filter (all rows pass when unset).
    pub fn matches(&self, row: &ResultsRow) -> bool {
        self.filter.as_ref().map_or(true, |f| f(row))
    }
}

/// Per-variant estimate for one group, in percent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariantStats {
    pub tag: String,
    pub mean: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

/// One emitted group: its key, row count, and per-variant estimates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupStats {
    pub key: GroupKey,
    pub n: usize,
    pub variants: Vec<VariantStats>,
}

/// A completed stratification analysis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub label: String,
    pub group_by: Vec<String>,
    pub variants: Vec<String>,
    pub groups: Vec<GroupStats>,
}

/// Partition the table per `spec` and estimate each group's word error
/// rate per variant with a bootstrap confidence interval.
///
/// A missing or empty hypothesis for a variant is scored as the empty
/// string (a fully deleted utterance), not dropped from the group.
/// Results are expressed in percent.
pub fn aggregate(
    table: &ResultsTable,
    spec: &AnalysisSpec,
    bootstrap: &BootstrapConfig,
) -> Result<AnalysisResult> {
    for key in &spec.group_by {
        if !table.has_metadata_key(key) {
            return Err(StratifyError::UnknownKey(key.clone()));
        }
    }
    for tag in &spec.variants {
        if !table.has_variant(tag) {
            return Err(StratifyError::UnknownVariant(tag.clone()));
        }
    }

    // Partition in discovery order.
    let mut keys: Vec<GroupKey> = Vec::new();
    let mut buckets: Vec<Vec<&ResultsRow>> = Vec::new();
    for row in table.rows().iter().filter(|r| spec.matches(r)) {
        let key: GroupKey = spec
            .group_by
            .iter()
            .map(|k| row.metadata_value(k).unwrap_or_default().to_string())
            .collect();
        match keys.iter().position(|k| k == &key) {
            Some(i) => buckets[i].push(row),
            None => {
                keys.push(key);
                buckets.push(vec![row]);
            }
        }
    }

    let order: Vec<usize> = match &spec.order {
        GroupOrder::Discovery => (0..keys.len()).collect(),
        GroupOrder::Explicit(requested) => {
            let mut order = Vec::with_capacity(keys.len());
            for wanted in requested {
                match keys.iter().position(|k| k == wanted) {
                    Some(i) => order.push(i),
                    None => {
                        return Err(StratifyError::EmptyGroup(format_key(
                            &spec.group_by,
                            wanted,
                        )))
                    }
                }
            }
            for i in 0..keys.len() {
                if !order.contains(&i) {
                    order.push(i);
                }
            }
            order
        }
    };

    let mut groups = Vec::with_capacity(order.len());
    for i in order {
        let bucket = &buckets[i];
        let mut variants = Vec::with_capacity(spec.variants.len());
        for tag in &spec.variants {
            let mut values = Vec::with_capacity(bucket.len());
            for row in bucket {
                let hypothesis = row.hypothesis(tag).unwrap_or_default();
                let rate =
                    word_error_rate(&normalize(&row.reference), &normalize(hypothesis))?;
                values.push(rate * 100.0);
            }
            let est = estimate(&values, bootstrap)?;
            variants.push(VariantStats {
                tag: tag.clone(),
                mean: est.mean,
                ci_low: est.ci_low,
                ci_high: est.ci_high,
            });
        }
        groups.push(GroupStats {
            key: keys[i].clone(),
            n: bucket.len(),
            variants,
        });
    }

    Ok(AnalysisResult {
        label: spec.label.clone(),
        group_by: spec.group_by.clone(),
        variants: spec.variants.clone(),
        groups,
    })
}

fn format_key(group_by: &[String], key: &GroupKey) -> String {
    if group_by.is_empty() {
        return "(overall)".to_string();
    }
    group_by
        .iter()
        .zip(key)
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}
