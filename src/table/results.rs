//! In-memory results table

use super::error::{Result, TableError};

/// One processed corpus item: metadata, reference, and one hypothesis
/// per decoding variant. Immutable once pushed into a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsRow {
    /// Item identity (file name)
    pub id: String,
    /// Ordered categorical attributes, e.g. snr/speaker/length
    pub metadata: Vec<(String, String)>,
    /// Normalized reference transcript
    pub reference: String,
    /// Normalized hypothesis per variant tag, in variant order
    pub hypotheses: Vec<(String, String)>,
}

impl ResultsRow {
    /// Metadata value for `key`, if the dimension exists.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Hypothesis text for a variant tag, if the variant exists.
    pub fn hypothesis(&self, tag: &str) -> Option<&str> {
        self.hypotheses
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, h)| h.as_str())
    }
}

/// Ordered collection of results rows with a fixed column set.
#[derive(Clone, Debug, Default)]
pub struct ResultsTable {
    metadata_keys: Vec<String>,
    variants: Vec<String>,
    rows: Vec<ResultsRow>,
}

impl ResultsTable {
    /// Create an empty table with the given column set.
    pub fn new(metadata_keys: Vec<String>, variants: Vec<String>) -> Self {
        Self {
            metadata_keys,
            variants,
            rows: Vec::new(),
        }
    }

    /// Append a row, enforcing the fixed column set.
    pub fn push(&mut self, row: ResultsRow) -> Result<()> {
        let keys_match = row.metadata.len() == self.metadata_keys.len()
            && row
                .metadata
                .iter()
                .zip(&self.metadata_keys)
                .all(|((k, _), expected)| k == expected);
        let variants_match = row.hypotheses.len() == self.variants.len()
            && row
                .hypotheses
                .iter()
                .zip(&self.variants)
                .all(|((t, _), expected)| t == expected);

        if !keys_match || !variants_match {
            return Err(TableError::ColumnMismatch { id: row.id });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn rows(&self) -> &[ResultsRow] {
        &self.rows
    }

    pub fn metadata_keys(&self) -> &[String] {
        &self.metadata_keys
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_metadata_key(&self, key: &str) -> bool {
        self.metadata_keys.iter().any(|k| k == key)
    }

    pub fn has_variant(&self, tag: &str) -> bool {
        self.variants.iter().any(|t| t == tag)
    }

    /// Distinct values of a metadata dimension in first-seen row order.
    pub fn metadata_values(&self, key: &str) -> Vec<&str> {
        let mut values: Vec<&str> = Vec::new();
        for row in &self.rows {
            if let Some(value) = row.metadata_value(key) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, snr: &str) -> ResultsRow {
        ResultsRow {
            id: id.to_string(),
            metadata: vec![("snr".to_string(), snr.to_string())],
            reference: "one".to_string(),
            hypotheses: vec![("no-lm".to_string(), "one".to_string())],
        }
    }

    #[test]
    fn test_push_and_accessors() {
        let mut table =
            ResultsTable::new(vec!["snr".to_string()], vec!["no-lm".to_string()]);
        table.push(row("a.wav", "SNR35dB")).unwrap();
        table.push(row("b.wav", "SNR05dB")).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.has_metadata_key("snr"));
        assert!(!table.has_metadata_key("speaker"));
        assert!(table.has_variant("no-lm"));
        assert!(!table.has_variant("with-lm"));
        assert_eq!(table.rows()[0].metadata_value("snr"), Some("SNR35dB"));
        assert_eq!(table.rows()[0].hypothesis("no-lm"), Some("one"));
        assert_eq!(table.rows()[0].hypothesis("with-lm"), None);
    }

    #[test]
    fn test_metadata_values_discovery_order() {
        let mut table =
            ResultsTable::new(vec!["snr".to_string()], vec!["no-lm".to_string()]);
        for snr in ["SNR35dB", "SNR05dB", "SNR35dB", "SNR15dB"] {
            table.push(row("x.wav", snr)).unwrap();
        }
        assert_eq!(
            table.metadata_values("snr"),
            vec!["SNR35dB", "SNR05dB", "SNR15dB"]
        );
    }

    #[test]
    fn test_column_mismatch_rejected() {
        let mut table =
            ResultsTable::new(vec!["snr".to_string()], vec!["no-lm".to_string()]);

        let mut bad = row("c.wav", "SNR35dB");
        bad.metadata = vec![("speaker".to_string(), "man".to_string())];
        assert!(matches!(
            table.push(bad),
            Err(TableError::ColumnMismatch { .. })
        ));

        let mut bad = row("d.wav", "SNR35dB");
        bad.hypotheses.push(("with-lm".to_string(), "one".to_string()));
        assert!(matches!(
            table.push(bad),
            Err(TableError::ColumnMismatch { .. })
        ));
    }
}
