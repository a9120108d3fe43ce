//! Batch orchestrator

use super::collaborator::{CollaboratorError, ReferenceSource, Transcriber};
use super::error::{BatchError, Result};
use crate::corpus::CorpusItem;
use crate::table::{ResultsRow, ResultsTable};

/// One item excluded from the results table, with its failure reason.
#[derive(Debug)]
pub struct SkippedItem {
    pub id: String,
    pub reason: CollaboratorError,
}

/// Outcome of a batch run: the assembled table plus every skipped item.
/// `table.len() + skipped.len()` equals the number of input items, and
/// surviving rows preserve the input order.
#[derive(Debug)]
pub struct BatchOutcome {
    pub table: ResultsTable,
    pub skipped: Vec<SkippedItem>,
}

impl BatchOutcome {
    pub fn processed(&self) -> usize {
        self.table.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Drives the evaluation over a corpus. Constructed explicitly with its
/// collaborators at run start, used read-only, and dropped at run end;
/// there is no ambient global state.
pub struct BatchOrchestrator<'a> {
    reference: &'a dyn ReferenceSource,
    variants: Vec<(String, Box<dyn Transcriber + 'a>)>,
}

impl<'a> BatchOrchestrator<'a> {
    pub fn new(reference: &'a dyn ReferenceSource) -> Self {
        Self {
            reference,
            variants: Vec::new(),
        }
    }

    /// Register a decoding variant; output columns follow registration
    /// order.
    pub fn with_variant(
        mut self,
        tag: impl Into<String>,
        transcriber: impl Transcriber + 'a,
    ) -> Self {
        self.variants.push((tag.into(), Box::new(transcriber)));
        self
    }

    /// Process every item in input order. Each item either contributes
    /// a full row across all registered variants or is skipped with a
    /// recorded reason; a single bad item never aborts the run.
    pub fn run(&self, items: &[CorpusItem]) -> Result<BatchOutcome> {
        if items.is_empty() {
            return Err(BatchError::EmptyCorpus);
        }

        let mut rows: Vec<ResultsRow> = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();
        for item in items {
            match self.process(item) {
                Ok(row) => rows.push(row),
                Err(reason) => skipped.push(SkippedItem {
                    id: item.id.clone(),
                    reason,
                }),
            }
        }

        let metadata_keys = rows
            .first()
            .map(|row| row.metadata.iter().map(|(k, _)| k.clone()).collect())
            .unwrap_or_default();
        let tags = self.variants.iter().map(|(t, _)| t.clone()).collect();
        let mut table = ResultsTable::new(metadata_keys, tags);
        for row in rows {
            table.push(row)?;
        }

        Ok(BatchOutcome { table, skipped })
    }

    fn process(&self, item: &CorpusItem) -> std::result::Result<ResultsRow, CollaboratorError> {
        let (metadata, reference) = self.reference.resolve(item)?;
        let mut hypotheses = Vec::with_capacity(self.variants.len());
        for (tag, transcriber) in &self.variants {
            hypotheses.push((tag.clone(), transcriber.transcribe(item)?));
        }
        Ok(ResultsRow {
            id: item.id.clone(),
            metadata,
            reference,
            hypotheses,
        })
    }
}
