use std::path::PathBuf;

use super::*;
use crate::corpus::CorpusItem;

struct StubReference;

impl ReferenceSource for StubReference {
    fn resolve(
        &self,
        item: &CorpusItem,
    ) -> std::result::Result<(Vec<(String, String)>, String), CollaboratorError> {
        if item.id.starts_with("bad") {
            return Err(CollaboratorError::NotFound(format!(
                "no reference transcript for {}",
                item.id
            )));
        }
        Ok((
            vec![("snr".to_string(), "SNR35dB".to_string())],
            "one two three".to_string(),
        ))
    }
}

fn items(ids: &[&str]) -> Vec<CorpusItem> {
    ids.iter()
        .map(|id| CorpusItem {
            id: id.to_string(),
            path: PathBuf::from(id),
        })
        .collect()
}

fn echo(text: &'static str) -> impl Transcriber {
    move |_: &CorpusItem| -> std::result::Result<String, CollaboratorError> {
        Ok(text.to_string())
    }
}

#[test]
fn test_failing_item_is_isolated() {
    let reference = StubReference;
    let orchestrator =
        BatchOrchestrator::new(&reference).with_variant("no-lm", echo("one two three"));

    let items = items(&["i1", "i2", "bad3", "i4", "i5"]);
    let outcome = orchestrator.run(&items).unwrap();

    assert_eq!(outcome.processed(), 4);
    assert_eq!(outcome.skipped_count(), 1);
    assert_eq!(outcome.skipped[0].id, "bad3");
    assert!(matches!(
        outcome.skipped[0].reason,
        CollaboratorError::NotFound(_)
    ));

    // Survivors preserve input order.
    let ids: Vec<&str> = outcome.table.rows().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["i1", "i2", "i4", "i5"]);
}

#[test]
fn test_row_and_skip_counts_account_for_every_item() {
    let reference = StubReference;
    let orchestrator =
        BatchOrchestrator::new(&reference).with_variant("no-lm", echo("one"));

    let items = items(&["bad1", "i2", "bad3", "i4"]);
    let outcome = orchestrator.run(&items).unwrap();
    assert_eq!(
        outcome.processed() + outcome.skipped_count(),
        items.len()
    );
}

#[test]
fn test_variant_failure_drops_whole_row() {
    let reference = StubReference;
    let orchestrator = BatchOrchestrator::new(&reference)
        .with_variant("no-lm", echo("one two three"))
        .with_variant("with-lm", |item: &CorpusItem| {
            if item.id == "i2" {
                Err(CollaboratorError::Transcription("beam search died".to_string()))
            } else {
                Ok("one two three".to_string())
            }
        });

    let outcome = orchestrator.run(&items(&["i1", "i2", "i3"])).unwrap();

    // No partial rows: i2 is skipped entirely even though its first
    // variant succeeded.
    assert_eq!(outcome.processed(), 2);
    assert_eq!(outcome.skipped[0].id, "i2");
    assert!(matches!(
        outcome.skipped[0].reason,
        CollaboratorError::Transcription(_)
    ));
    for row in outcome.table.rows() {
        assert_eq!(row.hypotheses.len(), 2);
    }
}

#[test]
fn test_variant_columns_follow_registration_order() {
    let reference = StubReference;
    let orchestrator = BatchOrchestrator::new(&reference)
        .with_variant("no-lm", echo("one"))
        .with_variant("with-lm", echo("two"));

    let outcome = orchestrator.run(&items(&["i1"])).unwrap();
    assert_eq!(outcome.table.variants(), ["no-lm", "with-lm"]);
    assert_eq!(outcome.table.metadata_keys(), ["snr"]);
    assert_eq!(outcome.table.rows()[0].hypothesis("no-lm"), Some("one"));
    assert_eq!(outcome.table.rows()[0].hypothesis("with-lm"), Some("two"));
}

#[test]
fn test_empty_corpus_is_fatal() {
    let reference = StubReference;
    let orchestrator = BatchOrchestrator::new(&reference).with_variant("no-lm", echo("x"));
    assert!(matches!(
        orchestrator.run(&[]),
        Err(BatchError::EmptyCorpus)
    ));
}

#[test]
fn test_all_items_skipped_yields_empty_table() {
    let reference = StubReference;
    let orchestrator = BatchOrchestrator::new(&reference).with_variant("no-lm", echo("x"));
    let outcome = orchestrator.run(&items(&["bad1", "bad2"])).unwrap();
    assert!(outcome.table.is_empty());
    assert_eq!(outcome.skipped_count(), 2);
}
