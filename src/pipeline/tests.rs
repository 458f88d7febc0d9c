use super::*;

use crate::embedding::{Embedder, EmbedderConfig};
use crate::test_fixtures::minimal_docx;

use tempfile::TempDir;

fn test_pipeline(staging_root: &TempDir) -> CheckPipeline {
    let embedder = Embedder::load(EmbedderConfig::stub()).expect("stub embedder");
    let scorer = SimilarityScorer::new(Arc::new(embedder));
    let ledger = Arc::new(DocumentLedger::in_memory().expect("ledger"));
    let corpus = Arc::new(ReferenceCorpus::builtin());

    CheckPipeline::new(scorer, ledger, corpus).with_staging_root(staging_root.path())
}

fn staging_entries(root: &TempDir) -> usize {
    std::fs::read_dir(root.path()).expect("read staging root").count()
}

#[test]
fn test_successful_check_populates_report() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);
    let bytes = minimal_docx(&["A single sentence that is not in the reference corpus."]);

    let report = pipeline.check("paper.docx", &bytes).expect("check");

    assert_eq!(report.record.filename, "paper.docx");
    assert_eq!(report.fingerprint, crate::hashing::fingerprint_bytes(&bytes));
    assert!((0.0..=100.0).contains(&report.similarity_score));
    assert!(report.text_length > 0);
    assert!(!report.previously_seen);
    assert_eq!(pipeline.ledger().len().expect("count"), 1);
}

#[test]
fn test_unrelated_sentence_scores_low() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);
    let bytes = minimal_docx(&["Quantum chromodynamics of charm quarks."]);

    let report = pipeline.check("physics.docx", &bytes).expect("check");
    assert!(report.similarity_score < 25.0, "score was {}", report.similarity_score);
}

#[test]
fn test_dedup_same_bytes_two_filenames_one_record() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);
    let bytes = minimal_docx(&["Shared content, checked twice."]);

    let first = pipeline.check("original.docx", &bytes).expect("first check");
    let second = pipeline.check("copy.docx", &bytes).expect("second check");

    assert_eq!(second.record.id, first.record.id);
    assert_eq!(second.fingerprint, first.fingerprint);
    // The record keeps the filename of whichever request created it.
    assert_eq!(second.record.filename, "original.docx");
    assert!(!first.previously_seen);
    assert!(second.previously_seen);
    assert_eq!(pipeline.ledger().len().expect("count"), 1);
}

#[test]
fn test_duplicate_is_rescored_every_time() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);
    let bytes = minimal_docx(&["Deterministic content scores deterministically."]);

    let first = pipeline.check("a.docx", &bytes).expect("first check");
    let second = pipeline.check("b.docx", &bytes).expect("second check");

    // Recomputed, not replayed; the stub embedder makes both runs agree.
    assert_eq!(first.similarity_score, second.similarity_score);
}

#[test]
fn test_unsupported_extension_no_side_effects() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);

    let result = pipeline.check("essay.txt", b"plain text content");

    match result {
        Err(CheckError::UnsupportedFormat { extension }) => assert_eq!(extension, "txt"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
    assert!(pipeline.ledger().is_empty().expect("count"));
    assert_eq!(staging_entries(&staging), 0);
}

#[test]
fn test_empty_upload_rejected() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);

    assert!(matches!(
        pipeline.check("empty.pdf", b""),
        Err(CheckError::EmptyUpload)
    ));
    assert!(matches!(
        pipeline.check("blank.pdf", b"   \n\t  "),
        Err(CheckError::EmptyUpload)
    ));
    assert!(pipeline.ledger().is_empty().expect("count"));
}

#[test]
fn test_corrupted_docx_is_extraction_failure_without_ledger_write() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);
    let mut bytes = minimal_docx(&["About to be truncated."]);
    bytes.truncate(bytes.len() / 2);

    let result = pipeline.check("corrupt.docx", &bytes);

    assert!(matches!(result, Err(CheckError::Extraction(_))));
    assert!(pipeline.ledger().is_empty().expect("count"));
}

#[test]
fn test_whitespace_only_document_is_no_text_extracted() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);
    let bytes = minimal_docx(&["   ", "\u{00a0}"]);

    let result = pipeline.check("blank.docx", &bytes);

    assert!(matches!(result, Err(CheckError::NoTextExtracted)));
    assert!(pipeline.ledger().is_empty().expect("count"));
}

#[test]
fn test_staging_is_cleaned_up_on_every_path() {
    let staging = TempDir::new().expect("staging root");
    let pipeline = test_pipeline(&staging);

    // Success path.
    let ok_bytes = minimal_docx(&["Cleanly checked document."]);
    pipeline.check("ok.docx", &ok_bytes).expect("check");
    assert_eq!(staging_entries(&staging), 0);

    // Extraction failure path.
    let mut corrupt = minimal_docx(&["Broken."]);
    corrupt.truncate(corrupt.len() / 2);
    let _ = pipeline.check("broken.docx", &corrupt);
    assert_eq!(staging_entries(&staging), 0);

    // No-text path.
    let blank = minimal_docx(&[]);
    let _ = pipeline.check("blank.docx", &blank);
    assert_eq!(staging_entries(&staging), 0);
}
