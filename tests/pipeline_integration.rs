//! End-to-end pipeline behavior through the public library API.

mod common;

use std::sync::Arc;

use veracity::hashing::fingerprint_bytes;
use veracity::pipeline::CheckError;

use common::{minimal_docx, stub_pipeline};

#[test]
fn check_upload_then_reupload_keeps_one_record() {
    let pipeline = stub_pipeline();
    let bytes = minimal_docx(&["An essay paragraph about regional trade agreements."]);

    let first = pipeline
        .check("essay.docx", &bytes)
        .expect("first check succeeds");
    let second = pipeline
        .check("essay-final-v2.docx", &bytes)
        .expect("second check succeeds");

    assert_eq!(first.fingerprint, fingerprint_bytes(&bytes));
    assert_eq!(second.record.id, first.record.id);
    assert_eq!(second.record.filename, "essay.docx");
    assert_eq!(second.record.uploaded_at, first.record.uploaded_at);
    assert!(second.previously_seen);
    assert_eq!(pipeline.ledger().len().expect("count"), 1);
}

#[test]
fn distinct_documents_accumulate_distinct_records() {
    let pipeline = stub_pipeline();

    for i in 0..5 {
        let bytes = minimal_docx(&[&format!("Document number {i}.")]);
        pipeline
            .check(&format!("doc-{i}.docx"), &bytes)
            .expect("check succeeds");
    }

    assert_eq!(pipeline.ledger().len().expect("count"), 5);
}

#[test]
fn concurrent_identical_uploads_dedup_to_one_record() {
    let pipeline = stub_pipeline();
    let bytes = minimal_docx(&["Raced upload content."]);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let pipeline = Arc::clone(&pipeline);
            let bytes = bytes.clone();
            std::thread::spawn(move || {
                pipeline
                    .check(&format!("upload-{i}.docx"), &bytes)
                    .expect("check succeeds")
            })
        })
        .collect();

    let reports: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();

    let first_id = reports[0].record.id;
    assert!(reports.iter().all(|r| r.record.id == first_id));
    assert_eq!(pipeline.ledger().len().expect("count"), 1);
}

#[test]
fn failed_checks_leave_no_trace() {
    let pipeline = stub_pipeline();

    assert!(matches!(
        pipeline.check("notes.txt", b"some text"),
        Err(CheckError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        pipeline.check("empty.docx", b""),
        Err(CheckError::EmptyUpload)
    ));

    let mut corrupt = minimal_docx(&["Truncated soon."]);
    corrupt.truncate(10);
    assert!(matches!(
        pipeline.check("corrupt.docx", &corrupt),
        Err(CheckError::Extraction(_))
    ));

    assert!(pipeline.ledger().is_empty().expect("count"));
}

#[test]
fn scores_are_deterministic_per_content() {
    let pipeline = stub_pipeline();
    let bytes = minimal_docx(&["A sentence scored twice should score identically."]);

    let first = pipeline.check("a.docx", &bytes).expect("check");
    let second = pipeline.check("b.docx", &bytes).expect("check");

    assert_eq!(first.similarity_score, second.similarity_score);
    assert!((0.0..=100.0).contains(&first.similarity_score));
}
