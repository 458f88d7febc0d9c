//! Shared fixtures for integration tests.

use std::io::Write;
use std::sync::Arc;

use veracity::corpus::ReferenceCorpus;
use veracity::embedding::{Embedder, EmbedderConfig};
use veracity::ledger::DocumentLedger;
use veracity::pipeline::CheckPipeline;
use veracity::scoring::SimilarityScorer;

/// Builds a minimal DOCX container with one `w:p` per paragraph.
pub fn minimal_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default();
        writer
            .start_file("word/document.xml", options)
            .expect("start zip entry");
        writer.write_all(xml.as_bytes()).expect("write zip entry");
        writer.finish().expect("finish zip");
    }
    cursor.into_inner()
}

/// Builds a full pipeline on a stub embedder and an in-memory ledger.
pub fn stub_pipeline() -> Arc<CheckPipeline> {
    let embedder = Embedder::load(EmbedderConfig::stub()).expect("stub embedder");
    let scorer = SimilarityScorer::new(Arc::new(embedder));
    let ledger = Arc::new(DocumentLedger::in_memory().expect("in-memory ledger"));
    let corpus = Arc::new(ReferenceCorpus::builtin());

    Arc::new(CheckPipeline::new(scorer, ledger, corpus))
}
