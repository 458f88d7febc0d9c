//! The check-plagiarism request pipeline.
//!
//! One call per upload: validate → stage → fingerprint → dedup lookup →
//! extract → score → persist. The staged copy lives in a per-request temp
//! directory whose guard removes it on every exit path, success or not.

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::corpus::ReferenceCorpus;
use crate::extraction::{self, DocumentKind, ExtractError};
use crate::hashing;
use crate::ledger::{DocumentLedger, DocumentRecord, LedgerError};
use crate::scoring::{ScoringError, SimilarityScorer};

/// Errors terminating a pipeline run, grouped by how they surface to callers:
/// validation (client input), extraction (unprocessable file), dependency
/// (scorer/ledger), internal (staging).
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("unsupported file format '{extension}': supported formats are .pdf, .docx")]
    UnsupportedFormat { extension: String },

    #[error("the uploaded document is empty")]
    EmptyUpload,

    #[error("error extracting text from file: {0}")]
    Extraction(#[from] ExtractError),

    #[error("no text could be extracted from the uploaded file")]
    NoTextExtracted,

    #[error("similarity scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("document ledger failure: {0}")]
    Ledger(#[from] LedgerError),

    #[error("failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),
}

/// The successful outcome of one pipeline run.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// The (new or pre-existing) ledger record for this content.
    pub record: DocumentRecord,
    /// Hex SHA-256 of the uploaded bytes.
    pub fingerprint: String,
    /// Similarity against the reference corpus, in [0, 100].
    pub similarity_score: f32,
    /// Character count of the extracted text.
    pub text_length: usize,
    /// Whether this fingerprint was already ledgered before this run.
    pub previously_seen: bool,
}

/// Orchestrates one plagiarism check per call.
///
/// Holds only shared read-safe collaborators, so a single pipeline instance
/// serves all requests concurrently.
pub struct CheckPipeline {
    scorer: SimilarityScorer,
    ledger: Arc<DocumentLedger>,
    corpus: Arc<ReferenceCorpus>,
    staging_root: PathBuf,
}

impl CheckPipeline {
    pub fn new(
        scorer: SimilarityScorer,
        ledger: Arc<DocumentLedger>,
        corpus: Arc<ReferenceCorpus>,
    ) -> Self {
        Self {
            scorer,
            ledger,
            corpus,
            staging_root: std::env::temp_dir(),
        }
    }

    /// Overrides where per-request staging directories are created.
    pub fn with_staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = root.into();
        self
    }

    /// Runs the full check for one upload.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub fn check(&self, filename: &str, bytes: &[u8]) -> Result<CheckReport, CheckError> {
        // 1. Validate: extension and non-blank content, before any side effect.
        let kind = document_kind(filename)?;

        if bytes.is_empty() || bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(CheckError::EmptyUpload);
        }

        // 2. Stage: unique per-request directory, removed by the guard on
        // every exit path. Removal failures are swallowed by the guard, never
        // surfaced as the request's outcome.
        let staging = tempfile::Builder::new()
            .prefix("veracity-upload-")
            .tempdir_in(&self.staging_root)?;
        let staged_path = staging.path().join(format!("document.{}", kind.extension()));
        std::fs::write(&staged_path, bytes)?;

        // 3. Fingerprint the staged copy.
        let fingerprint = hashing::fingerprint_file(&staged_path)?;

        // 4. Dedup lookup. Scoring is never skipped for a known fingerprint;
        // the result only informs the report.
        let existing = self.ledger.find_by_fingerprint(&fingerprint)?;
        let previously_seen = existing.is_some();
        if previously_seen {
            debug!(fingerprint = %fingerprint, "Content fingerprint already ledgered");
        }

        // 5. Extract. Whitespace-only text is a distinct, non-exceptional
        // outcome the extractor reports as Ok; both cases end the run here
        // with no ledger write.
        let text = extraction::extract(&staged_path)?;
        if text.trim().is_empty() {
            warn!(filename = %filename, "Extraction produced no text");
            return Err(CheckError::NoTextExtracted);
        }

        // 6. Score against the reference corpus.
        let similarity_score = self.scorer.score(&text, self.corpus.text())?;

        // 7. Persist (idempotent).
        let record = self.ledger.create_if_absent(filename, &fingerprint)?;

        debug!(
            document_id = record.id,
            score = similarity_score,
            previously_seen,
            "Check complete"
        );

        Ok(CheckReport {
            record,
            fingerprint,
            similarity_score,
            text_length: text.chars().count(),
            previously_seen,
        })
    }

    /// The ledger shared with this pipeline.
    pub fn ledger(&self) -> &Arc<DocumentLedger> {
        &self.ledger
    }
}

fn document_kind(filename: &str) -> Result<DocumentKind, CheckError> {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    DocumentKind::from_extension(extension).ok_or_else(|| CheckError::UnsupportedFormat {
        extension: extension.to_string(),
    })
}
