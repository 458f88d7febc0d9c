//! Veracity library crate (used by the server binary and integration tests).
//!
//! # Module Map
//!
//! - [`config`] - Environment-backed server configuration
//! - [`hashing`] - SHA-256 content fingerprints (the dedup key)
//! - [`extraction`] - PDF/DOCX plain-text extraction
//! - [`embedding`] - Sentence embedding collaborator (candle BERT, stub mode)
//! - [`scoring`] - Cosine-similarity scoring against the reference corpus
//! - [`corpus`] - Reference corpus loading
//! - [`ledger`] - SQLite-backed document ledger
//! - [`pipeline`] - The check-plagiarism request pipeline
//! - [`gateway`] - Axum HTTP surface

pub mod config;
pub mod corpus;
pub mod embedding;
pub mod extraction;
pub mod gateway;
pub mod hashing;
pub mod ledger;
pub mod pipeline;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::{Config, ConfigError};
pub use corpus::{DEFAULT_CORPUS, ReferenceCorpus};
pub use embedding::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, Embedder, EmbedderConfig, EmbeddingError,
};
pub use extraction::{DocumentKind, ExtractError, extract};
pub use gateway::{HandlerState, cors_layer, create_router_with_state};
pub use hashing::{fingerprint_bytes, fingerprint_file};
pub use ledger::{DocumentLedger, DocumentRecord, LedgerError};
pub use pipeline::{CheckError, CheckPipeline, CheckReport};
pub use scoring::{ScoringError, SimilarityScorer, cosine_similarity};
