//! Semantic similarity scoring.
//!
//! Two texts are embedded via the shared [`Embedder`] and compared with cosine
//! similarity, scaled to a 0-100 score rounded to two decimal places. Scores
//! are recomputed on every request; nothing here caches embeddings or results.

mod error;


pub use error::ScoringError;

use std::sync::Arc;

use tracing::debug;

use crate::embedding::Embedder;

/// Similarity scorer backed by the process-wide embedding collaborator.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    embedder: Arc<Embedder>,
}

impl SimilarityScorer {
    pub fn new(embedder: Arc<Embedder>) -> Self {
        Self { embedder }
    }

    /// Scores the closeness of two texts in `[0.0, 100.0]`.
    ///
    /// If either input is empty after trimming, returns `0.0` without invoking
    /// the embedder — an empty embedding has no defined direction.
    pub fn score(&self, left: &str, right: &str) -> Result<f32, ScoringError> {
        if left.trim().is_empty() || right.trim().is_empty() {
            debug!("Empty input, short-circuiting to score 0.0");
            return Ok(0.0);
        }

        let left_embedding = self.embedder.embed(left)?;
        let right_embedding = self.embedder.embed(right)?;

        if left_embedding.len() != right_embedding.len() {
            return Err(ScoringError::DimensionMismatch {
                left: left_embedding.len(),
                right: right_embedding.len(),
            });
        }

        let cosine = cosine_similarity(&left_embedding, &right_embedding);

        // Negative cosine means "less similar than unrelated"; the score floor
        // is 0 so the advertised [0, 100] range holds.
        let score = round2((cosine * 100.0).max(0.0));
        debug!(cosine = cosine, score = score, "Similarity computed");
        Ok(score)
    }

    /// The embedder backing this scorer.
    pub fn embedder(&self) -> &Arc<Embedder> {
        &self.embedder
    }
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns `0.0` when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
