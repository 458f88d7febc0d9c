//! PDF text extraction, a thin wrapper over the `pdf-extract` crate.

use std::path::Path;

use tracing::debug;

use super::error::ExtractError;

/// Extracts the text of every page, joined with newlines and trimmed at the end.
///
/// Fails with [`ExtractError::Pdf`] when the file is corrupt, encrypted, or
/// otherwise unreadable by the parser.
pub fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf {
        reason: e.to_string(),
    })?;

    debug!(chars = text.len(), "PDF text extracted");
    Ok(text.trim().to_string())
}
