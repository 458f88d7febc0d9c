//! Plain-text extraction from uploaded documents.
//!
//! Dispatch is purely by file extension (case-insensitive), never by content
//! sniffing: the extension is the format contract the caller declared.

mod docx;
mod error;
mod pdf;


pub use error::ExtractError;

use std::path::Path;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Maps a bare extension (without the dot) to a kind, case-insensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Maps a path's extension to a kind.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The canonical (lowercase) extension for this kind.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

/// Extracts plain text from a file, dispatching on its extension.
///
/// Returns [`ExtractError::UnsupportedFormat`] when the extension is neither
/// `.pdf` nor `.docx`. An empty or whitespace-only result is a successful
/// extraction; the pipeline decides what to do with it.
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match DocumentKind::from_extension(extension) {
        Some(DocumentKind::Pdf) => pdf::extract_pdf(path),
        Some(DocumentKind::Docx) => docx::extract_docx(path),
        None => Err(ExtractError::UnsupportedFormat {
            extension: extension.to_string(),
        }),
    }
}
