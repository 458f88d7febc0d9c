use thiserror::Error;

/// Errors produced while turning an uploaded file into plain text.
///
/// An extraction that succeeds but yields empty text is NOT an error; callers
/// check for that outcome explicitly.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format '{extension}': supported formats are .pdf, .docx")]
    UnsupportedFormat { extension: String },

    #[error("failed to read PDF file: {reason}")]
    Pdf { reason: String },

    #[error("failed to read DOCX file: {reason}")]
    Docx { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
