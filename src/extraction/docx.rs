//! DOCX text extraction.
//!
//! A `.docx` file is a zip container; the document body lives in
//! `word/document.xml`. Text runs (`w:t`) are collected per paragraph (`w:p`)
//! and paragraphs are joined with newlines, matching how the PDF side joins
//! pages.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use super::error::ExtractError;

/// Extracts paragraph text from a DOCX file, joined by newlines and trimmed at
/// the end.
///
/// Fails with [`ExtractError::Docx`] when the container or its document XML is
/// corrupt or missing.
pub fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;

    let mut archive = zip::ZipArchive::new(file).map_err(|e| ExtractError::Docx {
        reason: format!("not a valid DOCX container: {e}"),
    })?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx {
            reason: format!("missing document body: {e}"),
        })?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx {
            reason: format!("unreadable document body: {e}"),
        })?;

    let text = document_text(&xml)?;
    debug!(chars = text.len(), "DOCX text extracted");
    Ok(text)
}

/// Walks the document XML, collecting `w:t` content into one string per `w:p`.
fn document_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let run = t.unescape().map_err(|e| ExtractError::Docx {
                    reason: format!("malformed text run: {e}"),
                })?;
                current.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractError::Docx {
                    reason: format!("malformed document XML: {e}"),
                });
            }
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n").trim().to_string())
}
