//! Document-to-text extraction boundary.
//!
//! Plain-text uploads are read directly; PDF payloads go through
//! `pdf-extract`. The extractor is a trait so the API layer can be tested
//! against a stub without real documents.

use thiserror::Error;
use tracing::debug;

/// Minimum extractable text below which a PDF is treated as scanned.
const MIN_TEXT_CHARS: usize = 50;
const MIN_NON_WHITESPACE_CHARS: usize = 20;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("File is not valid UTF-8 text")]
    InvalidText,

    #[error("PDF is password-protected")]
    PasswordProtected,

    #[error("PDF appears to be scanned and contains no extractable text")]
    ScannedNeedsOcr,

    #[error("Invalid or corrupted document: {0}")]
    InvalidDocument(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),
}

/// Swappable file-to-text collaborator: bytes plus declared MIME type in,
/// extracted text out.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], mime_type: &str) -> Result<String, ExtractError>;
}

/// In-process extractor covering plain text and PDF.
pub struct LocalExtractor;

impl LocalExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_plain_text(bytes: &[u8]) -> Result<String, ExtractError> {
        String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::InvalidText)
    }

    fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
        let text = match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(e) => {
                let message = e.to_string();
                let lowered = message.to_lowercase();
                if lowered.contains("encrypted") || lowered.contains("password") {
                    return Err(ExtractError::PasswordProtected);
                }
                if lowered.contains("invalid")
                    || lowered.contains("malformed")
                    || lowered.contains("corrupt")
                {
                    return Err(ExtractError::InvalidDocument(message));
                }
                return Err(ExtractError::Extraction(message));
            }
        };

        // Scanned PDFs extract as near-empty text; surface that explicitly
        // instead of sending an empty document to analysis.
        let trimmed = text.trim();
        if trimmed.len() < MIN_TEXT_CHARS {
            return Err(ExtractError::ScannedNeedsOcr);
        }
        let non_whitespace = trimmed.chars().filter(|c| !c.is_whitespace()).count();
        if non_whitespace < MIN_NON_WHITESPACE_CHARS {
            return Err(ExtractError::ScannedNeedsOcr);
        }

        Ok(text)
    }
}

impl Default for LocalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for LocalExtractor {
    fn extract(&self, bytes: &[u8], mime_type: &str) -> Result<String, ExtractError> {
        debug!("Extracting text: mime={}, {} bytes", mime_type, bytes.len());
        match mime_type {
            "text/plain" | "text/markdown" => Self::extract_plain_text(bytes),
            "application/pdf" => Self::extract_pdf(bytes),
            other => Err(ExtractError::UnsupportedType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_read_directly() {
        let extractor = LocalExtractor::new();
        let text = extractor
            .extract(b"This NDA is between the parties.", "text/plain")
            .unwrap();
        assert_eq!(text, "This NDA is between the parties.");
    }

    #[test]
    fn markdown_is_treated_as_text() {
        let extractor = LocalExtractor::new();
        let text = extractor.extract(b"# NDA\n\nBody.", "text/markdown").unwrap();
        assert_eq!(text, "# NDA\n\nBody.");
    }

    #[test]
    fn non_utf8_text_is_rejected() {
        let extractor = LocalExtractor::new();
        let result = extractor.extract(&[0xFF, 0xFE, 0x00], "text/plain");
        assert!(matches!(result, Err(ExtractError::InvalidText)));
    }

    #[test]
    fn unknown_mime_type_is_rejected() {
        let extractor = LocalExtractor::new();
        let result = extractor.extract(b"data", "application/zip");
        match result {
            Err(ExtractError::UnsupportedType(mime)) => assert_eq!(mime, "application/zip"),
            other => panic!("expected UnsupportedType, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn garbage_pdf_bytes_fail_extraction() {
        let extractor = LocalExtractor::new();
        let result = extractor.extract(b"not a pdf at all", "application/pdf");
        assert!(result.is_err());
    }
}
