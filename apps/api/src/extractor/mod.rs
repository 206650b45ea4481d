//! Text Extractor — turns an uploaded resume PDF into a single plain-text string.
//!
//! Pages are extracted individually and joined with a single space, in document
//! order. A PDF without a text layer (e.g. a scanned image) is not an error: it
//! yields an empty string.
//!
//! Parsing is CPU-bound, so the async entry point runs it inside
//! `tokio::task::spawn_blocking`.

use thiserror::Error;
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("the uploaded file is not a readable PDF: {0}")]
    Malformed(String),

    #[error("PDF extraction worker failed: {0}")]
    Worker(String),
}

/// Extracts the text of every page and joins it with spaces.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    debug!("Extracted {} page(s) from {} byte PDF", pages.len(), bytes.len());

    if pages.iter().all(|p| p.trim().is_empty()) {
        return Ok(String::new());
    }

    Ok(join_pages(&pages))
}

/// Runs [`extract_text`] on the blocking pool.
///
/// A panic inside the PDF engine is reported as `ExtractionError::Worker`.
pub async fn extract_text_async(bytes: bytes::Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| ExtractionError::Worker(e.to_string()))?
}

/// Space-joins page texts in order. Page text is kept as-is.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Returns true if the content type or leading bytes identify a PDF.
/// - Content-Type: application/pdf (case-insensitive, substring match)
/// - Magic bytes: %PDF-
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("application/pdf") || head.starts_with(PDF_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{blank_pdf, pdf_with_pages};

    #[test]
    fn test_join_pages_preserves_order_and_spacing() {
        assert_eq!(join_pages(&["Hello ", "World"]), "Hello  World");
    }

    #[test]
    fn test_join_pages_single_and_empty() {
        assert_eq!(join_pages(&["only"]), "only");
        assert_eq!(join_pages::<&str>(&[]), "");
    }

    #[test]
    fn test_extract_text_joins_engine_pages_verbatim() {
        let pdf = pdf_with_pages(&["Hello ", "World"]);
        assert_eq!(extract_text(&pdf).unwrap(), "\n\nHello  \n\nWorld");
    }

    #[test]
    fn test_extract_text_reads_pages_in_order() {
        let pdf = pdf_with_pages(&["Hello", "World"]);
        let text = extract_text(&pdf).unwrap();

        let hello = text.find("Hello").expect("first page text present");
        let world = text.find("World").expect("second page text present");
        assert!(hello < world);
    }

    #[test]
    fn test_extract_text_is_deterministic() {
        let pdf = pdf_with_pages(&["Senior Rust Engineer", "Tokio, Axum, SQL"]);
        let first = extract_text(&pdf).unwrap();
        let second = extract_text(&pdf).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_text_without_text_layer_is_empty() {
        let pdf = blank_pdf();
        assert_eq!(extract_text(&pdf).unwrap(), "");
    }

    #[test]
    fn test_extract_text_rejects_non_pdf_bytes() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_extract_text_async_matches_sync() {
        let pdf = pdf_with_pages(&["Python developer"]);
        let sync = extract_text(&pdf).unwrap();
        let from_pool = extract_text_async(bytes::Bytes::from(pdf)).await.unwrap();
        assert_eq!(sync, from_pool);
    }

    #[test]
    fn test_is_pdf_by_content_type_or_magic() {
        assert!(is_pdf(Some("application/pdf"), b""));
        assert!(is_pdf(Some("Application/PDF; charset=binary"), b""));
        assert!(is_pdf(None, b"%PDF-1.7\n"));
        assert!(is_pdf(Some("application/octet-stream"), b"%PDF-1.4"));
        assert!(!is_pdf(Some("text/plain"), b"hello"));
        assert!(!is_pdf(None, b""));
    }
}
