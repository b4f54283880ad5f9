//! PDF text extraction.
//!
//! The search task only needs two things from a document: how many pages it
//! has and the text of a given page. `TextExtractor` opens a document and
//! `PageText` answers those questions, so the coordinator can be driven by
//! the `lopdf` backend in production and by in-memory fakes in tests.
//!
//! Dropping the `PageText` value releases everything the extractor holds for
//! that document.
use std::path::Path;
use tracing::trace;

use crate::errors::{SearchError, SearchResult};

/// Opens documents for page-by-page text extraction
pub trait TextExtractor: Send + Sync {
    type Document: PageText;

    /// Opens and parses the document at `path`
    fn open(&self, path: &Path) -> SearchResult<Self::Document>;
}

/// Page access for an opened document
pub trait PageText {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Text of `page` (1-based). `None` when the page has no extractable
    /// text, e.g. a scanned image.
    fn page_text(&self, page: usize) -> Option<String>;
}

/// Extractor backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

/// A parsed document together with its page numbers in document order
pub struct LopdfDocument {
    doc: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl TextExtractor for LopdfExtractor {
    type Document = LopdfDocument;

    fn open(&self, path: &Path) -> SearchResult<LopdfDocument> {
        // Stat first so missing files and permission problems keep their kind
        std::fs::metadata(path).map_err(|e| SearchError::from_io(path, e))?;

        let doc =
            lopdf::Document::load(path).map_err(|e| SearchError::pdf(path, e.to_string()))?;

        // The loader already decrypted documents that open with an empty
        // user password; only the ones still locked are unreadable
        if doc.is_encrypted() && doc.encryption_state.is_none() {
            return Err(SearchError::encrypted(path));
        }

        // BTreeMap keys, already ascending
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        trace!("Opened {} ({} pages)", path.display(), page_numbers.len());

        Ok(LopdfDocument { doc, page_numbers })
    }
}

impl PageText for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, page: usize) -> Option<String> {
        let number = *self.page_numbers.get(page.checked_sub(1)?)?;
        match self.doc.extract_text(&[number]) {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                trace!("No text extracted from page {}: {}", page, e);
                None
            }
        }
    }
}
