use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

use super::matcher::TermMatcher;
use crate::errors::SearchResult;
use crate::extract::{PageText, TextExtractor};
use crate::metrics::WorkerMetrics;
use crate::results::SearchOutcome;

/// Runs the search task for single files
pub struct FileProcessor<E> {
    matcher: TermMatcher,
    extractor: Arc<E>,
    metrics: WorkerMetrics,
}

impl<E: TextExtractor> FileProcessor<E> {
    /// Creates a new FileProcessor with the given matcher and extractor
    pub fn new(matcher: TermMatcher, extractor: Arc<E>) -> Self {
        Self {
            matcher,
            extractor,
            metrics: WorkerMetrics::new(),
        }
    }

    /// Gets the worker metrics shared by every task of this processor
    pub fn metrics(&self) -> &WorkerMetrics {
        &self.metrics
    }

    /// Searches one file. Never fails: open and parse errors, and panics
    /// raised by the extractor, become `SearchOutcome::ReadError`.
    pub fn process_file(&self, path: &Path) -> SearchOutcome {
        let _guard = self.metrics.task_started();

        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| self.first_matching_page(path)))
        {
            Ok(Ok(Some(page))) => SearchOutcome::Found {
                path: path.to_path_buf(),
                page,
            },
            Ok(Ok(None)) => SearchOutcome::NotFound {
                path: path.to_path_buf(),
            },
            Ok(Err(e)) => SearchOutcome::ReadError {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            Err(payload) => SearchOutcome::ReadError {
                path: path.to_path_buf(),
                message: format!("extractor panicked: {}", panic_message(payload.as_ref())),
            },
        };

        debug!("{}: {:?}", path.display(), outcome);
        outcome
    }

    /// Scans pages in order and stops at the first one that satisfies the matcher
    fn first_matching_page(&self, path: &Path) -> SearchResult<Option<usize>> {
        let doc = self.extractor.open(path)?;
        let mut scan = self.matcher.scan();
        let mut scanned = 0u64;
        let mut found = None;

        for page in 1..=doc.page_count() {
            scanned += 1;
            let text = doc.page_text(page).unwrap_or_default();
            trace!("{} page {}: {} chars", path.display(), page, text.len());
            if scan.feed(&text) {
                found = Some(page);
                break;
            }
        }

        self.metrics.record_pages(scanned);
        Ok(found)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
