use rayon::ThreadPoolBuilder;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::matcher::TermMatcher;
use super::processor::FileProcessor;
use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};
use crate::extract::{LopdfExtractor, TextExtractor};
use crate::report::Reporter;
use crate::results::{SearchOutcome, SearchReport, Tally};
use crate::walk::find_pdfs;

/// Searches every PDF under `config.root_path` using the `lopdf` backend
pub fn search(config: &SearchConfig, reporter: &mut dyn Reporter) -> SearchResult<SearchReport> {
    search_with(config, Arc::new(LopdfExtractor), reporter)
}

/// Searches every PDF under `config.root_path` with the given extractor.
///
/// One task per file runs on a dedicated pool of `config.max_workers`
/// threads. Outcomes come back over a channel and are aggregated here, on
/// the calling thread, as they arrive. Returns once every task has
/// delivered its outcome.
pub fn search_with<E>(
    config: &SearchConfig,
    extractor: Arc<E>,
    reporter: &mut dyn Reporter,
) -> SearchResult<SearchReport>
where
    E: TextExtractor + 'static,
{
    config.validate()?;
    info!(
        "Starting search for {:?} in {}",
        config.terms,
        config.root_path.display()
    );

    let matcher = TermMatcher::new(&config.terms, config.match_mode())?;
    let files = find_pdfs(&config.root_path, &config.ignore_patterns)?;
    let total = files.len();

    if let Some(save_dir) = &config.save_dir {
        fs::create_dir_all(save_dir)?;
    }

    reporter.on_start(total, &config.terms);

    let processor = Arc::new(FileProcessor::new(matcher, extractor));
    let (tx, rx) = crossbeam_channel::unbounded::<SearchOutcome>();

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.max_workers)
        .thread_name(|i| format!("pdfscout-worker-{}", i))
        .build()
        .map_err(|e| SearchError::config_error(format!("failed to build worker pool: {}", e)))?;

    let start = Instant::now();
    debug!("Submitting {} tasks to {} workers", total, config.max_workers);
    for path in files {
        let tx = tx.clone();
        let processor = Arc::clone(&processor);
        pool.spawn(move || {
            let outcome = processor.process_file(&path);
            // The receiver outlives every task
            let _ = tx.send(outcome);
        });
    }
    // Only task-owned senders remain; the channel closes when the last task ends
    drop(tx);

    let mut tally = Tally::new();
    let mut outcomes = Vec::with_capacity(total);
    let mut matched = Vec::new();
    for outcome in rx {
        tally.record(&outcome);
        if let SearchOutcome::Found { path, .. } = &outcome {
            if config.save_dir.is_some() {
                matched.push(path.clone());
            }
        }
        reporter.on_outcome(&outcome);
        outcomes.push(outcome);
    }

    let summary = tally.finish(start.elapsed());

    // Every task has finished reading, so copies cannot change an outcome
    if let Some(save_dir) = &config.save_dir {
        for path in &matched {
            save_match(path, save_dir);
        }
    }
    processor.metrics().log_stats();
    info!(
        "Search complete. Found {} matching files out of {} ({} unreadable) in {:.2}s",
        summary.found_count,
        summary.total_files,
        summary.error_count,
        summary.elapsed.as_secs_f64()
    );

    reporter.on_finish(&summary);
    Ok(SearchReport { outcomes, summary })
}

/// Copies a matching file into `save_dir` by base name
fn save_match(path: &Path, save_dir: &Path) {
    let Some(name) = path.file_name() else {
        return;
    };
    let dest = save_dir.join(name);
    if is_same_file(path, &dest) {
        debug!("{} is already in {}", path.display(), save_dir.display());
        return;
    }
    match fs::copy(path, &dest) {
        Ok(_) => debug!("Copied {} to {}", path.display(), dest.display()),
        Err(e) => warn!("Failed to copy {}: {}", path.display(), e),
    }
}

/// True when both paths resolve to the same existing file
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
