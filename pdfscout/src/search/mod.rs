/// Concurrent PDF search.
///
/// A run has three stages:
///
/// 1. **Enumerate**: `walk::find_pdfs` lists candidate files.
/// 2. **Fan out**: `engine` submits one `FileProcessor::process_file` task
///    per file to a rayon pool sized to `max_workers`. Each task opens its
///    document, scans pages in order and stops at the first match.
/// 3. **Fan in**: outcomes return over a channel to the calling thread,
///    which tallies them and forwards them to the `Reporter` as they arrive.
///
/// ```rust,ignore
/// let config = SearchConfig::new("./pdfs", "invoice");
/// let report = search(&config, &mut SilentReporter)?;
/// println!("{} of {} files match", report.summary.found_count, report.summary.total_files);
/// ```
pub mod engine;
pub mod matcher;
pub mod processor;

pub use engine::{search, search_with};
pub use matcher::{MatchMode, TermMatcher};
pub use processor::FileProcessor;
