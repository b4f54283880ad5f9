/// Outcome and summary types produced by a search run.
///
/// Each enumerated file produces exactly one `SearchOutcome`. Outcomes are
/// owned values: a worker builds one, moves it through the channel, and the
/// aggregation step takes ownership. Nothing is shared between workers, so
/// none of these types need interior mutability.
///
/// `RunSummary` is built once, after every outcome has been delivered, and
/// has no mutating methods. The running counters live in `Tally`, which is
/// consumed by `Tally::finish`.
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Terminal result of searching one file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The match condition first held on `page` (1-based)
    Found { path: PathBuf, page: usize },
    /// No page satisfied the match condition
    NotFound { path: PathBuf },
    /// The file could not be opened or parsed
    ReadError { path: PathBuf, message: String },
}

impl SearchOutcome {
    /// The file this outcome belongs to
    pub fn path(&self) -> &Path {
        match self {
            SearchOutcome::Found { path, .. }
            | SearchOutcome::NotFound { path }
            | SearchOutcome::ReadError { path, .. } => path,
        }
    }

    /// Base name of the file, falling back to the full path
    pub fn file_name(&self) -> String {
        let path = self.path();
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SearchOutcome::ReadError { .. })
    }

    /// Page of the first match, if any
    pub fn page(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found { page, .. } => Some(*page),
            _ => None,
        }
    }
}

/// Aggregate counters for a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of files enumerated (and outcomes delivered)
    pub total_files: usize,
    /// Number of `Found` outcomes
    pub found_count: usize,
    /// Number of `ReadError` outcomes
    pub error_count: usize,
    /// Wall-clock time from first submission to the barrier
    pub elapsed: Duration,
}

/// Running counters kept by the aggregation step
#[derive(Debug, Default)]
pub struct Tally {
    total_files: usize,
    found_count: usize,
    error_count: usize,
}

impl Tally {
    pub fn new() -> Self {
        Default::default()
    }

    /// Counts one delivered outcome
    pub fn record(&mut self, outcome: &SearchOutcome) {
        self.total_files += 1;
        match outcome {
            SearchOutcome::Found { .. } => self.found_count += 1,
            SearchOutcome::ReadError { .. } => self.error_count += 1,
            SearchOutcome::NotFound { .. } => {}
        }
    }

    /// Freezes the counters into a summary
    pub fn finish(self, elapsed: Duration) -> RunSummary {
        RunSummary {
            total_files: self.total_files,
            found_count: self.found_count,
            error_count: self.error_count,
            elapsed,
        }
    }
}

/// Everything a run produced: outcomes in delivery order plus the summary
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcomes: Vec<SearchOutcome>,
    pub summary: RunSummary,
}

impl SearchReport {
    /// Outcomes for files where the match condition held
    pub fn found(&self) -> impl Iterator<Item = &SearchOutcome> {
        self.outcomes.iter().filter(|o| o.is_found())
    }

    /// Looks up the outcome for a file by base name
    pub fn outcome_for(&self, file_name: &str) -> Option<&SearchOutcome> {
        self.outcomes.iter().find(|o| o.file_name() == file_name)
    }
}
