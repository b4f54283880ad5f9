use crate::results::{RunSummary, SearchOutcome};

/// Receives progress from a search run.
///
/// All calls happen on the thread that called `search`, in this order:
/// `on_start` once, `on_outcome` once per file in completion order, then
/// `on_finish` once.
pub trait Reporter {
    /// Called after enumeration, before any task is submitted
    fn on_start(&mut self, _total_files: usize, _terms: &[String]) {}

    /// Called as each outcome is delivered
    fn on_outcome(&mut self, outcome: &SearchOutcome);

    /// Called after every outcome has been delivered
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn on_outcome(&mut self, _outcome: &SearchOutcome) {}
}
