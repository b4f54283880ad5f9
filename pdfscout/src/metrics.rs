use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Tracks worker activity across the pool
#[derive(Debug, Clone)]
pub struct WorkerMetrics {
    // Concurrency
    in_flight: Arc<AtomicU64>,
    peak_in_flight: Arc<AtomicU64>,

    // Work done
    files_processed: Arc<AtomicU64>,
    pages_scanned: Arc<AtomicU64>,
}

impl WorkerMetrics {
    /// Creates a new WorkerMetrics instance
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(AtomicU64::new(0)),
            peak_in_flight: Arc::new(AtomicU64::new(0)),
            files_processed: Arc::new(AtomicU64::new(0)),
            pages_scanned: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records a task starting; the returned guard records it finishing
    pub fn task_started(&self) -> TaskGuard<'_> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        let mut peak = self.peak_in_flight.load(Ordering::SeqCst);
        while current > peak {
            match self.peak_in_flight.compare_exchange_weak(
                peak,
                current,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => break,
                Err(observed) => peak = observed,
            }
        }
        debug!("Task started, {} in flight", current);
        TaskGuard { metrics: self }
    }

    fn task_finished(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.files_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records pages handed to the matcher
    pub fn record_pages(&self, count: u64) {
        self.pages_scanned.fetch_add(count, Ordering::Relaxed);
    }

    /// Gets current statistics
    pub fn get_stats(&self) -> WorkerStats {
        WorkerStats {
            in_flight: self.in_flight.load(Ordering::SeqCst),
            peak_in_flight: self.peak_in_flight.load(Ordering::SeqCst),
            files_processed: self.files_processed.load(Ordering::Relaxed),
            pages_scanned: self.pages_scanned.load(Ordering::Relaxed),
        }
    }

    /// Logs current statistics
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Worker stats:\n\
             Files processed: {}\n\
             Pages scanned: {}\n\
             Peak concurrent tasks: {}",
            stats.files_processed, stats.pages_scanned, stats.peak_in_flight
        );
    }
}

impl Default for WorkerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks a task as running until dropped
#[derive(Debug)]
pub struct TaskGuard<'a> {
    metrics: &'a WorkerMetrics,
}

impl Drop for TaskGuard<'_> {
    fn drop(&mut self) {
        self.metrics.task_finished();
    }
}

/// Snapshot of worker activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    pub in_flight: u64,
    pub peak_in_flight: u64,
    pub files_processed: u64,
    pub pages_scanned: u64,
}
