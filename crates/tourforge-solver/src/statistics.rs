//! Search statistics collection and reporting.
//!
//! This module provides types for tracking how much of the search tree a
//! run visited: nodes, pruned branches, evaluated leaves, improvements and
//! forked tasks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Complete statistics for a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Time spent searching.
    pub duration: Duration,
    /// Routes entered by the scheduler, including pruned ones.
    pub nodes_explored: u64,
    /// Routes discarded by the bound check.
    pub branches_pruned: u64,
    /// Complete tours that passed the bound check.
    pub leaves_evaluated: u64,
    /// Tours committed to the best tracker.
    pub improvements: u64,
    /// Child explorations dispatched as separate tasks.
    pub tasks_forked: u64,
}

impl SearchStatistics {
    /// Returns the fraction of explored routes that were pruned.
    pub fn prune_rate(&self) -> f64 {
        if self.nodes_explored == 0 {
            0.0
        } else {
            self.branches_pruned as f64 / self.nodes_explored as f64
        }
    }

    /// Returns explored routes per second.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_explored as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Returns the duration in whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}

/// Thread-safe collector for search statistics.
///
/// Every task records into the same collector. After the search, call
/// `into_statistics()` to get the final `SearchStatistics`.
#[derive(Debug)]
pub struct StatisticsCollector {
    start_time: Instant,
    nodes_explored: AtomicU64,
    branches_pruned: AtomicU64,
    leaves_evaluated: AtomicU64,
    improvements: AtomicU64,
    tasks_forked: AtomicU64,
}

impl StatisticsCollector {
    /// Creates a new collector.
    ///
    /// The start time is recorded when this is called.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            nodes_explored: AtomicU64::new(0),
            branches_pruned: AtomicU64::new(0),
            leaves_evaluated: AtomicU64::new(0),
            improvements: AtomicU64::new(0),
            tasks_forked: AtomicU64::new(0),
        }
    }

    /// Records a route entering the scheduler.
    #[inline]
    pub fn record_node(&self) {
        self.nodes_explored.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a pruned route.
    #[inline]
    pub fn record_pruned(&self) {
        self.branches_pruned.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a complete tour offered to the tracker.
    #[inline]
    pub fn record_leaf(&self) {
        self.leaves_evaluated.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a committed improvement.
    pub fn record_improvement(&self) {
        self.improvements.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a forked task.
    #[inline]
    pub fn record_fork(&self) {
        self.tasks_forked.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the current number of explored routes.
    pub fn current_nodes_explored(&self) -> u64 {
        self.nodes_explored.load(Ordering::Relaxed)
    }

    /// Returns the elapsed time since the collector was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the statistics gathered so far.
    ///
    /// The collector keeps counting after this call.
    pub fn snapshot(&self) -> SearchStatistics {
        SearchStatistics {
            duration: self.elapsed(),
            nodes_explored: self.nodes_explored.load(Ordering::Relaxed),
            branches_pruned: self.branches_pruned.load(Ordering::Relaxed),
            leaves_evaluated: self.leaves_evaluated.load(Ordering::Relaxed),
            improvements: self.improvements.load(Ordering::Relaxed),
            tasks_forked: self.tasks_forked.load(Ordering::Relaxed),
        }
    }

    /// Consumes the collector and returns the final statistics.
    pub fn into_statistics(self) -> SearchStatistics {
        self.snapshot()
    }
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self::new()
    }
}
