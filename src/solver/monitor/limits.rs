//! External stop conditions: abort flag and wall-clock limit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{SearchCommand, SearchMonitor};
use crate::models::Course;
use crate::solver::{SearchStatistics, SolverConfig};

/// Stops the search once a shared flag is raised.
///
/// The flag may be set from another thread; the search itself stays
/// single-threaded and only reads it.
#[derive(Debug, Clone, Default)]
pub struct InterruptMonitor {
    flag: Arc<AtomicBool>,
}

impl InterruptMonitor {
    /// Creates a monitor with a fresh, lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an existing flag.
    pub fn with_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Handle for raising the flag.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }

    /// Raises the flag.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl SearchMonitor for InterruptMonitor {
    fn name(&self) -> &str {
        "InterruptMonitor"
    }

    fn check_termination(&mut self, _stats: &SearchStatistics) -> SearchCommand {
        if self.flag.load(Ordering::Relaxed) {
            SearchCommand::Stop
        } else {
            SearchCommand::Continue
        }
    }
}

/// Stops the search after a wall-clock budget.
///
/// The clock is read once every `clock_check_mask + 1` nodes.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor {
    limit: Duration,
    clock_check_mask: u64,
    start: Instant,
}

impl TimeLimitMonitor {
    /// Creates a monitor that checks the clock every 256 nodes.
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            clock_check_mask: 255,
            start: Instant::now(),
        }
    }

    /// Sets the clock check mask (`0` = check on every node).
    pub fn with_clock_check_mask(mut self, mask: u64) -> Self {
        self.clock_check_mask = mask;
        self
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl SearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _courses: &[Course], _config: &SolverConfig) {
        self.start = Instant::now();
    }

    fn check_termination(&mut self, stats: &SearchStatistics) -> SearchCommand {
        if stats.nodes_explored & self.clock_check_mask == 0 && self.start.elapsed() >= self.limit {
            SearchCommand::Stop
        } else {
            SearchCommand::Continue
        }
    }
}
