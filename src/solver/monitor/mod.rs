//! Search monitors.
//!
//! A monitor observes one search and may stop it. The solver calls the
//! hooks synchronously from the search loop; `check_termination` runs on
//! every node entry, which is where external abort flags and time limits
//! plug in.
//!
//! Diagnostics (skipped courses, progress) are emitted through monitors
//! rather than printed by the engine, so a library caller decides where
//! they go.

mod composite;
mod limits;
mod log;

pub use composite::CompositeMonitor;
pub use limits::{InterruptMonitor, TimeLimitMonitor};
pub use self::log::LogMonitor;

use std::fmt;

use super::{SearchStatistics, SearchStatus, SolverConfig};
use crate::models::{Course, Schedule, Section};

/// Command returned by a monitor to control the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCommand {
    /// Keep searching.
    Continue,
    /// Unwind the whole search.
    Stop,
}

impl SearchCommand {
    #[inline]
    pub fn is_stop(self) -> bool {
        matches!(self, SearchCommand::Stop)
    }
}

impl fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Stop => write!(f, "Stop"),
        }
    }
}

/// Observer of one search.
///
/// Every hook except `name` has a no-op default.
pub trait SearchMonitor {
    /// Monitor name, for diagnostics.
    fn name(&self) -> &str;

    /// Called once before any course is examined.
    fn on_enter_search(&mut self, _courses: &[Course], _config: &SolverConfig) {}

    /// Called for each course dropped because it has no sections.
    fn on_course_skipped(&mut self, _index: usize, _course: &Course) {}

    /// Called on every node entry. Returning `Stop` ends the search with
    /// `StopReason::Interrupted`.
    fn check_termination(&mut self, _stats: &SearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }

    /// Called when a candidate section overlaps the current choice.
    fn on_conflict(&mut self, _section: &Section, _depth: usize) {}

    /// Called when a schedule is accepted.
    fn on_schedule_found(&mut self, _schedule: &Schedule, _stats: &SearchStatistics) {}

    /// Called once after the search reached a terminal state.
    fn on_exit_search(&mut self, _status: SearchStatus, _stats: &SearchStatistics) {}
}

impl fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// Monitor that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    pub fn new() -> Self {
        Self
    }
}

impl SearchMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}
