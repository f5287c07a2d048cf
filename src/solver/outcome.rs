//! Search result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SearchStatistics, SolveSummary};
use crate::models::Schedule;

/// Why a search stopped before exploring every branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The result cap was reached.
    ResultCap,
    /// A monitor requested termination (abort flag, time limit).
    Interrupted,
}

/// Search state machine.
///
/// `Searching` is the initial state; a finished search is either
/// `Stopped` or `Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// Search in progress.
    Searching,
    /// Search cut off before the whole tree was explored. The returned
    /// schedules may be a strict subset of all valid combinations.
    Stopped(StopReason),
    /// Whole tree explored; the returned schedules are every valid
    /// combination.
    Exhausted,
}

impl SearchStatus {
    /// Whether the search has finished.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchStatus::Searching)
    }

    /// Whether the result set is a full enumeration.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SearchStatus::Exhausted)
    }

    /// Whether the result cap truncated the enumeration.
    pub fn is_capped(&self) -> bool {
        matches!(self, SearchStatus::Stopped(StopReason::ResultCap))
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Searching => write!(f, "searching"),
            SearchStatus::Stopped(StopReason::ResultCap) => write!(f, "stopped (result cap)"),
            SearchStatus::Stopped(StopReason::Interrupted) => write!(f, "stopped (interrupted)"),
            SearchStatus::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// A course left out of the search because it had no sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCourse {
    /// Position in the caller's course list.
    pub index: usize,
    /// Course name.
    pub name: String,
}

/// Everything a finished search produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOutcome {
    pub(crate) schedules: Vec<Schedule>,
    pub(crate) status: SearchStatus,
    pub(crate) statistics: SearchStatistics,
    pub(crate) skipped_courses: Vec<SkippedCourse>,
    pub(crate) course_count: usize,
    pub(crate) total_sections: usize,
}

impl SolveOutcome {
    /// Accepted schedules in discovery order.
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Takes ownership of the schedules.
    pub fn into_schedules(self) -> Vec<Schedule> {
        self.schedules
    }

    /// Number of accepted schedules.
    pub fn schedule_count(&self) -> usize {
        self.schedules.len()
    }

    /// Whether no conflict-free combination was found.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Terminal state of the search.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Work counters.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Courses dropped because they had no sections.
    pub fn skipped_courses(&self) -> &[SkippedCourse] {
        &self.skipped_courses
    }

    /// Aggregate counters for reporting.
    pub fn summary(&self) -> SolveSummary {
        SolveSummary {
            course_count: self.course_count,
            total_sections: self.total_sections,
            skipped_courses: self.skipped_courses.len(),
            result_count: self.schedules.len(),
            status: self.status,
        }
    }
}
