//! Timetable search.
//!
//! # Flow
//!
//! ```text
//! courses ──> skip empty ──> order_courses ──> depth-first descent ──> SolveOutcome
//!                                                  │       ▲
//!                                                  ▼       │
//!                                             ScheduleGrid (occupy / release)
//! ```
//!
//! The search is single-threaded and owns all of its state. It stops early
//! when the result set reaches `max_results` or a [`monitor::SearchMonitor`]
//! asks it to; either way every recursion level unwinds without visiting
//! another sibling.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6.3 (Backtracking Search for CSPs)

mod config;
mod engine;
pub mod monitor;
mod ordering;
mod outcome;
mod stats;
mod summary;

pub use config::{CourseOrdering, SolveRequest, SolverConfig, DEFAULT_MAX_RESULTS};
pub use engine::Solver;
pub use ordering::order_courses;
pub use outcome::{SearchStatus, SkippedCourse, SolveOutcome, StopReason};
pub use stats::SearchStatistics;
pub use summary::SolveSummary;

use crate::error::SolverError;
use crate::models::Course;

/// Enumerates up to `max_results` conflict-free schedules with the default
/// course ordering.
///
/// # Errors
/// `SolverError::InvalidMaxResults` if `max_results` is zero.
pub fn solve(courses: &[Course], max_results: usize) -> Result<SolveOutcome, SolverError> {
    Solver::new(SolverConfig::new().with_max_results(max_results)).solve(courses)
}

/// Solves a bundled request.
pub fn solve_request(request: &SolveRequest) -> Result<SolveOutcome, SolverError> {
    Solver::new(request.config.clone()).solve(&request.courses)
}
