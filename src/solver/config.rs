//! Solver configuration and request container.

use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::models::Course;

/// Result cap used when the caller does not choose one.
pub const DEFAULT_MAX_RESULTS: usize = 2000;

/// Order in which courses are branched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseOrdering {
    /// Ascending section count, ties in input order (most constrained first).
    #[default]
    FewestSectionsFirst,
    /// Input order, unchanged.
    InputOrder,
}

/// Search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of schedules to collect. Must be at least 1.
    pub max_results: usize,
    /// Course branching order.
    pub ordering: CourseOrdering,
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the course ordering.
    pub fn with_ordering(mut self, ordering: CourseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Rejects a zero result cap.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.max_results == 0 {
            return Err(SolverError::InvalidMaxResults(self.max_results));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            ordering: CourseOrdering::default(),
        }
    }
}

/// Input container for one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Wanted courses with their candidate sections.
    pub courses: Vec<Course>,
    /// Search parameters.
    #[serde(default)]
    pub config: SolverConfig,
}

impl SolveRequest {
    /// Creates a request with the default configuration.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            config: SolverConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }
}
