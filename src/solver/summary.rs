//! Post-solve summary.
//!
//! Trivial aggregate counters handed to whatever presents the results.
//!
//! | Counter | Definition |
//! |---------|-----------|
//! | Courses | Courses supplied by the caller, skipped ones included |
//! | Total sections | Sum of section counts over all supplied courses |
//! | Skipped courses | Courses with no section |
//! | Results | Accepted schedules |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SearchStatus;

/// Aggregate counters of one solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveSummary {
    /// Courses supplied by the caller.
    pub course_count: usize,
    /// Sum of section counts across all supplied courses.
    pub total_sections: usize,
    /// Courses skipped for having no sections.
    pub skipped_courses: usize,
    /// Accepted schedules.
    pub result_count: usize,
    /// Terminal search state.
    pub status: SearchStatus,
}

impl SolveSummary {
    /// Whether the result count may understate the true number of
    /// combinations.
    pub fn is_truncated(&self) -> bool {
        !self.status.is_exhausted()
    }
}

impl fmt::Display for SolveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{rule}")?;
        writeln!(f, "Solve finished: {}", self.status)?;
        writeln!(f, "  courses: {}", self.course_count)?;
        writeln!(f, "  total sections: {}", self.total_sections)?;
        if self.skipped_courses > 0 {
            writeln!(f, "  skipped courses: {}", self.skipped_courses)?;
        }
        writeln!(f, "  schedules: {}", self.result_count)?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StopReason;

    fn summary(status: SearchStatus, skipped: usize) -> SolveSummary {
        SolveSummary {
            course_count: 4,
            total_sections: 9,
            skipped_courses: skipped,
            result_count: 12,
            status,
        }
    }

    #[test]
    fn test_summary_display() {
        let text = summary(SearchStatus::Exhausted, 0).to_string();
        assert!(text.contains("Solve finished: exhausted"));
        assert!(text.contains("courses: 4"));
        assert!(text.contains("total sections: 9"));
        assert!(text.contains("schedules: 12"));
        assert!(!text.contains("skipped"));
    }

    #[test]
    fn test_summary_display_skipped() {
        let text = summary(SearchStatus::Exhausted, 2).to_string();
        assert!(text.contains("skipped courses: 2"));
    }

    #[test]
    fn test_is_truncated() {
        assert!(!summary(SearchStatus::Exhausted, 0).is_truncated());
        assert!(summary(SearchStatus::Stopped(StopReason::ResultCap), 0).is_truncated());
    }
}
