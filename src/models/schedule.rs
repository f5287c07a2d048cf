//! Schedule (solution) model.
//!
//! A schedule is one accepted combination: exactly one section per
//! course, listed in the caller's course order. Schedules produced by the
//! solver are conflict-free by construction; `is_conflict_free` lets a
//! consumer check one built by hand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Section, Weekday};

/// One conflict-free choice of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Chosen sections, one per course, in course order.
    pub sections: Vec<Section>,
}

impl Schedule {
    /// Creates a schedule from chosen sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Number of chosen sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether the schedule contains no section.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section chosen for a course.
    pub fn section_for(&self, course_name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.course_name == course_name)
    }

    /// The section occupying a weekly cell, if any.
    ///
    /// This is the lookup a timetable renderer needs for its 5x11 matrix.
    pub fn section_at(&self, weekday: Weekday, period: u8) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.time_slots.iter().any(|t| t.contains(weekday, period)))
    }

    /// Sections without time information (not placed on the matrix).
    pub fn untimed_sections(&self) -> Vec<&Section> {
        self.sections.iter().filter(|s| !s.has_time_info()).collect()
    }

    /// Every occupied `(weekday, period)` cell.
    pub fn occupied_cells(&self) -> BTreeSet<(Weekday, u8)> {
        self.sections.iter().flat_map(|s| s.all_periods()).collect()
    }

    /// Whether no two sections share a cell.
    pub fn is_conflict_free(&self) -> bool {
        self.sections.iter().enumerate().all(|(i, a)| {
            self.sections[i + 1..]
                .iter()
                .all(|b| !a.conflicts_with(b))
        })
    }
}
