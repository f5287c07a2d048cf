//! Section (class offering) model.
//!
//! A section is one concrete offering of a course: a teacher, a set of
//! weekly time slots, and identifiers from the registration system.
//! Choosing a course means choosing exactly one of its sections.
//!
//! # Untimed Sections
//! A section with no time slots carries no temporal constraint. It never
//! conflicts and is eligible in every combination.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{TimeSlot, Weekday};

/// One offering of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Name of the course this section belongs to.
    pub course_name: String,
    /// Display name of the section (often includes the teacher).
    pub section_name: String,
    /// Registration-system identifier.
    pub section_id: String,
    /// Registration type code (e.g. compulsory vs. elective).
    pub course_type: String,
    /// Weekly time slots, in source order. Empty = untimed.
    pub time_slots: Vec<TimeSlot>,
    /// Teacher name. Empty when unknown.
    pub teacher: String,
}

impl Section {
    /// Creates an untimed section.
    pub fn new(
        course_name: impl Into<String>,
        section_name: impl Into<String>,
        section_id: impl Into<String>,
    ) -> Self {
        Self {
            course_name: course_name.into(),
            section_name: section_name.into(),
            section_id: section_id.into(),
            course_type: String::new(),
            time_slots: Vec::new(),
            teacher: String::new(),
        }
    }

    /// Adds a weekly time slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Replaces all time slots.
    pub fn with_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.time_slots = slots;
        self
    }

    /// Sets the teacher.
    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = teacher.into();
        self
    }

    /// Sets the registration type code.
    pub fn with_course_type(mut self, course_type: impl Into<String>) -> Self {
        self.course_type = course_type.into();
        self
    }

    /// Whether the section has at least one time slot.
    #[inline]
    pub fn has_time_info(&self) -> bool {
        !self.time_slots.is_empty()
    }

    /// All `(weekday, period)` cells this section occupies.
    ///
    /// Overlapping slots within the section are merged.
    pub fn all_periods(&self) -> BTreeSet<(Weekday, u8)> {
        self.time_slots.iter().flat_map(|s| s.periods()).collect()
    }

    /// Whether any of this section's cells is also used by `other`.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        self.time_slots
            .iter()
            .any(|a| other.time_slots.iter().any(|b| a.overlaps(b)))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.section_name)?;
        if !self.teacher.is_empty() {
            write!(f, " ({})", self.teacher)?;
        }
        f.write_str(" [")?;
        for (i, slot) in self.time_slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str("]")
    }
}
