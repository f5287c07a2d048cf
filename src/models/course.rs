//! Course model.
//!
//! A course is a named set of alternative sections. The search picks
//! exactly one section per course.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Section;

/// A course with its candidate sections.
///
/// Section order is significant: it is the order in which the search
/// tries candidates, which fixes the order of equally-valid results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name.
    pub name: String,
    /// Candidate sections.
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Adds a candidate section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Replaces all candidate sections.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Number of candidate sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether this course has any candidate section.
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} sections)", self.name, self.sections.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeSlot, Weekday};

    #[test]
    fn test_course_builder() {
        let course = Course::new("Calculus")
            .with_section(
                Section::new("Calculus", "CAL-01", "1")
                    .with_slot(TimeSlot::new(Weekday::Monday, 1, 2).unwrap()),
            )
            .with_section(Section::new("Calculus", "CAL-02", "2"));

        assert_eq!(course.name, "Calculus");
        assert_eq!(course.section_count(), 2);
        assert!(course.has_sections());
        assert_eq!(course.sections[1].section_name, "CAL-02");
    }

    #[test]
    fn test_course_empty() {
        let course = Course::new("Ghost");
        assert_eq!(course.section_count(), 0);
        assert!(!course.has_sections());
        assert_eq!(course.to_string(), "Ghost (0 sections)");
    }

    #[test]
    fn test_course_serde() {
        let course = Course::new("Chem").with_section(
            Section::new("Chem", "CH-1", "77")
                .with_teacher("Zhao")
                .with_slot(TimeSlot::new(Weekday::Friday, 9, 11).unwrap()),
        );
        let json = serde_json::to_string(&course).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
    }
}
