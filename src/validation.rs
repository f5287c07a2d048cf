//! Input validation for course offerings.
//!
//! Checks structural integrity of courses and sections before solving.
//! Detects:
//! - Courses without sections
//! - Duplicate course names
//! - Duplicate section IDs (across all courses)
//! - Sections filed under a course they do not name
//!
//! Validation is advisory. The solver accepts any input; these checks
//! surface data problems that would otherwise only show up as missing or
//! strange schedules.

use crate::models::Course;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A course has no sections and will be skipped by the solver.
    EmptyCourse,
    /// Two courses share the same name.
    DuplicateCourse,
    /// Two sections share the same ID.
    DuplicateSectionId,
    /// A section's `course_name` differs from the course it is listed under.
    CourseNameMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course list.
///
/// Checks:
/// 1. Every course has at least one section
/// 2. No duplicate course names
/// 3. No duplicate section IDs (empty IDs are ignored)
/// 4. Every section names the course it belongs to
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut course_names = HashSet::new();
    let mut section_ids = HashSet::new();

    for course in courses {
        if !course_names.insert(course.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("Duplicate course: {}", course.name),
            ));
        }

        if course.sections.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' has no sections", course.name),
            ));
        }

        for section in &course.sections {
            if !section.section_id.is_empty() && !section_ids.insert(section.section_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSectionId,
                    format!("Duplicate section ID: {}", section.section_id),
                ));
            }

            if section.course_name != course.name {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CourseNameMismatch,
                    format!(
                        "Section '{}' names course '{}' but is listed under '{}'",
                        section.section_name, section.course_name, course.name
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, TimeSlot, Weekday};

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("Calculus")
                .with_section(
                    Section::new("Calculus", "Calculus-01", "MA101-01")
                        .with_slot(TimeSlot::new(Weekday::Monday, 1, 2).unwrap()),
                )
                .with_section(
                    Section::new("Calculus", "Calculus-02", "MA101-02")
                        .with_slot(TimeSlot::new(Weekday::Wednesday, 3, 4).unwrap()),
                ),
            Course::new("Physics").with_section(Section::new("Physics", "Physics-01", "PH101-01")),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_courses(&sample_courses()).is_ok());
        assert!(validate_courses(&[]).is_ok());
    }

    #[test]
    fn test_empty_course() {
        let courses = vec![Course::new("Ghost")];
        let errors = validate_courses(&courses).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyCourse);
        assert!(errors[0].message.contains("Ghost"));
    }

    #[test]
    fn test_duplicate_course() {
        let mut courses = sample_courses();
        courses.push(Course::new("Physics").with_section(Section::new("Physics", "P-02", "PH101-02")));

        let errors = validate_courses(&courses).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCourse));
    }

    #[test]
    fn test_duplicate_section_id() {
        let courses = vec![
            Course::new("A").with_section(Section::new("A", "A-1", "X1")),
            Course::new("B").with_section(Section::new("B", "B-1", "X1")),
        ];
        let errors = validate_courses(&courses).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSectionId && e.message.contains("X1")));
    }

    #[test]
    fn test_empty_section_ids_not_duplicates() {
        let courses = vec![Course::new("A")
            .with_section(Section::new("A", "A-1", ""))
            .with_section(Section::new("A", "A-2", ""))];
        assert!(validate_courses(&courses).is_ok());
    }

    #[test]
    fn test_course_name_mismatch() {
        let courses = vec![Course::new("A").with_section(Section::new("B", "B-1", "b1"))];
        let errors = validate_courses(&courses).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CourseNameMismatch));
    }

    #[test]
    fn test_multiple_errors() {
        let courses = vec![
            Course::new("Ghost"),
            Course::new("Ghost"),
            Course::new("A").with_section(Section::new("Z", "Z-1", "z1")),
        ];
        let errors = validate_courses(&courses).unwrap_err();
        // Two empty courses, one duplicate, one mismatch.
        assert_eq!(errors.len(), 4);
    }
}
