//! Course branching order.
//!
//! The search space is the product of all per-course section counts.
//! Branching on courses with few sections first makes dead ends show up
//! near the root, where pruning them removes the largest subtrees.
//!
//! # Reference
//! Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//! Constraint Satisfaction Problems" (fail-first principle)

use std::borrow::Borrow;

use super::CourseOrdering;
use crate::models::Course;

/// Returns course indices in branching order.
///
/// `FewestSectionsFirst` is a stable sort on section count, so courses
/// with equal counts keep their input order.
pub fn order_courses<C: Borrow<Course>>(courses: &[C], ordering: CourseOrdering) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..courses.len()).collect();
    match ordering {
        CourseOrdering::FewestSectionsFirst => {
            indices.sort_by_key(|&i| courses[i].borrow().section_count());
        }
        CourseOrdering::InputOrder => {}
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    fn course(name: &str, sections: usize) -> Course {
        let mut c = Course::new(name);
        for i in 0..sections {
            c = c.with_section(Section::new(name, format!("{name}-{i}"), format!("{name}{i}")));
        }
        c
    }

    #[test]
    fn test_fewest_sections_first() {
        let courses = vec![course("A", 3), course("B", 1), course("C", 2)];
        let order = order_courses(&courses, CourseOrdering::FewestSectionsFirst);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let courses = vec![
            course("A", 2),
            course("B", 1),
            course("C", 2),
            course("D", 1),
        ];
        let order = order_courses(&courses, CourseOrdering::FewestSectionsFirst);
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_input_order() {
        let courses = vec![course("A", 3), course("B", 1)];
        let order = order_courses(&courses, CourseOrdering::InputOrder);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_borrowed_courses() {
        let a = course("A", 4);
        let b = course("B", 2);
        let refs = vec![&a, &b];
        assert_eq!(
            order_courses(&refs, CourseOrdering::FewestSectionsFirst),
            vec![1, 0]
        );
    }

    #[test]
    fn test_empty() {
        let courses: Vec<Course> = Vec::new();
        assert!(order_courses(&courses, CourseOrdering::FewestSectionsFirst).is_empty());
    }
}
