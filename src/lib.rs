//! Conflict-free course timetable enumeration.
//!
//! Given courses, each offered as several alternative sections that meet in
//! fixed weekly time slots, enumerates every way of picking one section per
//! course such that no two picked sections share a (weekday, period) cell.
//! The search stops early once a configurable number of results is reached.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Weekday`, `TimeSlot`, `Section`, `Course`,
//!   `Schedule`
//! - **`grid`**: Weekly occupancy bitset with reversible occupy/release
//! - **`solver`**: Course ordering, backtracking search, result cap,
//!   statistics and search monitors
//! - **`validation`**: Input integrity checks (empty courses, duplicate IDs)
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use timetable_solver::models::{Course, Section, TimeSlot, Weekday};
//! use timetable_solver::solver::solve;
//!
//! let slot = |day, start, end| TimeSlot::new(day, start, end).unwrap();
//! let courses = vec![
//!     Course::new("Calculus")
//!         .with_section(Section::new("Calculus", "Calculus-01", "c1").with_slot(slot(Weekday::Monday, 1, 2)))
//!         .with_section(Section::new("Calculus", "Calculus-02", "c2").with_slot(slot(Weekday::Tuesday, 1, 2))),
//!     Course::new("Physics")
//!         .with_section(Section::new("Physics", "Physics-01", "p1").with_slot(slot(Weekday::Monday, 2, 3))),
//! ];
//!
//! let outcome = solve(&courses, 100).unwrap();
//! assert_eq!(outcome.schedule_count(), 1);
//! assert!(outcome.schedules()[0].is_conflict_free());
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Knuth (2000), "Dancing Links" (reversible state in backtracking)

pub mod error;
pub mod grid;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::{ModelError, SolverError};
pub use models::{Course, Schedule, Section, TimeSlot, Weekday};
pub use solver::{solve, SearchStatus, SolveOutcome, Solver, SolverConfig};
