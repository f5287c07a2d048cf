//! Timetable domain models.
//!
//! Plain data produced by an external collector (registration system
//! scraper, file import) and consumed read-only by the solver.
//!
//! # Domain Mappings
//!
//! | timetable-solver | Registration system | Search |
//! |------------------|---------------------|--------|
//! | Course | Wanted course | Variable |
//! | Section | Class offering | Value |
//! | TimeSlot | Weekly lecture block | Occupied cells |
//! | Schedule | Conflict-free timetable | Solution |

mod course;
mod schedule;
mod section;
mod time_slot;

pub use course::Course;
pub use schedule::Schedule;
pub use section::Section;
pub use time_slot::{period_clock_time, TimeSlot, Weekday, DAYS_PER_WEEK, PERIODS_PER_DAY};
