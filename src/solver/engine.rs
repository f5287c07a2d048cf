//! Depth-first enumeration of conflict-free section choices.
//!
//! # Algorithm
//!
//! 1. Drop courses without sections (reported as skipped).
//! 2. Order the remaining courses (fewest sections first by default).
//! 3. Descend one course per level. At each level try the course's
//!    sections in their given order:
//!    - an untimed section is always compatible: choose it and descend;
//!    - a timed section that overlaps the grid is rejected;
//!    - otherwise occupy its cells, choose it, descend, then release.
//! 4. A full assignment is copied into the result set.
//! 5. Once the result set holds `max_results` schedules, or a monitor asks
//!    to stop, `Stop` is returned up through every level and no further
//!    sibling is visited.
//!
//! # Complexity
//! Worst case O(prod(s_i)) nodes for section counts s_i; each node costs
//! O(1) grid work because section masks are precomputed.

use std::time::Instant;

use super::monitor::{NoOpMonitor, SearchCommand, SearchMonitor};
use super::{
    order_courses, SearchStatistics, SearchStatus, SkippedCourse, SolveOutcome, SolverConfig,
    StopReason,
};
use crate::error::SolverError;
use crate::grid::{ScheduleGrid, SlotMask};
use crate::models::{Course, Schedule, Section};

/// Backtracking timetable solver.
///
/// Stateless between calls: every solve owns its own grid and choice
/// list, so one `Solver` may be shared by concurrent callers.
///
/// # Example
///
/// ```
/// use timetable_solver::models::{Course, Section, TimeSlot, Weekday};
/// use timetable_solver::solver::{SearchStatus, Solver, SolverConfig};
///
/// let mon = TimeSlot::new(Weekday::Monday, 1, 2).unwrap();
/// let tue = TimeSlot::new(Weekday::Tuesday, 1, 2).unwrap();
/// let courses = vec![
///     Course::new("X")
///         .with_section(Section::new("X", "X-1", "x1").with_slot(mon))
///         .with_section(Section::new("X", "X-2", "x2").with_slot(tue)),
///     Course::new("Y").with_section(Section::new("Y", "Y-1", "y1").with_slot(mon)),
/// ];
///
/// let solver = Solver::new(SolverConfig::default());
/// let outcome = solver.solve(&courses).unwrap();
/// assert_eq!(outcome.schedule_count(), 1);
/// assert_eq!(outcome.schedules()[0].sections[0].section_name, "X-2");
/// assert_eq!(outcome.status(), SearchStatus::Exhausted);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Enumerates conflict-free schedules.
    pub fn solve(&self, courses: &[Course]) -> Result<SolveOutcome, SolverError> {
        self.solve_with_monitor(courses, &mut NoOpMonitor)
    }

    /// Enumerates conflict-free schedules, reporting to `monitor`.
    ///
    /// # Errors
    /// `SolverError::InvalidMaxResults` if the configured cap is zero.
    /// Unsatisfiable input is not an error: the outcome is empty.
    pub fn solve_with_monitor(
        &self,
        courses: &[Course],
        monitor: &mut dyn SearchMonitor,
    ) -> Result<SolveOutcome, SolverError> {
        self.config.validate()?;
        let started = Instant::now();
        monitor.on_enter_search(courses, &self.config);

        let mut skipped_courses = Vec::new();
        let mut active: Vec<&Course> = Vec::with_capacity(courses.len());
        for (index, course) in courses.iter().enumerate() {
            if course.has_sections() {
                active.push(course);
            } else {
                monitor.on_course_skipped(index, course);
                skipped_courses.push(SkippedCourse {
                    index,
                    name: course.name.clone(),
                });
            }
        }

        let levels: Vec<Level<'_>> = order_courses(&active, self.config.ordering)
            .into_iter()
            .map(|position| Level::new(position, active[position]))
            .collect();

        let mut search = Search {
            levels: &levels,
            max_results: self.config.max_results,
            choice: vec![None; active.len()],
            schedules: Vec::new(),
            stats: SearchStatistics::default(),
            monitor: &mut *monitor,
            stop: None,
        };

        // No course at all: nothing to choose, no schedule.
        if !levels.is_empty() {
            let mut grid = ScheduleGrid::new();
            search.descend(0, &mut grid);
        }

        let status = match search.stop {
            Some(reason) => SearchStatus::Stopped(reason),
            None => SearchStatus::Exhausted,
        };
        let Search {
            schedules,
            mut stats,
            ..
        } = search;
        stats.elapsed = started.elapsed();
        monitor.on_exit_search(status, &stats);

        Ok(SolveOutcome {
            schedules,
            status,
            statistics: stats,
            skipped_courses,
            course_count: courses.len(),
            total_sections: courses.iter().map(Course::section_count).sum(),
        })
    }
}

/// One search level: a course plus its precomputed section masks.
struct Level<'a> {
    /// Index into the output schedule (caller's order, skipped removed).
    position: usize,
    sections: &'a [Section],
    masks: Vec<SlotMask>,
}

impl<'a> Level<'a> {
    fn new(position: usize, course: &'a Course) -> Self {
        Self {
            position,
            sections: &course.sections,
            masks: course
                .sections
                .iter()
                .map(|s| SlotMask::from_slots(&s.time_slots))
                .collect(),
        }
    }
}

struct Search<'p, 'a, 'm, M: SearchMonitor + ?Sized> {
    levels: &'p [Level<'a>],
    max_results: usize,
    choice: Vec<Option<&'a Section>>,
    schedules: Vec<Schedule>,
    stats: SearchStatistics,
    monitor: &'m mut M,
    stop: Option<StopReason>,
}

impl<'p, 'a, M: SearchMonitor + ?Sized> Search<'p, 'a, '_, M> {
    fn descend(&mut self, depth: usize, grid: &mut ScheduleGrid) -> SearchCommand {
        if self.schedules.len() >= self.max_results {
            self.stop = Some(StopReason::ResultCap);
            return SearchCommand::Stop;
        }
        if self.monitor.check_termination(&self.stats).is_stop() {
            self.stop = Some(StopReason::Interrupted);
            return SearchCommand::Stop;
        }
        self.stats.on_node_explored(depth);

        let levels = self.levels;
        let Some(level) = levels.get(depth) else {
            self.accept();
            return SearchCommand::Continue;
        };

        for (section, &mask) in level.sections.iter().zip(&level.masks) {
            let command = if mask.is_empty() {
                self.branch(level.position, section, depth, grid)
            } else if grid.would_conflict_mask(mask) {
                self.stats.on_conflict();
                self.monitor.on_conflict(section, depth);
                continue;
            } else {
                let mut scope = grid.scoped(mask);
                self.branch(level.position, section, depth, &mut scope)
            };
            self.stats.on_backtrack();
            if command.is_stop() {
                return SearchCommand::Stop;
            }
        }
        SearchCommand::Continue
    }

    fn branch(
        &mut self,
        position: usize,
        section: &'a Section,
        depth: usize,
        grid: &mut ScheduleGrid,
    ) -> SearchCommand {
        self.choice[position] = Some(section);
        let command = self.descend(depth + 1, grid);
        self.choice[position] = None;
        command
    }

    fn accept(&mut self) {
        let schedule = Schedule::new(self.choice.iter().flatten().map(|&s| s.clone()).collect());
        self.stats.on_schedule_found();
        self.monitor.on_schedule_found(&schedule, &self.stats);
        self.schedules.push(schedule);
    }
}
