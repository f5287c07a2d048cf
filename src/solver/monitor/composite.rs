//! Fan-out to several monitors.

use super::{SearchCommand, SearchMonitor};
use crate::models::{Course, Schedule, Section};
use crate::solver::{SearchStatistics, SearchStatus, SolverConfig};

/// Forwards every hook to each child in insertion order.
///
/// `check_termination` asks every child and stops if any of them does.
#[derive(Default)]
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn SearchMonitor + 'a>>,
}

impl<'a> CompositeMonitor<'a> {
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a child monitor.
    pub fn with_monitor<M: SearchMonitor + 'a>(mut self, monitor: M) -> Self {
        self.monitors.push(Box::new(monitor));
        self
    }

    /// Adds a child monitor.
    pub fn add_monitor<M: SearchMonitor + 'a>(&mut self, monitor: M) {
        self.monitors.push(Box::new(monitor));
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl SearchMonitor for CompositeMonitor<'_> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, courses: &[Course], config: &SolverConfig) {
        for m in &mut self.monitors {
            m.on_enter_search(courses, config);
        }
    }

    fn on_course_skipped(&mut self, index: usize, course: &Course) {
        for m in &mut self.monitors {
            m.on_course_skipped(index, course);
        }
    }

    fn check_termination(&mut self, stats: &SearchStatistics) -> SearchCommand {
        let mut command = SearchCommand::Continue;
        for m in &mut self.monitors {
            if m.check_termination(stats).is_stop() {
                command = SearchCommand::Stop;
            }
        }
        command
    }

    fn on_conflict(&mut self, section: &Section, depth: usize) {
        for m in &mut self.monitors {
            m.on_conflict(section, depth);
        }
    }

    fn on_schedule_found(&mut self, schedule: &Schedule, stats: &SearchStatistics) {
        for m in &mut self.monitors {
            m.on_schedule_found(schedule, stats);
        }
    }

    fn on_exit_search(&mut self, status: SearchStatus, stats: &SearchStatistics) {
        for m in &mut self.monitors {
            m.on_exit_search(status, stats);
        }
    }
}
