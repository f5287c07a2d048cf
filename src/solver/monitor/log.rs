//! Line-oriented progress log.

use std::io::{self, Stderr, Write};

use super::SearchMonitor;
use crate::models::{Course, Schedule};
use crate::solver::{SearchStatistics, SearchStatus, SolverConfig};

/// Writes search progress and diagnostics to a writer (stderr by default).
///
/// Reports the search parameters on entry, every skipped course, every
/// `report_every`-th accepted schedule, and a closing line with the
/// terminal status and counters. Write failures are ignored; logging
/// never affects the search.
#[derive(Debug)]
pub struct LogMonitor<W: Write = Stderr> {
    writer: W,
    report_every: u64,
}

impl LogMonitor<Stderr> {
    /// Logs to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for LogMonitor<Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W: Write> LogMonitor<W> {
    /// Logs to `writer`, reporting every 100th schedule.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_every: 100,
        }
    }

    /// Sets the schedule progress interval. `0` disables progress lines.
    pub fn with_report_every(mut self, report_every: u64) -> Self {
        self.report_every = report_every;
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.writer.write_fmt(args);
        let _ = self.writer.write_all(b"\n");
    }
}

impl<W: Write> SearchMonitor for LogMonitor<W> {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, courses: &[Course], config: &SolverConfig) {
        let sections: usize = courses.iter().map(Course::section_count).sum();
        self.line(format_args!(
            "[*] solving {} courses ({} sections), max_results={}, ordering={:?}",
            courses.len(),
            sections,
            config.max_results,
            config.ordering
        ));
    }

    fn on_course_skipped(&mut self, index: usize, course: &Course) {
        self.line(format_args!(
            "[!] course #{} \"{}\" has no sections, skipped",
            index, course.name
        ));
    }

    fn on_schedule_found(&mut self, _schedule: &Schedule, stats: &SearchStatistics) {
        if self.report_every > 0 && stats.schedules_found % self.report_every == 0 {
            self.line(format_args!(
                "[*] {} schedules after {} nodes",
                stats.schedules_found, stats.nodes_explored
            ));
        }
    }

    fn on_exit_search(&mut self, status: SearchStatus, stats: &SearchStatistics) {
        self.line(format_args!("[+] search {status}: {stats}"));
        let _ = self.writer.flush();
    }
}
