//! Search work counters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Statistics collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Search nodes entered (partial assignments extended).
    pub nodes_explored: u64,
    /// Candidate sections rejected because they overlapped the grid.
    pub conflicts: u64,
    /// Returns from a child node to its parent.
    pub backtracks: u64,
    /// Schedules accepted into the result set.
    pub schedules_found: u64,
    /// Deepest level entered (number of courses assigned).
    pub max_depth: u64,
    /// Wall-clock time of the search.
    pub elapsed: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self, depth: usize) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
        self.max_depth = self.max_depth.max(depth as u64);
    }

    #[inline]
    pub fn on_conflict(&mut self) {
        self.conflicts = self.conflicts.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_schedule_found(&mut self) {
        self.schedules_found = self.schedules_found.saturating_add(1);
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} conflicts={} backtracks={} schedules={} max_depth={} elapsed={:.3}s",
            self.nodes_explored,
            self.conflicts,
            self.backtracks,
            self.schedules_found,
            self.max_depth,
            self.elapsed.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored(0);
        stats.on_node_explored(3);
        stats.on_node_explored(1);
        stats.on_conflict();
        stats.on_backtrack();
        stats.on_schedule_found();

        assert_eq!(stats.nodes_explored, 3);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.conflicts, 1);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.schedules_found, 1);
    }

    #[test]
    fn test_saturating() {
        let mut stats = SearchStatistics {
            nodes_explored: u64::MAX,
            ..Default::default()
        };
        stats.on_node_explored(0);
        assert_eq!(stats.nodes_explored, u64::MAX);
    }
}
