//! Weekly occupancy grid.
//!
//! Tracks which of the 5 x 11 `(weekday, period)` cells are taken by the
//! sections chosen so far. The whole week fits in one `u64`, so conflict
//! tests, occupation and release are single bit operations.
//!
//! # Cell Layout
//! Cell `(weekday, period)` maps to bit `weekday * 11 + (period - 1)`,
//! giving bits `0..55`.
//!
//! # Reversibility
//! `occupy` returns an [`OccupancyToken`] holding exactly the bits it set.
//! Releasing the token clears those bits and nothing else, so cells that
//! were already taken, or that two slots of the same section both cover,
//! are never released twice. [`ScheduleGrid::scoped`] ties the release to
//! a guard's lifetime.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::models::{TimeSlot, Weekday, DAYS_PER_WEEK, PERIODS_PER_DAY};

/// Number of cells in the weekly grid.
pub const GRID_CELLS: u32 = DAYS_PER_WEEK as u32 * PERIODS_PER_DAY as u32;

#[inline]
fn cell_bit(weekday: Weekday, period: u8) -> u64 {
    let index = u32::from(weekday.index()) * u32::from(PERIODS_PER_DAY) + u32::from(period - 1);
    1u64 << index
}

/// The set of grid cells covered by a list of time slots.
///
/// Computed once per section before the search starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotMask(u64);

impl SlotMask {
    /// The mask covering no cell.
    pub const EMPTY: SlotMask = SlotMask(0);

    /// Union of the cells covered by `slots`.
    pub fn from_slots(slots: &[TimeSlot]) -> Self {
        let mut bits = 0u64;
        for slot in slots {
            // Contiguous run of periods on one day.
            let first = cell_bit(slot.weekday(), slot.start_period());
            let run = (1u64 << slot.period_count()) - 1;
            bits |= run * first;
        }
        Self(bits)
    }

    /// Whether no cell is covered.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of covered cells.
    #[inline]
    pub fn cell_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the two masks share a cell.
    #[inline]
    pub fn intersects(self, other: SlotMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether `(weekday, period)` is covered.
    pub fn contains(self, weekday: Weekday, period: u8) -> bool {
        (1..=PERIODS_PER_DAY).contains(&period) && self.0 & cell_bit(weekday, period) != 0
    }
}

impl From<&[TimeSlot]> for SlotMask {
    fn from(slots: &[TimeSlot]) -> Self {
        Self::from_slots(slots)
    }
}

/// Cells newly marked by one [`ScheduleGrid::occupy`] call.
///
/// Not `Clone`: each token is released at most once.
#[must_use = "an occupancy token must be released to restore the grid"]
#[derive(Debug, PartialEq, Eq)]
pub struct OccupancyToken(u64);

impl OccupancyToken {
    /// Number of cells this token will release.
    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the token releases nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Occupancy state of one in-progress search.
///
/// Not shared between searches; each solve owns its own grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleGrid {
    occupied: u64,
}

impl ScheduleGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any cell covered by `slots` is already occupied.
    ///
    /// Always `false` for an empty slot list.
    pub fn would_conflict(&self, slots: &[TimeSlot]) -> bool {
        self.would_conflict_mask(SlotMask::from_slots(slots))
    }

    /// Mask form of [`would_conflict`](Self::would_conflict).
    #[inline]
    pub fn would_conflict_mask(&self, mask: SlotMask) -> bool {
        self.occupied & mask.0 != 0
    }

    /// Marks every cell covered by `slots` as occupied.
    pub fn occupy(&mut self, slots: &[TimeSlot]) -> OccupancyToken {
        self.occupy_mask(SlotMask::from_slots(slots))
    }

    /// Mask form of [`occupy`](Self::occupy).
    #[inline]
    pub fn occupy_mask(&mut self, mask: SlotMask) -> OccupancyToken {
        let added = mask.0 & !self.occupied;
        self.occupied |= added;
        OccupancyToken(added)
    }

    /// Unmarks exactly the cells recorded in `token`.
    #[inline]
    pub fn release(&mut self, token: OccupancyToken) {
        self.occupied &= !token.0;
    }

    /// Occupies `mask` for the lifetime of the returned guard.
    ///
    /// The guard derefs to the grid, so nested choices can be made through
    /// it; dropping it releases the cells on every exit path.
    pub fn scoped(&mut self, mask: SlotMask) -> GridScope<'_> {
        let token = self.occupy_mask(mask);
        GridScope {
            grid: self,
            token: Some(token),
        }
    }

    /// Whether a single cell is occupied.
    pub fn is_occupied(&self, weekday: Weekday, period: u8) -> bool {
        (1..=PERIODS_PER_DAY).contains(&period) && self.occupied & cell_bit(weekday, period) != 0
    }

    /// Number of occupied cells.
    #[inline]
    pub fn occupied_count(&self) -> u32 {
        self.occupied.count_ones()
    }

    /// Whether no cell is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Releases every cell.
    pub fn clear(&mut self) {
        self.occupied = 0;
    }
}

impl fmt::Display for ScheduleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in Weekday::ALL {
            write!(f, "{day} ")?;
            for period in 1..=PERIODS_PER_DAY {
                let c = if self.is_occupied(day, period) { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Guard returned by [`ScheduleGrid::scoped`].
#[derive(Debug)]
pub struct GridScope<'a> {
    grid: &'a mut ScheduleGrid,
    token: Option<OccupancyToken>,
}

impl Deref for GridScope<'_> {
    type Target = ScheduleGrid;

    fn deref(&self) -> &ScheduleGrid {
        &*self.grid
    }
}

impl DerefMut for GridScope<'_> {
    fn deref_mut(&mut self) -> &mut ScheduleGrid {
        &mut *self.grid
    }
}

impl Drop for GridScope<'_> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.grid.release(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: Weekday, start: u8, end: u8) -> TimeSlot {
        TimeSlot::new(day, start, end).unwrap()
    }

    #[test]
    fn test_grid_cells() {
        assert_eq!(GRID_CELLS, 55);
        let all: Vec<TimeSlot> = Weekday::ALL.iter().map(|&d| slot(d, 1, 11)).collect();
        let mask = SlotMask::from_slots(&all);
        assert_eq!(mask.cell_count(), 55);
        assert!(mask.contains(Weekday::Friday, 11));
        assert!(!mask.contains(Weekday::Friday, 12));
    }

    #[test]
    fn test_slot_mask_layout() {
        let mask = SlotMask::from_slots(&[slot(Weekday::Tuesday, 3, 5)]);
        assert_eq!(mask.cell_count(), 3);
        assert!(mask.contains(Weekday::Tuesday, 3));
        assert!(mask.contains(Weekday::Tuesday, 5));
        assert!(!mask.contains(Weekday::Tuesday, 2));
        assert!(!mask.contains(Weekday::Tuesday, 6));
        assert!(!mask.contains(Weekday::Monday, 3));
        assert!(!mask.contains(Weekday::Wednesday, 3));
    }

    #[test]
    fn test_empty_slots_never_conflict() {
        let mut grid = ScheduleGrid::new();
        let _token = grid.occupy(&[slot(Weekday::Monday, 1, 11)]);
        assert!(!grid.would_conflict(&[]));
        assert!(SlotMask::from_slots(&[]).is_empty());
    }

    #[test]
    fn test_would_conflict() {
        let mut grid = ScheduleGrid::new();
        let _token = grid.occupy(&[slot(Weekday::Monday, 1, 2)]);

        assert!(grid.would_conflict(&[slot(Weekday::Monday, 2, 3)]));
        assert!(!grid.would_conflict(&[slot(Weekday::Monday, 3, 4)]));
        assert!(!grid.would_conflict(&[slot(Weekday::Tuesday, 1, 2)]));
        assert!(grid.would_conflict(&[
            slot(Weekday::Friday, 1, 1),
            slot(Weekday::Monday, 1, 1),
        ]));
    }

    #[test]
    fn test_occupy_release_roundtrip() {
        let mut grid = ScheduleGrid::new();
        let token = grid.occupy(&[slot(Weekday::Wednesday, 4, 6)]);
        assert_eq!(token.cell_count(), 3);
        assert_eq!(grid.occupied_count(), 3);
        assert!(grid.is_occupied(Weekday::Wednesday, 5));

        grid.release(token);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_overlapping_slots_in_one_section() {
        let mut grid = ScheduleGrid::new();
        // Two slots of the same section sharing period 3.
        let token = grid.occupy(&[slot(Weekday::Monday, 1, 3), slot(Weekday::Monday, 3, 4)]);
        assert_eq!(token.cell_count(), 4);
        grid.release(token);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_release_only_new_cells() {
        let mut grid = ScheduleGrid::new();
        let first = grid.occupy(&[slot(Weekday::Monday, 1, 2)]);
        // Occupying an overlapping block only records the new cell.
        let second = grid.occupy(&[slot(Weekday::Monday, 2, 3)]);
        assert_eq!(second.cell_count(), 1);

        grid.release(second);
        assert!(grid.is_occupied(Weekday::Monday, 1));
        assert!(grid.is_occupied(Weekday::Monday, 2));
        assert!(!grid.is_occupied(Weekday::Monday, 3));

        grid.release(first);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_scoped_release_on_drop() {
        let mut grid = ScheduleGrid::new();
        let outer_mask = SlotMask::from_slots(&[slot(Weekday::Monday, 1, 2)]);
        let inner_mask = SlotMask::from_slots(&[slot(Weekday::Tuesday, 1, 2)]);
        {
            let mut outer = grid.scoped(outer_mask);
            assert_eq!(outer.occupied_count(), 2);
            {
                let inner = outer.scoped(inner_mask);
                assert_eq!(inner.occupied_count(), 4);
            }
            assert_eq!(outer.occupied_count(), 2);
            assert!(!outer.is_occupied(Weekday::Tuesday, 1));
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clear_and_display() {
        let mut grid = ScheduleGrid::new();
        let _token = grid.occupy(&[slot(Weekday::Monday, 1, 2)]);
        let rendered = grid.to_string();
        assert!(rendered.starts_with("Mon ##........."));
        grid.clear();
        assert!(grid.is_empty());
    }
}
