//! Weekly time model.
//!
//! A teaching week has 5 weekdays with 11 numbered periods each. A
//! `TimeSlot` is one contiguous block of periods on a single weekday.
//!
//! # Time Model
//! Periods are 1-based and inclusive on both ends: a slot `Mon 3-4`
//! covers periods 3 and 4 on Monday. Clock times per period are fixed
//! (see [`period_clock_time`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;

/// Number of teaching weekdays (Monday..=Friday).
pub const DAYS_PER_WEEK: u8 = 5;

/// Number of teaching periods per day.
pub const PERIODS_PER_DAY: u8 = 11;

const PERIOD_CLOCK_TIMES: [&str; PERIODS_PER_DAY as usize] = [
    "08:00-08:50",
    "09:00-09:50",
    "10:20-11:10",
    "11:20-12:10",
    "14:00-14:50",
    "15:00-15:50",
    "16:20-17:10",
    "17:20-18:10",
    "19:00-19:50",
    "20:00-20:50",
    "21:10-22:00",
];

/// Wall-clock window of a period, e.g. `"08:00-08:50"` for period 1.
///
/// Returns `None` for periods outside `1..=11`.
pub fn period_clock_time(period: u8) -> Option<&'static str> {
    if period == 0 {
        return None;
    }
    PERIOD_CLOCK_TIMES.get(usize::from(period - 1)).copied()
}

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; DAYS_PER_WEEK as usize] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Weekday from a 0-based index (0 = Monday).
    pub fn from_index(index: u8) -> Result<Self, ModelError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(ModelError::WeekdayOutOfRange(index))
    }

    /// 0-based index (0 = Monday).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Three-letter name.
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A contiguous block of periods on one weekday.
///
/// Invariant: `1 <= start_period <= end_period <= 11`. Enforced by
/// [`TimeSlot::new`] and on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot")]
pub struct TimeSlot {
    weekday: Weekday,
    start_period: u8,
    end_period: u8,
}

#[derive(Deserialize)]
struct RawTimeSlot {
    weekday: Weekday,
    start_period: u8,
    end_period: u8,
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = ModelError;

    fn try_from(raw: RawTimeSlot) -> Result<Self, Self::Error> {
        Self::new(raw.weekday, raw.start_period, raw.end_period)
    }
}

impl TimeSlot {
    /// Creates a slot covering `start_period..=end_period` on `weekday`.
    pub fn new(weekday: Weekday, start_period: u8, end_period: u8) -> Result<Self, ModelError> {
        for period in [start_period, end_period] {
            if !(1..=PERIODS_PER_DAY).contains(&period) {
                return Err(ModelError::PeriodOutOfRange(period));
            }
        }
        if start_period > end_period {
            return Err(ModelError::InvertedSlot {
                start: start_period,
                end: end_period,
            });
        }
        Ok(Self {
            weekday,
            start_period,
            end_period,
        })
    }

    /// Creates a slot from a 0-based weekday index.
    pub fn from_index(weekday: u8, start_period: u8, end_period: u8) -> Result<Self, ModelError> {
        Self::new(Weekday::from_index(weekday)?, start_period, end_period)
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    #[inline]
    pub fn start_period(&self) -> u8 {
        self.start_period
    }

    #[inline]
    pub fn end_period(&self) -> u8 {
        self.end_period
    }

    /// Number of periods covered (at least 1).
    #[inline]
    pub fn period_count(&self) -> u8 {
        self.end_period - self.start_period + 1
    }

    /// Whether the slot covers `period` on `weekday`.
    #[inline]
    pub fn contains(&self, weekday: Weekday, period: u8) -> bool {
        self.weekday == weekday && (self.start_period..=self.end_period).contains(&period)
    }

    /// Whether two slots share at least one cell.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.weekday == other.weekday
            && self.start_period <= other.end_period
            && other.start_period <= self.end_period
    }

    /// Covered `(weekday, period)` cells in period order.
    pub fn periods(&self) -> impl Iterator<Item = (Weekday, u8)> + '_ {
        (self.start_period..=self.end_period).map(move |p| (self.weekday, p))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.weekday, self.start_period, self.end_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot_new() {
        let slot = TimeSlot::new(Weekday::Tuesday, 3, 5).unwrap();
        assert_eq!(slot.weekday(), Weekday::Tuesday);
        assert_eq!(slot.start_period(), 3);
        assert_eq!(slot.end_period(), 5);
        assert_eq!(slot.period_count(), 3);
    }

    #[test]
    fn test_time_slot_single_period() {
        let slot = TimeSlot::new(Weekday::Friday, 11, 11).unwrap();
        assert_eq!(slot.period_count(), 1);
        assert_eq!(slot.periods().collect::<Vec<_>>(), vec![(Weekday::Friday, 11)]);
    }

    #[test]
    fn test_time_slot_rejects_bad_periods() {
        assert_eq!(
            TimeSlot::new(Weekday::Monday, 0, 2),
            Err(ModelError::PeriodOutOfRange(0))
        );
        assert_eq!(
            TimeSlot::new(Weekday::Monday, 10, 12),
            Err(ModelError::PeriodOutOfRange(12))
        );
        assert_eq!(
            TimeSlot::new(Weekday::Monday, 5, 4),
            Err(ModelError::InvertedSlot { start: 5, end: 4 })
        );
    }

    #[test]
    fn test_weekday_from_index() {
        assert_eq!(Weekday::from_index(0), Ok(Weekday::Monday));
        assert_eq!(Weekday::from_index(4), Ok(Weekday::Friday));
        assert_eq!(Weekday::from_index(5), Err(ModelError::WeekdayOutOfRange(5)));
        assert_eq!(
            TimeSlot::from_index(6, 1, 2),
            Err(ModelError::WeekdayOutOfRange(6))
        );
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(day.index()), i);
        }
    }

    #[test]
    fn test_time_slot_overlap() {
        let a = TimeSlot::new(Weekday::Monday, 1, 2).unwrap();
        let b = TimeSlot::new(Weekday::Monday, 2, 4).unwrap();
        let c = TimeSlot::new(Weekday::Monday, 3, 4).unwrap(); // adjacent to a
        let d = TimeSlot::new(Weekday::Tuesday, 1, 2).unwrap(); // same periods, other day

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_time_slot_contains() {
        let slot = TimeSlot::new(Weekday::Wednesday, 5, 7).unwrap();
        assert!(slot.contains(Weekday::Wednesday, 5));
        assert!(slot.contains(Weekday::Wednesday, 7));
        assert!(!slot.contains(Weekday::Wednesday, 8));
        assert!(!slot.contains(Weekday::Thursday, 6));
    }

    #[test]
    fn test_time_slot_display() {
        let slot = TimeSlot::new(Weekday::Thursday, 9, 10).unwrap();
        assert_eq!(slot.to_string(), "Thu 9-10");
    }

    #[test]
    fn test_period_clock_time() {
        assert_eq!(period_clock_time(1), Some("08:00-08:50"));
        assert_eq!(period_clock_time(11), Some("21:10-22:00"));
        assert_eq!(period_clock_time(0), None);
        assert_eq!(period_clock_time(12), None);
    }

    #[test]
    fn test_time_slot_deserialize_validates() {
        let ok: TimeSlot = serde_json::from_str(
            r#"{"weekday":"Monday","start_period":1,"end_period":2}"#,
        )
        .unwrap();
        assert_eq!(ok, TimeSlot::new(Weekday::Monday, 1, 2).unwrap());

        let bad = serde_json::from_str::<TimeSlot>(
            r#"{"weekday":"Monday","start_period":3,"end_period":2}"#,
        );
        assert!(bad.is_err());
    }
}
