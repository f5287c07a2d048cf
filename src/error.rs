//! Error types.
//!
//! Only programmer errors surface as `Err`: malformed time slots and
//! invalid solver arguments. An unsatisfiable timetable is not an error;
//! it is an empty result set.

use thiserror::Error;

/// Invalid domain value rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Weekday index outside Monday..=Friday (0..=4).
    #[error("weekday index {0} is out of range 0..=4")]
    WeekdayOutOfRange(u8),

    /// Period outside the 11 daily teaching periods (1..=11).
    #[error("period {0} is out of range 1..=11")]
    PeriodOutOfRange(u8),

    /// A slot whose first period comes after its last one.
    #[error("time slot starts at period {start} but ends at period {end}")]
    InvertedSlot { start: u8, end: u8 },
}

/// Errors returned by the solver entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// `max_results` must be at least 1.
    #[error("max_results must be at least 1, got {0}")]
    InvalidMaxResults(usize),

    /// Invalid model value.
    #[error("invalid model: {0}")]
    Model(#[from] ModelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SolverError::InvalidMaxResults(0).to_string(),
            "max_results must be at least 1, got 0"
        );
        assert_eq!(
            ModelError::InvertedSlot { start: 4, end: 2 }.to_string(),
            "time slot starts at period 4 but ends at period 2"
        );
    }

    #[test]
    fn test_model_error_converts() {
        let err: SolverError = ModelError::PeriodOutOfRange(12).into();
        assert_eq!(err, SolverError::Model(ModelError::PeriodOutOfRange(12)));
        assert!(err.to_string().contains("period 12"));
    }
}
