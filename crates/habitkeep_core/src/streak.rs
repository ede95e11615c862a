//! Longest-run streak calculation over completion dates.
//!
//! # Responsibility
//! - Compute the longest consecutive run in a set of completion dates under
//!   a cadence adjacency rule.
//!
//! # Invariants
//! - Input order never affects the result.
//! - Non-empty input always yields a streak of at least 1.

use crate::model::habit::Cadence;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StreakResult<T> = Result<T, StreakError>;

/// Streak calculation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakError {
    /// A streak over zero completions is meaningless; callers must guard.
    EmptyDates,
}

impl Display for StreakError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDates => write!(f, "cannot compute a streak over an empty date list"),
        }
    }
}

impl Error for StreakError {}

/// Returns the length of the longest consecutive run in `dates`.
///
/// Dates may arrive in any order and may contain duplicates; the slice is
/// sorted internally. A daily run extends only on a gap of exactly one day,
/// so a duplicate date breaks it. A weekly run extends on any gap of at most
/// seven days, including zero, which means duplicates extend a weekly run.
/// The asymmetry is long-standing observed behavior and is kept as-is.
pub fn highest_streak(cadence: Cadence, dates: &[NaiveDate]) -> StreakResult<u32> {
    if dates.is_empty() {
        return Err(StreakError::EmptyDates);
    }

    let mut sorted = dates.to_vec();
    sorted.sort_unstable();

    let mut current = 1u32;
    let mut highest = 1u32;

    for pair in sorted.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        let extends = match cadence {
            Cadence::Daily => gap == 1,
            Cadence::Weekly => gap <= 7,
        };
        if extends {
            current += 1;
            if current > highest {
                highest = current;
            }
        } else {
            current = 1;
        }
    }

    Ok(highest)
}
