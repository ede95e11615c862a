//! Completion tracking use-case.
//!
//! # Responsibility
//! - Apply a tracked completion to a habit's aggregate counters.
//! - Persist the updated record through the repository.
//!
//! # Invariants
//! - Tracking never creates a record; an unknown name is `NotFound`.
//! - `total_completions` grows by exactly one per tracked completion.
//! - `highest_streak >= current_streak` after every transition.

use crate::model::habit::{Cadence, Habit};
use crate::repo::habit_repo::{HabitRepository, RepoError, RepoResult};
use chrono::{Datelike, Duration, Local, NaiveDate};
use log::info;

/// Use-case service recording habit completions.
pub struct TrackerService<R: HabitRepository> {
    repo: R,
}

impl<R: HabitRepository> TrackerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records a completion of `name` as of the current local date.
    ///
    /// Returns the updated record, or `NotFound` when the habit does not
    /// exist; no record is created implicitly.
    pub fn track_habit(&self, name: &str) -> RepoResult<Habit> {
        self.track_habit_at(name, Local::now().date_naive())
    }

    /// Records a completion as of an explicit date.
    ///
    /// Split out from `track_habit` so tests can pin the clock.
    pub fn track_habit_at(&self, name: &str, today: NaiveDate) -> RepoResult<Habit> {
        let Some(mut habit) = self.repo.get_habit(name)? else {
            return Err(RepoError::NotFound(name.to_string()));
        };

        apply_completion(&mut habit, today);
        self.repo.update_habit(&habit)?;

        info!(
            "event=habit_tracked module=tracker status=ok name={} cadence={} total={} current_streak={} highest_streak={}",
            habit.name, habit.cadence, habit.total_completions, habit.current_streak, habit.highest_streak
        );

        Ok(habit)
    }
}

/// Applies a single tracked completion to the habit's counters.
///
/// The store keeps no per-completion dates, so the previous-period check can
/// only compare boundaries derived from `today` itself. For daily cadence
/// that comparison never holds and every completion restarts the run at 1.
/// For weekly cadence the end of the previous Monday-based week equals
/// `today - 7 days` exactly when `today` is a Sunday, so only Sunday
/// completions extend a weekly run. Kept as observed until per-completion
/// history exists.
pub fn apply_completion(habit: &mut Habit, today: NaiveDate) {
    habit.total_completions += 1;

    match habit.cadence {
        Cadence::Daily => {
            let previous_day = today - Duration::days(1);
            if today == previous_day {
                habit.current_streak += 1;
            } else {
                habit.current_streak = 1;
            }
        }
        Cadence::Weekly => {
            // Weeks start on Monday; the previous week closes on the Sunday
            // before it.
            let days_into_week = i64::from(today.weekday().num_days_from_monday());
            let last_week_end = today - Duration::days(days_into_week + 1);
            if last_week_end == today - Duration::days(7) {
                habit.current_streak += 1;
            } else {
                habit.current_streak = 1;
            }
        }
    }

    // A restarted run of 1 is still the best run for a habit that never
    // had one.
    if habit.current_streak > habit.highest_streak {
        habit.highest_streak = habit.current_streak;
    }
}
