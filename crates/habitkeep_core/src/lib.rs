//! Core domain logic for HabitKeep.
//! This crate is the single source of truth for habit business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod streak;

pub use logging::{default_log_level, init_logging};
pub use model::habit::{
    normalize_habit_name, Cadence, CadenceParseError, Habit, HabitValidationError,
};
pub use repo::habit_repo::{
    HabitRepository, HabitSummary, RepoError, RepoResult, SqliteHabitRepository, StreakEntry,
};
pub use service::analytics::{AnalyticsService, CadenceReport, StreakExtreme};
pub use service::seed::{seed_predefined_habits, SeedOutcome};
pub use service::tracker::{apply_completion, TrackerService};
pub use streak::{highest_streak, StreakError, StreakResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
