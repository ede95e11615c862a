//! Streak analysis over stored habits.
//!
//! # Responsibility
//! - Summarize one cadence's habits: per-habit streaks plus the longest and
//!   shortest streak sets.
//! - Look up a single habit's completion count.
//!
//! # Invariants
//! - Extremes are computed by direct comparison over persisted
//!   `highest_streak` values, never by recalculating from dates.
//! - Tie sets contain every habit at the extreme value.

use crate::model::habit::Cadence;
use crate::repo::habit_repo::{HabitRepository, RepoResult, StreakEntry};
use log::info;

/// Use-case service for streak reporting.
pub struct AnalyticsService<R: HabitRepository> {
    repo: R,
}

/// One extreme of a cadence report: the streak value and every habit name
/// achieving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakExtreme {
    pub streak: u32,
    pub names: Vec<String>,
}

/// Streak summary for a single cadence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CadenceReport {
    pub cadence: Cadence,
    /// Per-habit listing in store order.
    pub habits: Vec<StreakEntry>,
    pub longest: StreakExtreme,
    pub shortest: StreakExtreme,
}

impl<R: HabitRepository> AnalyticsService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds the streak report for `cadence`.
    ///
    /// Returns `None` when no habit of that cadence exists.
    pub fn analyze_cadence(&self, cadence: Cadence) -> RepoResult<Option<CadenceReport>> {
        let habits = self.repo.streak_overview(Some(cadence))?;
        if habits.is_empty() {
            return Ok(None);
        }

        let mut longest = StreakExtreme {
            streak: 0,
            names: Vec::new(),
        };
        let mut shortest = StreakExtreme {
            streak: u32::MAX,
            names: Vec::new(),
        };

        for entry in &habits {
            if entry.highest_streak > longest.streak {
                longest.streak = entry.highest_streak;
                longest.names = vec![entry.name.clone()];
            } else if entry.highest_streak == longest.streak {
                longest.names.push(entry.name.clone());
            }

            if entry.highest_streak < shortest.streak {
                shortest.streak = entry.highest_streak;
                shortest.names = vec![entry.name.clone()];
            } else if entry.highest_streak == shortest.streak {
                shortest.names.push(entry.name.clone());
            }
        }

        info!(
            "event=habits_analyzed module=analytics status=ok cadence={} habits={} longest={} shortest={}",
            cadence,
            habits.len(),
            longest.streak,
            shortest.streak
        );

        Ok(Some(CadenceReport {
            cadence,
            habits,
            longest,
            shortest,
        }))
    }

    /// Returns `total_completions` for one habit, or `None` when absent.
    pub fn completion_count(&self, name: &str) -> RepoResult<Option<u32>> {
        Ok(self
            .repo
            .get_habit(name)?
            .map(|habit| habit.total_completions))
    }
}
