//! First-run seeding of predefined habits.
//!
//! # Responsibility
//! - Populate an empty store with the predefined habit set.
//! - Derive each seeded habit's initial counters from its historical
//!   completion dates via the streak calculator.
//!
//! # Invariants
//! - Seeding runs only against an empty store; any existing record skips it.
//! - This is the only caller of the batch streak calculator; interactive
//!   tracking uses the incremental transition instead.

use crate::model::habit::{Cadence, Habit};
use crate::repo::habit_repo::{HabitRepository, RepoError, RepoResult};
use crate::streak::highest_streak;
use chrono::NaiveDate;
use log::info;

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and the predefined habits were inserted.
    Seeded,
    /// The store already had records; nothing was inserted.
    Skipped,
}

struct PredefinedHabit {
    name: &'static str,
    cadence: Cadence,
    /// Historical completions (June 2023), `YYYY-MM-DD`.
    completions: &'static [&'static str],
}

const PREDEFINED_HABITS: &[PredefinedHabit] = &[
    PredefinedHabit {
        name: "Drink 5 glasses of water",
        cadence: Cadence::Daily,
        completions: &[
            "2023-06-01",
            "2023-06-02",
            "2023-06-03",
            "2023-06-04",
            "2023-06-06",
            "2023-06-08",
            "2023-06-09",
            "2023-06-15",
            "2023-06-22",
        ],
    },
    PredefinedHabit {
        name: "Exercise",
        cadence: Cadence::Weekly,
        completions: &["2023-06-06", "2023-06-13", "2023-06-20"],
    },
    PredefinedHabit {
        name: "Read a book",
        cadence: Cadence::Daily,
        completions: &[
            "2023-06-01",
            "2023-06-02",
            "2023-06-03",
            "2023-06-04",
            "2023-06-05",
            "2023-06-06",
            "2023-06-10",
            "2023-06-11",
            "2023-06-12",
            "2023-06-15",
            "2023-06-16",
            "2023-06-17",
            "2023-06-18",
            "2023-06-22",
            "2023-06-23",
            "2023-06-24",
            "2023-06-25",
            "2023-06-26",
        ],
    },
    PredefinedHabit {
        name: "Meditate",
        cadence: Cadence::Daily,
        completions: &[
            "2023-06-01",
            "2023-06-02",
            "2023-06-03",
            "2023-06-04",
            "2023-06-05",
            "2023-06-06",
            "2023-06-10",
            "2023-06-11",
            "2023-06-18",
            "2023-06-28",
        ],
    },
    PredefinedHabit {
        name: "Take a 30-minute walk",
        cadence: Cadence::Weekly,
        completions: &["2023-06-06", "2023-06-12"],
    },
];

/// Seeds the predefined habits into an empty store.
///
/// Each seeded habit starts with `highest_streak` and `total_completions`
/// derived from its historical completion list; `current_streak` stays 0
/// because no run is in progress when the store is first created.
pub fn seed_predefined_habits<R: HabitRepository>(repo: &R) -> RepoResult<SeedOutcome> {
    if repo.count_habits()? > 0 {
        info!("event=seed module=seed status=skipped");
        return Ok(SeedOutcome::Skipped);
    }

    for predefined in PREDEFINED_HABITS {
        let mut habit = Habit::new(predefined.name, predefined.cadence);

        if !predefined.completions.is_empty() {
            let dates = parse_seed_dates(predefined.name, predefined.completions)?;
            habit.highest_streak =
                highest_streak(predefined.cadence, &dates).map_err(|err| {
                    RepoError::InvalidData(format!(
                        "seed data for `{}` is unusable: {err}",
                        predefined.name
                    ))
                })?;
            habit.total_completions = dates.len() as u32;
        }

        repo.add_habit(&habit)?;
    }

    info!(
        "event=seed module=seed status=ok habits={}",
        PREDEFINED_HABITS.len()
    );

    Ok(SeedOutcome::Seeded)
}

fn parse_seed_dates(name: &str, completions: &[&str]) -> RepoResult<Vec<NaiveDate>> {
    completions
        .iter()
        .map(|text| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|err| {
                RepoError::InvalidData(format!(
                    "invalid seed date `{text}` for `{name}`: {err}"
                ))
            })
        })
        .collect()
}
