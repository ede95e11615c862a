//! Habit domain model.
//!
//! # Responsibility
//! - Define the canonical habit record persisted by the store.
//! - Provide boundary normalization for names and cadence strings.
//!
//! # Invariants
//! - `name` is the stable identity of a habit and is never empty.
//! - Counters are non-negative by construction (`u32`).
//! - `highest_streak >= current_streak` after any update.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required repetition frequency of a habit.
///
/// Stored and serialized as lowercase text (`"daily"` / `"weekly"`), the
/// shape the persisted table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// One completion per calendar day.
    Daily,
    /// One completion per Monday-based week.
    Weekly,
}

impl Cadence {
    /// Database and wire text form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Unit word used when rendering streak lengths for this cadence.
    pub fn streak_unit(self) -> &'static str {
        match self {
            Self::Daily => "days",
            Self::Weekly => "weeks",
        }
    }

    /// Parses user input into a cadence.
    ///
    /// Input is trimmed and lowercased first. Anything but `daily` or
    /// `weekly` is rejected; cadence is a closed set and unknown values must
    /// not reach the store.
    pub fn parse(value: &str) -> Result<Self, CadenceParseError> {
        match value.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            other => Err(CadenceParseError {
                value: other.to_string(),
            }),
        }
    }
}

impl Display for Cadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected cadence input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CadenceParseError {
    pub value: String,
}

impl Display for CadenceParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized cadence `{}`; expected daily|weekly",
            self.value
        )
    }
}

impl Error for CadenceParseError {}

/// Canonical habit record: identity, cadence and aggregate counters.
///
/// Only aggregate state is kept; individual completion dates are not stored
/// after initial seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Normalized habit name, the primary key of the store.
    pub name: String,
    pub cadence: Cadence,
    /// Lifetime number of tracked completions.
    pub total_completions: u32,
    /// Length of the run as of the most recent tracked completion.
    pub current_streak: u32,
    /// Longest run ever observed for this habit.
    pub highest_streak: u32,
}

impl Habit {
    /// Creates a habit with all counters at zero.
    pub fn new(name: impl Into<String>, cadence: Cadence) -> Self {
        Self {
            name: name.into(),
            cadence,
            total_completions: 0,
            current_streak: 0,
            highest_streak: 0,
        }
    }

    /// Checks record-level invariants.
    ///
    /// Called by the repository before every write and after every read-back,
    /// so invalid state is rejected instead of silently persisted or masked.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.name.trim().is_empty() {
            return Err(HabitValidationError::EmptyName);
        }
        if self.current_streak > self.highest_streak {
            return Err(HabitValidationError::StreakAboveHighest {
                current_streak: self.current_streak,
                highest_streak: self.highest_streak,
            });
        }
        Ok(())
    }
}

/// Record-level invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitValidationError {
    EmptyName,
    StreakAboveHighest {
        current_streak: u32,
        highest_streak: u32,
    },
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "habit name cannot be empty"),
            Self::StreakAboveHighest {
                current_streak,
                highest_streak,
            } => write!(
                f,
                "current streak {current_streak} exceeds highest streak {highest_streak}"
            ),
        }
    }
}

impl Error for HabitValidationError {}

/// Normalizes a user-entered habit name to its canonical capitalized form.
///
/// The input is trimmed, its first character uppercased and the remainder
/// lowercased, so `"drink WATER"` and `"Drink water"` address the same
/// record.
pub fn normalize_habit_name(input: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
