//! Habit repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `habits` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Habit::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Every mutating operation persists immediately; there is no batching.

use crate::db::DbError;
use crate::model::habit::{Cadence, Habit, HabitValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const HABIT_SELECT_SQL: &str = "SELECT
    name,
    cadence,
    total_completions,
    current_streak,
    highest_streak
FROM habits";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for habit persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(HabitValidationError),
    Db(DbError),
    NotFound(String),
    AlreadyExists(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(name) => write!(f, "habit not found: {name}"),
            Self::AlreadyExists(name) => write!(f, "habit already exists: {name}"),
            Self::InvalidData(message) => write!(f, "invalid persisted habit data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::AlreadyExists(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<HabitValidationError> for RepoError {
    fn from(value: HabitValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Name and cadence pair returned by `list_habits`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitSummary {
    pub name: String,
    pub cadence: Cadence,
}

/// Name and highest streak pair returned by `streak_overview`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakEntry {
    pub name: String,
    pub highest_streak: u32,
}

/// Repository interface for habit CRUD operations.
///
/// Injected into services so business logic can be tested against an
/// in-memory store without touching real files.
pub trait HabitRepository {
    /// Inserts a new habit. Fails with `AlreadyExists` when the name is taken.
    fn add_habit(&self, habit: &Habit) -> RepoResult<()>;
    /// Removes a habit by name. Fails with `NotFound` when absent.
    fn delete_habit(&self, name: &str) -> RepoResult<()>;
    fn get_habit(&self, name: &str) -> RepoResult<Option<Habit>>;
    /// Overwrites all mutable fields of an existing habit.
    fn update_habit(&self, habit: &Habit) -> RepoResult<()>;
    fn list_habits(&self) -> RepoResult<Vec<HabitSummary>>;
    /// Streak listing filtered by cadence, or over every habit when `None`.
    fn streak_overview(&self, cadence: Option<Cadence>) -> RepoResult<Vec<StreakEntry>>;
    fn count_habits(&self) -> RepoResult<u32>;
}

/// SQLite-backed habit repository.
pub struct SqliteHabitRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHabitRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl HabitRepository for SqliteHabitRepository<'_> {
    fn add_habit(&self, habit: &Habit) -> RepoResult<()> {
        habit.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO habits (
                name,
                cadence,
                total_completions,
                current_streak,
                highest_streak
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                habit.name.as_str(),
                habit.cadence.as_str(),
                i64::from(habit.total_completions),
                i64::from(habit.current_streak),
                i64::from(habit.highest_streak),
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(RepoError::AlreadyExists(habit.name.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn delete_habit(&self, name: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM habits WHERE name = ?1;", [name])?;

        if changed == 0 {
            return Err(RepoError::NotFound(name.to_string()));
        }

        Ok(())
    }

    fn get_habit(&self, name: &str) -> RepoResult<Option<Habit>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{HABIT_SELECT_SQL} WHERE name = ?1;"))?;

        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_habit_row(row)?));
        }

        Ok(None)
    }

    fn update_habit(&self, habit: &Habit) -> RepoResult<()> {
        habit.validate()?;

        let changed = self.conn.execute(
            "UPDATE habits
             SET
                cadence = ?1,
                total_completions = ?2,
                current_streak = ?3,
                highest_streak = ?4
             WHERE name = ?5;",
            params![
                habit.cadence.as_str(),
                i64::from(habit.total_completions),
                i64::from(habit.current_streak),
                i64::from(habit.highest_streak),
                habit.name.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(habit.name.clone()));
        }

        Ok(())
    }

    fn list_habits(&self) -> RepoResult<Vec<HabitSummary>> {
        let mut stmt = self.conn.prepare("SELECT name, cadence FROM habits;")?;
        let mut rows = stmt.query([])?;
        let mut habits = Vec::new();

        while let Some(row) = rows.next()? {
            let name: String = row.get("name")?;
            let cadence = parse_cadence_column(row)?;
            habits.push(HabitSummary { name, cadence });
        }

        Ok(habits)
    }

    fn streak_overview(&self, cadence: Option<Cadence>) -> RepoResult<Vec<StreakEntry>> {
        let mut sql = String::from("SELECT name, highest_streak FROM habits");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(cadence) = cadence {
            sql.push_str(" WHERE cadence = ?");
            bind_values.push(Value::Text(cadence.as_str().to_string()));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(StreakEntry {
                name: row.get("name")?,
                highest_streak: read_counter(row, "highest_streak")?,
            });
        }

        Ok(entries)
    }

    fn count_habits(&self) -> RepoResult<u32> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM habits;", [], |row| row.get(0))?;
        u32::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("invalid habit row count `{count}`")))
    }
}

fn parse_habit_row(row: &Row<'_>) -> RepoResult<Habit> {
    let habit = Habit {
        name: row.get("name")?,
        cadence: parse_cadence_column(row)?,
        total_completions: read_counter(row, "total_completions")?,
        current_streak: read_counter(row, "current_streak")?,
        highest_streak: read_counter(row, "highest_streak")?,
    };
    habit.validate()?;
    Ok(habit)
}

fn parse_cadence_column(row: &Row<'_>) -> RepoResult<Cadence> {
    let value: String = row.get("cadence")?;
    match value.as_str() {
        "daily" => Ok(Cadence::Daily),
        "weekly" => Ok(Cadence::Weekly),
        other => Err(RepoError::InvalidData(format!(
            "invalid cadence value `{other}` in habits.cadence"
        ))),
    }
}

fn read_counter(row: &Row<'_>, column: &'static str) -> RepoResult<u32> {
    let value: i64 = row.get(column)?;
    u32::try_from(value).map_err(|_| {
        RepoError::InvalidData(format!("invalid counter value `{value}` in habits.{column}"))
    })
}
