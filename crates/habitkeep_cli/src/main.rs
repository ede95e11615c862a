//! HabitKeep command-line entry point.
//!
//! # Responsibility
//! - Parse flags, bring up logging and storage, run first-run seeding.
//! - Hand the opened store to the interactive menu loop.

mod menu;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use habitkeep_core::db::open_db;
use habitkeep_core::{
    default_log_level, init_logging, seed_predefined_habits, SqliteHabitRepository,
};
use std::path::{Path, PathBuf};

/// Personal habit tracker with daily and weekly streaks.
#[derive(Debug, Parser)]
#[command(name = "habitkeep", version, about)]
struct Args {
    /// Path of the SQLite database holding habit records.
    #[arg(long, default_value = "habits.db")]
    db_path: PathBuf,

    /// Directory for rolling log files (created if missing).
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = absolute(&args.log_dir)?;
    init_logging(&args.log_level, &log_dir).map_err(|message| anyhow!(message))?;

    let conn = open_db(&args.db_path).with_context(|| {
        format!(
            "failed to open habit database at {}",
            args.db_path.display()
        )
    })?;

    seed_predefined_habits(&SqliteHabitRepository::new(&conn))
        .context("failed to seed predefined habits")?;

    menu::run(&conn)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("cannot resolve current directory")?;
    Ok(cwd.join(path))
}
