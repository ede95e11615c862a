//! Interactive numbered menu over the core services.
//!
//! # Responsibility
//! - Prompt for input, normalize it, dispatch to core services.
//! - Render every outcome (including errors) as a message and return to the
//!   menu; no user action terminates the process except Exit.

use anyhow::Result;
use habitkeep_core::{
    normalize_habit_name, AnalyticsService, Cadence, CadenceReport, Habit, HabitRepository,
    RepoError, SqliteHabitRepository, TrackerService,
};
use rusqlite::Connection;
use std::io::{self, BufRead, Write};

/// Runs the menu loop until the user exits or stdin closes.
pub fn run(conn: &Connection) -> Result<()> {
    let repo = SqliteHabitRepository::new(conn);
    let tracker = TrackerService::new(SqliteHabitRepository::new(conn));
    let analytics = AnalyticsService::new(SqliteHabitRepository::new(conn));

    loop {
        println!("\nWelcome to the Habit Tracking Application\n");
        println!("Enter a command:");
        println!("1. Add a habit");
        println!("2. Delete a habit");
        println!("3. Track a habit");
        println!("4. List habits");
        println!("5. Analyze habits");
        println!("6. Exit");

        let Some(choice) = prompt("Enter your choice (1/2/3/4/5/6): ")? else {
            break;
        };

        match choice.trim() {
            "1" => add_habit(&repo)?,
            "2" => delete_habit(&repo)?,
            "3" => track_habit(&tracker)?,
            "4" => list_habits(&repo)?,
            "5" => analyze_habits(&analytics)?,
            "6" => {
                println!("Exiting the application.");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn add_habit(repo: &impl HabitRepository) -> Result<()> {
    let Some(name) = prompt_name("Enter habit name: ")? else {
        return Ok(());
    };
    let Some(cadence_input) = prompt("Enter habit frequency (daily/weekly): ")? else {
        return Ok(());
    };

    let cadence = match Cadence::parse(&cadence_input) {
        Ok(cadence) => cadence,
        Err(err) => {
            println!("{err}.");
            return Ok(());
        }
    };

    match repo.add_habit(&Habit::new(name.clone(), cadence)) {
        Ok(()) => println!("Habit \"{name}\" added successfully."),
        Err(RepoError::AlreadyExists(_)) => println!("Habit \"{name}\" already exists."),
        Err(err) => println!("Could not add habit: {err}."),
    }

    Ok(())
}

fn delete_habit(repo: &impl HabitRepository) -> Result<()> {
    let Some(name) = prompt_name("Enter habit name to delete: ")? else {
        return Ok(());
    };

    match repo.delete_habit(&name) {
        Ok(()) => println!("Habit \"{name}\" deleted successfully."),
        Err(RepoError::NotFound(_)) => println!("Habit \"{name}\" does not exist."),
        Err(err) => println!("Could not delete habit: {err}."),
    }

    Ok(())
}

fn track_habit(tracker: &TrackerService<SqliteHabitRepository<'_>>) -> Result<()> {
    let Some(name) = prompt_name("Enter habit name to track: ")? else {
        return Ok(());
    };

    match tracker.track_habit(&name) {
        Ok(_) => println!("Habit \"{name}\" tracked successfully."),
        Err(RepoError::NotFound(_)) => println!("Habit \"{name}\" not found."),
        Err(err) => println!("Could not track habit: {err}."),
    }

    Ok(())
}

fn list_habits(repo: &impl HabitRepository) -> Result<()> {
    let habits = match repo.list_habits() {
        Ok(habits) => habits,
        Err(err) => {
            println!("Could not list habits: {err}.");
            return Ok(());
        }
    };

    if habits.is_empty() {
        println!("No habits found.");
    } else {
        println!("Habits:");
        for habit in habits {
            println!("{} ({})", habit.name, habit.cadence);
        }
    }

    Ok(())
}

fn analyze_habits(analytics: &AnalyticsService<SqliteHabitRepository<'_>>) -> Result<()> {
    println!("Enter the frequency to analyze (daily/weekly):");
    let Some(cadence_input) = prompt("")? else {
        return Ok(());
    };

    let cadence = match Cadence::parse(&cadence_input) {
        Ok(cadence) => cadence,
        Err(err) => {
            println!("{err}.");
            return Ok(());
        }
    };

    let report = match analytics.analyze_cadence(cadence) {
        Ok(Some(report)) => report,
        Ok(None) => {
            println!("No {cadence} habits found.");
            return Ok(());
        }
        Err(err) => {
            println!("Could not analyze habits: {err}.");
            return Ok(());
        }
    };

    print_report(&report);

    println!("\nEnter the habit name for further analysis (type 'exit' to go back):");
    let Some(input) = prompt("")? else {
        return Ok(());
    };
    if input.trim().eq_ignore_ascii_case("exit") {
        return Ok(());
    }

    let name = normalize_habit_name(&input);
    match analytics.completion_count(&name) {
        Ok(Some(count)) => println!("\nThe habit has been completed {count} times."),
        Ok(None) => println!("Habit '{name}' not found."),
        Err(err) => println!("Could not look up habit: {err}."),
    }

    Ok(())
}

fn print_report(report: &CadenceReport) {
    let cadence_title = capitalized(report.cadence.as_str());
    let unit = report.cadence.streak_unit();

    println!("\n{cadence_title} Habit Analysis:");
    for entry in &report.habits {
        println!(
            "{} - Highest Streak: {} {unit}",
            entry.name, entry.highest_streak
        );
    }

    println!("\nLongest running streak:");
    println!(
        "The highest streak from {} habits is {} - {} {unit}.",
        report.cadence,
        report.longest.names.join(", "),
        report.longest.streak
    );

    println!("\nHabit you struggled with the most:");
    println!(
        "Habit with the shortest streak from {} habits is {} - {} {unit}.",
        report.cadence,
        report.shortest.names.join(", "),
        report.shortest.streak
    );
}

/// Prompts for a habit name and returns its canonical capitalized form.
fn prompt_name(message: &str) -> Result<Option<String>> {
    Ok(prompt(message)?.map(|input| normalize_habit_name(&input)))
}

/// Prints `message`, then reads one line from stdin.
///
/// Returns `None` when stdin is closed, which callers treat as "go back".
fn prompt(message: &str) -> Result<Option<String>> {
    if !message.is_empty() {
        print!("{message}");
        io::stdout().flush()?;
    }

    let mut line = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
