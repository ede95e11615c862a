use chrono::NaiveDate;
use habitkeep_core::db::open_db_in_memory;
use habitkeep_core::{
    apply_completion, Cadence, Habit, HabitRepository, RepoError, SqliteHabitRepository,
    TrackerService,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// 2023-06-25 is a Sunday, 2023-06-26 a Monday.
const SUNDAY: (i32, u32, u32) = (2023, 6, 25);
const MONDAY: (i32, u32, u32) = (2023, 6, 26);

#[test]
fn tracking_missing_habit_fails_without_creating_a_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::new(&conn);
    let tracker = TrackerService::new(SqliteHabitRepository::new(&conn));

    let err = tracker.track_habit("Jog").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(name) if name == "Jog"));
    assert_eq!(repo.count_habits().unwrap(), 0);
}

#[test]
fn every_track_increments_total_completions() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::new(&conn);
    let tracker = TrackerService::new(SqliteHabitRepository::new(&conn));

    repo.add_habit(&Habit::new("Stretch", Cadence::Daily)).unwrap();

    tracker.track_habit_at("Stretch", date(2023, 6, 1)).unwrap();
    tracker.track_habit_at("Stretch", date(2023, 6, 2)).unwrap();
    let habit = tracker.track_habit_at("Stretch", date(2023, 6, 3)).unwrap();

    assert_eq!(habit.total_completions, 3);
}

#[test]
fn daily_track_always_restarts_the_run() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::new(&conn);
    let tracker = TrackerService::new(SqliteHabitRepository::new(&conn));

    // Even a previously long run restarts: the store holds no completion
    // dates, so the previous-day check can never match.
    let mut habit = Habit::new("Stretch", Cadence::Daily);
    habit.current_streak = 6;
    habit.highest_streak = 6;
    habit.total_completions = 20;
    repo.add_habit(&habit).unwrap();

    let tracked = tracker.track_habit_at("Stretch", date(2023, 6, 2)).unwrap();
    assert_eq!(tracked.current_streak, 1);
    assert_eq!(tracked.highest_streak, 6);
    assert_eq!(tracked.total_completions, 21);

    // Consecutive calendar days make no difference.
    let tracked = tracker.track_habit_at("Stretch", date(2023, 6, 3)).unwrap();
    assert_eq!(tracked.current_streak, 1);
}

#[test]
fn first_daily_track_of_a_fresh_habit_sets_highest_to_one() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::new(&conn);
    let tracker = TrackerService::new(SqliteHabitRepository::new(&conn));

    repo.add_habit(&Habit::new("Stretch", Cadence::Daily)).unwrap();

    let tracked = tracker.track_habit_at("Stretch", date(2023, 6, 2)).unwrap();
    assert_eq!(tracked.current_streak, 1);
    assert_eq!(tracked.highest_streak, 1);
}

#[test]
fn weekly_track_on_sunday_extends_the_run() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::new(&conn);
    let tracker = TrackerService::new(SqliteHabitRepository::new(&conn));

    let mut habit = Habit::new("Jog", Cadence::Weekly);
    habit.current_streak = 2;
    habit.highest_streak = 2;
    repo.add_habit(&habit).unwrap();

    let (year, month, day) = SUNDAY;
    let tracked = tracker.track_habit_at("Jog", date(year, month, day)).unwrap();
    assert_eq!(tracked.current_streak, 3);
    assert_eq!(tracked.highest_streak, 3);
}

#[test]
fn weekly_track_off_sunday_restarts_the_run() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::new(&conn);
    let tracker = TrackerService::new(SqliteHabitRepository::new(&conn));

    let mut habit = Habit::new("Jog", Cadence::Weekly);
    habit.current_streak = 2;
    habit.highest_streak = 2;
    repo.add_habit(&habit).unwrap();

    let (year, month, day) = MONDAY;
    let tracked = tracker.track_habit_at("Jog", date(year, month, day)).unwrap();
    assert_eq!(tracked.current_streak, 1);
    assert_eq!(tracked.highest_streak, 2);
}

#[test]
fn tracked_updates_are_persisted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHabitRepository::new(&conn);
    let tracker = TrackerService::new(SqliteHabitRepository::new(&conn));

    repo.add_habit(&Habit::new("Stretch", Cadence::Daily)).unwrap();
    tracker.track_habit_at("Stretch", date(2023, 6, 2)).unwrap();

    let loaded = repo.get_habit("Stretch").unwrap().unwrap();
    assert_eq!(loaded.total_completions, 1);
    assert_eq!(loaded.current_streak, 1);
    assert_eq!(loaded.highest_streak, 1);
}

#[test]
fn weekly_transition_extends_only_on_sundays() {
    let mut habit = Habit::new("Jog", Cadence::Weekly);
    habit.current_streak = 1;
    habit.highest_streak = 4;

    let (year, month, day) = SUNDAY;
    apply_completion(&mut habit, date(year, month, day));
    assert_eq!(habit.current_streak, 2);
    assert_eq!(habit.highest_streak, 4);
    assert_eq!(habit.total_completions, 1);

    // Monday 2023-06-26 through Saturday 2023-07-01 all reset the run.
    for day in [
        date(2023, 6, 26),
        date(2023, 6, 27),
        date(2023, 6, 28),
        date(2023, 6, 29),
        date(2023, 6, 30),
        date(2023, 7, 1),
    ] {
        let mut habit = Habit::new("Jog", Cadence::Weekly);
        habit.current_streak = 3;
        habit.highest_streak = 3;
        apply_completion(&mut habit, day);
        assert_eq!(habit.current_streak, 1, "run should reset on {day}");
    }
}
