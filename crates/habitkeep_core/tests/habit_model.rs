use habitkeep_core::{
    normalize_habit_name, Cadence, Habit, HabitValidationError,
};

#[test]
fn habit_new_zeroes_all_counters() {
    let habit = Habit::new("Stretch", Cadence::Daily);

    assert_eq!(habit.name, "Stretch");
    assert_eq!(habit.cadence, Cadence::Daily);
    assert_eq!(habit.total_completions, 0);
    assert_eq!(habit.current_streak, 0);
    assert_eq!(habit.highest_streak, 0);
}

#[test]
fn cadence_parse_accepts_mixed_case_and_whitespace() {
    assert_eq!(Cadence::parse("daily").unwrap(), Cadence::Daily);
    assert_eq!(Cadence::parse(" Weekly ").unwrap(), Cadence::Weekly);
    assert_eq!(Cadence::parse("DAILY").unwrap(), Cadence::Daily);
}

#[test]
fn cadence_parse_rejects_unknown_values() {
    let err = Cadence::parse("monthly").unwrap_err();
    assert_eq!(err.value, "monthly");

    assert!(Cadence::parse("").is_err());
    assert!(Cadence::parse("every day").is_err());
}

#[test]
fn normalize_habit_name_capitalizes_like_user_input() {
    assert_eq!(normalize_habit_name("drink WATER"), "Drink water");
    assert_eq!(normalize_habit_name("  read a book "), "Read a book");
    assert_eq!(normalize_habit_name("Exercise"), "Exercise");
    assert_eq!(normalize_habit_name(""), "");
}

#[test]
fn validate_rejects_empty_names() {
    let habit = Habit::new("   ", Cadence::Daily);
    assert_eq!(habit.validate().unwrap_err(), HabitValidationError::EmptyName);
}

#[test]
fn validate_rejects_current_streak_above_highest() {
    let mut habit = Habit::new("Stretch", Cadence::Daily);
    habit.current_streak = 3;
    habit.highest_streak = 1;

    assert_eq!(
        habit.validate().unwrap_err(),
        HabitValidationError::StreakAboveHighest {
            current_streak: 3,
            highest_streak: 1,
        }
    );
}

#[test]
fn validate_accepts_equal_streak_counters() {
    let mut habit = Habit::new("Stretch", Cadence::Daily);
    habit.current_streak = 4;
    habit.highest_streak = 4;

    assert!(habit.validate().is_ok());
}

#[test]
fn habit_serialization_uses_expected_wire_fields() {
    let mut habit = Habit::new("Stretch", Cadence::Weekly);
    habit.total_completions = 12;
    habit.current_streak = 2;
    habit.highest_streak = 5;

    let json = serde_json::to_value(&habit).unwrap();
    assert_eq!(json["name"], "Stretch");
    assert_eq!(json["cadence"], "weekly");
    assert_eq!(json["total_completions"], 12);
    assert_eq!(json["current_streak"], 2);
    assert_eq!(json["highest_streak"], 5);

    let decoded: Habit = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, habit);
}
