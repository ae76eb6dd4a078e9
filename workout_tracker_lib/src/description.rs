use chrono::NaiveDate;

use crate::workout::WorkoutKind;

/// "Running on April 14"
pub fn describe(kind: WorkoutKind, date: NaiveDate) -> String {
    let title = match kind {
        WorkoutKind::Running => "Running",
        WorkoutKind::Cycling => "Cycling",
    };
    format!("{title} on {}", date.format("%B %-d"))
}

#[test]
fn describes_every_calendar_day() {
    let months = [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ];

    for (month0, month_name) in months.iter().enumerate() {
        for day in 1..=31 {
            // 2024 is a leap year, so Feb 29 is covered too
            let Some(date) = NaiveDate::from_ymd_opt(2024, month0 as u32 + 1, day) else {
                continue;
            };

            assert_eq!(describe(WorkoutKind::Cycling, date), format!("Cycling on {month_name} {day}"));
            assert_eq!(describe(WorkoutKind::Running, date), format!("Running on {month_name} {day}"));
        }
    }
}

#[test]
fn day_is_not_padded() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    assert_eq!(describe(WorkoutKind::Running, date), "Running on January 5");
}
