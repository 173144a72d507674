//! Derived attendance and expense totals.
//!
//! `day_value` is the single numeric rule; every aggregate is a sum of it
//! over some slice of the schedule. All functions are pure and
//! order-independent, and treat missing or partial entries as zero.

use std::collections::BTreeSet;

use super::attendance::{AttendanceEntry, AttendanceStatus};
use super::calendar::{Day, SlotKey, Week};
use super::expense::WeekData;
use super::person::Person;

/// Worked-day value of a single cell. Absent and explicit `none` entries both
/// count zero; overtime only counts on a `full` day, and only the stored
/// value contributes.
pub fn day_value(entry: Option<&AttendanceEntry>) -> f64 {
    match entry {
        None => 0.0,
        Some(entry) => match entry.status {
            AttendanceStatus::None => 0.0,
            AttendanceStatus::Half => 0.5,
            AttendanceStatus::Full => {
                let overtime = if entry.overtime {
                    entry.overtime_value.unwrap_or(0.0)
                } else {
                    0.0
                };
                1.0 + overtime
            }
        },
    }
}

/// Total worked days for one person in one week. Only the seven keys of the
/// requested week are examined.
pub fn week_total(person: &Person, week: Week) -> f64 {
    Day::ALL
        .iter()
        .map(|&day| day_value(person.entry(SlotKey::new(week, day))))
        .sum()
}

/// Total worked days across the weeks the person actually has marks in.
pub fn person_total(person: &Person) -> f64 {
    let weeks: BTreeSet<Week> = person.schedule.keys().map(|slot| slot.week).collect();
    weeks.into_iter().map(|week| week_total(person, week)).sum()
}

/// Sum of all expense amounts in one week's data.
pub fn expense_week_total(week_data: &WeekData) -> f64 {
    week_data.expenses.iter().map(|expense| expense.amount).sum()
}
