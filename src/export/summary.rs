use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::{totals, AttendanceStatus, Day, Person, Roster, SlotKey, Week, WeekData};

/// Value shown for one day cell of the summary table.
///
/// `value` is the base worked-day figure (0, 0.5, or 1); `overtime` is the
/// addend shown beside it whenever the overtime flag is stored, mirroring the
/// on-screen sheet. Totals still come from `ledger::totals`, which only
/// counts overtime on full days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime: Option<f64>,
}

/// One person's summary row with the precomputed week total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRow {
    pub name: String,
    pub cells: Vec<DayCell>,
    pub week_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub description: String,
    pub day: Day,
    pub amount: f64,
}

/// Read-only snapshot handed to document rendering. Every number is
/// precomputed here so renderers never re-derive totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub week: Week,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<PersonRow>,
    pub expenses: Vec<ExpenseRow>,
    pub expense_total: f64,
}

impl WeekSummary {
    pub fn build(roster: &Roster, week_data: &WeekData, generated_at: DateTime<Utc>) -> Self {
        let week = week_data.week;
        let rows = roster
            .people()
            .iter()
            .map(|person| PersonRow {
                name: person.name.clone(),
                cells: Day::ALL
                    .iter()
                    .map(|&day| day_cell(person, SlotKey::new(week, day)))
                    .collect(),
                week_total: totals::week_total(person, week),
            })
            .collect();
        let expenses = week_data
            .expenses
            .iter()
            .map(|expense| ExpenseRow {
                description: expense.description.clone(),
                day: expense.day,
                amount: expense.amount,
            })
            .collect();
        Self {
            week,
            generated_at,
            rows,
            expenses,
            expense_total: totals::expense_week_total(week_data),
        }
    }
}

fn day_cell(person: &Person, slot: SlotKey) -> DayCell {
    match person.entry(slot) {
        None => DayCell {
            value: 0.0,
            overtime: None,
        },
        Some(entry) => DayCell {
            value: match entry.status {
                AttendanceStatus::None => 0.0,
                AttendanceStatus::Half => 0.5,
                AttendanceStatus::Full => 1.0,
            },
            overtime: entry
                .overtime
                .then(|| entry.overtime_value.unwrap_or(0.0)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_rows_carry_precomputed_totals() {
        let roster = Roster::new().add_person("Ali");
        let id = roster.people()[0].id;
        let week = Week::new(1).unwrap();
        let roster = roster
            .set_status(
                id,
                SlotKey::new(week, Day::Monday),
                AttendanceStatus::Full,
                false,
                None,
            )
            .set_status(
                id,
                SlotKey::new(week, Day::Wednesday),
                AttendanceStatus::Full,
                true,
                Some(2.0),
            );
        let summary = WeekSummary::build(&roster, &WeekData::empty(week), Utc::now());
        assert_eq!(summary.rows.len(), 1);
        let row = &summary.rows[0];
        assert_eq!(row.week_total, 4.0);
        assert_eq!(row.cells[0].value, 1.0);
        assert_eq!(row.cells[2].overtime, Some(2.0));
        assert_eq!(row.cells[1].value, 0.0);
    }
}
