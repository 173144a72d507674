mod common;

use timesheet_core::errors::TimesheetError;
use timesheet_core::ledger::{totals, Day, ExpenseDraft, Week};

fn draft(description: &str, amount: &str, day: Option<Day>) -> ExpenseDraft {
    ExpenseDraft {
        description: description.into(),
        amount: amount.into(),
        day,
    }
}

#[test]
fn recorded_expenses_survive_a_reopen() {
    let base = common::temp_base();
    let mut manager = common::manager_at(base.clone());
    let week = Week::new(1).unwrap();
    manager
        .add_expense(week, draft("Malzeme", "100", Some(Day::Monday)))
        .unwrap();
    manager
        .add_expense(week, draft("Yol", "50", Some(Day::Tuesday)))
        .unwrap();

    let reopened = common::manager_at(base);
    let data = reopened.week_data(week).unwrap();
    assert_eq!(data.expenses.len(), 2);
    assert_eq!(totals::expense_week_total(&data), 150.0);
}

#[test]
fn weeks_are_independent_documents() {
    let mut manager = common::setup_manager();
    let week_one = Week::new(1).unwrap();
    let week_two = Week::new(2).unwrap();
    manager
        .add_expense(week_one, draft("Malzeme", "100", Some(Day::Monday)))
        .unwrap();

    assert!(manager.week_data(week_two).unwrap().expenses.is_empty());
    manager.clear_week_expenses(week_two).unwrap();
    assert_eq!(manager.week_data(week_one).unwrap().expenses.len(), 1);
}

#[test]
fn invalid_drafts_are_rejected_before_mutation() {
    let mut manager = common::setup_manager();
    let week = Week::new(1).unwrap();
    let cases = [
        draft("", "100", Some(Day::Monday)),
        draft("Malzeme", "", Some(Day::Monday)),
        draft("Malzeme", "100", None),
        draft("Malzeme", "0", Some(Day::Monday)),
        draft("Malzeme", "-3", Some(Day::Monday)),
        draft("Malzeme", "yüz", Some(Day::Monday)),
    ];
    for case in cases {
        let err = manager.add_expense(week, case).expect_err("must reject");
        assert!(matches!(err, TimesheetError::Invalid(_)));
    }
    assert!(manager.week_data(week).unwrap().expenses.is_empty());
}

#[test]
fn removing_and_clearing_expenses() {
    let mut manager = common::setup_manager();
    let week = Week::new(3).unwrap();
    let data = manager
        .add_expense(week, draft("Malzeme", "75.5", Some(Day::Friday)))
        .unwrap();
    let id = data.expenses[0].id;

    let data = manager.remove_expense(week, id).unwrap();
    assert!(data.expenses.is_empty());

    manager
        .add_expense(week, draft("Yol", "20", Some(Day::Saturday)))
        .unwrap();
    let data = manager.clear_week_expenses(week).unwrap();
    assert!(data.expenses.is_empty());
    assert_eq!(data.week, week);
}
