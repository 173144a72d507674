mod common;

use chrono::Utc;
use timesheet_core::export::{html, WeekSummary};
use timesheet_core::ledger::{AttendanceStatus, Day, ExpenseDraft, Roster, SlotKey, Week, WeekData};

fn slot(week: Week, day: Day) -> SlotKey {
    SlotKey::new(week, day)
}

fn sample_summary() -> WeekSummary {
    let week = Week::new(1).unwrap();
    let roster = Roster::new().add_person("Ali");
    let id = roster.people()[0].id;
    let roster = roster
        .set_status(id, slot(week, Day::Monday), AttendanceStatus::Full, false, None)
        .set_status(id, slot(week, Day::Tuesday), AttendanceStatus::Half, false, None)
        .set_status(id, slot(week, Day::Wednesday), AttendanceStatus::Full, true, Some(2.0));

    let mut data = WeekData::empty(week);
    data.add(
        ExpenseDraft {
            description: "Malzeme".into(),
            amount: "149.9".into(),
            day: Some(Day::Monday),
        }
        .validate()
        .unwrap(),
    );
    WeekSummary::build(&roster, &data, Utc::now())
}

#[test]
fn summary_carries_the_precomputed_totals() {
    let summary = sample_summary();
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].week_total, 4.5);
    assert_eq!(summary.expense_total, 149.9);
    assert_eq!(summary.rows[0].cells.len(), 7);
}

#[test]
fn rendered_document_shows_the_sheet_values() {
    let summary = sample_summary();
    let document = html::render(&summary);
    assert!(document.contains("1. Hafta Puantaj Özeti"));
    assert!(document.contains("Ali"));
    assert!(document.contains("4.5"));
    assert!(document.contains("+2"));
    assert!(document.contains("149.90 ₺"));
    assert!(document.contains("Toplam Gider"));
    // Day headers come from the fixed week.
    for day in Day::ALL {
        assert!(document.contains(day.label()), "missing {}", day.label());
    }
}

#[test]
fn unmarked_days_render_as_dashes() {
    let week = Week::new(2).unwrap();
    let roster = Roster::new().add_person("Ayşe");
    let summary = WeekSummary::build(&roster, &WeekData::empty(week), Utc::now());
    let document = html::render(&summary);
    assert!(document.contains("<td>-</td>"));
    assert!(document.contains("0.0</td>"));
}

#[test]
fn person_names_are_html_escaped() {
    let roster = Roster::new().add_person("<Ali & Co>");
    let week = Week::new(1).unwrap();
    let summary = WeekSummary::build(&roster, &WeekData::empty(week), Utc::now());
    let document = html::render(&summary);
    assert!(document.contains("&lt;Ali &amp; Co&gt;"));
    assert!(!document.contains("<Ali"));
}

#[test]
fn write_document_creates_the_export_file() {
    let base = common::temp_base();
    let summary = sample_summary();
    let path = base.join("exports").join("timesheet_week_1.html");
    html::write_document(&summary, &path).expect("write document");
    let contents = std::fs::read_to_string(path).expect("read back");
    assert!(contents.starts_with("<html>"));
    assert!(contents.ends_with("</html>"));
}
