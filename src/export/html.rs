//! Renders a week summary into a self-contained HTML document, shaped like
//! the sheet the mobile app fed into its PDF converter.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::ledger::Day;
use crate::storage::Result;

use super::summary::{DayCell, WeekSummary};

const STYLE: &str = "\
table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }\n\
th, td { border: 1px solid #dee2e6; padding: 8px; text-align: center; }\n\
th { background-color: #f8f9fa; }\n\
.name-cell { text-align: left; }\n\
.total-cell { background-color: #e9ecef; }\n\
.overtime { color: #ff6b00; font-size: 10px; }\n\
.section-title { font-size: 18px; margin: 20px 0 10px 0; }\n\
.expense-table { margin-top: 30px; }\n\
.expense-total { color: #28a745; font-weight: bold; }";

/// Renders the full document. Week totals are shown to one decimal, amounts
/// to two with the lira sign, matching the exported sheet.
pub fn render(summary: &WeekSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<html>");
    let _ = writeln!(out, "<head>\n<style>\n{}\n</style>\n</head>", STYLE);
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h2>{}. Hafta Puantaj Özeti</h2>", summary.week);

    let _ = writeln!(out, "<div class=\"section-title\">Personel Puantaj Özeti</div>");
    let _ = writeln!(out, "<table>");
    let _ = write!(out, "<tr><th class=\"name-cell\">İsim</th>");
    for day in Day::ALL {
        let _ = write!(out, "<th>{}</th>", day.label());
    }
    let _ = writeln!(out, "<th>Toplam</th></tr>");
    for row in &summary.rows {
        let _ = write!(out, "<tr><td class=\"name-cell\">{}</td>", escape(&row.name));
        for cell in &row.cells {
            let _ = write!(out, "<td>{}</td>", render_cell(cell));
        }
        let _ = writeln!(
            out,
            "<td class=\"total-cell\">{:.1}</td></tr>",
            row.week_total
        );
    }
    let _ = writeln!(out, "</table>");

    let _ = writeln!(out, "<div class=\"section-title\">Giderler Özeti</div>");
    let _ = writeln!(out, "<table class=\"expense-table\">");
    let _ = writeln!(out, "<tr><th>Açıklama</th><th>Gün</th><th>Tutar</th></tr>");
    for expense in &summary.expenses {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{:.2} ₺</td></tr>",
            escape(&expense.description),
            expense.day.label(),
            expense.amount
        );
    }
    let _ = writeln!(
        out,
        "<tr><td colspan=\"2\" class=\"total-cell\">Toplam Gider</td>\
         <td class=\"total-cell expense-total\">{:.2} ₺</td></tr>",
        summary.expense_total
    );
    let _ = writeln!(out, "</table>");

    let _ = writeln!(
        out,
        "<p class=\"overtime\">{}</p>",
        summary.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out, "</body>");
    let _ = write!(out, "</html>");
    out
}

/// Renders and writes the document to `path`.
pub fn write_document(summary: &WeekSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(summary))?;
    Ok(())
}

fn render_cell(cell: &DayCell) -> String {
    let base = if cell.value == 0.0 {
        "-".to_string()
    } else {
        format!("{}", cell.value)
    };
    match cell.overtime {
        Some(value) => format!("{} <span class=\"overtime\">+{}</span>", base, value),
        None => base,
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
