//! Read-only week summaries and the documents rendered from them.

pub mod html;
pub mod summary;

pub use summary::{DayCell, ExpenseRow, PersonRow, WeekSummary};
