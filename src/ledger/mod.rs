//! Attendance ledger domain models and the pure operations over them.

pub mod attendance;
pub mod calendar;
pub mod expense;
pub mod person;
pub mod roster;
pub mod totals;

pub use attendance::{AttendanceEntry, AttendanceStatus, DEFAULT_OVERTIME_VALUE};
pub use calendar::{Day, ParseSlotError, SlotKey, Week};
pub use expense::{Expense, ExpenseDraft, ValidationError, WeekData};
pub use person::Person;
pub use roster::Roster;
