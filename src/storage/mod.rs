//! Persistence backends for the timesheet documents.

pub mod json_backend;

pub use json_backend::JsonStorage;

use std::path::PathBuf;

use crate::errors::TimesheetError;
use crate::ledger::{Roster, Week, WeekData};

pub type Result<T> = std::result::Result<T, TimesheetError>;

/// Trait that abstracts interaction with the persistence layer.
///
/// Documents are whole-snapshot, last-write-wins: one for the person roster
/// and one per week for that week's expenses.
pub trait StorageBackend: Send + Sync {
    fn load_roster(&self) -> Result<Option<Roster>>;
    fn save_roster(&self, roster: &Roster) -> Result<PathBuf>;
    fn load_week(&self, week: Week) -> Result<Option<WeekData>>;
    fn save_week(&self, data: &WeekData) -> Result<PathBuf>;
    fn last_week(&self) -> Result<Option<Week>>;
    fn record_last_week(&self, week: Option<Week>) -> Result<()>;
    fn list_backups(&self, key: &str) -> Result<Vec<String>>;
    fn restore_backup(&self, key: &str, backup_name: &str) -> Result<PathBuf>;
    fn export_path(&self, week: Week) -> PathBuf;
}
