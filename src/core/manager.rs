use uuid::Uuid;

use crate::errors::TimesheetError;
use crate::ledger::{AttendanceStatus, ExpenseDraft, Roster, SlotKey, Week, WeekData};
use crate::storage::{Result, StorageBackend};

/// Facade that owns the current roster value and coordinates persistence.
///
/// Each mutation applies the pure ledger operation, rebinds the snapshot, and
/// saves the whole document. When a save fails the mutated in-memory state
/// stays authoritative; the error is surfaced and the session continues.
pub struct SheetManager {
    roster: Roster,
    storage: Box<dyn StorageBackend>,
}

impl SheetManager {
    /// Opens the store, loading the roster document or starting empty.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let roster = storage.load_roster()?.unwrap_or_default();
        Ok(Self { roster, storage })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn add_person(&mut self, name: &str) -> Result<()> {
        self.apply(|roster| roster.add_person(name))
    }

    pub fn remove_person(&mut self, id: Uuid) -> Result<()> {
        self.apply(|roster| roster.remove_person(id))
    }

    pub fn cycle_status(&mut self, id: Uuid, slot: SlotKey) -> Result<()> {
        self.apply(|roster| roster.cycle_status(id, slot))
    }

    pub fn set_status(
        &mut self,
        id: Uuid,
        slot: SlotKey,
        status: AttendanceStatus,
        overtime: bool,
        overtime_value: Option<f64>,
    ) -> Result<()> {
        self.apply(|roster| roster.set_status(id, slot, status, overtime, overtime_value))
    }

    pub fn clear_week(&mut self, week: Week) -> Result<()> {
        tracing::info!(week = week.number(), "clearing week marks");
        self.apply(|roster| roster.clear_week(week))
    }

    /// The stored expense data for a week, or an empty value when the
    /// document does not exist yet.
    pub fn week_data(&self, week: Week) -> Result<WeekData> {
        Ok(self
            .storage
            .load_week(week)?
            .unwrap_or_else(|| WeekData::empty(week)))
    }

    /// Validates the draft, records the expense, and saves the week document.
    /// An invalid draft is rejected before anything is touched.
    pub fn add_expense(&mut self, week: Week, draft: ExpenseDraft) -> Result<WeekData> {
        let expense = draft
            .validate()
            .map_err(|err| TimesheetError::Invalid(err.to_string()))?;
        let mut data = self.week_data(week)?;
        data.add(expense);
        self.storage.save_week(&data)?;
        Ok(data)
    }

    pub fn remove_expense(&mut self, week: Week, id: Uuid) -> Result<WeekData> {
        let mut data = self.week_data(week)?;
        data.remove(id);
        self.storage.save_week(&data)?;
        Ok(data)
    }

    pub fn clear_week_expenses(&mut self, week: Week) -> Result<WeekData> {
        tracing::info!(week = week.number(), "clearing week expenses");
        let mut data = self.week_data(week)?;
        data.clear();
        self.storage.save_week(&data)?;
        Ok(data)
    }

    pub fn last_week(&self) -> Result<Option<Week>> {
        self.storage.last_week()
    }

    pub fn record_last_week(&self, week: Week) -> Result<()> {
        self.storage.record_last_week(Some(week))
    }

    fn apply(&mut self, op: impl FnOnce(Roster) -> Roster) -> Result<()> {
        let current = std::mem::take(&mut self.roster);
        self.roster = op(current);
        let path = self.storage.save_roster(&self.roster)?;
        tracing::debug!(path = %path.display(), "roster snapshot saved");
        Ok(())
    }
}
