use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use thiserror::Error;
use uuid::Uuid;

use crate::core::SheetManager;
use crate::errors::TimesheetError;
use crate::export::{html, WeekSummary};
use crate::ledger::{
    totals, AttendanceEntry, AttendanceStatus, Day, ExpenseDraft, SlotKey, Week, WeekData,
    DEFAULT_OVERTIME_VALUE,
};

use super::output;
use super::table::{Alignment, Table, TableColumn};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Timesheet(#[from] TimesheetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

type ShellResult<T> = Result<T, ShellError>;

/// Interactive session: one week on screen at a time, menu-driven edits,
/// everything saved through the manager as it happens.
pub struct Shell {
    manager: SheetManager,
    week: Week,
    theme: ColorfulTheme,
}

impl Shell {
    pub fn new(manager: SheetManager) -> Self {
        let week = manager.last_week().ok().flatten().unwrap_or(Week::ALL[0]);
        Self {
            manager,
            week,
            theme: ColorfulTheme::default(),
        }
    }

    pub fn run(&mut self) -> ShellResult<()> {
        loop {
            self.render_grid();
            let actions = [
                "Mark a day (tap cycle)",
                "Set a day directly",
                "Add person",
                "Remove person",
                "Expenses",
                "Export week summary",
                "Clear week marks",
                "Switch week",
                "Quit",
            ];
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Action")
                .items(&actions)
                .default(0)
                .interact()?;
            match choice {
                0 => self.mark_day()?,
                1 => self.set_day()?,
                2 => self.add_person()?,
                3 => self.remove_person()?,
                4 => self.expenses()?,
                5 => self.export_summary()?,
                6 => self.clear_marks()?,
                7 => self.switch_week()?,
                _ => return Ok(()),
            }
        }
    }

    fn render_grid(&self) {
        output::section(&format!("Week {} attendance", self.week));
        let roster = self.manager.roster();
        if roster.is_empty() {
            output::info("No people yet. Add one to start marking days.");
            return;
        }
        let mut columns = vec![TableColumn::new("Person", Alignment::Left)];
        for day in Day::ALL {
            columns.push(TableColumn::new(day.short_label(), Alignment::Center));
        }
        columns.push(TableColumn::new("Total", Alignment::Right));
        let mut table = Table::new(columns);
        for person in roster.people() {
            let mut row = vec![person.name.clone()];
            for day in Day::ALL {
                row.push(cell_glyph(person.entry(SlotKey::new(self.week, day))));
            }
            row.push(format!("{:.1}", totals::week_total(person, self.week)));
            table.push_row(row);
        }
        println!("{}", table.render());
    }

    fn mark_day(&mut self) -> ShellResult<()> {
        let Some(id) = self.select_person("Person")? else {
            return Ok(());
        };
        let day = self.select_day("Day")?;
        self.manager.cycle_status(id, SlotKey::new(self.week, day))?;
        Ok(())
    }

    fn set_day(&mut self) -> ShellResult<()> {
        let Some(id) = self.select_person("Person")? else {
            return Ok(());
        };
        let day = self.select_day("Day")?;
        let slot = SlotKey::new(self.week, day);
        let options = ["Half day", "Full day", "Full day + overtime", "Clear mark"];
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Status")
            .items(&options)
            .default(0)
            .interact()?;
        match choice {
            0 => self
                .manager
                .set_status(id, slot, AttendanceStatus::Half, false, None)?,
            1 => self
                .manager
                .set_status(id, slot, AttendanceStatus::Full, false, None)?,
            2 => {
                let value: f64 = Input::with_theme(&self.theme)
                    .with_prompt("Overtime value")
                    .default(DEFAULT_OVERTIME_VALUE)
                    .interact_text()?;
                self.manager
                    .set_status(id, slot, AttendanceStatus::Full, true, Some(value))?;
            }
            _ => self
                .manager
                .set_status(id, slot, AttendanceStatus::None, false, None)?,
        }
        Ok(())
    }

    fn add_person(&mut self) -> ShellResult<()> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Name")
            .allow_empty(true)
            .interact_text()?;
        let before = self.manager.roster().len();
        self.manager.add_person(&name)?;
        if self.manager.roster().len() == before {
            output::warn("Empty name ignored.");
        } else {
            output::success(&format!("Added {}.", name.trim()));
        }
        Ok(())
    }

    fn remove_person(&mut self) -> ShellResult<()> {
        let Some(id) = self.select_person("Remove who")? else {
            return Ok(());
        };
        let name = self
            .manager
            .roster()
            .person(id)
            .map(|person| person.name.clone())
            .unwrap_or_default();
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(format!("Remove {name} and all their marks?"))
            .default(false)
            .interact()?;
        if confirmed {
            self.manager.remove_person(id)?;
            output::success(&format!("Removed {name}."));
        }
        Ok(())
    }

    fn expenses(&mut self) -> ShellResult<()> {
        loop {
            let data = self.manager.week_data(self.week)?;
            self.render_expenses(&data);
            let actions = ["Add expense", "Remove expense", "Clear week expenses", "Back"];
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Expenses")
                .items(&actions)
                .default(0)
                .interact()?;
            match choice {
                0 => self.add_expense()?,
                1 => self.remove_expense(&data)?,
                2 => {
                    let confirmed = Confirm::with_theme(&self.theme)
                        .with_prompt(format!("Delete every expense of week {}?", self.week))
                        .default(false)
                        .interact()?;
                    if confirmed {
                        self.manager.clear_week_expenses(self.week)?;
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn render_expenses(&self, data: &WeekData) {
        output::section(&format!("Week {} expenses", self.week));
        if data.expenses.is_empty() {
            output::info("No expenses recorded for this week.");
            return;
        }
        let mut table = Table::new(vec![
            TableColumn::new("Description", Alignment::Left),
            TableColumn::new("Day", Alignment::Left),
            TableColumn::new("Amount", Alignment::Right),
        ]);
        for expense in &data.expenses {
            table.push_row(vec![
                expense.description.clone(),
                expense.day.label().to_string(),
                format!("{:.2} ₺", expense.amount),
            ]);
        }
        println!("{}", table.render());
        println!("Total: {:.2} ₺", totals::expense_week_total(data));
    }

    fn add_expense(&mut self) -> ShellResult<()> {
        let description: String = Input::with_theme(&self.theme)
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;
        let amount: String = Input::with_theme(&self.theme)
            .with_prompt("Amount")
            .allow_empty(true)
            .interact_text()?;
        let day = self.select_day("Day")?;
        let draft = ExpenseDraft {
            description,
            amount,
            day: Some(day),
        };
        match self.manager.add_expense(self.week, draft) {
            Ok(_) => output::success("Expense recorded."),
            Err(TimesheetError::Invalid(message)) => output::error(&message),
            Err(other) => return Err(other.into()),
        }
        Ok(())
    }

    fn remove_expense(&mut self, data: &WeekData) -> ShellResult<()> {
        if data.expenses.is_empty() {
            output::info("Nothing to remove.");
            return Ok(());
        }
        let labels: Vec<String> = data
            .expenses
            .iter()
            .map(|expense| format!("{} ({:.2} ₺)", expense.description, expense.amount))
            .collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Remove which expense")
            .items(&labels)
            .default(0)
            .interact()?;
        self.manager
            .remove_expense(self.week, data.expenses[choice].id)?;
        Ok(())
    }

    fn export_summary(&mut self) -> ShellResult<()> {
        let data = self.manager.week_data(self.week)?;
        let summary = WeekSummary::build(self.manager.roster(), &data, chrono::Utc::now());
        let path = self.manager.storage().export_path(self.week);
        html::write_document(&summary, &path)?;
        output::success(&format!("Saved summary to {}.", path.display()));
        Ok(())
    }

    fn clear_marks(&mut self) -> ShellResult<()> {
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(format!("Delete every mark of week {}?", self.week))
            .default(false)
            .interact()?;
        if confirmed {
            self.manager.clear_week(self.week)?;
            output::success("Week cleared.");
        }
        Ok(())
    }

    fn switch_week(&mut self) -> ShellResult<()> {
        let labels: Vec<String> = Week::ALL.iter().map(|week| format!("Week {week}")).collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Week")
            .items(&labels)
            .default((self.week.number() - 1) as usize)
            .interact()?;
        self.week = Week::ALL[choice];
        if let Err(err) = self.manager.record_last_week(self.week) {
            output::warn(&format!("Could not remember the week: {err}"));
        }
        Ok(())
    }

    fn select_person(&self, prompt: &str) -> ShellResult<Option<Uuid>> {
        let roster = self.manager.roster();
        if roster.is_empty() {
            output::info("No people yet.");
            return Ok(None);
        }
        let names: Vec<&str> = roster.people().iter().map(|p| p.name.as_str()).collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&names)
            .default(0)
            .interact()?;
        Ok(Some(roster.people()[choice].id))
    }

    fn select_day(&self, prompt: &str) -> ShellResult<Day> {
        let labels: Vec<&str> = Day::ALL.iter().map(|day| day.label()).collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Day::ALL[choice])
    }
}

/// Grid glyphs from the mobile sheet: `-` unmarked, `/` half, `X` full, the
/// overtime addend appended as `+v`.
fn cell_glyph(entry: Option<&AttendanceEntry>) -> String {
    let Some(entry) = entry else {
        return "-".to_string();
    };
    let base = match entry.status {
        AttendanceStatus::None => "-",
        AttendanceStatus::Half => "/",
        AttendanceStatus::Full => "X",
    };
    match (entry.overtime, entry.overtime_value) {
        (true, Some(value)) => format!("{base}+{value}"),
        _ => base.to_string(),
    }
}
