use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::calendar::{Day, Week};

/// A single recorded expense, attached to one day of its week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub day: Day,
}

/// Expense list for one week; persisted as its own document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekData {
    pub week: Week,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl WeekData {
    pub fn empty(week: Week) -> Self {
        Self {
            week,
            expenses: Vec::new(),
        }
    }

    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Removes the expense with the given id; unknown ids are a no-op.
    pub fn remove(&mut self, id: Uuid) {
        self.expenses.retain(|expense| expense.id != id);
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
    }
}

/// User-entered expense fields, validated before any mutation happens.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub day: Option<Day>,
}

impl ExpenseDraft {
    /// Checks the draft and produces the expense to record. The amount is
    /// accepted as entered text so parsing stays at the entry boundary.
    pub fn validate(self) -> Result<Expense, ValidationError> {
        let description = self.description.trim();
        let day = match self.day {
            Some(day) if !description.is_empty() && !self.amount.trim().is_empty() => day,
            _ => return Err(ValidationError::MissingFields),
        };
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .ok_or(ValidationError::InvalidAmount)?;
        Ok(Expense {
            id: Uuid::new_v4(),
            description: description.to_string(),
            amount,
            day,
        })
    }
}

/// Rejections surfaced to the user before the ledger is touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please fill in every field")]
    MissingFields,
    #[error("enter a valid amount")]
    InvalidAmount,
}
