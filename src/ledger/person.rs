use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attendance::AttendanceEntry;
use super::calendar::SlotKey;

/// One tracked worker and their per-day marks across all weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub schedule: BTreeMap<SlotKey, AttendanceEntry>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            schedule: BTreeMap::new(),
        }
    }

    pub fn entry(&self, slot: SlotKey) -> Option<&AttendanceEntry> {
        self.schedule.get(&slot)
    }
}
