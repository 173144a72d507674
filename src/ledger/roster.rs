use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attendance::{AttendanceEntry, AttendanceStatus, DEFAULT_OVERTIME_VALUE};
use super::calendar::{SlotKey, Week};
use super::person::Person;

/// The full person collection, stored on the wire as a bare array of Person.
///
/// Every operation consumes the collection and returns the updated value; the
/// surrounding application holds a single binding and rebinds it with each
/// result. Unknown person ids are silent no-ops, matching how the tracked
/// documents have always behaved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn person(&self, id: Uuid) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    /// Appends a person with an empty schedule. A name that trims to nothing
    /// leaves the collection unchanged.
    pub fn add_person(mut self, name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return self;
        }
        self.people.push(Person::new(trimmed));
        self
    }

    pub fn remove_person(mut self, id: Uuid) -> Self {
        self.people.retain(|person| person.id != id);
        self
    }

    /// Advances the cell at `slot` along the tap cycle. A missing entry is
    /// treated as `none` before cycling.
    pub fn cycle_status(mut self, id: Uuid, slot: SlotKey) -> Self {
        if let Some(person) = self.person_mut(id) {
            let next = person
                .schedule
                .get(&slot)
                .copied()
                .unwrap_or_default()
                .cycled();
            person.schedule.insert(slot, next);
        }
        self
    }

    /// Overwrites the cell at `slot` wholesale. When overtime is requested
    /// without a value the default of 1.0 is stored; when it is not requested
    /// any supplied value is discarded.
    pub fn set_status(
        mut self,
        id: Uuid,
        slot: SlotKey,
        status: AttendanceStatus,
        overtime: bool,
        overtime_value: Option<f64>,
    ) -> Self {
        if let Some(person) = self.person_mut(id) {
            let overtime_value =
                overtime.then(|| overtime_value.unwrap_or(DEFAULT_OVERTIME_VALUE));
            person.schedule.insert(
                slot,
                AttendanceEntry {
                    status,
                    overtime,
                    overtime_value,
                },
            );
        }
        self
    }

    /// Removes every mark belonging to `week`, for every person. Other weeks
    /// and the people themselves are untouched.
    pub fn clear_week(mut self, week: Week) -> Self {
        for person in &mut self.people {
            person.schedule.retain(|slot, _| slot.week != week);
        }
        self
    }

    fn person_mut(&mut self, id: Uuid) -> Option<&mut Person> {
        self.people.iter_mut().find(|person| person.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::calendar::Day;

    fn slot(week: u8, day: Day) -> SlotKey {
        SlotKey::new(Week::new(week).unwrap(), day)
    }

    #[test]
    fn whitespace_only_name_is_ignored() {
        let roster = Roster::new().add_person("  ");
        assert!(roster.is_empty());
    }

    #[test]
    fn added_person_starts_with_empty_schedule() {
        let roster = Roster::new().add_person("  Ali ");
        assert_eq!(roster.len(), 1);
        let person = &roster.people()[0];
        assert_eq!(person.name, "Ali");
        assert!(person.schedule.is_empty());
    }

    #[test]
    fn operations_on_unknown_ids_are_no_ops() {
        let roster = Roster::new().add_person("Ayşe");
        let ghost = Uuid::new_v4();
        let after = roster
            .clone()
            .remove_person(ghost)
            .cycle_status(ghost, slot(1, Day::Monday))
            .set_status(ghost, slot(1, Day::Monday), AttendanceStatus::Full, false, None);
        assert_eq!(after, roster);
    }

    #[test]
    fn set_status_with_overtime_defaults_the_value() {
        let roster = Roster::new().add_person("Ali");
        let id = roster.people()[0].id;
        let key = slot(2, Day::Friday);
        let roster = roster.set_status(id, key, AttendanceStatus::Full, true, None);
        let entry = roster.person(id).unwrap().entry(key).unwrap();
        assert_eq!(entry.overtime_value, Some(DEFAULT_OVERTIME_VALUE));
    }

    #[test]
    fn set_status_without_overtime_discards_the_value() {
        let roster = Roster::new().add_person("Ali");
        let id = roster.people()[0].id;
        let key = slot(2, Day::Friday);
        let roster = roster.set_status(id, key, AttendanceStatus::Half, false, Some(3.0));
        let entry = roster.person(id).unwrap().entry(key).unwrap();
        assert!(!entry.overtime);
        assert_eq!(entry.overtime_value, None);
    }

    #[test]
    fn clear_week_only_touches_that_week() {
        let roster = Roster::new().add_person("Ali");
        let id = roster.people()[0].id;
        let roster = roster
            .cycle_status(id, slot(1, Day::Monday))
            .cycle_status(id, slot(2, Day::Monday))
            .clear_week(Week::new(1).unwrap());
        let person = roster.person(id).unwrap();
        assert!(person.entry(slot(1, Day::Monday)).is_none());
        assert!(person.entry(slot(2, Day::Monday)).is_some());
        assert_eq!(person.name, "Ali");
    }
}
