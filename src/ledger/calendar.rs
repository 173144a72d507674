use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Fixed seven-day week used by the attendance grid, Monday first.
///
/// Labels are the Turkish day names the stored documents were written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Pazartesi",
            Day::Tuesday => "Salı",
            Day::Wednesday => "Çarşamba",
            Day::Thursday => "Perşembe",
            Day::Friday => "Cuma",
            Day::Saturday => "Cumartesi",
            Day::Sunday => "Pazar",
        }
    }

    /// Three-character label used where the full name does not fit.
    pub fn short_label(&self) -> String {
        self.label().chars().take(3).collect()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ParseSlotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.label() == value)
            .ok_or_else(|| ParseSlotError::UnknownDay(value.to_string()))
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Week number within the tracked four-week window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(u8);

impl Week {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;
    pub const ALL: [Week; 4] = [Week(1), Week(2), Week(3), Week(4)];

    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&number).then_some(Self(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = ParseSlotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<u8>()
            .ok()
            .and_then(Week::new)
            .ok_or_else(|| ParseSlotError::WeekOutOfRange(value.to_string()))
    }
}

/// Composite key addressing one day cell of one week.
///
/// Stored documents encode the key as `"<week>-<day>"` (e.g. `"1-Pazartesi"`);
/// that string form exists only at the serde boundary below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub week: Week,
    pub day: Day,
}

impl SlotKey {
    pub fn new(week: Week, day: Day) -> Self {
        Self { week, day }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.week, self.day)
    }
}

impl FromStr for SlotKey {
    type Err = ParseSlotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (week, day) = value
            .split_once('-')
            .ok_or_else(|| ParseSlotError::Malformed(value.to_string()))?;
        Ok(Self {
            week: week.parse()?,
            day: day.parse()?,
        })
    }
}

impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Error raised when a stored schedule key cannot be interpreted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseSlotError {
    #[error("unknown day name `{0}`")]
    UnknownDay(String),
    #[error("week `{0}` is outside the supported range 1-4")]
    WeekOutOfRange(String),
    #[error("malformed schedule key `{0}`")]
    Malformed(String),
}
