use serde::{Deserialize, Serialize};

/// Multiplier recorded when overtime is enabled without an explicit value.
pub const DEFAULT_OVERTIME_VALUE: f64 = 1.0;

/// Attendance mark for a single day cell.
///
/// `None` is the implicit state of an absent schedule key; an explicit `none`
/// entry can also be stored (written when a cell is cleared) and counts the
/// same as key absence everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    None,
    Half,
    Full,
}

impl AttendanceStatus {
    /// Next status along the tap cycle: none -> half -> full -> none.
    pub fn cycled(self) -> Self {
        match self {
            AttendanceStatus::None => AttendanceStatus::Half,
            AttendanceStatus::Half => AttendanceStatus::Full,
            AttendanceStatus::Full => AttendanceStatus::None,
        }
    }
}

/// One schedule cell: a status plus the optional overtime addend.
///
/// `overtime` is only meaningful on a `full` day. The data model still admits
/// `overtime = true` on other statuses (foreign documents may contain it);
/// totals ignore the flag in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "is_false")]
    pub overtime: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_value: Option<f64>,
}

impl AttendanceEntry {
    /// Plain entry with no overtime.
    pub fn with_status(status: AttendanceStatus) -> Self {
        Self {
            status,
            overtime: false,
            overtime_value: None,
        }
    }

    /// Advances the cell along the tap cycle. Overtime never survives a cycle
    /// transition; it can only be re-established through a direct set.
    pub fn cycled(&self) -> Self {
        Self::with_status(self.status.cycled())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
