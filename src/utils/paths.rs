use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".timesheet_core";
const SHEETS_DIR: &str = "sheets";
const BACKUP_DIR: &str = "backups";
const EXPORT_DIR: &str = "exports";
const STATE_FILE: &str = "state.json";

/// Returns the application-specific data directory, defaulting to `~/.timesheet_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TIMESHEET_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the JSON documents (`people.json`, `weekData_<n>.json`).
pub fn sheets_dir_in(root: &Path) -> PathBuf {
    root.join(SHEETS_DIR)
}

/// Base directory for backup snapshots.
pub fn backups_dir_in(root: &Path) -> PathBuf {
    root.join(BACKUP_DIR)
}

/// Directory that rendered summary documents are written into.
pub fn exports_dir_in(root: &Path) -> PathBuf {
    root.join(EXPORT_DIR)
}

/// Path to the shared state file (tracking the last opened week).
pub fn state_file_in(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}
