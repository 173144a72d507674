use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::TimesheetError,
    ledger::{Roster, Week, WeekData},
    utils::paths,
};

use super::{Result, StorageBackend};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Document key of the person roster.
pub const ROSTER_KEY: &str = "people";

/// Document key of one week's expense data, `weekData_<week>`.
pub fn week_key(week: Week) -> String {
    format!("weekData_{}", week)
}

/// File-per-document JSON store rooted at the application data directory.
#[derive(Clone)]
pub struct JsonStorage {
    sheets_dir: PathBuf,
    backups_dir: PathBuf,
    exports_dir: PathBuf,
    state_file: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = root.unwrap_or_else(paths::app_data_dir);
        ensure_dir(&root)?;
        let sheets_dir = paths::sheets_dir_in(&root);
        let backups_dir = paths::backups_dir_in(&root);
        let exports_dir = paths::exports_dir_in(&root);
        ensure_dir(&sheets_dir)?;
        ensure_dir(&backups_dir)?;
        ensure_dir(&exports_dir)?;
        let state_file = paths::state_file_in(&root);
        Ok(Self {
            sheets_dir,
            backups_dir,
            exports_dir,
            state_file,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn document_path(&self, key: &str) -> PathBuf {
        self.sheets_dir.join(format!("{}.json", key))
    }

    fn backup_dir(&self, key: &str) -> PathBuf {
        self.backups_dir.join(key)
    }

    pub fn backup_path(&self, key: &str, backup_name: &str) -> PathBuf {
        self.backup_dir(key).join(backup_name)
    }

    fn load_document<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.document_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn save_document<T: Serialize>(&self, key: &str, document: &T) -> Result<PathBuf> {
        let path = self.document_path(key);
        if path.exists() {
            self.backup_existing_file(key, &path)?;
        }
        let json = serde_json::to_string_pretty(document)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(path)
    }

    fn backup_existing_file(&self, key: &str, path: &Path) -> Result<()> {
        let dir = self.backup_dir(key);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let backup_name = format!("{}_{}.{}", key, timestamp, BACKUP_EXTENSION);
        fs::copy(path, dir.join(backup_name))?;
        self.prune_backups(key)?;
        Ok(())
    }

    fn prune_backups(&self, key: &str) -> Result<()> {
        let backups = self.list_backups(key)?;
        if backups.len() <= self.retention {
            return Ok(());
        }
        for entry in backups.iter().skip(self.retention) {
            let _ = fs::remove_file(self.backup_path(key, entry));
        }
        Ok(())
    }

    fn read_state(&self) -> Result<StoreState> {
        if self.state_file.exists() {
            let data = fs::read_to_string(&self.state_file)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(StoreState::default())
        }
    }
}

impl StorageBackend for JsonStorage {
    fn load_roster(&self) -> Result<Option<Roster>> {
        self.load_document(ROSTER_KEY)
    }

    fn save_roster(&self, roster: &Roster) -> Result<PathBuf> {
        self.save_document(ROSTER_KEY, roster)
    }

    fn load_week(&self, week: Week) -> Result<Option<WeekData>> {
        self.load_document(&week_key(week))
    }

    fn save_week(&self, data: &WeekData) -> Result<PathBuf> {
        self.save_document(&week_key(data.week), data)
    }

    fn last_week(&self) -> Result<Option<Week>> {
        let state = self.read_state()?;
        Ok(state.last_week)
    }

    fn record_last_week(&self, week: Option<Week>) -> Result<()> {
        let mut state = self.read_state()?;
        state.last_week = week;
        let data = serde_json::to_string_pretty(&state)?;
        write_atomic(&self.state_file, &data)?;
        Ok(())
    }

    fn list_backups(&self, key: &str) -> Result<Vec<String>> {
        let dir = self.backup_dir(key);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            let file_name = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            entries.push(file_name);
        }
        entries.sort_by(|a, b| parse_backup_timestamp(b).cmp(&parse_backup_timestamp(a)));
        Ok(entries)
    }

    fn restore_backup(&self, key: &str, backup_name: &str) -> Result<PathBuf> {
        let backup_path = self.backup_path(key, backup_name);
        if !backup_path.exists() {
            return Err(TimesheetError::Storage(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        let target = self.document_path(key);
        fs::copy(&backup_path, &target)?;
        Ok(target)
    }

    fn export_path(&self, week: Week) -> PathBuf {
        self.exports_dir
            .join(format!("timesheet_week_{}.html", week))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    last_week: Option<Week>,
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let segments: Vec<&str> = trimmed.split('_').collect();
    if segments.len() < 2 {
        return None;
    }
    let time_part = segments.last()?;
    let date_part = segments.get(segments.len() - 2)?;
    if !is_digits(date_part, 8) || !is_digits(time_part, 4) {
        return None;
    }
    let raw = format!("{}{}", date_part, time_part);
    NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
