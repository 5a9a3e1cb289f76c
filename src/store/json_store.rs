//! Flat JSON record file: a single array of records, rewritten on change.

use crate::errors::AppResult;
use crate::models::record::Record;
use crate::models::time_of_day::TimeOfDay;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create (or truncate) a record file holding an empty array.
    pub fn create_new(path: impl Into<PathBuf>) -> AppResult<Self> {
        let store = Self::new(path);
        store.save(&[])?;
        tracing::info!(path = %store.path.display(), "created empty record file");
        Ok(store)
    }

    /// All records; a missing file reads as empty.
    pub fn load(&self) -> AppResult<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Record> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    /// Append one record, creating the file and its directory if needed.
    pub fn append(&self, record: Record) -> AppResult<()> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    pub fn filter_by_badge(&self, badge: &str) -> AppResult<Vec<Record>> {
        Ok(filter_by_badge(&self.load()?, badge))
    }

    /// Remove every record matching all four fields; returns how many went.
    pub fn delete(
        &self,
        badge: &str,
        date: NaiveDate,
        entry: TimeOfDay,
        exit: TimeOfDay,
    ) -> AppResult<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| !r.matches(badge, date, entry, exit));
        let removed = before - records.len();

        if removed > 0 {
            self.save(&records)?;
        }
        Ok(removed)
    }

    fn save(&self, records: &[Record]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 4-space indentation, UTF-8 kept as is
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut ser)?;
        fs::write(&self.path, buf)?;
        Ok(())
    }
}

/// Records belonging to `badge` (exact match after trimming).
pub fn filter_by_badge(records: &[Record], badge: &str) -> Vec<Record> {
    let badge = badge.trim();
    records.iter().filter(|r| r.badge == badge).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(badge: &str, day: u32, entry: &str, exit: &str, net: f64) -> Record {
        Record {
            badge: badge.into(),
            date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            entry: entry.parse().unwrap(),
            exit: exit.parse().unwrap(),
            net_hours: net,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("none.json"));
        assert!(store.load().unwrap().is_empty());
        assert_eq!(
            store
                .delete("1", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), TimeOfDay::at(8, 0), TimeOfDay::at(9, 0))
                .unwrap(),
            0
        );
    }

    #[test]
    fn append_creates_directories_and_keeps_order() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("a").join("b").join("work.json"));
        store.append(record("100", 1, "08:00", "17:00", 8.25)).unwrap();
        store.append(record("200", 1, "09:00", "18:00", 8.25)).unwrap();

        let all = store.load().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].badge, "100");
        assert_eq!(all[1].badge, "200");
    }

    #[test]
    fn file_format_is_a_pretty_json_array() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("work.json"));
        store.append(record("42", 7, "08:00", "17:00", 8.25)).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n    {"));
        assert!(raw.contains("\"badge\": \"42\""));
        assert!(raw.contains("\"date\": \"2025-04-07\""));
        assert!(raw.contains("\"entry\": \"08:00\""));
        assert!(raw.contains("\"net_hours\": 8.25"));
    }

    #[test]
    fn filter_by_badge_matches_exactly() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("work.json"));
        store.append(record("7", 1, "08:00", "17:00", 8.25)).unwrap();
        store.append(record("77", 1, "08:00", "17:00", 8.25)).unwrap();
        store.append(record("7", 2, "08:00", "12:00", 4.0)).unwrap();

        let mine = store.filter_by_badge(" 7 ").unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.badge == "7"));
    }

    #[test]
    fn delete_requires_all_four_fields() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("work.json"));
        store.append(record("7", 1, "08:00", "17:00", 8.25)).unwrap();
        store.append(record("7", 1, "08:00", "16:00", 7.25)).unwrap();
        store.append(record("7", 1, "08:00", "17:00", 8.25)).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let removed = store
            .delete("7", date, TimeOfDay::at(8, 0), TimeOfDay::at(18, 0))
            .unwrap();
        assert_eq!(removed, 0);

        let removed = store
            .delete("7", date, TimeOfDay::at(8, 0), TimeOfDay::at(17, 0))
            .unwrap();
        assert_eq!(removed, 2);

        let left = store.load().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].exit.to_string(), "16:00");
    }

    #[test]
    fn create_new_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work.json");
        let store = RecordStore::new(&path);
        store.append(record("1", 1, "08:00", "09:00", 1.0)).unwrap();

        let fresh = RecordStore::create_new(&path).unwrap();
        assert!(fresh.load().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(RecordStore::new(&path).load().is_err());
    }
}
