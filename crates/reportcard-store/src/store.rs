//! JSON-backed report card store.
//!
//! The whole store is one pretty-printed JSON object mapping student name
//! to `ReportRecord`. It is read fully on load and written fully on save;
//! there is no locking, so two processes saving at once lose updates.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use reportcard_core::record::ReportRecord;

/// Saved report cards keyed by student name.
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
    records: BTreeMap<String, ReportRecord>,
}

impl ReportStore {
    /// An empty store that will save to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// Load the store at `path`.
    ///
    /// A missing, unreadable, or corrupt file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(&path) {
            Ok(Some(records)) => {
                tracing::debug!("loaded {} report(s) from {}", records.len(), path.display());
                Self { path, records }
            }
            Ok(None) => {
                tracing::debug!("no store at {}, starting empty", path.display());
                Self::empty(path)
            }
            Err(e) => {
                tracing::warn!("ignoring unusable store {}: {e:#}", path.display());
                Self::empty(path)
            }
        }
    }

    fn try_load(path: &Path) -> Result<Option<BTreeMap<String, ReportRecord>>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read store from {}", path.display()))?;
        let records = serde_json::from_str(&content).context("failed to parse store JSON")?;
        Ok(Some(records))
    }

    /// Write every record back to the store file.
    pub fn save(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.records).context("failed to serialize store")?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create store directory {}", parent.display())
                })?;
            }
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write store to {}", self.path.display()))?;
        tracing::debug!("saved {} report(s) to {}", self.records.len(), self.path.display());
        Ok(())
    }

    /// Look up a record, falling back to a case-insensitive name match.
    pub fn get(&self, name: &str) -> Option<&ReportRecord> {
        let key = self.resolve_key(name)?;
        self.records.get(key)
    }

    /// The stored spelling of `name`, if any record matches.
    pub fn resolve_key(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        if let Some((key, _)) = self.records.get_key_value(name) {
            return Some(key);
        }
        let wanted = name.to_lowercase();
        self.records
            .keys()
            .find(|k| k.to_lowercase() == wanted)
            .map(String::as_str)
    }

    /// Insert or overwrite a record, returning the one it replaced.
    pub fn put(&mut self, name: impl Into<String>, record: ReportRecord) -> Option<ReportRecord> {
        let name = name.into();
        let previous = self.records.insert(name.clone(), record);
        if previous.is_some() {
            tracing::warn!("overwriting saved report card for '{name}'");
        }
        previous
    }

    /// Remove a record using the same lookup rules as `get`.
    pub fn delete(&mut self, name: &str) -> Option<(String, ReportRecord)> {
        let key = self.resolve_key(name)?.to_string();
        self.records.remove_entry(&key)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use reportcard_core::grade::Grade;
    use reportcard_core::record::{OverallResult, SubjectResult};

    fn make_record(class: &str, marks: &[(&str, u32)]) -> ReportRecord {
        let mut subjects = IndexMap::new();
        for &(name, obtained) in marks {
            let percentage = obtained as f64;
            subjects.insert(
                name.to_string(),
                SubjectResult {
                    obtained,
                    total: 100,
                    percentage,
                    grade: Grade::for_percentage(percentage),
                },
            );
        }
        let obtained: u64 = marks.iter().map(|&(_, m)| u64::from(m)).sum();
        let total = 100 * marks.len() as u64;
        let percentage = obtained as f64 / total as f64 * 100.0;
        ReportRecord {
            class: class.into(),
            subjects,
            overall: OverallResult {
                obtained,
                total,
                percentage,
                grade: Grade::for_percentage(percentage),
                average_obtained: obtained as f64 / marks.len() as f64,
            },
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReportStore::load(dir.path().join("nope.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = ReportStore::load(&path);
        assert!(store.is_empty());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");
        let record = make_record("7", &[("English", 91), ("Maths", 33), ("Art", 67)]);

        let mut store = ReportStore::load(&path);
        store.put("Ali Khan", record.clone());
        store.save().unwrap();

        let loaded = ReportStore::load(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("Ali Khan"), Some(&record));
    }

    #[test]
    fn saved_file_is_pretty_json_keyed_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = ReportStore::empty(&path);
        store.put("Sara", make_record("3", &[("Urdu", 80)]));
        store.save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["Sara"]["class"], "3");
        assert_eq!(value["Sara"]["overall"]["grade"], "A");
    }

    #[test]
    fn put_overwrites_and_returns_previous() {
        let mut store = ReportStore::empty("unused.json");
        assert!(store.put("Sara", make_record("3", &[("Urdu", 80)])).is_none());
        let previous = store.put("Sara", make_record("4", &[("Urdu", 40)]));
        assert_eq!(previous.unwrap().class, "3");
        assert_eq!(store.get("Sara").unwrap().class, "4");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lookup_falls_back_to_case_insensitive() {
        let mut store = ReportStore::empty("unused.json");
        store.put("Ali Khan", make_record("9", &[("Maths", 70)]));
        assert!(store.get("ali khan").is_some());
        assert!(store.get(" ALI KHAN ").is_some());
        assert_eq!(store.resolve_key("ali khan"), Some("Ali Khan"));
        assert!(store.get("Ali").is_none());
    }

    #[test]
    fn delete_removes_record() {
        let mut store = ReportStore::empty("unused.json");
        store.put("Ali Khan", make_record("9", &[("Maths", 70)]));
        store.put("Sara", make_record("3", &[("Urdu", 80)]));

        let (name, _) = store.delete("ali khan").unwrap();
        assert_eq!(name, "Ali Khan");
        assert!(store.delete("Ali Khan").is_none());
        assert_eq!(store.names().collect::<Vec<_>>(), ["Sara"]);
    }
}
