//! RecordStore: ordered, file-backed record sequence for one session.
//!
//! Front ends hold a store and go through its operations; they never touch
//! the underlying Vec. Every mutating call either applies fully or returns an
//! error before anything is written.
//!
//! Identity:
//! - tasks are addressed by position (0-based here; front ends show 1-based)
//! - contacts are addressed by name, first match wins when names repeat
//!
//! Nothing is written to disk until `save` is called.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::contact::Contact;
use crate::error::StoreError;
use crate::persist::{load_records, save_records};
use crate::record::Record;
use crate::task::{Task, TaskSummary};

#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    path: PathBuf,
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Empty store bound to `path`. Nothing is read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Strict load: a missing file is empty, any other failure is returned.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = load_records(&path)?;
        Ok(Self { path, records })
    }

    /// Startup load: never fails. A file that can't be read or decoded
    /// leaves the store empty and the error is handed back for display.
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let path = path.into();
        match load_records(&path) {
            Ok(records) => (Self { path, records }, None),
            Err(e) => {
                warn!("{e}; starting with an empty {} list", R::KIND);
                (Self::new(path), Some(e))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&R> {
        self.records.get(position)
    }

    pub fn save(&self) -> Result<(), StoreError> {
        save_records(&self.records, &self.path)
    }

    /// Validate and append. Returns the new record's position.
    pub fn add(&mut self, candidate: R) -> Result<usize, StoreError> {
        candidate.validate()?;
        debug!("add {} '{}'", R::KIND, candidate.label());
        self.records.push(candidate);
        Ok(self.records.len() - 1)
    }

    /// Validate and overwrite the record at `position`. Returns the old record.
    pub fn update(&mut self, position: usize, replacement: R) -> Result<R, StoreError> {
        replacement.validate()?;
        let slot = self.slot_mut(position)?;
        debug!("update {} at {position}", R::KIND);
        Ok(std::mem::replace(slot, replacement))
    }

    /// Remove and return the record at `position`. Later records shift down.
    pub fn remove(&mut self, position: usize) -> Result<R, StoreError> {
        self.check(position)?;
        let removed = self.records.remove(position);
        debug!("remove {} '{}'", R::KIND, removed.label());
        Ok(removed)
    }

    /// Linear scan, original order.
    pub fn find<F>(&self, predicate: F) -> Vec<&R>
    where
        F: Fn(&R) -> bool,
    {
        self.records.iter().filter(|r| predicate(*r)).collect()
    }

    /// Position of the first record matching `predicate`.
    pub fn position_where<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&R) -> bool,
    {
        self.records.iter().position(predicate)
    }

    fn check(&self, position: usize) -> Result<(), StoreError> {
        if position >= self.records.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn slot_mut(&mut self, position: usize) -> Result<&mut R, StoreError> {
        let len = self.records.len();
        self.records
            .get_mut(position)
            .ok_or(StoreError::OutOfRange { position, len })
    }
}

impl RecordStore<Task> {
    /// Flip `completed`. Returns the new value.
    pub fn toggle_completed(&mut self, position: usize) -> Result<bool, StoreError> {
        let task = self.slot_mut(position)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn mark_complete(&mut self, position: usize) -> Result<(), StoreError> {
        self.slot_mut(position)?.completed = true;
        Ok(())
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary::of(&self.records)
    }
}

impl RecordStore<Contact> {
    /// Case-insensitive substring search over name and phone.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.find(|c| c.matches(query))
    }

    /// First contact whose name equals `name` exactly.
    pub fn position_of(&self, name: &str) -> Result<usize, StoreError> {
        self.position_where(|c| c.name == name)
            .ok_or_else(|| StoreError::NotFound {
                kind: Contact::KIND,
                key: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn tasks(descriptions: &[&str]) -> RecordStore<Task> {
        let mut s = RecordStore::new("unused.json");
        for d in descriptions {
            s.add(Task::new(*d)).unwrap();
        }
        s
    }

    #[test]
    fn add_appends_exact_record() {
        let mut s = RecordStore::new("unused.json");
        let t = Task::new("Buy milk")
            .with_priority(Priority::High)
            .with_due_date("2024-01-01")
            .with_tags(["errand"]);
        assert_eq!(s.add(t.clone()).unwrap(), 0);
        assert_eq!(s.records(), &[t]);
    }

    #[test]
    fn add_rejects_empty_required_field() {
        let mut s = tasks(&["a"]);
        let err = s.add(Task::new("")).unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn add_allows_duplicates() {
        let s = tasks(&["same", "same"]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn update_overwrites_whole_record() {
        let mut s = tasks(&["a", "b"]);
        s.toggle_completed(1).unwrap();
        let old = s.update(1, Task::new("b2").with_tags(["x"])).unwrap();
        assert!(old.completed);
        assert_eq!(s.get(1), Some(&Task::new("b2").with_tags(["x"])));
    }

    #[test]
    fn update_rejects_invalid_replacement_without_change() {
        let mut s = tasks(&["a"]);
        assert!(s.update(0, Task::new(" ")).is_err());
        assert_eq!(s.get(0).unwrap().description, "a");
    }

    #[test]
    fn update_out_of_range() {
        let mut s = tasks(&["a"]);
        let err = s.update(3, Task::new("z")).unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange { position: 3, len: 1 }));
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut s = tasks(&["a", "b", "c"]);
        let removed = s.remove(0).unwrap();
        assert_eq!(removed.description, "a");
        assert_eq!(s.get(0).unwrap().description, "b");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn remove_out_of_range_leaves_store() {
        let mut s = tasks(&["a", "b"]);
        assert!(matches!(
            s.remove(2),
            Err(StoreError::OutOfRange { position: 2, len: 2 })
        ));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut s = tasks(&["a"]);
        assert!(s.toggle_completed(0).unwrap());
        assert!(!s.toggle_completed(0).unwrap());
        assert!(!s.get(0).unwrap().completed);
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let mut s = tasks(&["a", "b"]);
        s.mark_complete(1).unwrap();
        s.mark_complete(1).unwrap();
        assert_eq!(s.summary().completed, 1);
        assert!(s.mark_complete(5).is_err());
    }

    #[test]
    fn search_contacts_by_name_fragment() {
        let mut s = RecordStore::new("unused.json");
        s.add(Contact::new("Ann Lee", "555-1")).unwrap();
        s.add(Contact::new("Bob", "555-2")).unwrap();

        let hits = s.search("ann");
        assert_eq!(hits, vec![&Contact::new("Ann Lee", "555-1")]);
        assert_eq!(s.search("555").len(), 2);
        assert_eq!(s.search("").len(), 2);
    }

    #[test]
    fn position_of_takes_first_duplicate() {
        let mut s = RecordStore::new("unused.json");
        s.add(Contact::new("Ann", "1")).unwrap();
        s.add(Contact::new("Ann", "2")).unwrap();
        assert_eq!(s.position_of("Ann").unwrap(), 0);
        assert!(matches!(
            s.position_of("ann"),
            Err(StoreError::NotFound { kind: "contact", .. })
        ));
    }
}
