//! The contact directory.
//!
//! Records are stored under their name exactly as entered. Every lookup,
//! replacement and deletion compares names case-insensitively, and adding
//! a record replaces any case variant of its name, so the directory never
//! holds two records whose names differ only by case.

pub mod window;

pub use window::BirthdayWindow;

use crate::domain::names_match;
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-memory collection of contact records keyed by name.
///
/// Iteration is ordered by the stored name.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: BTreeMap<String, Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record under its own name.
    ///
    /// Any record whose name matches case-insensitively is replaced, and the
    /// new casing becomes the stored key. Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let replaced = self.remove_matching(record.name().as_str()).pop();
        if let Some(previous) = &replaced {
            tracing::debug!(
                previous = %previous.name(),
                name = %record.name(),
                "Replacing existing contact"
            );
        }
        self.records.insert(record.name().to_string(), record);
        replaced
    }

    /// Find a record by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|(key, _)| names_match(key, name))
            .map(|(_, record)| record)
    }

    /// Find a record by case-insensitive name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|(key, _)| names_match(key, name))
            .map(|(_, record)| record)
    }

    /// Remove every record whose name matches case-insensitively.
    ///
    /// Returns the number of records removed; zero is not an error.
    pub fn delete(&mut self, name: &str) -> usize {
        let removed = self.remove_matching(name).len();
        tracing::debug!(name = %name, removed, "Deleted contacts");
        removed
    }

    /// Records in stored-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose birthday falls in the week after `reference`.
    ///
    /// Yields `(name, observed date)` lazily, in stored-name order. See
    /// [`BirthdayWindow`] for the window rules.
    pub fn birthdays_in_window(
        &self,
        reference: NaiveDate,
    ) -> impl Iterator<Item = (&str, NaiveDate)> + '_ {
        let window = BirthdayWindow::following(reference);
        tracing::trace!(start = %window.start(), end = %window.end(), "Scanning birthdays");
        self.records.values().filter_map(move |record| {
            let birthday = record.birthday()?;
            window
                .occurrence_of(birthday)
                .map(|date| (record.name().as_str(), date))
        })
    }

    fn remove_matching(&mut self, name: &str) -> Vec<Record> {
        let keys: Vec<String> = self
            .records
            .keys()
            .filter(|key| names_match(key, name))
            .cloned()
            .collect();

        keys.iter()
            .filter_map(|key| self.records.remove(key))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
