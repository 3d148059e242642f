//! Field-level change tracking.

use std::collections::BTreeSet;

/// Names of schema fields written since the last load, create or update.
///
/// Only membership is observable: writing a field twice marks it once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    dirty: BTreeSet<String>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, field: &str) {
        if !self.dirty.contains(field) {
            self.dirty.insert(field.to_string());
        }
    }

    /// Forgets a single field, e.g. after it was committed on its own.
    pub fn unmark(&mut self, field: &str) {
        self.dirty.remove(field);
    }

    pub fn is_dirty(&self, field: &str) -> bool {
        self.dirty.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dirty.len()
    }

    /// Dirty field names in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.dirty.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.dirty.clear();
    }
}
