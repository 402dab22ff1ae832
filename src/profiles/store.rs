use std::collections::HashMap;

use tracing::{debug, warn};

use super::record::Record;
use super::{LoadError, NotFound};

/// Roster of records keyed by last name, with a wrapping cursor for
/// next/current navigation.
///
/// Exact-case last names key the primary table. A separate index maps the
/// lowercased name back to the exact one so lookups can ignore case without
/// losing the spelling from the file.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    records: HashMap<String, Record>,
    folded: HashMap<String, String>,
    order: Vec<String>,
    cursor: usize,
}

impl ProfileStore {
    /// Builds a store from header-keyed rows in file order.
    ///
    /// A later row with the same exact-case last name replaces the earlier
    /// one's values but keeps the navigation slot where the name first
    /// appeared, so every navigation entry resolves to a distinct record.
    pub fn load<I>(rows: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = HashMap<String, String>>,
    {
        let mut store = Self::default();

        for (index, row) in rows.into_iter().enumerate() {
            let record = Record::from_row(&row)?;
            let key = record.last_name.clone();

            if store.records.contains_key(&key) {
                warn!(row = index + 1, last_name = %key, "duplicate last name; later row wins");
            } else {
                store.order.push(key.clone());
            }

            store.folded.insert(key.to_lowercase(), key.clone());
            store.records.insert(key, record);
        }

        debug!(profiles = store.order.len(), "profile store built");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 1-based position of the cursor and the total, or `(0, 0)` when empty.
    pub fn position(&self) -> (usize, usize) {
        if self.is_empty() {
            (0, 0)
        } else {
            (self.cursor + 1, self.len())
        }
    }

    pub fn current(&self) -> Option<&Record> {
        self.get(self.cursor)
    }

    pub fn advance(&mut self) -> Option<&Record> {
        if self.is_empty() {
            return None;
        }

        self.cursor = (self.cursor + 1) % self.len();
        debug!(cursor = self.cursor, "advanced to next profile");
        self.current()
    }

    /// Record at a navigation index; does not move the cursor.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.order
            .get(index)
            .and_then(|key| self.records.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Case-insensitive exact match on last name; does not move the cursor.
    pub fn find_by_last_name(&self, query: &str) -> Result<&Record, NotFound> {
        self.folded
            .get(&query.to_lowercase())
            .and_then(|key| self.records.get(key))
            .ok_or_else(|| NotFound {
                query: query.to_string(),
                candidates: self.last_names(),
            })
    }

    /// Every stored last name in its original casing, sorted.
    pub fn last_names(&self) -> Vec<String> {
        let mut names = self.records.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
}
