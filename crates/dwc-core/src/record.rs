//! Warranty record types shared between the lookup pipeline and the output
//! writers.
//!
//! The vendor page decides which fields exist for a given device, so a record
//! is a string map rather than a fixed struct. Commonly observed keys:
//! `Provider`, `Ship Date`, `Warranty Start Date`, `Warranty End Date`, and
//! the always-present `Serial Number`. The tabular field universe is computed
//! from the whole batch at serialization time, never assumed up front.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One device's normalized warranty fields.
///
/// Backed by a `BTreeMap` so key iteration (and therefore JSON output) is
/// sorted and deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarrantyRecord(BTreeMap<String, String>);

impl WarrantyRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for WarrantyRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Union of field names across all records in a batch.
///
/// This is the CSV header set: individual pages expose different key sets,
/// so the universe can only be known once the whole batch has been collected.
#[must_use]
pub fn field_universe(records: &[WarrantyRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|r| r.keys().map(str::to_owned))
        .collect()
}
