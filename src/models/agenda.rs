//! Agenda models.
//!
//! [`AgendaItem`] is the planned topic fixed at setup. [`AgendaItemRecord`]
//! is the runtime tracking state for one item, and [`AgendaRecords`] is the
//! id-keyed collection of those records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A planned discussion topic with an allotted time budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Identifier, unique within a meeting.
    pub id: String,
    /// Topic title.
    pub title: String,
    /// Allotted time in minutes.
    pub minutes: u32,
}

impl AgendaItem {
    /// Allotted time in seconds.
    pub fn allotted_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60
    }
}

/// Runtime tracking state for one agenda item.
///
/// The default value is the zero record used for items with nothing recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItemRecord {
    /// Whether the item has been checked off (skipped items count as checked).
    #[serde(default)]
    pub checked: bool,
    /// Whether the item was skipped.
    #[serde(default)]
    pub skipped: bool,
    /// Seconds spent on the item.
    #[serde(default)]
    pub actual_seconds: u64,
}

/// Agenda records keyed by item id.
///
/// Lookups are total: an id with no record yields the zero record, so partial
/// client-side state never needs existence checks downstream.
///
/// # Example
///
/// ```
/// use meeting_cost_engine::models::{AgendaItemRecord, AgendaRecords};
///
/// let mut records = AgendaRecords::new();
/// records.insert(
///     "intro",
///     AgendaItemRecord { checked: true, skipped: false, actual_seconds: 240 },
/// );
///
/// assert_eq!(records.get("intro").actual_seconds, 240);
/// assert_eq!(records.get("missing"), AgendaItemRecord::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgendaRecords {
    records: HashMap<String, AgendaItemRecord>,
}

impl AgendaRecords {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `item_id`, or the zero record if none exists.
    pub fn get(&self, item_id: &str) -> AgendaItemRecord {
        self.records.get(item_id).copied().unwrap_or_default()
    }

    /// Returns true if a record has been stored for `item_id`.
    pub fn contains(&self, item_id: &str) -> bool {
        self.records.contains_key(item_id)
    }

    /// Stores the record for `item_id`, replacing any previous one.
    pub fn insert(&mut self, item_id: impl Into<String>, record: AgendaItemRecord) {
        self.records.insert(item_id.into(), record);
    }

    /// Removes the record for `item_id`, returning it if present.
    pub fn remove(&mut self, item_id: &str) -> Option<AgendaItemRecord> {
        self.records.remove(item_id)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, AgendaItemRecord)> for AgendaRecords {
    fn from_iter<I: IntoIterator<Item = (K, AgendaItemRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
