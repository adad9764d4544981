//! Agenda time tracking for a running meeting.
//!
//! The tracker owns the per-item records while a meeting is in progress.
//! Time is attributed lap by lap: checking an item off records the seconds
//! since the previous item was completed (or since the meeting started) and
//! starts a new lap.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AgendaItem, AgendaItemRecord, AgendaRecords};

/// Tracks which agenda items have been completed and how long each took.
///
/// Items must be completed in order: an item can only be toggled once every
/// item before it has been checked or skipped.
///
/// # Example
///
/// ```
/// use meeting_cost_engine::models::AgendaItem;
/// use meeting_cost_engine::session::AgendaTracker;
///
/// let mut tracker = AgendaTracker::new(vec![
///     AgendaItem { id: "a1".into(), title: "Intro".into(), minutes: 5 },
///     AgendaItem { id: "a2".into(), title: "Demo".into(), minutes: 10 },
/// ]);
///
/// tracker.check("a1", 240).unwrap();
/// tracker.check("a2", 900).unwrap();
///
/// assert_eq!(tracker.records().get("a1").actual_seconds, 240);
/// assert_eq!(tracker.records().get("a2").actual_seconds, 660);
/// assert!(tracker.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct AgendaTracker {
    items: Vec<AgendaItem>,
    records: AgendaRecords,
    lap_started_at: u64,
}

impl AgendaTracker {
    /// Creates a tracker for `items`, with the first lap starting at zero.
    pub fn new(items: Vec<AgendaItem>) -> Self {
        Self {
            items,
            records: AgendaRecords::new(),
            lap_started_at: 0,
        }
    }

    /// The agenda being tracked.
    pub fn items(&self) -> &[AgendaItem] {
        &self.items
    }

    /// Records collected so far.
    pub fn records(&self) -> &AgendaRecords {
        &self.records
    }

    /// The first item that has not been checked or skipped.
    pub fn current_item(&self) -> Option<&AgendaItem> {
        self.items
            .iter()
            .find(|item| !self.records.get(&item.id).checked)
    }

    /// Seconds spent on the current item at `elapsed_seconds` into the meeting.
    pub fn lap_seconds(&self, elapsed_seconds: u64) -> u64 {
        elapsed_seconds.saturating_sub(self.lap_started_at)
    }

    /// Returns true once every item has been checked or skipped.
    pub fn is_complete(&self) -> bool {
        self.current_item().is_none()
    }

    /// Checks an item off, recording the current lap as its time.
    ///
    /// Checking an item that is already checked leaves it unchanged.
    pub fn check(
        &mut self,
        item_id: &str,
        elapsed_seconds: u64,
    ) -> EngineResult<AgendaItemRecord> {
        self.ensure_toggleable(item_id)?;

        let existing = self.records.get(item_id);
        if existing.checked {
            return Ok(existing);
        }

        let record = AgendaItemRecord {
            checked: true,
            skipped: false,
            actual_seconds: self.lap_seconds(elapsed_seconds),
        };
        self.records.insert(item_id, record);
        self.lap_started_at = elapsed_seconds;

        debug!(
            item_id,
            actual_seconds = record.actual_seconds,
            "Agenda item checked"
        );
        Ok(record)
    }

    /// Marks an item as skipped, forcing its recorded time to zero.
    ///
    /// Skipping an unchecked item completes it and starts a new lap. Skipping
    /// an already checked item only rewrites its record.
    pub fn skip(
        &mut self,
        item_id: &str,
        elapsed_seconds: u64,
    ) -> EngineResult<AgendaItemRecord> {
        self.ensure_toggleable(item_id)?;

        let was_checked = self.records.get(item_id).checked;
        let record = AgendaItemRecord {
            checked: true,
            skipped: true,
            actual_seconds: 0,
        };
        self.records.insert(item_id, record);
        if !was_checked {
            self.lap_started_at = elapsed_seconds;
        }

        debug!(item_id, "Agenda item skipped");
        Ok(record)
    }

    /// Unchecks an item, discarding its recorded time.
    ///
    /// The running lap is not affected.
    pub fn uncheck(&mut self, item_id: &str) -> EngineResult<()> {
        self.ensure_toggleable(item_id)?;
        self.records.remove(item_id);

        debug!(item_id, "Agenda item unchecked");
        Ok(())
    }

    /// Checks an unchecked item, or unchecks a checked one.
    ///
    /// Returns the item's record after the toggle.
    pub fn toggle(
        &mut self,
        item_id: &str,
        elapsed_seconds: u64,
    ) -> EngineResult<AgendaItemRecord> {
        if self.records.get(item_id).checked {
            self.uncheck(item_id)?;
            Ok(AgendaItemRecord::default())
        } else {
            self.check(item_id, elapsed_seconds)
        }
    }

    fn ensure_toggleable(&self, item_id: &str) -> EngineResult<()> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| EngineError::AgendaItemNotFound {
                item_id: item_id.to_string(),
            })?;

        if let Some(pending) = self.items[..position]
            .iter()
            .find(|item| !self.records.get(&item.id).checked)
        {
            return Err(EngineError::AgendaOutOfOrder {
                item_id: item_id.to_string(),
                pending_item_id: pending.id.clone(),
            });
        }

        Ok(())
    }
}
