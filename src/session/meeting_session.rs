//! A meeting from setup to report.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculation::{estimate_meeting_cost, finalize_meeting, running_cost};
use crate::config::SalaryBands;
use crate::error::{EngineError, EngineResult};
use crate::models::{AgendaItem, AgendaItemRecord, Attendee, Meeting, MeetingReport};

use super::AgendaTracker;

/// What is known about a meeting before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSetup {
    /// Meeting title.
    pub title: String,
    /// Planned duration in minutes.
    pub scheduled_duration_minutes: u32,
    /// Whether the meeting has an agenda.
    #[serde(default)]
    pub has_agenda: bool,
    /// The people attending.
    pub attendees: Vec<Attendee>,
    /// Agenda items in order.
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
}

impl MeetingSetup {
    /// Checks the setup and builds the meeting record it describes.
    ///
    /// The record's `total_cost` holds the pre-meeting estimate. A non-empty
    /// agenda implies `has_agenda`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMeeting`] for an empty title or a zero
    /// scheduled duration, and [`EngineError::RoleNotFound`] if an attendee's
    /// role has no salary band.
    pub fn build_meeting(
        &self,
        bands: &SalaryBands,
        started_at: Option<DateTime<Utc>>,
    ) -> EngineResult<Meeting> {
        if self.title.trim().is_empty() {
            return Err(EngineError::InvalidMeeting {
                field: "title".to_string(),
                message: "title must not be empty".to_string(),
            });
        }
        if self.scheduled_duration_minutes == 0 {
            return Err(EngineError::InvalidMeeting {
                field: "scheduled_duration_minutes".to_string(),
                message: "scheduled duration must be at least one minute".to_string(),
            });
        }

        let estimate =
            estimate_meeting_cost(&self.attendees, self.scheduled_duration_minutes, bands)?;

        Ok(Meeting {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            scheduled_duration_minutes: self.scheduled_duration_minutes,
            actual_duration_minutes: None,
            total_cost: estimate.estimated_cost,
            cost_per_second: estimate.cost_per_second,
            has_agenda: self.has_agenda || !self.agenda.is_empty(),
            attendee_count: estimate.attendee_count,
            efficiency_score: None,
            efficiency_grade: None,
            started_at,
            ended_at: None,
        })
    }
}

/// A meeting in progress.
///
/// Holds the meeting record and the agenda tracker until [`finish`] turns
/// them into a scored report.
///
/// [`finish`]: MeetingSession::finish
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use meeting_cost_engine::config::SalaryBands;
/// use meeting_cost_engine::models::{AgendaItem, Attendee, Grade};
/// use meeting_cost_engine::session::{MeetingSession, MeetingSetup};
///
/// let setup = MeetingSetup {
///     title: "Design review".to_string(),
///     scheduled_duration_minutes: 30,
///     has_agenda: true,
///     attendees: vec![Attendee { id: "a".into(), name: "Ana".into(), role: "Senior".into() }],
///     agenda: vec![AgendaItem { id: "i1".into(), title: "Walkthrough".into(), minutes: 20 }],
/// };
///
/// let mut session = MeetingSession::start(setup, &SalaryBands::standard(), Utc::now()).unwrap();
/// session.check_item("i1", 1200).unwrap();
///
/// let (meeting, report) = session.finish(1500, Utc::now());
/// assert_eq!(meeting.actual_duration_minutes, Some(25));
/// assert_eq!(report.final_grade, Grade::APlus);
/// ```
#[derive(Debug, Clone)]
pub struct MeetingSession {
    meeting: Meeting,
    tracker: AgendaTracker,
}

impl MeetingSession {
    /// Starts a meeting at `started_at`.
    ///
    /// # Errors
    ///
    /// See [`MeetingSetup::build_meeting`].
    pub fn start(
        setup: MeetingSetup,
        bands: &SalaryBands,
        started_at: DateTime<Utc>,
    ) -> EngineResult<Self> {
        let meeting = setup.build_meeting(bands, Some(started_at))?;

        info!(
            meeting_id = %meeting.id,
            attendees = meeting.attendee_count,
            scheduled_minutes = meeting.scheduled_duration_minutes,
            estimated_cost = %meeting.total_cost,
            "Meeting started"
        );

        Ok(Self {
            meeting,
            tracker: AgendaTracker::new(setup.agenda),
        })
    }

    /// The meeting record as it stands.
    pub fn meeting(&self) -> &Meeting {
        &self.meeting
    }

    /// The agenda tracker.
    pub fn tracker(&self) -> &AgendaTracker {
        &self.tracker
    }

    /// Cost burned after `elapsed_seconds`.
    pub fn running_cost(&self, elapsed_seconds: u64) -> Decimal {
        running_cost(elapsed_seconds, self.meeting.cost_per_second)
    }

    /// Returns true once whole elapsed minutes exceed the scheduled duration.
    pub fn is_overtime(&self, elapsed_seconds: u64) -> bool {
        elapsed_seconds / 60 > u64::from(self.meeting.scheduled_duration_minutes)
    }

    /// Checks an agenda item off. See [`AgendaTracker::check`].
    pub fn check_item(
        &mut self,
        item_id: &str,
        elapsed_seconds: u64,
    ) -> EngineResult<AgendaItemRecord> {
        self.tracker.check(item_id, elapsed_seconds)
    }

    /// Skips an agenda item. See [`AgendaTracker::skip`].
    pub fn skip_item(
        &mut self,
        item_id: &str,
        elapsed_seconds: u64,
    ) -> EngineResult<AgendaItemRecord> {
        self.tracker.skip(item_id, elapsed_seconds)
    }

    /// Toggles an agenda item. See [`AgendaTracker::toggle`].
    pub fn toggle_item(
        &mut self,
        item_id: &str,
        elapsed_seconds: u64,
    ) -> EngineResult<AgendaItemRecord> {
        self.tracker.toggle(item_id, elapsed_seconds)
    }

    /// Ends the meeting after `elapsed_seconds` and scores it.
    ///
    /// Agenda items that were never checked keep an empty record.
    pub fn finish(self, elapsed_seconds: u64, ended_at: DateTime<Utc>) -> (Meeting, MeetingReport) {
        let Self {
            mut meeting,
            tracker,
        } = self;

        let report = finalize_meeting(
            &mut meeting,
            elapsed_seconds,
            ended_at,
            tracker.items(),
            tracker.records(),
        );

        info!(
            meeting_id = %meeting.id,
            actual_minutes = report.facts.actual_minutes,
            total_cost = %report.total_cost,
            final_score = report.final_score,
            final_grade = %report.final_grade,
            "Meeting finished"
        );

        (meeting, report)
    }
}
