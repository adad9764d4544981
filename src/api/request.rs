//! Request types for the Meeting Cost Engine API.
//!
//! This module defines the JSON request bodies accepted by the meeting,
//! estimate and report endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AgendaItem, AgendaRecords, Attendee, Meeting};
use crate::session::MeetingSetup;

/// Request body for the `/estimate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Planned duration in minutes.
    pub scheduled_duration_minutes: u32,
    /// The people attending.
    pub attendees: Vec<Attendee>,
}

/// Request body for creating a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
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
    /// Start time. Defaults to the time the request is handled.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
}

impl From<CreateMeetingRequest> for MeetingSetup {
    fn from(req: CreateMeetingRequest) -> Self {
        MeetingSetup {
            title: req.title,
            scheduled_duration_minutes: req.scheduled_duration_minutes,
            has_agenda: req.has_agenda,
            attendees: req.attendees,
            agenda: req.agenda,
        }
    }
}

/// Partial update of a stored meeting. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMeetingRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New planned duration in minutes.
    #[serde(default)]
    pub scheduled_duration_minutes: Option<u32>,
    /// New actual duration in minutes.
    #[serde(default)]
    pub actual_duration_minutes: Option<u32>,
    /// New total cost.
    #[serde(default)]
    pub total_cost: Option<Decimal>,
    /// Whether the meeting has an agenda.
    #[serde(default)]
    pub has_agenda: Option<bool>,
    /// New start time.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// New end time.
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
}

impl UpdateMeetingRequest {
    /// Applies the present fields to `meeting`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMeeting`] for a blank title, a zero
    /// scheduled duration or a negative total cost. `meeting` is left
    /// untouched on error.
    pub fn apply(&self, meeting: &mut Meeting) -> EngineResult<()> {
        if self
            .title
            .as_deref()
            .is_some_and(|title| title.trim().is_empty())
        {
            return Err(EngineError::InvalidMeeting {
                field: "title".to_string(),
                message: "title must not be empty".to_string(),
            });
        }
        if self.scheduled_duration_minutes == Some(0) {
            return Err(EngineError::InvalidMeeting {
                field: "scheduled_duration_minutes".to_string(),
                message: "scheduled duration must be at least one minute".to_string(),
            });
        }
        if self
            .total_cost
            .is_some_and(|cost| cost < Decimal::ZERO)
        {
            return Err(EngineError::InvalidMeeting {
                field: "total_cost".to_string(),
                message: "total cost must not be negative".to_string(),
            });
        }

        if let Some(title) = &self.title {
            meeting.title = title.trim().to_string();
        }
        if let Some(minutes) = self.scheduled_duration_minutes {
            meeting.scheduled_duration_minutes = minutes;
        }
        if let Some(minutes) = self.actual_duration_minutes {
            meeting.actual_duration_minutes = Some(minutes);
        }
        if let Some(cost) = self.total_cost {
            meeting.total_cost = cost;
        }
        if let Some(has_agenda) = self.has_agenda {
            meeting.has_agenda = has_agenda;
        }
        if let Some(started_at) = self.started_at {
            meeting.started_at = Some(started_at);
        }
        if let Some(ended_at) = self.ended_at {
            meeting.ended_at = Some(ended_at);
        }

        Ok(())
    }
}

/// Request body for ending a meeting and generating its report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeMeetingRequest {
    /// Seconds the meeting timer ran.
    pub elapsed_seconds: u64,
    /// End time. Defaults to the time the request is handled.
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// The meeting's agenda in order.
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
    /// Tracked records keyed by agenda item id.
    #[serde(default)]
    pub records: AgendaRecords,
}
