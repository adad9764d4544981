//! Meeting models.
//!
//! This module defines the stored [`Meeting`] record, its [`Attendee`]s and
//! the [`MeetingFacts`] snapshot handed to the scorer at meeting end.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Grade;

/// Meeting-level facts the scorer works from.
///
/// Created once when the meeting ends and never mutated.
///
/// # Example
///
/// ```
/// use meeting_cost_engine::models::MeetingFacts;
///
/// let facts = MeetingFacts {
///     scheduled_minutes: 30,
///     actual_minutes: 45,
///     has_agenda: false,
///     attendee_count: 10,
/// };
/// assert!(facts.ran_over());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingFacts {
    /// Planned duration in minutes.
    pub scheduled_minutes: u32,
    /// Actual duration in minutes.
    pub actual_minutes: u32,
    /// Whether the meeting had an agenda.
    pub has_agenda: bool,
    /// Number of attendees.
    pub attendee_count: u32,
}

impl MeetingFacts {
    /// Returns true if the meeting ran past its scheduled duration.
    pub fn ran_over(&self) -> bool {
        self.actual_minutes > self.scheduled_minutes
    }

    /// Planned duration in seconds.
    pub fn scheduled_seconds(&self) -> u64 {
        u64::from(self.scheduled_minutes) * 60
    }

    /// Actual duration in seconds, at whole-minute resolution.
    pub fn actual_seconds(&self) -> u64 {
        u64::from(self.actual_minutes) * 60
    }
}

/// A meeting participant, costed by the salary band of their role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Identifier for the attendee.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Salary band role, e.g. "Senior".
    pub role: String,
}

/// A meeting as kept by the meeting store.
///
/// Optional fields are `None` until the meeting has been finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique identifier.
    pub id: Uuid,
    /// Meeting title.
    pub title: String,
    /// Planned duration in minutes.
    pub scheduled_duration_minutes: u32,
    /// Actual duration in minutes, once the meeting has ended.
    pub actual_duration_minutes: Option<u32>,
    /// Estimated cost before the meeting, actual cost afterward.
    pub total_cost: Decimal,
    /// Combined cost of all attendees per second.
    pub cost_per_second: Decimal,
    /// Whether the meeting has an agenda.
    pub has_agenda: bool,
    /// Number of attendees.
    pub attendee_count: u32,
    /// Final efficiency score, once scored.
    pub efficiency_score: Option<i32>,
    /// Final grade, once scored.
    pub efficiency_grade: Option<Grade>,
    /// When the meeting started.
    pub started_at: Option<DateTime<Utc>>,
    /// When the meeting ended.
    pub ended_at: Option<DateTime<Utc>>,
}

impl Meeting {
    /// Returns the scorer's view of this meeting.
    ///
    /// An unfinished meeting reports an actual duration of zero.
    pub fn facts(&self) -> MeetingFacts {
        MeetingFacts {
            scheduled_minutes: self.scheduled_duration_minutes,
            actual_minutes: self.actual_duration_minutes.unwrap_or(0),
            has_agenda: self.has_agenda,
            attendee_count: self.attendee_count,
        }
    }

    /// Returns true once the meeting has an actual duration and an end time.
    pub fn is_finished(&self) -> bool {
        self.actual_duration_minutes.is_some() && self.ended_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_meeting() -> Meeting {
        Meeting {
            id: Uuid::new_v4(),
            title: "Weekly Team Sync".to_string(),
            scheduled_duration_minutes: 30,
            actual_duration_minutes: None,
            total_cost: dec("137.50"),
            cost_per_second: dec("0.0763888888888888888888888889"),
            has_agenda: true,
            attendee_count: 5,
            efficiency_score: None,
            efficiency_grade: None,
            started_at: None,
            ended_at: None,
        }
    }

    #[test]
    fn test_facts_of_unfinished_meeting() {
        let meeting = create_test_meeting();
        let facts = meeting.facts();

        assert_eq!(facts.scheduled_minutes, 30);
        assert_eq!(facts.actual_minutes, 0);
        assert!(facts.has_agenda);
        assert_eq!(facts.attendee_count, 5);
        assert!(!meeting.is_finished());
    }

    #[test]
    fn test_facts_of_finished_meeting() {
        let mut meeting = create_test_meeting();
        meeting.actual_duration_minutes = Some(45);
        meeting.ended_at = Some(Utc::now());

        assert_eq!(meeting.facts().actual_minutes, 45);
        assert!(meeting.facts().ran_over());
        assert!(meeting.is_finished());
    }

    #[test]
    fn test_facts_in_seconds() {
        let mut meeting = create_test_meeting();
        meeting.actual_duration_minutes = Some(45);

        assert_eq!(meeting.facts().scheduled_seconds(), 1800);
        assert_eq!(meeting.facts().actual_seconds(), 2700);
    }

    #[test]
    fn test_meeting_round_trip() {
        let mut meeting = create_test_meeting();
        meeting.efficiency_grade = Some(Grade::BPlus);
        meeting.efficiency_score = Some(82);

        let json = serde_json::to_string(&meeting).unwrap();
        let deserialized: Meeting = serde_json::from_str(&json).unwrap();
        assert_eq!(meeting, deserialized);
        assert!(json.contains("\"total_cost\":\"137.50\""));
    }

    #[test]
    fn test_attendee_id_defaults_to_empty() {
        let attendee: Attendee =
            serde_json::from_str(r#"{"name": "Sam", "role": "Senior"}"#).unwrap();
        assert_eq!(attendee.id, "");
        assert_eq!(attendee.role, "Senior");
    }
}
