//! Report models.
//!
//! This module contains the per-item [`AgendaReportItem`], the final
//! [`MeetingReport`] produced at meeting end, and the cross-meeting
//! aggregates ([`SavingsSummary`], [`WeeklyStats`]) served to the dashboard.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EfficiencyScore, Grade, MeetingFacts, ScoreBreakdownItem};

/// Current version of the [`MeetingReport`] layout.
pub const MEETING_REPORT_VERSION: u32 = 1;

/// Time tracking outcome for one agenda item.
///
/// Derived once at meeting end and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaReportItem {
    /// Agenda item id.
    pub id: String,
    /// Agenda item title.
    pub title: String,
    /// Allotted time in seconds.
    pub allotted_seconds: u64,
    /// Recorded time in seconds.
    pub actual_seconds: u64,
    /// Whether the item was skipped.
    pub skipped: bool,
    /// `actual_seconds / allotted_seconds`, or zero when nothing was allotted.
    pub ratio: Decimal,
    /// Cost of the time spent beyond the allotment, in cents precision.
    pub burned_cash: Decimal,
}

/// Score after agenda penalties have been merged into the base score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedScore {
    /// Base score plus every agenda penalty.
    pub final_score: i32,
    /// Grade for `final_score`.
    pub final_grade: Grade,
    /// Description for `final_grade`.
    pub final_grade_description: String,
    /// Base breakdown followed by the agenda adjustments.
    pub final_breakdown: Vec<ScoreBreakdownItem>,
    /// The negative agenda entries, in agenda order.
    pub adjustments: Vec<ScoreBreakdownItem>,
}

/// The complete, versioned record of a finished meeting.
///
/// Every field is always present; values that may not exist are `Option`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingReport {
    /// Layout version, see [`MEETING_REPORT_VERSION`].
    pub version: u32,
    /// Id of the meeting this report belongs to.
    pub meeting_id: Uuid,
    /// Meeting title.
    pub title: String,
    /// Facts the base score was computed from.
    pub facts: MeetingFacts,
    /// Total cost of the meeting.
    pub total_cost: Decimal,
    /// Combined attendee cost per second used for the agenda report.
    pub cost_per_second: Decimal,
    /// Score before agenda penalties.
    pub base: EfficiencyScore,
    /// Per-item agenda outcomes, in agenda order.
    pub agenda_report: Vec<AgendaReportItem>,
    /// Agenda penalty entries appended to the breakdown.
    pub agenda_adjustments: Vec<ScoreBreakdownItem>,
    /// Base score plus agenda penalties.
    pub final_score: i32,
    /// Grade for `final_score`.
    pub final_grade: Grade,
    /// Description for `final_grade`.
    pub final_grade_description: String,
    /// Base breakdown followed by `agenda_adjustments`.
    pub final_breakdown: Vec<ScoreBreakdownItem>,
    /// When the meeting started.
    pub started_at: Option<DateTime<Utc>>,
    /// When the meeting ended.
    pub ended_at: Option<DateTime<Utc>>,
}

/// Savings the dashboard estimates from agenda analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsSummary {
    /// Emailable item cost plus overrun cost.
    pub potential_savings: Decimal,
    /// Number of items that ran under half their allotment.
    pub emailable_count: u32,
    /// Allotted cost of the emailable items.
    pub emailable_burned_cash: Decimal,
}

/// Dashboard overview across a set of finished meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Sum of meeting costs.
    pub total_cost: Decimal,
    /// Sum of actual durations in hours, one decimal place.
    pub total_hours: Decimal,
    /// Number of meetings.
    pub meeting_count: u32,
    /// Rounded mean of final scores, `None` without meetings.
    pub average_score: Option<i32>,
    /// Grade for `average_score`.
    pub average_grade: Grade,
    /// Savings estimate from agenda analysis.
    pub savings: SavingsSummary,
}

/// Cost estimate for a planned meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingCostEstimate {
    /// Number of attendees costed.
    pub attendee_count: u32,
    /// Combined attendee cost per second.
    pub cost_per_second: Decimal,
    /// Combined attendee cost per minute.
    pub cost_per_minute: Decimal,
    /// Estimated cost of the scheduled duration.
    pub estimated_cost: Decimal,
}
