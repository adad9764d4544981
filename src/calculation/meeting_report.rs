//! Meeting report generation.
//!
//! Ties the scorer and the agenda aggregator together: a finished meeting
//! plus its agenda records become one [`MeetingReport`], and the meeting
//! record is updated with the outcome.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{AgendaItem, AgendaRecords, MEETING_REPORT_VERSION, Meeting, MeetingReport};

use super::{
    actual_minutes_from_elapsed, apply_agenda_penalties, build_agenda_report,
    calculate_efficiency_score, running_cost,
};

/// Generates the report for a meeting from its current state.
///
/// The base score is computed from [`Meeting::facts`], the agenda report uses
/// the meeting's cost per second, and the agenda penalties are merged into
/// the final score. The meeting itself is not modified.
pub fn generate_meeting_report(
    meeting: &Meeting,
    agenda: &[AgendaItem],
    records: &AgendaRecords,
) -> MeetingReport {
    let facts = meeting.facts();
    let base = calculate_efficiency_score(&facts);
    let agenda_report = build_agenda_report(agenda, records, meeting.cost_per_second);
    let adjusted = apply_agenda_penalties(&base, &agenda_report);

    debug!(
        meeting_id = %meeting.id,
        base_score = base.score,
        final_score = adjusted.final_score,
        agenda_items = agenda_report.len(),
        "Generated meeting report"
    );

    MeetingReport {
        version: MEETING_REPORT_VERSION,
        meeting_id: meeting.id,
        title: meeting.title.clone(),
        facts,
        total_cost: meeting.total_cost,
        cost_per_second: meeting.cost_per_second,
        base,
        agenda_report,
        agenda_adjustments: adjusted.adjustments,
        final_score: adjusted.final_score,
        final_grade: adjusted.final_grade,
        final_grade_description: adjusted.final_grade_description,
        final_breakdown: adjusted.final_breakdown,
        started_at: meeting.started_at,
        ended_at: meeting.ended_at,
    }
}

/// Ends a meeting and scores it.
///
/// Records the actual duration (started minutes of `elapsed_seconds`), the
/// actual cost and the end time on `meeting`, generates the report, and
/// writes the final score and grade back to `meeting`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use meeting_cost_engine::calculation::finalize_meeting;
/// use meeting_cost_engine::models::{AgendaRecords, Grade, Meeting};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let mut meeting = Meeting {
///     id: Uuid::new_v4(),
///     title: "Standup".to_string(),
///     scheduled_duration_minutes: 15,
///     actual_duration_minutes: None,
///     total_cost: Decimal::ZERO,
///     cost_per_second: Decimal::new(5, 2),
///     has_agenda: true,
///     attendee_count: 5,
///     efficiency_score: None,
///     efficiency_grade: None,
///     started_at: Some(Utc::now()),
///     ended_at: None,
/// };
///
/// let report = finalize_meeting(&mut meeting, 720, Utc::now(), &[], &AgendaRecords::new());
///
/// assert_eq!(meeting.actual_duration_minutes, Some(12));
/// assert_eq!(meeting.total_cost, Decimal::new(3600, 2));
/// assert_eq!(report.final_grade, Grade::APlus);
/// assert_eq!(meeting.efficiency_score, Some(100));
/// ```
pub fn finalize_meeting(
    meeting: &mut Meeting,
    elapsed_seconds: u64,
    ended_at: DateTime<Utc>,
    agenda: &[AgendaItem],
    records: &AgendaRecords,
) -> MeetingReport {
    meeting.actual_duration_minutes = Some(actual_minutes_from_elapsed(elapsed_seconds));
    meeting.total_cost = running_cost(elapsed_seconds, meeting.cost_per_second);
    meeting.ended_at = Some(ended_at);

    let report = generate_meeting_report(meeting, agenda, records);

    meeting.efficiency_score = Some(report.final_score);
    meeting.efficiency_grade = Some(report.final_grade);

    report
}
