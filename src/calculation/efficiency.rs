//! Efficiency score calculation.
//!
//! This module scores a meeting from its [`MeetingFacts`]: overtime, agenda
//! presence and attendee count. Every rule appends one entry to the
//! breakdown, in a fixed order.

use crate::models::{EfficiencyScore, MeetingFacts, ScoreBreakdownItem};

use super::overrun_penalty;

/// Score every meeting starts from.
pub const BASE_SCORE: i32 = 100;

/// Points removed when a meeting has no agenda.
pub const NO_AGENDA_PENALTY: i32 = -15;

/// Meetings with more attendees than this are penalised.
pub const MAX_EFFICIENT_ATTENDEES: u32 = 8;

/// Points removed when a meeting has too many attendees.
pub const TOO_MANY_ATTENDEES_PENALTY: i32 = -20;

/// Calculates the efficiency score for a finished meeting.
///
/// Starting from [`BASE_SCORE`], the breakdown is built in this order:
///
/// 1. "Started on time" (always present, 0 points; start time is not checked)
/// 2. "Ran over time" when `actual_minutes > scheduled_minutes`, costing
///    `ceil((actual / scheduled - 1) * 10)` points. A zero scheduled duration
///    makes the penalty 0 but the entry is still recorded.
/// 3. "No agenda" (-15) or "Had agenda" (0)
/// 4. "Too many attendees" (-20) when more than 8 people attended
///
/// Ending early or keeping the meeting short earns no bonus.
///
/// # Examples
///
/// ```
/// use meeting_cost_engine::calculation::calculate_efficiency_score;
/// use meeting_cost_engine::models::{Grade, MeetingFacts};
///
/// let score = calculate_efficiency_score(&MeetingFacts {
///     scheduled_minutes: 30,
///     actual_minutes: 45,
///     has_agenda: false,
///     attendee_count: 10,
/// });
///
/// assert_eq!(score.score, 60);
/// assert_eq!(score.grade, Grade::C);
/// assert_eq!(score.breakdown.len(), 4);
/// ```
pub fn calculate_efficiency_score(facts: &MeetingFacts) -> EfficiencyScore {
    let mut score = BASE_SCORE;
    let mut breakdown = Vec::with_capacity(4);

    breakdown.push(ScoreBreakdownItem::new(
        "Started on time",
        0,
        "Meeting started as scheduled",
    ));

    if facts.ran_over() {
        let points = overrun_penalty(
            u64::from(facts.actual_minutes),
            u64::from(facts.scheduled_minutes),
        );
        score = score.saturating_add(points);
        breakdown.push(ScoreBreakdownItem::new(
            "Ran over time",
            points,
            format!(
                "Meeting exceeded scheduled duration by {} minutes",
                facts.actual_minutes - facts.scheduled_minutes
            ),
        ));
    }

    if facts.has_agenda {
        breakdown.push(ScoreBreakdownItem::new(
            "Had agenda",
            0,
            "Meeting had a clear agenda",
        ));
    } else {
        score += NO_AGENDA_PENALTY;
        breakdown.push(ScoreBreakdownItem::new(
            "No agenda",
            NO_AGENDA_PENALTY,
            "No agenda was provided for this meeting",
        ));
    }

    if facts.attendee_count > MAX_EFFICIENT_ATTENDEES {
        score += TOO_MANY_ATTENDEES_PENALTY;
        breakdown.push(ScoreBreakdownItem::new(
            "Too many attendees",
            TOO_MANY_ATTENDEES_PENALTY,
            format!(
                "{} attendees is inefficient for decision-making",
                facts.attendee_count
            ),
        ));
    }

    EfficiencyScore::from_parts(score, breakdown)
}
