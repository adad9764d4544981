//! Dashboard statistics across finished meetings.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Grade, MeetingReport, WeeklyStats};

use super::{calculate_potential_savings, round_cents};

/// Summarises a set of meeting reports for the dashboard.
///
/// The average grade is the grade of the rounded mean final score; with no
/// meetings there is no average score and the grade is `F`.
///
/// # Examples
///
/// ```
/// use meeting_cost_engine::calculation::calculate_weekly_stats;
/// use meeting_cost_engine::models::Grade;
///
/// let stats = calculate_weekly_stats(&[]);
/// assert_eq!(stats.meeting_count, 0);
/// assert_eq!(stats.average_score, None);
/// assert_eq!(stats.average_grade, Grade::F);
/// ```
pub fn calculate_weekly_stats(reports: &[MeetingReport]) -> WeeklyStats {
    let total_cost: Decimal = reports.iter().map(|r| r.total_cost).sum();
    let total_minutes: u64 = reports
        .iter()
        .map(|r| u64::from(r.facts.actual_minutes))
        .sum();
    let total_hours = (Decimal::from(total_minutes) / Decimal::from(60))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

    let average_score = if reports.is_empty() {
        None
    } else {
        let sum: i64 = reports.iter().map(|r| i64::from(r.final_score)).sum();
        let mean = Decimal::from(sum) / Decimal::from(reports.len() as u64);
        mean.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i32()
    };

    WeeklyStats {
        total_cost: round_cents(total_cost),
        total_hours,
        meeting_count: u32::try_from(reports.len()).unwrap_or(u32::MAX),
        average_score,
        average_grade: average_score.map(Grade::from_score).unwrap_or(Grade::F),
        savings: calculate_potential_savings(reports),
    }
}
