//! Agenda report aggregation.
//!
//! This module turns tracked agenda time into [`AgendaReportItem`]s, derives
//! a penalty for each item, and merges those penalties into a meeting's base
//! [`EfficiencyScore`].

use rust_decimal::Decimal;

use crate::models::{
    AdjustedScore, AgendaItem, AgendaRecords, AgendaReportItem, EfficiencyScore, Grade,
    ScoreBreakdownItem,
};

use super::{overrun_penalty, round_cents};

/// Points removed for each skipped agenda item.
pub const SKIPPED_ITEM_PENALTY: i32 = -5;

/// Builds the per-item agenda report.
///
/// Items without a record are reported as not skipped with zero seconds.
/// `burned_cash` is the cost of the seconds spent beyond the allotment,
/// rounded to cents.
///
/// # Examples
///
/// ```
/// use meeting_cost_engine::calculation::build_agenda_report;
/// use meeting_cost_engine::models::{AgendaItem, AgendaItemRecord, AgendaRecords};
/// use rust_decimal::Decimal;
///
/// let items = vec![AgendaItem { id: "a1".into(), title: "Roadmap".into(), minutes: 10 }];
/// let records: AgendaRecords = vec![(
///     "a1",
///     AgendaItemRecord { checked: true, skipped: false, actual_seconds: 900 },
/// )]
/// .into_iter()
/// .collect();
///
/// let report = build_agenda_report(&items, &records, Decimal::new(2, 2));
///
/// assert_eq!(report[0].ratio, Decimal::new(15, 1));
/// // 300 seconds over at 0.02 per second
/// assert_eq!(report[0].burned_cash, Decimal::new(600, 2));
/// ```
pub fn build_agenda_report(
    items: &[AgendaItem],
    records: &AgendaRecords,
    cost_per_second: Decimal,
) -> Vec<AgendaReportItem> {
    items
        .iter()
        .map(|item| {
            let record = records.get(&item.id);
            let allotted_seconds = item.allotted_seconds();
            let actual_seconds = record.actual_seconds;

            let ratio = if allotted_seconds > 0 {
                Decimal::from(actual_seconds) / Decimal::from(allotted_seconds)
            } else {
                Decimal::ZERO
            };
            let over_seconds = actual_seconds.saturating_sub(allotted_seconds);

            AgendaReportItem {
                id: item.id.clone(),
                title: item.title.clone(),
                allotted_seconds,
                actual_seconds,
                skipped: record.skipped,
                ratio,
                burned_cash: round_cents(Decimal::from(over_seconds) * cost_per_second),
            }
        })
        .collect()
}

fn whole_minutes(seconds: u64) -> u64 {
    seconds / 60 + u64::from(seconds % 60 >= 30)
}

/// Returns the breakdown entry an agenda item earns, if any.
///
/// Skipping wins over overrunning: a skipped item always costs exactly
/// [`SKIPPED_ITEM_PENALTY`] whatever time was recorded. Items that finished
/// within their allotment produce no entry.
pub fn agenda_item_penalty(item: &AgendaReportItem) -> Option<ScoreBreakdownItem> {
    let label = format!("Agenda: {}", item.title);

    if item.skipped {
        return Some(ScoreBreakdownItem::new(
            label,
            SKIPPED_ITEM_PENALTY,
            "Marked skipped",
        ));
    }

    let points = overrun_penalty(item.actual_seconds, item.allotted_seconds);
    if points == 0 {
        return None;
    }

    Some(ScoreBreakdownItem::new(
        label,
        points,
        format!(
            "Took {} min vs {} min allotted",
            whole_minutes(item.actual_seconds),
            whole_minutes(item.allotted_seconds)
        ),
    ))
}

/// Merges agenda penalties into a base score.
///
/// The final breakdown is the base breakdown followed by one entry per
/// penalised agenda item, in agenda order. The final score is the base score
/// plus every penalty, saturating at `i32::MIN`, and grade and description
/// are recomputed from it.
///
/// # Examples
///
/// ```
/// use meeting_cost_engine::calculation::{apply_agenda_penalties, build_agenda_report};
/// use meeting_cost_engine::models::{
///     AgendaItem, AgendaItemRecord, AgendaRecords, EfficiencyScore, Grade,
/// };
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     AgendaItem { id: "a1".into(), title: "Budget".into(), minutes: 10 },
///     AgendaItem { id: "a2".into(), title: "Hiring".into(), minutes: 5 },
/// ];
/// let records: AgendaRecords = vec![
///     ("a1", AgendaItemRecord { checked: true, skipped: true, actual_seconds: 0 }),
///     ("a2", AgendaItemRecord { checked: true, skipped: false, actual_seconds: 300 }),
/// ]
/// .into_iter()
/// .collect();
///
/// let base = EfficiencyScore::from_parts(85, vec![]);
/// let report = build_agenda_report(&items, &records, Decimal::ZERO);
/// let adjusted = apply_agenda_penalties(&base, &report);
///
/// assert_eq!(adjusted.final_score, 80);
/// assert_eq!(adjusted.final_grade, Grade::BPlus);
/// assert_eq!(adjusted.adjustments.len(), 1);
/// assert_eq!(adjusted.adjustments[0].label, "Agenda: Budget");
/// ```
pub fn apply_agenda_penalties(
    base: &EfficiencyScore,
    report: &[AgendaReportItem],
) -> AdjustedScore {
    let adjustments: Vec<ScoreBreakdownItem> =
        report.iter().filter_map(agenda_item_penalty).collect();

    let final_score = adjustments
        .iter()
        .fold(base.score, |score, a| score.saturating_add(a.points));
    let final_grade = Grade::from_score(final_score);

    let mut final_breakdown = base.breakdown.clone();
    final_breakdown.extend(adjustments.iter().cloned());

    AdjustedScore {
        final_score,
        final_grade,
        final_grade_description: final_grade.description().to_string(),
        final_breakdown,
        adjustments,
    }
}
