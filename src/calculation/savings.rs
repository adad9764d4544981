//! Potential savings estimation.
//!
//! Across a set of finished meetings, agenda items that ran under half their
//! allotment are treated as "emailable": their whole allotted cost could have
//! been saved. Items that overran contribute only the cost of the overrun.

use rust_decimal::Decimal;

use crate::models::{MeetingReport, SavingsSummary};

use super::{per_second_rate, round_cents};

/// Items below this actual-to-allotted ratio are classified as emailable.
pub const EMAILABLE_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Estimates how much could have been saved across `reports`.
///
/// Each meeting's per-second rate is derived from its total cost and actual
/// duration (falling back to the scheduled duration, then zero). For each
/// agenda item:
///
/// - `ratio < 0.5`: emailable; the allotted seconds at the meeting's rate are
///   added to both the potential savings and the emailable cash, and the
///   emailable count is incremented
/// - `ratio > 1`: the item's `burned_cash` is added to the potential savings
/// - otherwise the item contributes nothing
///
/// Totals are rounded to cents.
///
/// # Examples
///
/// ```
/// use meeting_cost_engine::calculation::calculate_potential_savings;
/// use rust_decimal::Decimal;
///
/// let summary = calculate_potential_savings(&[]);
/// assert_eq!(summary.potential_savings, Decimal::ZERO);
/// assert_eq!(summary.emailable_count, 0);
/// ```
pub fn calculate_potential_savings(reports: &[MeetingReport]) -> SavingsSummary {
    let mut potential_savings = Decimal::ZERO;
    let mut emailable_burned_cash = Decimal::ZERO;
    let mut emailable_count: u32 = 0;

    for report in reports {
        let rate = per_second_rate(
            report.total_cost,
            report.facts.actual_seconds(),
            report.facts.scheduled_seconds(),
        );

        for item in &report.agenda_report {
            if item.ratio < EMAILABLE_RATIO {
                let allotted_cost = Decimal::from(item.allotted_seconds) * rate;
                potential_savings += allotted_cost;
                emailable_burned_cash += allotted_cost;
                emailable_count += 1;
            } else if item.ratio > Decimal::ONE {
                potential_savings += item.burned_cash;
            }
        }
    }

    SavingsSummary {
        potential_savings: round_cents(potential_savings),
        emailable_count,
        emailable_burned_cash: round_cents(emailable_burned_cash),
    }
}
