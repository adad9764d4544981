//! Calculation logic for the Meeting Cost Engine.
//!
//! This module contains the efficiency scorer, the agenda report aggregator
//! that merges per-item penalties into the score, the meeting cost model,
//! report generation for finished meetings, and the cross-meeting savings
//! and dashboard aggregates.

mod agenda_report;
mod efficiency;
mod meeting_cost;
mod meeting_report;
mod overrun;
mod savings;
mod weekly_stats;

pub use agenda_report::{
    SKIPPED_ITEM_PENALTY, agenda_item_penalty, apply_agenda_penalties, build_agenda_report,
};
pub use efficiency::{
    BASE_SCORE, MAX_EFFICIENT_ATTENDEES, NO_AGENDA_PENALTY, TOO_MANY_ATTENDEES_PENALTY,
    calculate_efficiency_score,
};
pub use meeting_cost::{
    actual_minutes_from_elapsed, cost_per_second, estimate_meeting_cost, per_second_rate,
    round_cents, running_cost,
};
pub use meeting_report::{finalize_meeting, generate_meeting_report};
pub use overrun::overrun_penalty;
pub use savings::{EMAILABLE_RATIO, calculate_potential_savings};
pub use weekly_stats::calculate_weekly_stats;
