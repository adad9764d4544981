//! Core data models for the Meeting Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod agenda;
mod meeting;
mod report;
mod score;

pub use agenda::{AgendaItem, AgendaItemRecord, AgendaRecords};
pub use meeting::{Attendee, Meeting, MeetingFacts};
pub use report::{
    AdjustedScore, AgendaReportItem, MEETING_REPORT_VERSION, MeetingCostEstimate, MeetingReport,
    SavingsSummary, WeeklyStats,
};
pub use score::{EfficiencyScore, Grade, ScoreBreakdownItem};
