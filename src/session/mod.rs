//! Live meeting tracking.
//!
//! A [`MeetingSession`] carries a meeting from its [`MeetingSetup`] through
//! agenda tracking to the final report. The [`AgendaTracker`] attributes
//! elapsed time to agenda items as they are checked off.

mod meeting_session;
mod tracker;

pub use meeting_session::{MeetingSession, MeetingSetup};
pub use tracker::AgendaTracker;
