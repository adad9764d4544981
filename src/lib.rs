//! Meeting Cost Engine
//!
//! This crate prices meetings from the salary bands of their attendees and
//! scores how efficiently they were run. A finished meeting is graded from
//! its overtime, agenda and attendee count, then adjusted by per-agenda-item
//! penalties for skipped or overrunning items. Reports across meetings roll
//! up into dashboard statistics and an estimate of avoidable spend.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
