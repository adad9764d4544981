//! Error types for the Meeting Cost Engine.
//!
//! The scoring core never fails; these errors come from the layers around it:
//! configuration loading, salary band lookup, the meeting session tracker
//! and the meeting store.

use thiserror::Error;

/// The main error type for the Meeting Cost Engine.
///
/// # Example
///
/// ```
/// use meeting_cost_engine::error::EngineError;
///
/// let error = EngineError::RoleNotFound {
///     role: "Intern".to_string(),
/// };
/// assert_eq!(error.to_string(), "Salary band not found for role: Intern");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An attendee role has no configured salary band.
    #[error("Salary band not found for role: {role}")]
    RoleNotFound {
        /// The role that was not found.
        role: String,
    },

    /// No meeting is stored under the given id.
    #[error("Meeting not found: {meeting_id}")]
    MeetingNotFound {
        /// The id that was looked up.
        meeting_id: String,
    },

    /// The meeting exists but has not been finalized into a report.
    #[error("Report not found for meeting: {meeting_id}")]
    ReportNotFound {
        /// The id of the meeting.
        meeting_id: String,
    },

    /// An agenda item id is not part of the meeting's agenda.
    #[error("Agenda item not found: {item_id}")]
    AgendaItemNotFound {
        /// The unknown agenda item id.
        item_id: String,
    },

    /// An agenda item was toggled before every earlier item was checked.
    #[error("Agenda item '{item_id}' cannot be toggled before '{pending_item_id}' is checked")]
    AgendaOutOfOrder {
        /// The item the caller tried to toggle.
        item_id: String,
        /// The earliest item that is still unchecked.
        pending_item_id: String,
    },

    /// A meeting record contained inconsistent data.
    #[error("Invalid meeting field '{field}': {message}")]
    InvalidMeeting {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
