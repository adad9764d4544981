//! Meeting persistence.
//!
//! [`MeetingStore`] is the storage seam used by the API. The engine ships
//! with [`MemoryMeetingStore`], which keeps everything in process memory.

mod memory;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Meeting, MeetingReport};

pub use memory::MemoryMeetingStore;

/// Stores meetings and the reports generated for them.
pub trait MeetingStore: Send + Sync {
    /// Stores a new meeting and returns it.
    fn create_meeting(&self, meeting: Meeting) -> EngineResult<Meeting>;

    /// Fetches a meeting by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MeetingNotFound`](crate::error::EngineError::MeetingNotFound)
    /// for an unknown id.
    fn get_meeting(&self, id: Uuid) -> EngineResult<Meeting>;

    /// Lists all meetings, most recently started first.
    fn list_meetings(&self) -> EngineResult<Vec<Meeting>>;

    /// Replaces a stored meeting with `meeting`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MeetingNotFound`](crate::error::EngineError::MeetingNotFound)
    /// if no meeting with that id exists.
    fn update_meeting(&self, meeting: Meeting) -> EngineResult<Meeting>;

    /// Stores the report for a meeting, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MeetingNotFound`](crate::error::EngineError::MeetingNotFound)
    /// if the report's meeting does not exist.
    fn save_report(&self, report: MeetingReport) -> EngineResult<()>;

    /// Fetches the report for a meeting.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReportNotFound`](crate::error::EngineError::ReportNotFound)
    /// if the meeting has not been reported.
    fn get_report(&self, meeting_id: Uuid) -> EngineResult<MeetingReport>;

    /// Lists all stored reports, most recently started meeting first.
    fn list_reports(&self) -> EngineResult<Vec<MeetingReport>>;
}
