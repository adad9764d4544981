//! In-memory meeting store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Meeting, MeetingReport};

use super::MeetingStore;

/// Meeting store backed by `HashMap`s behind `RwLock`s.
///
/// Contents live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryMeetingStore {
    meetings: RwLock<HashMap<Uuid, Meeting>>,
    reports: RwLock<HashMap<Uuid, MeetingReport>>,
}

impl MemoryMeetingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeetingStore for MemoryMeetingStore {
    fn create_meeting(&self, meeting: Meeting) -> EngineResult<Meeting> {
        let mut meetings = self.meetings.write().unwrap_or_else(PoisonError::into_inner);
        meetings.insert(meeting.id, meeting.clone());
        Ok(meeting)
    }

    fn get_meeting(&self, id: Uuid) -> EngineResult<Meeting> {
        let meetings = self.meetings.read().unwrap_or_else(PoisonError::into_inner);
        meetings
            .get(&id)
            .cloned()
            .ok_or_else(|| EngineError::MeetingNotFound {
                meeting_id: id.to_string(),
            })
    }

    fn list_meetings(&self) -> EngineResult<Vec<Meeting>> {
        let meetings = self.meetings.read().unwrap_or_else(PoisonError::into_inner);
        let mut list: Vec<Meeting> = meetings.values().cloned().collect();
        // Unstarted meetings (None) sort last.
        list.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(list)
    }

    fn update_meeting(&self, meeting: Meeting) -> EngineResult<Meeting> {
        let mut meetings = self.meetings.write().unwrap_or_else(PoisonError::into_inner);
        match meetings.get_mut(&meeting.id) {
            Some(stored) => {
                *stored = meeting.clone();
                Ok(meeting)
            }
            None => Err(EngineError::MeetingNotFound {
                meeting_id: meeting.id.to_string(),
            }),
        }
    }

    fn save_report(&self, report: MeetingReport) -> EngineResult<()> {
        {
            let meetings = self.meetings.read().unwrap_or_else(PoisonError::into_inner);
            if !meetings.contains_key(&report.meeting_id) {
                return Err(EngineError::MeetingNotFound {
                    meeting_id: report.meeting_id.to_string(),
                });
            }
        }

        let mut reports = self.reports.write().unwrap_or_else(PoisonError::into_inner);
        reports.insert(report.meeting_id, report);
        Ok(())
    }

    fn get_report(&self, meeting_id: Uuid) -> EngineResult<MeetingReport> {
        let reports = self.reports.read().unwrap_or_else(PoisonError::into_inner);
        reports
            .get(&meeting_id)
            .cloned()
            .ok_or_else(|| EngineError::ReportNotFound {
                meeting_id: meeting_id.to_string(),
            })
    }

    fn list_reports(&self) -> EngineResult<Vec<MeetingReport>> {
        let reports = self.reports.read().unwrap_or_else(PoisonError::into_inner);
        let mut list: Vec<MeetingReport> = reports.values().cloned().collect();
        list.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::finalize_meeting;
    use crate::models::AgendaRecords;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn create_meeting(title: &str, minutes_after_nine: i64) -> Meeting {
        let nine = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        Meeting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            scheduled_duration_minutes: 30,
            actual_duration_minutes: None,
            total_cost: Decimal::new(5000, 2),
            cost_per_second: Decimal::new(2, 2),
            has_agenda: true,
            attendee_count: 4,
            efficiency_score: None,
            efficiency_grade: None,
            started_at: Some(nine + Duration::minutes(minutes_after_nine)),
            ended_at: None,
        }
    }

    #[test]
    fn test_create_and_get_meeting() {
        let store = MemoryMeetingStore::new();
        let meeting = store.create_meeting(create_meeting("Standup", 0)).unwrap();

        assert_eq!(store.get_meeting(meeting.id).unwrap(), meeting);
    }

    #[test]
    fn test_get_unknown_meeting() {
        let store = MemoryMeetingStore::new();
        let id = Uuid::new_v4();

        match store.get_meeting(id) {
            Err(EngineError::MeetingNotFound { meeting_id }) => {
                assert_eq!(meeting_id, id.to_string())
            }
            other => panic!("Expected MeetingNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_list_newest_first() {
        let store = MemoryMeetingStore::new();
        store.create_meeting(create_meeting("Early", 0)).unwrap();
        store.create_meeting(create_meeting("Late", 120)).unwrap();
        store.create_meeting(create_meeting("Middle", 60)).unwrap();
        let mut unstarted = create_meeting("Unstarted", 0);
        unstarted.started_at = None;
        store.create_meeting(unstarted).unwrap();

        let titles: Vec<String> = store
            .list_meetings()
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Late", "Middle", "Early", "Unstarted"]);
    }

    #[test]
    fn test_update_meeting() {
        let store = MemoryMeetingStore::new();
        let mut meeting = store.create_meeting(create_meeting("Retro", 0)).unwrap();
        meeting.title = "Sprint Retro".to_string();

        store.update_meeting(meeting.clone()).unwrap();
        assert_eq!(store.get_meeting(meeting.id).unwrap().title, "Sprint Retro");
    }

    #[test]
    fn test_update_unknown_meeting() {
        let store = MemoryMeetingStore::new();
        let result = store.update_meeting(create_meeting("Ghost", 0));

        assert!(matches!(result, Err(EngineError::MeetingNotFound { .. })));
        assert!(store.list_meetings().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_get_report() {
        let store = MemoryMeetingStore::new();
        let mut meeting = store.create_meeting(create_meeting("Review", 0)).unwrap();
        let report = finalize_meeting(&mut meeting, 1500, Utc::now(), &[], &AgendaRecords::new());

        store.save_report(report.clone()).unwrap();

        assert_eq!(store.get_report(meeting.id).unwrap(), report);
        assert_eq!(store.list_reports().unwrap().len(), 1);
    }

    #[test]
    fn test_report_requires_meeting() {
        let store = MemoryMeetingStore::new();
        let mut meeting = create_meeting("Unsaved", 0);
        let report = finalize_meeting(&mut meeting, 60, Utc::now(), &[], &AgendaRecords::new());

        assert!(matches!(
            store.save_report(report),
            Err(EngineError::MeetingNotFound { .. })
        ));
        assert!(matches!(
            store.get_report(meeting.id),
            Err(EngineError::ReportNotFound { .. })
        ));
    }
}
