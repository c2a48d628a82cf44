use crate::milestones::MilestoneTracker;
use crate::roster::Attendee;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Meeting summary in the shape the persistence collaborator accepts.
///
/// The core computes `total_cost` and `attendee_count`; saving, listing and
/// deleting records is the backend's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub title: String,
    pub started_at: DateTime<Utc>,
    pub duration_seconds: u64,
    pub total_cost: f64,
    pub attendee_count: u32,
    pub attendees: Vec<Attendee>,
    pub milestones: Vec<String>,
}

impl MeetingRecord {
    pub fn from_session(
        title: impl Into<String>,
        started_at: DateTime<Utc>,
        duration_seconds: u64,
        total_cost: f64,
        attendees: Vec<Attendee>,
        tracker: &MilestoneTracker,
    ) -> Self {
        Self {
            title: title.into(),
            started_at,
            duration_seconds,
            total_cost,
            attendee_count: attendees.len() as u32,
            attendees,
            milestones: tracker.achieved_messages(),
        }
    }
}
