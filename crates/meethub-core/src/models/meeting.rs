use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MeetHubError;

macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = MeetHubError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == normalized)
                    .ok_or_else(|| {
                        let expected = Self::ALL
                            .iter()
                            .map(|value| value.as_str())
                            .collect::<Vec<_>>()
                            .join("|");
                        MeetHubError::Validation(format!(
                            "invalid {}: {normalized} (expected {expected})",
                            $label
                        ))
                    })
            }
        }
    };
}

text_enum! {
    #[derive(Default)]
    MeetingStatus, "meeting status" {
        #[default]
        Scheduled => "scheduled",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

text_enum! {
    /// Todos are personal follow-ups; action items are owned commitments from the meeting.
    ActionItemKind, "action item kind" {
        Todo => "todo",
        ActionItem => "action_item",
    }
}

text_enum! {
    #[derive(Default)]
    ActionItemStatus, "action item status" {
        #[default]
        Open => "open",
        InProgress => "in_progress",
        Completed => "completed",
    }
}

/// `HH:MM` wire form for meeting start times; `HH:MM:SS` is accepted on input.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use crate::state::TIME_FORMAT;

    pub(super) fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMeeting {
    pub meeting_date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub meeting_time: NaiveTime,
    pub topic: String,
    pub presenter: String,
    pub description: String,
    pub url_name: String,
    pub url: String,
}

impl NewMeeting {
    pub fn new(
        meeting_date: NaiveDate,
        meeting_time: NaiveTime,
        topic: impl Into<String>,
        presenter: impl Into<String>,
    ) -> Self {
        Self {
            meeting_date,
            meeting_time,
            topic: topic.into(),
            presenter: presenter.into(),
            description: String::new(),
            url_name: String::new(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub meeting_date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub meeting_time: NaiveTime,
    pub topic: String,
    pub presenter: String,
    pub description: String,
    pub url_name: String,
    pub url: String,
    pub status: MeetingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPatch {
    pub meeting_date: Option<NaiveDate>,
    pub meeting_time: Option<NaiveTime>,
    pub topic: Option<String>,
    pub presenter: Option<String>,
    pub description: Option<String>,
    pub url_name: Option<String>,
    pub url: Option<String>,
    pub status: Option<MeetingStatus>,
}

impl MeetingPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.meeting_date.is_none()
            && self.meeting_time.is_none()
            && self.topic.is_none()
            && self.presenter.is_none()
            && self.description.is_none()
            && self.url_name.is_none()
            && self.url.is_none()
            && self.status.is_none()
    }
}

/// A meeting joined with its notes row, if one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingOverview {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub notes_id: Option<i64>,
    pub notes: Option<String>,
    pub attendee_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingNotes {
    pub id: i64,
    pub meeting_id: i64,
    pub notes: String,
    pub attendee_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActionItem {
    pub meeting_id: i64,
    pub kind: ActionItemKind,
    pub description: String,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: i64,
    pub meeting_id: i64,
    pub kind: ActionItemKind,
    pub description: String,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    pub status: ActionItemStatus,
    pub created_at: DateTime<Utc>,
}

/// Attachment metadata; payload bytes are only loaded through [`AttachmentData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i64,
    pub meeting_id: i64,
    pub file_name: String,
    pub file_type: String,
    pub file_size: u64,
    pub content_hash: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentData {
    pub file_name: String,
    pub file_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingUrl {
    pub id: i64,
    pub meeting_id: i64,
    pub url_name: String,
    pub url: String,
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_enums_parse_case_insensitively_and_report_expected_values() {
        assert_eq!(
            "In_Progress".parse::<ActionItemStatus>().ok(),
            Some(ActionItemStatus::InProgress)
        );
        assert_eq!(
            "action_item".parse::<ActionItemKind>().ok(),
            Some(ActionItemKind::ActionItem)
        );
        let err = "done".parse::<MeetingStatus>().expect_err("unknown status");
        assert_eq!(
            err.to_string(),
            "validation failed: invalid meeting status: done (expected scheduled|completed|cancelled)"
        );
    }

    #[test]
    fn overview_serializes_meeting_fields_flat() {
        let now = Utc::now();
        let overview = MeetingOverview {
            meeting: Meeting {
                id: 7,
                meeting_date: NaiveDate::from_ymd_opt(2026, 3, 4).expect("date"),
                meeting_time: NaiveTime::from_hms_opt(10, 30, 0).expect("time"),
                topic: "SLO review".to_string(),
                presenter: "Sam".to_string(),
                description: String::new(),
                url_name: String::new(),
                url: String::new(),
                status: MeetingStatus::Scheduled,
                created_at: now,
                updated_at: now,
            },
            notes_id: None,
            notes: None,
            attendee_count: None,
        };
        let value = serde_json::to_value(&overview).expect("serialize");
        assert_eq!(value["id"], 7);
        assert_eq!(value["status"], "scheduled");
        assert_eq!(value["meeting_date"], "2026-03-04");
        assert_eq!(value["meeting_time"], "10:30");
        assert!(value["notes"].is_null());

        let decoded: Meeting = serde_json::from_value(value).expect("deserialize");
        assert_eq!(decoded, overview.meeting);
    }

    #[test]
    fn meeting_time_accepts_seconds_on_input() {
        let meeting: NewMeeting = serde_json::from_value(serde_json::json!({
            "meeting_date": "2026-03-04",
            "meeting_time": "09:15:00",
            "topic": "Chaos day",
            "presenter": "Lee",
            "description": "",
            "url_name": "",
            "url": "",
        }))
        .expect("deserialize");
        assert_eq!(meeting.meeting_time, NaiveTime::from_hms_opt(9, 15, 0).expect("time"));
    }

    #[test]
    fn statuses_default_to_first_lifecycle_state() {
        assert_eq!(MeetingStatus::default(), MeetingStatus::Scheduled);
        assert_eq!(ActionItemStatus::default(), ActionItemStatus::Open);
    }
}
