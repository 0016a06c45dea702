use rusqlite::{Connection, OptionalExtension, Row, params, types::Value};

use crate::error::{MeetHubError, Result};
use crate::models::{Meeting, MeetingOverview, MeetingPatch, MeetingStatus, NewMeeting};

use super::{
    SqliteStateStore, collect_rows, format_date, format_time, i64_to_u32_saturating,
    now_rfc3339, parse_date, parse_label, parse_required_rfc3339, parse_time,
};

const MEETING_COLUMNS: &str = "m.id, m.meeting_date, m.meeting_time, m.topic, m.presenter, \
     m.description, m.url_name, m.url, m.status, m.created_at, m.updated_at";

impl SqliteStateStore {
    pub fn create_meeting(&self, meeting: &NewMeeting) -> Result<i64> {
        let now = now_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO meetings(
                    meeting_date, meeting_time, topic, presenter, description,
                    url_name, url, status, created_at, updated_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
                ",
                params![
                    format_date(meeting.meeting_date),
                    format_time(meeting.meeting_time),
                    meeting.topic,
                    meeting.presenter,
                    meeting.description,
                    meeting.url_name,
                    meeting.url,
                    MeetingStatus::default().as_str(),
                    now,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_meeting(&self, id: i64) -> Result<Option<Meeting>> {
        self.with_conn(|conn| {
            let meeting = conn
                .query_row(
                    &format!("SELECT {MEETING_COLUMNS} FROM meetings m WHERE m.id = ?1"),
                    params![id],
                    meeting_from_row,
                )
                .optional()?;
            Ok(meeting)
        })
    }

    /// Meetings joined with their notes, latest date and time first.
    pub fn list_meetings(&self) -> Result<Vec<MeetingOverview>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                r"
                SELECT {MEETING_COLUMNS}, n.id, n.notes, n.attendee_count
                FROM meetings m
                LEFT JOIN meeting_notes n ON n.meeting_id = m.id
                ORDER BY m.meeting_date DESC, m.meeting_time DESC, m.id DESC
                "
            ))?;
            let rows = stmt.query_map([], |row| {
                Ok(MeetingOverview {
                    meeting: meeting_from_row(row)?,
                    notes_id: row.get(11)?,
                    notes: row.get(12)?,
                    attendee_count: row.get::<_, Option<i64>>(13)?.map(i64_to_u32_saturating),
                })
            })?;
            collect_rows(rows)
        })
    }

    pub fn update_meeting(&self, id: i64, patch: &MeetingPatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut assignments = Vec::<(&'static str, Value)>::new();
        if let Some(date) = patch.meeting_date {
            assignments.push(("meeting_date", Value::Text(format_date(date))));
        }
        if let Some(time) = patch.meeting_time {
            assignments.push(("meeting_time", Value::Text(format_time(time))));
        }
        if let Some(topic) = &patch.topic {
            assignments.push(("topic", Value::Text(topic.clone())));
        }
        if let Some(presenter) = &patch.presenter {
            assignments.push(("presenter", Value::Text(presenter.clone())));
        }
        if let Some(description) = &patch.description {
            assignments.push(("description", Value::Text(description.clone())));
        }
        if let Some(url_name) = &patch.url_name {
            assignments.push(("url_name", Value::Text(url_name.clone())));
        }
        if let Some(url) = &patch.url {
            assignments.push(("url", Value::Text(url.clone())));
        }
        if let Some(status) = patch.status {
            assignments.push(("status", Value::Text(status.as_str().to_string())));
        }
        assignments.push(("updated_at", Value::Text(now_rfc3339())));

        let changed = self.update_by_id("meetings", id, assignments)?;
        if changed == 0 {
            return Err(MeetHubError::missing("meeting", id));
        }
        Ok(())
    }

    /// Removes the meeting together with its notes, action items, attachments and URLs.
    pub fn delete_meeting(&self, id: i64) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM meetings WHERE id = ?1", params![id])?)
        })?;
        if changed == 0 {
            return Err(MeetHubError::missing("meeting", id));
        }
        Ok(())
    }
}

pub(super) fn ensure_meeting_exists(conn: &Connection, meeting_id: i64) -> Result<()> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM meetings WHERE id = ?1",
            params![meeting_id],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if exists {
        Ok(())
    } else {
        Err(MeetHubError::missing("meeting", meeting_id))
    }
}

fn meeting_from_row(row: &Row<'_>) -> rusqlite::Result<Meeting> {
    let date_raw = row.get::<_, String>(1)?;
    let time_raw = row.get::<_, String>(2)?;
    let status_raw = row.get::<_, String>(8)?;
    let created_raw = row.get::<_, String>(9)?;
    let updated_raw = row.get::<_, String>(10)?;
    Ok(Meeting {
        id: row.get(0)?,
        meeting_date: parse_date(1, &date_raw)?,
        meeting_time: parse_time(2, &time_raw)?,
        topic: row.get(3)?,
        presenter: row.get(4)?,
        description: row.get(5)?,
        url_name: row.get(6)?,
        url: row.get(7)?,
        status: parse_label::<MeetingStatus>(8, &status_raw)?,
        created_at: parse_required_rfc3339(9, &created_raw)?,
        updated_at: parse_required_rfc3339(10, &updated_raw)?,
    })
}
