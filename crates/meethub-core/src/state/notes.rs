use rusqlite::{OptionalExtension, params};

use crate::error::Result;
use crate::models::MeetingNotes;

use super::meetings::ensure_meeting_exists;
use super::{SqliteStateStore, i64_to_u32_saturating, now_rfc3339, parse_required_rfc3339};

impl SqliteStateStore {
    /// Creates or replaces the single notes row of a meeting.
    pub fn upsert_meeting_notes(
        &self,
        meeting_id: i64,
        notes: &str,
        attendee_count: u32,
    ) -> Result<()> {
        let now = now_rfc3339();
        self.with_tx(|tx| {
            ensure_meeting_exists(tx, meeting_id)?;
            tx.execute(
                r"
                INSERT INTO meeting_notes(meeting_id, notes, attendee_count, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?4)
                ON CONFLICT(meeting_id) DO UPDATE SET
                  notes = excluded.notes,
                  attendee_count = excluded.attendee_count,
                  updated_at = excluded.updated_at
                ",
                params![meeting_id, notes, i64::from(attendee_count), now],
            )?;
            Ok(())
        })
    }

    pub fn get_meeting_notes(&self, meeting_id: i64) -> Result<Option<MeetingNotes>> {
        self.with_conn(|conn| {
            let notes = conn
                .query_row(
                    r"
                    SELECT id, meeting_id, notes, attendee_count, created_at, updated_at
                    FROM meeting_notes
                    WHERE meeting_id = ?1
                    ",
                    params![meeting_id],
                    |row| {
                        let created_raw = row.get::<_, String>(4)?;
                        let updated_raw = row.get::<_, String>(5)?;
                        Ok(MeetingNotes {
                            id: row.get(0)?,
                            meeting_id: row.get(1)?,
                            notes: row.get(2)?,
                            attendee_count: i64_to_u32_saturating(row.get(3)?),
                            created_at: parse_required_rfc3339(4, &created_raw)?,
                            updated_at: parse_required_rfc3339(5, &updated_raw)?,
                        })
                    },
                )
                .optional()?;
            Ok(notes)
        })
    }
}
