use rusqlite::params;

use crate::error::{MeetHubError, Result};
use crate::models::MeetingUrl;

use super::meetings::ensure_meeting_exists;
use super::{SqliteStateStore, collect_rows, now_rfc3339, parse_required_rfc3339};

impl SqliteStateStore {
    pub fn add_meeting_url(&self, meeting_id: i64, url_name: &str, url: &str) -> Result<i64> {
        if url.trim().is_empty() {
            return Err(MeetHubError::Validation("url must not be empty".to_string()));
        }
        let now = now_rfc3339();
        self.with_conn(|conn| {
            ensure_meeting_exists(conn, meeting_id)?;
            conn.execute(
                "INSERT INTO meeting_urls(meeting_id, url_name, url, added_at) VALUES (?1, ?2, ?3, ?4)",
                params![meeting_id, url_name, url, now],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn list_meeting_urls(&self, meeting_id: i64) -> Result<Vec<MeetingUrl>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT id, meeting_id, url_name, url, added_at
                FROM meeting_urls
                WHERE meeting_id = ?1
                ORDER BY id ASC
                ",
            )?;
            let rows = stmt.query_map(params![meeting_id], |row| {
                let added_raw = row.get::<_, String>(4)?;
                Ok(MeetingUrl {
                    id: row.get(0)?,
                    meeting_id: row.get(1)?,
                    url_name: row.get(2)?,
                    url: row.get(3)?,
                    added_at: parse_required_rfc3339(4, &added_raw)?,
                })
            })?;
            collect_rows(rows)
        })
    }

    pub fn delete_meeting_url(&self, id: i64) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM meeting_urls WHERE id = ?1", params![id])?)
        })?;
        if changed == 0 {
            return Err(MeetHubError::missing("meeting url", id));
        }
        Ok(())
    }
}
