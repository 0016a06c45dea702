use rusqlite::{OptionalExtension, params};

use crate::error::{MeetHubError, Result};
use crate::mime::infer_mime;
use crate::models::{Attachment, AttachmentData};

use super::meetings::ensure_meeting_exists;
use super::{
    SqliteStateStore, collect_rows, i64_to_u64_saturating, now_rfc3339, parse_required_rfc3339,
    u64_to_i64_saturating,
};

impl SqliteStateStore {
    /// Stores the payload with its blake3 digest. Without an explicit type the
    /// MIME type is inferred from the file extension.
    pub fn save_attachment(
        &self,
        meeting_id: i64,
        file_name: &str,
        data: &[u8],
        file_type: Option<&str>,
    ) -> Result<i64> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(MeetHubError::Validation(
                "attachment file name must not be empty".to_string(),
            ));
        }
        let file_type = file_type
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| infer_mime(file_name));
        let content_hash = blake3::hash(data).to_hex().to_string();
        let file_size = u64_to_i64_saturating(data.len() as u64);
        let now = now_rfc3339();

        self.with_tx(|tx| {
            ensure_meeting_exists(tx, meeting_id)?;
            tx.execute(
                r"
                INSERT INTO attachments(
                    meeting_id, file_name, file_data, file_type, file_size, content_hash, uploaded_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
                params![
                    meeting_id,
                    file_name,
                    data,
                    file_type,
                    file_size,
                    content_hash,
                    now
                ],
            )?;
            Ok(tx.last_insert_rowid())
        })
    }

    pub fn list_attachments(&self, meeting_id: i64) -> Result<Vec<Attachment>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT id, meeting_id, file_name, file_type, file_size, content_hash, uploaded_at
                FROM attachments
                WHERE meeting_id = ?1
                ORDER BY id ASC
                ",
            )?;
            let rows = stmt.query_map(params![meeting_id], |row| {
                let uploaded_raw = row.get::<_, String>(6)?;
                Ok(Attachment {
                    id: row.get(0)?,
                    meeting_id: row.get(1)?,
                    file_name: row.get(2)?,
                    file_type: row.get(3)?,
                    file_size: i64_to_u64_saturating(row.get(4)?),
                    content_hash: row.get(5)?,
                    uploaded_at: parse_required_rfc3339(6, &uploaded_raw)?,
                })
            })?;
            collect_rows(rows)
        })
    }

    pub fn attachment_data(&self, id: i64) -> Result<Option<AttachmentData>> {
        self.with_conn(|conn| {
            let data = conn
                .query_row(
                    "SELECT file_name, file_type, file_data FROM attachments WHERE id = ?1",
                    params![id],
                    |row| {
                        Ok(AttachmentData {
                            file_name: row.get(0)?,
                            file_type: row.get(1)?,
                            data: row.get(2)?,
                        })
                    },
                )
                .optional()?;
            Ok(data)
        })
    }

    pub fn delete_attachment(&self, id: i64) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM attachments WHERE id = ?1", params![id])?)
        })?;
        if changed == 0 {
            return Err(MeetHubError::missing("attachment", id));
        }
        Ok(())
    }
}
