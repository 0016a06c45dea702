use rusqlite::{Row, params};

use crate::error::{MeetHubError, Result};
use crate::models::{ActionItem, ActionItemKind, ActionItemStatus, NewActionItem};

use super::meetings::ensure_meeting_exists;
use super::{
    SqliteStateStore, collect_rows, format_date, now_rfc3339, parse_label, parse_optional_date,
    parse_required_rfc3339,
};

const ACTION_ITEM_COLUMNS: &str =
    "id, meeting_id, item_type, description, assignee, due_date, status, created_at";

impl SqliteStateStore {
    pub fn add_action_item(&self, item: &NewActionItem) -> Result<i64> {
        let now = now_rfc3339();
        self.with_conn(|conn| {
            ensure_meeting_exists(conn, item.meeting_id)?;
            conn.execute(
                r"
                INSERT INTO action_items(
                    meeting_id, item_type, description, assignee, due_date, status, created_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
                params![
                    item.meeting_id,
                    item.kind.as_str(),
                    item.description,
                    item.assignee,
                    item.due_date.map(format_date),
                    ActionItemStatus::default().as_str(),
                    now,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// With a kind filter items come back in insertion order; without one they
    /// are grouped by kind first.
    pub fn list_action_items(
        &self,
        meeting_id: i64,
        kind: Option<ActionItemKind>,
    ) -> Result<Vec<ActionItem>> {
        self.with_conn(|conn| match kind {
            Some(kind) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {ACTION_ITEM_COLUMNS} FROM action_items \
                     WHERE meeting_id = ?1 AND item_type = ?2 ORDER BY id ASC"
                ))?;
                let rows =
                    stmt.query_map(params![meeting_id, kind.as_str()], action_item_from_row)?;
                collect_rows(rows)
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {ACTION_ITEM_COLUMNS} FROM action_items \
                     WHERE meeting_id = ?1 ORDER BY item_type ASC, id ASC"
                ))?;
                let rows = stmt.query_map(params![meeting_id], action_item_from_row)?;
                collect_rows(rows)
            }
        })
    }

    pub fn update_action_item_status(&self, id: i64, status: ActionItemStatus) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute(
                "UPDATE action_items SET status = ?1 WHERE id = ?2",
                params![status.as_str(), id],
            )?)
        })?;
        if changed == 0 {
            return Err(MeetHubError::missing("action item", id));
        }
        Ok(())
    }

    pub fn delete_action_item(&self, id: i64) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM action_items WHERE id = ?1", params![id])?)
        })?;
        if changed == 0 {
            return Err(MeetHubError::missing("action item", id));
        }
        Ok(())
    }
}

fn action_item_from_row(row: &Row<'_>) -> rusqlite::Result<ActionItem> {
    let kind_raw = row.get::<_, String>(2)?;
    let status_raw = row.get::<_, String>(6)?;
    let created_raw = row.get::<_, String>(7)?;
    Ok(ActionItem {
        id: row.get(0)?,
        meeting_id: row.get(1)?,
        kind: parse_label::<ActionItemKind>(2, &kind_raw)?,
        description: row.get(3)?,
        assignee: row.get(4)?,
        due_date: parse_optional_date(5, row.get(5)?)?,
        status: parse_label::<ActionItemStatus>(6, &status_raw)?,
        created_at: parse_required_rfc3339(7, &created_raw)?,
    })
}
