use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{MeetHubError, Result};

use super::SqliteStateStore;

const MIGRATION_SCHEMA_SQL: &str = r"
    PRAGMA journal_mode = WAL;
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS meetings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meeting_date TEXT NOT NULL,
        meeting_time TEXT NOT NULL,
        topic TEXT NOT NULL,
        presenter TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        url_name TEXT NOT NULL DEFAULT '',
        url TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL DEFAULT 'scheduled'
            CHECK(status IN ('scheduled', 'completed', 'cancelled')),
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS meeting_notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meeting_id INTEGER NOT NULL UNIQUE,
        notes TEXT NOT NULL DEFAULT '',
        attendee_count INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        FOREIGN KEY (meeting_id) REFERENCES meetings(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS action_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meeting_id INTEGER NOT NULL,
        item_type TEXT NOT NULL CHECK(item_type IN ('todo', 'action_item')),
        description TEXT NOT NULL,
        assignee TEXT NOT NULL DEFAULT '',
        due_date TEXT,
        status TEXT NOT NULL DEFAULT 'open'
            CHECK(status IN ('open', 'in_progress', 'completed')),
        created_at TEXT NOT NULL,
        FOREIGN KEY (meeting_id) REFERENCES meetings(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS attachments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meeting_id INTEGER NOT NULL,
        file_name TEXT NOT NULL,
        file_data BLOB NOT NULL,
        file_type TEXT NOT NULL,
        file_size INTEGER NOT NULL,
        content_hash TEXT NOT NULL,
        uploaded_at TEXT NOT NULL,
        FOREIGN KEY (meeting_id) REFERENCES meetings(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS meeting_urls (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meeting_id INTEGER NOT NULL,
        url_name TEXT NOT NULL,
        url TEXT NOT NULL,
        added_at TEXT NOT NULL,
        FOREIGN KEY (meeting_id) REFERENCES meetings(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS kb_articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        url TEXT NOT NULL,
        source_type TEXT NOT NULL DEFAULT 'internal'
            CHECK(source_type IN ('internal', 'external')),
        tags TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_meetings_date ON meetings(meeting_date);
    CREATE INDEX IF NOT EXISTS idx_action_items_meeting ON action_items(meeting_id);
    CREATE INDEX IF NOT EXISTS idx_attachments_meeting ON attachments(meeting_id);
    CREATE INDEX IF NOT EXISTS idx_meeting_urls_meeting ON meeting_urls(meeting_id);
    CREATE INDEX IF NOT EXISTS idx_kb_articles_category_title ON kb_articles(category, title);
";

impl SqliteStateStore {
    pub fn migrate(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute_batch(MIGRATION_SCHEMA_SQL)?;
            ensure_required_column(
                conn,
                "attachments",
                "content_hash",
                "unsupported attachments schema: content_hash is missing; reset the hub database",
            )?;
            ensure_required_column(
                conn,
                "meeting_notes",
                "updated_at",
                "unsupported meeting_notes schema: updated_at is missing; reset the hub database",
            )?;
            Ok(())
        })
    }

    pub fn has_table(&self, table: &str) -> Result<bool> {
        self.with_conn(|conn| has_table(conn, table))
    }
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for row in rows {
        if row? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn has_table(conn: &Connection, table: &str) -> Result<bool> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1",
            params![table],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    Ok(exists)
}

fn ensure_required_column(
    conn: &Connection,
    table: &str,
    column: &str,
    error_message: &'static str,
) -> Result<()> {
    if has_column(conn, table, column)? {
        Ok(())
    } else {
        Err(MeetHubError::Validation(error_message.to_string()))
    }
}
