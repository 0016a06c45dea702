use rusqlite::{OptionalExtension, Row, params, params_from_iter, types::Value};

use crate::error::{MeetHubError, Result};
use crate::models::{Article, ArticlePatch, CategoryCount, NewArticle, SourceType};

use super::{SqliteStateStore, collect_rows, now_rfc3339, parse_label, parse_required_rfc3339};

const ARTICLE_COLUMNS: &str =
    "id, title, category, description, url, source_type, tags, created_at";

impl SqliteStateStore {
    pub fn add_article(&self, article: &NewArticle) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO kb_articles(title, category, description, url, source_type, tags, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
                params![
                    article.title,
                    article.category,
                    article.description,
                    article.url,
                    article.source_type.as_str(),
                    article.tags,
                    now_rfc3339(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_article(&self, id: i64) -> Result<Option<Article>> {
        self.with_conn(|conn| {
            let article = conn
                .query_row(
                    &format!("SELECT {ARTICLE_COLUMNS} FROM kb_articles WHERE id = ?1"),
                    params![id],
                    article_from_row,
                )
                .optional()?;
            Ok(article)
        })
    }

    /// Every article, ordered by category then title.
    pub fn list_articles(&self) -> Result<Vec<Article>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ARTICLE_COLUMNS} FROM kb_articles ORDER BY category ASC, title ASC"
            ))?;
            let rows = stmt.query_map([], article_from_row)?;
            collect_rows(rows)
        })
    }

    /// Literal, case-insensitive substring search.
    ///
    /// Each whitespace token must appear in the title, description, tags, or
    /// category; tokens are OR-combined. A query without tokens returns every
    /// article.
    pub fn search_articles(&self, query: &str) -> Result<Vec<Article>> {
        let terms = query
            .to_lowercase()
            .split_whitespace()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if terms.is_empty() {
            return self.list_articles();
        }

        let mut conditions = Vec::with_capacity(terms.len());
        let mut values = Vec::<Value>::with_capacity(terms.len());
        for (idx, term) in terms.iter().enumerate() {
            let p = idx + 1;
            conditions.push(format!(
                "(LOWER(title) LIKE ?{p} ESCAPE '\\' OR LOWER(description) LIKE ?{p} ESCAPE '\\' \
                 OR LOWER(tags) LIKE ?{p} ESCAPE '\\' OR LOWER(category) LIKE ?{p} ESCAPE '\\')"
            ));
            values.push(Value::Text(format!("%{}%", escape_like(term))));
        }

        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM kb_articles WHERE {} ORDER BY category ASC, title ASC",
            conditions.join(" OR ")
        );
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(values), article_from_row)?;
            collect_rows(rows)
        })
    }

    pub fn update_article(&self, id: i64, patch: &ArticlePatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut assignments = Vec::<(&'static str, Value)>::new();
        if let Some(title) = &patch.title {
            assignments.push(("title", Value::Text(title.clone())));
        }
        if let Some(category) = &patch.category {
            assignments.push(("category", Value::Text(category.clone())));
        }
        if let Some(description) = &patch.description {
            assignments.push(("description", Value::Text(description.clone())));
        }
        if let Some(url) = &patch.url {
            assignments.push(("url", Value::Text(url.clone())));
        }
        if let Some(source_type) = patch.source_type {
            assignments.push(("source_type", Value::Text(source_type.as_str().to_string())));
        }
        if let Some(tags) = &patch.tags {
            assignments.push(("tags", Value::Text(tags.clone())));
        }

        let changed = self.update_by_id("kb_articles", id, assignments)?;
        if changed == 0 {
            return Err(MeetHubError::missing("article", id));
        }
        Ok(())
    }

    pub fn delete_article(&self, id: i64) -> Result<()> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM kb_articles WHERE id = ?1", params![id])?)
        })?;
        if changed == 0 {
            return Err(MeetHubError::missing("article", id));
        }
        Ok(())
    }

    pub fn count_articles(&self) -> Result<usize> {
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM kb_articles", [], |row| row.get(0))?;
            Ok(usize::try_from(count).unwrap_or(0))
        })
    }

    pub fn article_category_counts(&self) -> Result<Vec<CategoryCount>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT category, COUNT(*)
                FROM kb_articles
                GROUP BY category
                ORDER BY category ASC
                ",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(CategoryCount {
                    category: row.get(0)?,
                    articles: usize::try_from(row.get::<_, i64>(1)?).unwrap_or(0),
                })
            })?;
            collect_rows(rows)
        })
    }

    /// Applies `column = value` pairs to one row and returns the changed row count.
    pub(super) fn update_by_id(
        &self,
        table: &'static str,
        id: i64,
        assignments: Vec<(&'static str, Value)>,
    ) -> Result<usize> {
        let set_clause = assignments
            .iter()
            .enumerate()
            .map(|(idx, (column, _))| format!("{column} = ?{}", idx + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let id_param = assignments.len() + 1;
        let sql = format!("UPDATE {table} SET {set_clause} WHERE id = ?{id_param}");
        let mut values = assignments
            .into_iter()
            .map(|(_, value)| value)
            .collect::<Vec<_>>();
        values.push(Value::Integer(id));
        self.with_conn(|conn| Ok(conn.execute(&sql, params_from_iter(values))?))
    }
}

fn article_from_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    let source_raw = row.get::<_, String>(5)?;
    let created_raw = row.get::<_, String>(7)?;
    Ok(Article {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        url: row.get(4)?,
        source_type: parse_label::<SourceType>(5, &source_raw)?,
        tags: row.get(6)?,
        created_at: parse_required_rfc3339(7, &created_raw)?,
    })
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
