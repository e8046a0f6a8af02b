//! Note repository
//!
//! The listing query JOINs authors for the username in a single round trip.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqliteConnection};

use super::DbError;

/// Note joined with its author's username
#[derive(Debug, Clone)]
pub struct NoteWithAuthor {
    pub id: i64,
    pub author_id: i64,
    pub username: String,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
}

/// Note repository over the request's connection
pub struct NoteRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> NoteRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create a note for an existing author.
    ///
    /// Returns [`DbError::NotFound`] when the author does not exist.
    pub async fn create(
        &mut self,
        author_id: i64,
        title: &str,
        body: &str,
    ) -> Result<NoteWithAuthor, DbError> {
        let username: Option<String> =
            sqlx::query_scalar("SELECT username FROM authors WHERE id = ?")
                .bind(author_id)
                .fetch_optional(&mut *self.conn)
                .await?;

        let username = username.ok_or_else(|| DbError::NotFound {
            resource: "author",
            id: author_id.to_string(),
        })?;

        let now = Utc::now();
        let result =
            sqlx::query("INSERT INTO notes (author_id, title, body, created) VALUES (?, ?, ?, ?)")
                .bind(author_id)
                .bind(title)
                .bind(body)
                .bind(now)
                .execute(&mut *self.conn)
                .await?;

        Ok(NoteWithAuthor {
            id: result.last_insert_rowid(),
            author_id,
            username,
            title: title.to_string(),
            body: body.to_string(),
            created: now,
        })
    }

    /// List notes newest-first with their author usernames.
    pub async fn list(&mut self, limit: i64, offset: i64) -> Result<Vec<NoteWithAuthor>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT n.id, n.author_id, a.username, n.title, n.body, n.created
            FROM notes n
            JOIN authors a ON a.id = n.author_id
            ORDER BY n.created DESC, n.id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows.into_iter().map(note_from_row).collect())
    }

    /// Get a single note by id.
    pub async fn get(&mut self, id: i64) -> Result<NoteWithAuthor, DbError> {
        let row = sqlx::query(
            r#"
            SELECT n.id, n.author_id, a.username, n.title, n.body, n.created
            FROM notes n
            JOIN authors a ON a.id = n.author_id
            WHERE n.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        row.map(note_from_row).ok_or_else(|| DbError::NotFound {
            resource: "note",
            id: id.to_string(),
        })
    }

    /// Delete a note by id.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "note",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

fn note_from_row(row: sqlx::sqlite::SqliteRow) -> NoteWithAuthor {
    NoteWithAuthor {
        id: row.get("id"),
        author_id: row.get("author_id"),
        username: row.get("username"),
        title: row.get("title"),
        body: row.get("body"),
        created: row.get("created"),
    }
}
