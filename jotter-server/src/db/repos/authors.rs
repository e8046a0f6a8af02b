//! Author repository

use chrono::{DateTime, Utc};
use sqlx::{Row, SqliteConnection};

use super::DbError;

/// Author record from database
#[derive(Debug, Clone)]
pub struct Author {
    pub id: i64,
    pub username: String,
    pub created: DateTime<Utc>,
}

/// Author repository over the request's connection
pub struct AuthorRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> AuthorRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create an author. Duplicate usernames map to [`DbError::Conflict`]
    /// via the UNIQUE constraint rather than a check-then-insert.
    pub async fn create(&mut self, username: &str) -> Result<Author, DbError> {
        let now = Utc::now();

        let result = sqlx::query("INSERT INTO authors (username, created) VALUES (?, ?)")
            .bind(username)
            .bind(now)
            .execute(&mut *self.conn)
            .await;

        let result = match result {
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(DbError::Conflict(format!(
                    "author '{}' already exists",
                    username
                )));
            }
            other => other?,
        };

        Ok(Author {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            created: now,
        })
    }

    /// List all authors, oldest first.
    pub async fn list(&mut self) -> Result<Vec<Author>, DbError> {
        let rows = sqlx::query("SELECT id, username, created FROM authors ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| Author {
                id: r.get("id"),
                username: r.get("username"),
                created: r.get("created"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, init_schema};

    #[tokio::test]
    async fn create_and_list_authors() {
        let pool = create_memory_pool();
        init_schema(&pool).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let ada = AuthorRepo::new(&mut conn).create("ada").await.unwrap();
        assert_eq!(ada.username, "ada");

        AuthorRepo::new(&mut conn).create("grace").await.unwrap();

        let authors = AuthorRepo::new(&mut conn).list().await.unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0].username, "ada");
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let pool = create_memory_pool();
        init_schema(&pool).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        AuthorRepo::new(&mut conn).create("ada").await.unwrap();
        let err = AuthorRepo::new(&mut conn).create("ada").await.unwrap_err();
        assert!(matches!(err, DbError::Conflict(_)));
    }
}
