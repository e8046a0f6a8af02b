//! Author endpoints

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Author, AuthorRepo};
use crate::http::error::ApiError;
use crate::http::extractors::DbConn;
use crate::http::server::AppState;
use crate::models::Username;

/// Create author request
#[derive(Deserialize)]
pub struct CreateAuthorRequest {
    pub username: String,
}

/// Author response
#[derive(Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub username: String,
    pub created: String,
}

impl From<Author> for AuthorResponse {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            username: a.username,
            created: a.created.to_rfc3339(),
        }
    }
}

/// GET /api/authors - list all authors
async fn list_authors(DbConn(mut conn): DbConn) -> Result<Json<Vec<AuthorResponse>>, ApiError> {
    let authors = AuthorRepo::new(&mut conn).list().await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// POST /api/authors - create a new author
async fn create_author(
    DbConn(mut conn): DbConn,
    Json(req): Json<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<AuthorResponse>), ApiError> {
    let username = Username::new(&req.username)?;
    let author = AuthorRepo::new(&mut conn).create(username.as_str()).await?;

    Ok((StatusCode::CREATED, Json(AuthorResponse::from(author))))
}

/// Author routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/authors", get(list_authors).post(create_author))
}
