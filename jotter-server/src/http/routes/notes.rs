//! Note endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{NoteRepo, NoteWithAuthor};
use crate::http::error::ApiError;
use crate::http::extractors::DbConn;
use crate::http::server::AppState;
use crate::models::{NoteTitle, ValidationError, MAX_BODY_LEN};

const DEFAULT_LIMIT: i64 = 50;

/// Create note request
#[derive(Deserialize)]
pub struct CreateNoteRequest {
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

/// Listing query parameters
#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Note response
#[derive(Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub author_id: i64,
    pub username: String,
    pub title: String,
    pub body: String,
    pub created: String,
}

impl From<NoteWithAuthor> for NoteResponse {
    fn from(n: NoteWithAuthor) -> Self {
        Self {
            id: n.id,
            author_id: n.author_id,
            username: n.username,
            title: n.title,
            body: n.body,
            created: n.created.to_rfc3339(),
        }
    }
}

/// GET /api/notes - list notes newest-first
async fn list_notes(
    DbConn(mut conn): DbConn,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, 500);
    let offset = params.offset.unwrap_or(0).max(0);

    let notes = NoteRepo::new(&mut conn).list(limit, offset).await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// POST /api/notes - create a note
async fn create_note(
    DbConn(mut conn): DbConn,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let title = NoteTitle::new(&req.title)?;

    // Body has no newtype; validate inline
    if req.body.trim().is_empty() {
        return Err(ValidationError::Empty { field: "body" }.into());
    }
    if req.body.len() > MAX_BODY_LEN {
        return Err(ValidationError::TooLong {
            field: "body",
            max: MAX_BODY_LEN,
        }
        .into());
    }

    let note = NoteRepo::new(&mut conn)
        .create(req.author_id, title.as_str(), &req.body)
        .await?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

/// GET /api/notes/{id} - fetch a single note
async fn get_note(
    DbConn(mut conn): DbConn,
    Path(id): Path<i64>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = NoteRepo::new(&mut conn).get(id).await?;
    Ok(Json(NoteResponse::from(note)))
}

/// DELETE /api/notes/{id} - delete a note
async fn delete_note(DbConn(mut conn): DbConn, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    NoteRepo::new(&mut conn).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Note routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", get(get_note).delete(delete_note))
}
