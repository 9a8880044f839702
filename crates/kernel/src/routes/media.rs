//! Media library routes.
//!
//! Every route works on the signed-in user's own library.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::AppResult;
use crate::models::{CreateMedia, MediaItem};
use crate::permissions::well_known::CLIENT_ROLE;
use crate::session::AuthContext;
use crate::state::AppState;

use super::helpers::required;

#[derive(Debug, Deserialize)]
struct MediaQuery {
    search: Option<String>,
}

/// GET /api/media?search=
async fn list_media(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(query): Query<MediaQuery>,
) -> AppResult<Json<Value>> {
    let user = auth.require(Some(CLIENT_ROLE))?;
    let search = query.search.as_deref().map(str::trim);
    let media = MediaItem::list_for_owner(state.db(), user.id, search).await?;
    Ok(Json(json!({ "success": true, "media": media })))
}

/// POST /api/media
async fn add_media(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(body): Json<CreateMedia>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let user = auth.require(Some(CLIENT_ROLE))?;
    let name = required(&body.name, "Name")?.to_string();
    let url = required(&body.url, "URL")?.to_string();

    let item = MediaItem::create(state.db(), user.id, CreateMedia { name, url, ..body }).await?;
    info!(media_id = item.id, owner_id = user.id, "media item added");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "media": item })),
    ))
}

/// DELETE /api/media/{id}
async fn delete_media(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let user = auth.require(Some(CLIENT_ROLE))?;
    let deleted = MediaItem::delete(state.db(), user.id, id).await?;
    Ok(Json(json!({ "success": true, "deleted": deleted })))
}

/// Create the media library router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/media", get(list_media).post(add_media))
        .route("/api/media/{id}", delete(delete_media))
}
