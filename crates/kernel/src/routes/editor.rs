//! Page editor routes.
//!
//! Every route works on the session's page draft: load it, apply one
//! operation, store it back. All of them require the client role.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::content::{
    BlockContent, BlockType, Direction, EXPORT_FILE_NAME, EditorError, Page, PageExport, Position,
};
use crate::error::{AppError, AppResult};
use crate::permissions::well_known::CLIENT_ROLE;
use crate::session::AuthContext;
use crate::state::AppState;
use crate::theme::{find_layout, find_theme};

#[derive(Debug, Deserialize)]
struct SelectRequest {
    theme: Option<String>,
    layout: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AddRequest {
    #[serde(rename = "type")]
    block_type: String,
    position: String,
}

#[derive(Debug, Deserialize)]
struct UpdateRequest {
    #[serde(default)]
    content: Value,
}

#[derive(Debug, Deserialize)]
struct MoveRequest {
    direction: Direction,
}

/// Whether the draft's layout was designed for its theme. Unknown names
/// are never reported as incompatible.
fn is_compatible(page: &Page) -> bool {
    let theme_id = find_theme(&page.theme).map(|t| t.id);
    find_layout(&page.layout).is_none_or(|l| l.is_compatible_with(theme_id))
}

fn page_body(page: &Page) -> Json<Value> {
    Json(json!({
        "success": true,
        "page": page,
        "compatible": is_compatible(page),
    }))
}

/// Load the draft of a signed-in client.
async fn client_draft(auth: &AuthContext) -> AppResult<Page> {
    auth.require(Some(CLIENT_ROLE))?;
    auth.draft().await
}

/// GET /api/editor/page
async fn get_page(auth: AuthContext) -> AppResult<Json<Value>> {
    let page = client_draft(&auth).await?;
    Ok(page_body(&page))
}

/// PUT /api/editor/page
///
/// Selecting a layout the theme was not designed for is allowed; the
/// response only reports it.
async fn select(auth: AuthContext, Json(body): Json<SelectRequest>) -> AppResult<Json<Value>> {
    let mut page = client_draft(&auth).await?;

    if let Some(theme) = body.theme {
        page.theme = theme;
    }
    if let Some(layout) = body.layout {
        page.layout = layout;
    }

    auth.save_draft(&page).await?;
    Ok(page_body(&page))
}

/// GET /api/editor/components
async fn list_components(auth: AuthContext) -> AppResult<Json<Value>> {
    let page = client_draft(&auth).await?;
    Ok(Json(json!({ "success": true, "components": page.components })))
}

/// POST /api/editor/components
async fn add_component(
    auth: AuthContext,
    Json(body): Json<AddRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let mut page = client_draft(&auth).await?;
    let block_type: BlockType = body.block_type.parse()?;
    let position: Position = body.position.parse()?;

    let component = page.edit(|editor| editor.add_component(block_type, position).cloned())?;
    auth.save_draft(&page).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "component": component })),
    ))
}

/// PUT /api/editor/components/{id}
///
/// The payload is read as content of the component's own type.
async fn update_component(
    auth: AuthContext,
    Path(id): Path<i64>,
    Json(body): Json<UpdateRequest>,
) -> AppResult<Json<Value>> {
    let mut page = client_draft(&auth).await?;

    let type_name = page
        .components
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.content.type_name().to_string())
        .ok_or(EditorError::UnknownComponent(id))?;
    let content = BlockContent::from_parts(&type_name, body.content)?;

    page.edit(|editor| editor.update_component(id, content))?;
    auth.save_draft(&page).await?;

    let component = page.components.iter().find(|c| c.id == id);
    Ok(Json(json!({ "success": true, "component": component })))
}

/// DELETE /api/editor/components/{id}
async fn delete_component(auth: AuthContext, Path(id): Path<i64>) -> AppResult<Json<Value>> {
    let mut page = client_draft(&auth).await?;
    let deleted = page.edit(|editor| editor.delete_component(id)).is_some();

    if deleted {
        auth.save_draft(&page).await?;
    }
    Ok(Json(json!({ "success": true, "deleted": deleted })))
}

/// POST /api/editor/components/{id}/move
async fn move_component(
    auth: AuthContext,
    Path(id): Path<i64>,
    Json(body): Json<MoveRequest>,
) -> AppResult<Json<Value>> {
    let mut page = client_draft(&auth).await?;
    let moved = page.edit(|editor| editor.move_component(id, body.direction));

    if moved {
        auth.save_draft(&page).await?;
    }
    Ok(Json(json!({
        "success": true,
        "moved": moved,
        "components": page.components,
    })))
}

/// GET /api/editor/export
async fn export(auth: AuthContext) -> AppResult<Response> {
    let page = client_draft(&auth).await?;
    let body = PageExport::from_page(&page, Utc::now())
        .to_json()
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}

/// POST /api/editor/import
///
/// An artifact with repeated component ids is refused and the draft is kept.
async fn import(auth: AuthContext, Json(artifact): Json<PageExport>) -> AppResult<Json<Value>> {
    auth.require(Some(CLIENT_ROLE))?;

    let page = artifact.into_page()?;
    auth.save_draft(&page).await?;
    Ok(page_body(&page))
}

/// Create the editor router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/editor/page", get(get_page).put(select))
        .route(
            "/api/editor/components",
            get(list_components).post(add_component),
        )
        .route(
            "/api/editor/components/{id}",
            put(update_component).delete(delete_component),
        )
        .route("/api/editor/components/{id}/move", post(move_component))
        .route("/api/editor/export", get(export))
        .route("/api/editor/import", post(import))
}
