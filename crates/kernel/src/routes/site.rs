//! Website routes: create, save pages, publish and generate.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{CreateWebsite, PageRecord, SavePage, Website};
use crate::permissions::well_known::{ADMIN_ROLE, CLIENT_ROLE};
use crate::services::publish::generate_bundle;
use crate::session::{AuthContext, SessionUser};
use crate::state::AppState;
use crate::theme::find_theme;

use super::helpers::required;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavePageRequest {
    title: String,
    slug: String,
    #[serde(default)]
    meta_description: String,
    #[serde(default)]
    is_homepage: bool,
}

/// Load a website the signed-in user may manage: its owner, or an admin.
async fn managed_website(state: &AppState, auth: &AuthContext, id: i64) -> AppResult<Website> {
    let user = auth.require(Some(CLIENT_ROLE))?;
    let website = Website::find_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::not_found("Website not found"))?;

    if !may_manage(user, &website) {
        return Err(AppError::Forbidden);
    }
    Ok(website)
}

fn may_manage(user: &SessionUser, website: &Website) -> bool {
    website.owner_id == user.id || user.roles.contains(ADMIN_ROLE)
}

/// GET /api/sites
async fn list_sites(State(state): State<AppState>, auth: AuthContext) -> AppResult<Json<Value>> {
    let user = auth.require(Some(CLIENT_ROLE))?;
    let websites = Website::list_for_owner(state.db(), user.id).await?;
    Ok(Json(json!({ "success": true, "websites": websites })))
}

/// POST /api/sites
async fn create_site(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(body): Json<CreateWebsite>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let user = auth.require(Some(CLIENT_ROLE))?;
    let name = required(&body.name, "Name")?.to_string();
    if find_theme(&body.theme).is_none() {
        return Err(AppError::BadRequest(format!("Unknown theme: {}", body.theme)));
    }

    let website = Website::create(state.db(), user.id, CreateWebsite { name, ..body }).await?;
    info!(website_id = website.id, owner_id = user.id, "website created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "website": website })),
    ))
}

/// POST /api/sites/{id}/pages
///
/// Saves the session's draft under a slug; an existing slug is overwritten.
async fn save_page(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<i64>,
    Json(body): Json<SavePageRequest>,
) -> AppResult<Json<Value>> {
    let website = managed_website(&state, &auth, id).await?;
    let title = required(&body.title, "Title")?.to_string();
    let slug = required(&body.slug, "Slug")?.to_string();
    let draft = auth.draft().await?;

    let page_id = PageRecord::save(
        state.db(),
        SavePage {
            website_id: website.id,
            title,
            slug,
            layout: draft.layout,
            components: draft.components,
            meta_description: body.meta_description,
            is_homepage: body.is_homepage,
        },
    )
    .await?;

    Ok(Json(json!({ "success": true, "pageId": page_id })))
}

/// POST /api/sites/{id}/publish
async fn publish(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let website = managed_website(&state, &auth, id).await?;
    Website::publish(state.db(), website.id).await?;
    info!(website_id = website.id, "website published");

    Ok(Json(json!({ "success": true })))
}

/// GET /api/sites/{id}/bundle
async fn bundle(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let website = managed_website(&state, &auth, id).await?;
    let bundle = generate_bundle(state.db(), state.theme(), website.id).await?;
    Ok(Json(json!({ "success": true, "bundle": bundle })))
}

/// Create the website router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/sites", get(list_sites).post(create_site))
        .route("/api/sites/{id}/pages", post(save_page))
        .route("/api/sites/{id}/publish", post(publish))
        .route("/api/sites/{id}/bundle", get(bundle))
}
