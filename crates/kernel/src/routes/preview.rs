//! HTML preview routes.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::content::{DEFAULT_LAYOUT, DEFAULT_THEME};
use crate::error::AppResult;
use crate::permissions::well_known::CLIENT_ROLE;
use crate::session::AuthContext;
use crate::state::AppState;
use crate::theme::DEFAULT_TITLE;

#[derive(Debug, Deserialize)]
struct SampleQuery {
    layout: Option<String>,
    theme: Option<String>,
}

/// GET /preview
///
/// The session's draft as a full page.
async fn preview_draft(State(state): State<AppState>, auth: AuthContext) -> AppResult<Html<String>> {
    auth.require(Some(CLIENT_ROLE))?;
    let page = auth.draft().await?;
    Ok(Html(state.theme().render_page(&page, DEFAULT_TITLE)?))
}

/// GET /preview/sample?layout=&theme=
///
/// Sample content in a layout, for choosing one before editing.
async fn preview_sample(
    State(state): State<AppState>,
    Query(query): Query<SampleQuery>,
) -> AppResult<Html<String>> {
    let layout = query.layout.as_deref().unwrap_or(DEFAULT_LAYOUT);
    let theme = query.theme.as_deref().unwrap_or(DEFAULT_THEME);
    Ok(Html(state.theme().render_preview(layout, theme)?))
}

/// Create the preview router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/preview", get(preview_draft))
        .route("/preview/sample", get(preview_sample))
}
