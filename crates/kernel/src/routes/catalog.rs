//! Theme and layout catalogue routes.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::state::AppState;
use crate::theme::{LayoutDefinition, layouts, themes};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutQuery {
    theme_id: Option<i64>,
}

/// A layout plus whether it suits the selected theme.
#[derive(Serialize)]
struct LayoutEntry {
    #[serde(flatten)]
    layout: LayoutDefinition,
    compatible: bool,
}

/// GET /api/themes
async fn list_themes() -> Json<Value> {
    Json(json!({ "success": true, "themes": themes() }))
}

/// GET /api/layouts?themeId=
///
/// Every layout is listed; `compatible` is advisory.
async fn list_layouts(Query(query): Query<LayoutQuery>) -> Json<Value> {
    let entries: Vec<LayoutEntry> = layouts()
        .iter()
        .map(|layout| LayoutEntry {
            layout: *layout,
            compatible: layout.is_compatible_with(query.theme_id),
        })
        .collect();

    Json(json!({ "success": true, "layouts": entries }))
}

/// Create the catalogue router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/themes", get(list_themes))
        .route("/api/layouts", get(list_layouts))
}
