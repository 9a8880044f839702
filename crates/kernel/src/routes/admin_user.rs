//! User administration routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{Value, json};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{RegisterUser, User};
use crate::permissions::well_known::{self, ADMIN_ROLE};
use crate::session::AuthContext;
use crate::state::AppState;

use super::helpers::required;

/// GET /api/admin/users
async fn list_users(State(state): State<AppState>, auth: AuthContext) -> AppResult<Json<Value>> {
    auth.require(Some(ADMIN_ROLE))?;
    let users = User::list(state.db()).await?;
    Ok(Json(json!({ "success": true, "users": users })))
}

/// POST /api/admin/users
///
/// Creates a user holding exactly the requested role.
async fn create_user(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(body): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<Value>)> {
    auth.require(Some(ADMIN_ROLE))?;
    let email = required(&body.email, "Email")?.to_string();
    required(&body.password, "Password")?;
    if !well_known::is_known(&body.role) {
        return Err(AppError::BadRequest(format!("Unknown role: {}", body.role)));
    }

    let user_id = User::register(state.db(), RegisterUser { email, ..body }).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "userId": user_id })),
    ))
}

/// DELETE /api/admin/users/{id}
async fn delete_user(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let admin = auth.require(Some(ADMIN_ROLE))?;
    if admin.id == id {
        return Err(AppError::BadRequest(
            "You cannot delete your own account".to_string(),
        ));
    }

    if !User::delete(state.db(), id).await? {
        return Err(AppError::not_found("User not found"));
    }

    info!(user_id = id, admin_id = admin.id, "user deleted");
    Ok(Json(json!({ "success": true })))
}

/// Create the user administration router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/users", get(list_users).post(create_user))
        .route("/api/admin/users/{id}", delete(delete_user))
}
