//! Authentication routes (register, login, logout, current user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AppResult;
use crate::models::{RegisterUser, User};
use crate::permissions::well_known::CLIENT_ROLE;
use crate::session::AuthContext;
use crate::state::AppState;

use super::helpers::required;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/register
///
/// Public sign-up always creates a client.
async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let email = required(&body.email, "Email")?;
    required(&body.password, "Password")?;

    let user_id = User::register(
        state.db(),
        RegisterUser {
            email: email.to_string(),
            password: body.password,
            name: body.name.trim().to_string(),
            role: CLIENT_ROLE.to_string(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "userId": user_id })),
    ))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    mut auth: AuthContext,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<Value>> {
    let user = User::login(state.db(), &body.email, &body.password).await?;
    auth.sign_in(user.into()).await?;

    Ok(Json(json!({ "success": true, "user": auth.user() })))
}

/// POST /api/auth/logout
async fn logout(mut auth: AuthContext) -> AppResult<Json<Value>> {
    auth.sign_out().await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/auth/me
async fn me(auth: AuthContext) -> AppResult<Json<Value>> {
    let user = auth.require(None)?;
    Ok(Json(json!({ "success": true, "user": user })))
}

/// Create the authentication router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
}
