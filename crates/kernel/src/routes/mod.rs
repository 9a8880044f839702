//! HTTP route handlers.

pub mod admin_user;
pub mod auth;
pub mod catalog;
pub mod editor;
pub mod health;
pub mod helpers;
pub mod media;
pub mod preview;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Every route the server exposes.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(catalog::router())
        .merge(editor::router())
        .merge(media::router())
        .merge(preview::router())
        .merge(site::router())
        .merge(admin_user::router())
}
