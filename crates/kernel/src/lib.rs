//! Sitewright kernel library.
//!
//! Page content, themes and layouts, the role gate, persistence and the
//! HTTP surface. The main entry point for running the server is the
//! `sitewright` binary.

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod models;
pub mod permissions;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod theme;

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use config::Config;
pub use state::AppState;

/// Build the application: every route plus the session, CORS and trace layers.
pub fn app(state: AppState, config: &Config) -> Router {
    routes::router()
        // Middleware layers (last added = first executed in request flow):
        // TraceLayer → CORS → session → routes
        .layer(session::create_session_layer(config))
        .layer(build_cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([axum::http::header::CONTENT_TYPE])
            .allow_credentials(true)
    }
}
