//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;
use crate::db;
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// SQLite connection pool.
    db: SqlitePool,

    /// Page renderer.
    theme: Arc<ThemeEngine>,
}

impl AppState {
    /// Connect the database, apply migrations and load templates.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = db::create_pool(config)
            .await
            .context("failed to create database pool")?;

        db::run_migrations(&db)
            .await
            .context("failed to run migrations")?;

        let theme = match &config.templates_dir {
            Some(dir) => {
                info!(?dir, "loading templates from directory");
                ThemeEngine::new(dir)
                    .inspect_err(
                        |e| tracing::warn!(error = ?e, "failed to load templates, using built-in templates"),
                    )
                    .or_else(|_| ThemeEngine::builtin())
            }
            None => ThemeEngine::builtin(),
        }
        .context("failed to create theme engine")?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                db,
                theme: Arc::new(theme),
            }),
        })
    }

    /// Get the database pool.
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get the theme engine.
    pub fn theme(&self) -> &Arc<ThemeEngine> {
        &self.inner.theme
    }
}
