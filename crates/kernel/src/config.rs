//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// SQLite connection URL (default: sqlite://sitewright.db?mode=rwc).
    pub database_url: String,

    /// Maximum database connections in pool (default: 5).
    pub database_max_connections: u32,

    /// Template directory overriding the built-in templates.
    pub templates_dir: Option<PathBuf>,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Cookie SameSite policy: "strict", "lax", or "none" (default: "strict").
    pub cookie_same_site: String,

    /// Send the session cookie over HTTPS only (default: true).
    pub cookie_secure: bool,

    /// Idle time before a session expires (default: 24).
    pub session_expiry_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: "sqlite://sitewright.db?mode=rwc".to_string(),
            database_max_connections: 5,
            templates_dir: None,
            cors_allowed_origins: vec!["*".to_string()],
            cookie_same_site: "strict".to_string(),
            cookie_secure: true,
            session_expiry_hours: 24,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = env::var("PORT")
            .unwrap_or_else(|_| defaults.port.to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| defaults.database_max_connections.to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?;

        let templates_dir = env::var("TEMPLATES_DIR").ok().map(PathBuf::from);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or(defaults.cors_allowed_origins);

        let cookie_same_site = env::var("COOKIE_SAME_SITE")
            .unwrap_or(defaults.cookie_same_site)
            .to_lowercase();

        let cookie_secure = env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .context("COOKIE_SECURE must be true or false")?;

        let session_expiry_hours = env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| defaults.session_expiry_hours.to_string())
            .parse()
            .context("SESSION_EXPIRY_HOURS must be a whole number of hours")?;

        Ok(Self {
            port,
            database_url,
            database_max_connections,
            templates_dir,
            cors_allowed_origins,
            cookie_same_site,
            cookie_secure,
            session_expiry_hours,
        })
    }
}
