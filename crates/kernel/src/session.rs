//! Session management and the signed-in user context.
//!
//! Sessions live in an in-memory store. The session holds the id of the
//! signed-in user and the page draft being edited; the user and its roles
//! are reloaded from the database on every request, so a deleted user loses
//! access immediately.

use std::collections::BTreeSet;

use anyhow::Context;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::Serialize;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::Config;
use crate::content::Page;
use crate::error::{AppError, AppResult};
use crate::models::{User, UserWithRoles};
use crate::permissions::{Access, authorize};
use crate::state::AppState;

/// Session key for the signed-in user id.
pub const SESSION_USER_ID: &str = "user_id";

/// Session key for the page draft.
pub const SESSION_PAGE_DRAFT: &str = "page_draft";

/// Create the session layer.
pub fn create_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    let same_site = match config.cookie_same_site.as_str() {
        "lax" => SameSite::Lax,
        "none" => SameSite::None,
        _ => SameSite::Strict,
    };

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.cookie_secure)
        .with_http_only(true)
        .with_same_site(same_site)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            config.session_expiry_hours,
        )))
}

/// The signed-in user as seen by request handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub roles: BTreeSet<String>,
}

impl From<UserWithRoles> for SessionUser {
    fn from(user: UserWithRoles) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            roles: user.roles,
        }
    }
}

/// Per-request authentication context.
///
/// Extracting it loads the signed-in user, if any. `sign_in` and `sign_out`
/// are the only ways the session's user changes.
pub struct AuthContext {
    session: Session,
    user: Option<SessionUser>,
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::Internal(anyhow::anyhow!(message)))?;

        let user_id: Option<i64> = session
            .get(SESSION_USER_ID)
            .await
            .context("failed to read session")?;

        let user = match user_id {
            Some(id) => match User::find_by_id(state.db(), id).await? {
                Some(user) => {
                    let roles = User::roles(state.db(), id).await?;
                    Some(UserWithRoles::new(user, roles).into())
                }
                None => None,
            },
            None => None,
        };

        Ok(Self { session, user })
    }
}

impl AuthContext {
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// The signed-in user, if it holds `role` (or any role when `None`).
    pub fn require(&self, role: Option<&str>) -> AppResult<&SessionUser> {
        match (authorize(self.user(), role), self.user()) {
            (Access::Granted, Some(user)) => Ok(user),
            (Access::Denied, _) => Err(AppError::Forbidden),
            _ => Err(AppError::login_required()),
        }
    }

    /// Start a signed-in session under a fresh session id.
    pub async fn sign_in(&mut self, user: SessionUser) -> AppResult<()> {
        self.session
            .cycle_id()
            .await
            .context("failed to cycle session id")?;
        self.session
            .insert(SESSION_USER_ID, user.id)
            .await
            .context("failed to store session user")?;

        tracing::info!(user_id = user.id, "user signed in");
        self.user = Some(user);
        Ok(())
    }

    /// Tear the session down, draft included.
    pub async fn sign_out(&mut self) -> AppResult<()> {
        self.session
            .flush()
            .await
            .context("failed to flush session")?;

        if let Some(user) = self.user.take() {
            tracing::info!(user_id = user.id, "user signed out");
        }
        Ok(())
    }

    /// The page being edited in this session, or a fresh default page.
    pub async fn draft(&self) -> AppResult<Page> {
        let draft: Option<Page> = self
            .session
            .get(SESSION_PAGE_DRAFT)
            .await
            .context("failed to read page draft")?;

        Ok(draft.unwrap_or_default())
    }

    pub async fn save_draft(&self, page: &Page) -> AppResult<()> {
        self.session
            .insert(SESSION_PAGE_DRAFT, page)
            .await
            .context("failed to store page draft")?;

        Ok(())
    }
}
