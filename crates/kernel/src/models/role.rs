//! Role assignments.
//!
//! Roles are plain names held in `user_roles`; the names with meaning to the
//! gate live in [`crate::permissions::well_known`].

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use sqlx::{SqliteExecutor, SqlitePool};

/// Assign a role to a user. Assigning a held role is a no-op.
pub async fn assign<'e>(executor: impl SqliteExecutor<'e>, user_id: i64, role: &str) -> Result<()> {
    sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?) ON CONFLICT DO NOTHING")
        .bind(user_id)
        .bind(role)
        .execute(executor)
        .await
        .context("failed to assign role to user")?;

    Ok(())
}

/// Get all role names for a user.
pub async fn for_user(pool: &SqlitePool, user_id: i64) -> Result<BTreeSet<String>> {
    let roles = sqlx::query_scalar::<_, String>("SELECT role FROM user_roles WHERE user_id = ?")
        .bind(user_id)
        .fetch_all(pool)
        .await
        .context("failed to get user roles")?;

    Ok(roles.into_iter().collect())
}
