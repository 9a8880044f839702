//! User model, registration and login.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;

use super::role;

/// User record.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with its role set, as shown to operators.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithRoles {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub roles: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl UserWithRoles {
    pub fn new(user: User, roles: BTreeSet<String>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            roles,
            created_at: user.created_at,
        }
    }
}

/// Input for registering a user.
#[derive(Debug, Deserialize)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

/// Registration and login failures.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User with this email already exists")]
    AlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl User {
    /// Find a user by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .context("failed to fetch user by id")?;

        Ok(user)
    }

    /// Find a user by email, ignoring case.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email.trim())
            .fetch_optional(pool)
            .await
            .context("failed to fetch user by email")?;

        Ok(user)
    }

    /// Create a user holding exactly one role. Returns the new user id.
    pub async fn register(pool: &SqlitePool, input: RegisterUser) -> Result<i64, AuthError> {
        let email = input.email.trim();
        if Self::find_by_email(pool, email).await?.is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let password_hash = hash_password(&input.password)?;
        let now = Utc::now();

        let mut tx = pool.begin().await.context("failed to begin transaction")?;

        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (email, name, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(&input.name)
        .bind(&password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await;

        let id = match inserted {
            Ok(id) => id,
            // Lost a race with a concurrent registration
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AuthError::AlreadyExists);
            }
            Err(e) => return Err(anyhow::Error::new(e).context("failed to create user").into()),
        };

        role::assign(&mut *tx, id, &input.role).await?;
        tx.commit().await.context("failed to commit user")?;

        tracing::info!(user_id = id, role = %input.role, "user registered");
        Ok(id)
    }

    /// Check credentials. Unknown email and wrong password fail alike.
    pub async fn login(
        pool: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<UserWithRoles, AuthError> {
        let Some(user) = Self::find_by_email(pool, email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !user.verify_password(password) {
            return Err(AuthError::InvalidCredentials);
        }

        let roles = Self::roles(pool, user.id).await?;
        Ok(UserWithRoles::new(user, roles))
    }

    /// Role names held by a user.
    pub async fn roles(pool: &SqlitePool, id: i64) -> Result<BTreeSet<String>> {
        role::for_user(pool, id).await
    }

    pub async fn has_role(pool: &SqlitePool, id: i64, role: &str) -> Result<bool> {
        Ok(Self::roles(pool, id).await?.contains(role))
    }

    /// List all users with their roles.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<UserWithRoles>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY email")
            .fetch_all(pool)
            .await
            .context("failed to list users")?;

        let mut listed = Vec::with_capacity(users.len());
        for user in users {
            let roles = Self::roles(pool, user.id).await?;
            listed.push(UserWithRoles::new(user, roles));
        }

        Ok(listed)
    }

    /// Delete a user. Roles and owned websites go with it.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .context("failed to delete user")?;

        Ok(result.rows_affected() > 0)
    }

    /// Verify a password against this user's hash.
    pub fn verify_password(&self, password: &str) -> bool {
        if self.password_hash.is_empty() {
            return false;
        }

        let Ok(parsed_hash) = PasswordHash::new(&self.password_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Hash a password using Argon2id.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("failed to hash password: {e}"))?;

    Ok(hash.to_string())
}
