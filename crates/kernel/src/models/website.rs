//! Website model.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Website record.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub domain: Option<String>,
    pub theme: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a website.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsite {
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
    pub theme: String,
}

impl Website {
    pub async fn create(pool: &SqlitePool, owner_id: i64, input: CreateWebsite) -> Result<Self> {
        let now = Utc::now();
        let domain = input.domain.filter(|d| !d.trim().is_empty());

        let website = sqlx::query_as::<_, Website>(
            r#"
            INSERT INTO websites (owner_id, name, domain, theme, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&input.name)
        .bind(domain)
        .bind(&input.theme)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .context("failed to create website")?;

        Ok(website)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>> {
        let website = sqlx::query_as::<_, Website>("SELECT * FROM websites WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .context("failed to fetch website by id")?;

        Ok(website)
    }

    /// Websites owned by a user, newest first.
    pub async fn list_for_owner(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Self>> {
        let websites = sqlx::query_as::<_, Website>(
            "SELECT * FROM websites WHERE owner_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
        .context("failed to list websites")?;

        Ok(websites)
    }

    /// Mark a website published. Returns false when it does not exist.
    pub async fn publish(pool: &SqlitePool, id: i64) -> Result<bool> {
        let result =
            sqlx::query("UPDATE websites SET is_published = 1, updated_at = ? WHERE id = ?")
                .bind(Utc::now())
                .bind(id)
                .execute(pool)
                .await
                .context("failed to publish website")?;

        Ok(result.rows_affected() > 0)
    }
}
