//! Media library items.
//!
//! Each user has a private library of named media references (an image or
//! another file reachable by URL) to pick from while editing blocks.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Media item record.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub url: String,
    /// `image` or `file`.
    #[serde(rename = "type")]
    pub media_type: String,
    /// Human-readable size, e.g. `245 KB`.
    pub size: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Input for adding a media item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedia {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub size_bytes: u64,
}

/// `image` for `image/*` content types, `file` for anything else.
pub fn media_type_for(content_type: &str) -> &'static str {
    if content_type.starts_with("image/") {
        "image"
    } else {
        "file"
    }
}

/// Size in whole kilobytes, rounded to nearest.
pub fn size_label(bytes: u64) -> String {
    format!("{} KB", bytes.saturating_add(512) / 1024)
}

impl MediaItem {
    pub async fn create(pool: &SqlitePool, owner_id: i64, input: CreateMedia) -> Result<Self> {
        let item = sqlx::query_as::<_, MediaItem>(
            r#"
            INSERT INTO media_items (owner_id, name, url, media_type, size, uploaded_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&input.name)
        .bind(&input.url)
        .bind(media_type_for(&input.content_type))
        .bind(size_label(input.size_bytes))
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .context("failed to create media item")?;

        Ok(item)
    }

    /// A user's media in upload order, optionally filtered by a
    /// case-insensitive substring of the name.
    pub async fn list_for_owner(
        pool: &SqlitePool,
        owner_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Self>> {
        let items = sqlx::query_as::<_, MediaItem>(
            r#"
            SELECT * FROM media_items
            WHERE owner_id = ? AND instr(lower(name), lower(?)) > 0
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .bind(search.unwrap_or_default())
        .fetch_all(pool)
        .await
        .context("failed to list media items")?;

        Ok(items)
    }

    /// Delete one of a user's items. Returns false when the user has no
    /// item with that id.
    pub async fn delete(pool: &SqlitePool, owner_id: i64, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM media_items WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await
            .context("failed to delete media item")?;

        Ok(result.rows_affected() > 0)
    }
}
