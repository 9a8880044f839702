//! Stored pages of a website.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::content::ContentBlock;

/// Page record. `content` holds the component list as JSON.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: i64,
    pub website_id: i64,
    pub title: String,
    pub slug: String,
    pub layout: String,
    pub content: String,
    pub meta_description: String,
    pub is_homepage: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for saving a page.
#[derive(Debug, Clone)]
pub struct SavePage {
    pub website_id: i64,
    pub title: String,
    pub slug: String,
    pub layout: String,
    pub components: Vec<ContentBlock>,
    pub meta_description: String,
    pub is_homepage: bool,
}

impl PageRecord {
    /// Insert the page, or update the one already at `(website_id, slug)`.
    /// Returns the page id.
    pub async fn save(pool: &SqlitePool, input: SavePage) -> Result<i64> {
        let content =
            serde_json::to_string(&input.components).context("failed to serialize components")?;
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO pages
                (website_id, title, slug, layout, content, meta_description, is_homepage,
                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (website_id, slug) DO UPDATE SET
                title = excluded.title,
                layout = excluded.layout,
                content = excluded.content,
                meta_description = excluded.meta_description,
                is_homepage = excluded.is_homepage,
                updated_at = excluded.updated_at
            RETURNING id
            "#,
        )
        .bind(input.website_id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.layout)
        .bind(&content)
        .bind(&input.meta_description)
        .bind(input.is_homepage)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .context("failed to save page")?;

        tracing::debug!(page_id = id, website_id = input.website_id, slug = %input.slug, "page saved");
        Ok(id)
    }

    /// Pages of a website, homepage first, then by title.
    pub async fn list_for_website(pool: &SqlitePool, website_id: i64) -> Result<Vec<Self>> {
        let pages = sqlx::query_as::<_, PageRecord>(
            "SELECT * FROM pages WHERE website_id = ? ORDER BY is_homepage DESC, title ASC",
        )
        .bind(website_id)
        .fetch_all(pool)
        .await
        .context("failed to list pages")?;

        Ok(pages)
    }

    /// Parse the stored component list.
    pub fn components(&self) -> Result<Vec<ContentBlock>> {
        serde_json::from_str(&self.content)
            .with_context(|| format!("page {} has malformed content", self.id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::{BlockContent, BlockType, Position};
    use crate::db;
    use crate::models::user::{RegisterUser, User};
    use crate::models::website::{CreateWebsite, Website};

    async fn setup() -> (SqlitePool, i64) {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            ..Config::default()
        };
        let pool = db::create_pool(&config).await.unwrap();
        db::run_migrations(&pool).await.unwrap();

        let owner = User::register(
            &pool,
            RegisterUser {
                email: "owner@example.com".to_string(),
                password: "pw".to_string(),
                name: "Owner".to_string(),
                role: "client".to_string(),
            },
        )
        .await
        .unwrap();
        let website = Website::create(
            &pool,
            owner,
            CreateWebsite {
                name: "Shop".to_string(),
                domain: Some(String::new()),
                theme: "e-commerce-store".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(website.domain, None);
        assert!(!website.is_published);
        (pool, website.id)
    }

    fn save_input(website_id: i64, title: &str, slug: &str, homepage: bool) -> SavePage {
        SavePage {
            website_id,
            title: title.to_string(),
            slug: slug.to_string(),
            layout: "single-column".to_string(),
            components: vec![ContentBlock::new(
                1,
                Position::Header,
                BlockContent::default_for(BlockType::Header),
            )],
            meta_description: String::new(),
            is_homepage: homepage,
        }
    }

    #[tokio::test]
    async fn save_same_slug_updates_in_place() {
        let (pool, website_id) = setup().await;
        let first = PageRecord::save(&pool, save_input(website_id, "About", "about", false))
            .await
            .unwrap();
        let second = PageRecord::save(&pool, save_input(website_id, "About us", "about", false))
            .await
            .unwrap();
        assert_eq!(first, second);

        let pages = PageRecord::list_for_website(&pool, website_id).await.unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "About us");
        assert_eq!(pages[0].components().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_puts_homepage_first() {
        let (pool, website_id) = setup().await;
        for (title, slug, home) in [
            ("Zebra", "zebra", false),
            ("Home", "home", true),
            ("Apple", "apple", false),
        ] {
            PageRecord::save(&pool, save_input(website_id, title, slug, home))
                .await
                .unwrap();
        }

        let titles: Vec<String> = PageRecord::list_for_website(&pool, website_id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Home", "Apple", "Zebra"]);
    }

    #[tokio::test]
    async fn publish_flags_website() {
        let (pool, website_id) = setup().await;
        assert!(Website::publish(&pool, website_id).await.unwrap());
        assert!(Website::find_by_id(&pool, website_id).await.unwrap().unwrap().is_published);
        assert!(!Website::publish(&pool, website_id + 100).await.unwrap());
    }
}
