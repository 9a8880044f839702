//! Website publishing.
//!
//! Builds the bundle a published website is generated from: the website's
//! theme variables plus every page with its components and rendered HTML.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use crate::content::{ContentBlock, Page};
use crate::models::{PageRecord, Website};
use crate::theme::{ThemeEngine, find_theme};

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Website not found")]
    WebsiteNotFound,

    #[error("Theme not found")]
    ThemeNotFound,

    #[error("No pages found for this website")]
    NoPages,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Generated description of a whole website.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBundle {
    pub website_name: String,
    pub domain: Option<String>,
    pub theme: String,
    pub css_variables: BTreeMap<&'static str, &'static str>,
    pub pages: Vec<BundlePage>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlePage {
    pub title: String,
    pub slug: String,
    pub is_homepage: bool,
    pub layout: String,
    pub content: Vec<ContentBlock>,
    pub meta_description: String,
    pub html: String,
}

/// Generate the bundle for a website. Pages come homepage first, then by title.
pub async fn generate_bundle(
    pool: &SqlitePool,
    engine: &ThemeEngine,
    website_id: i64,
) -> Result<SiteBundle, BundleError> {
    let website = Website::find_by_id(pool, website_id)
        .await?
        .ok_or(BundleError::WebsiteNotFound)?;

    let theme = find_theme(&website.theme).ok_or(BundleError::ThemeNotFound)?;

    let records = PageRecord::list_for_website(pool, website_id).await?;
    if records.is_empty() {
        return Err(BundleError::NoPages);
    }

    let mut pages = Vec::with_capacity(records.len());
    for record in records {
        let components = record.components()?;
        let page = Page::new(&record.layout, &website.theme, components);
        let html = engine.render_with_meta(&page, &record.title, Some(&record.meta_description))?;

        pages.push(BundlePage {
            title: record.title,
            slug: record.slug,
            is_homepage: record.is_homepage,
            layout: record.layout,
            content: page.components,
            meta_description: record.meta_description,
            html,
        });
    }

    info!(website_id, pages = pages.len(), "website bundle generated");

    Ok(SiteBundle {
        website_name: website.name,
        domain: website.domain,
        theme: theme.name.to_string(),
        css_variables: theme.style.css_variables(),
        pages,
    })
}
