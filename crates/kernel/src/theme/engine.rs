//! Theme engine with Tera templates and layout template suggestions.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tera::Tera;
use tracing::debug;

use crate::content::{Page, render_blocks, sample_components};

use super::catalog::resolve_theme;
use super::layout::{Layout, arrange};

/// Templates compiled into the binary, used when no directory is configured.
const BUILTIN_TEMPLATES: [(&str, &str); 4] = [
    (
        "page/base.html",
        include_str!("../../templates/page/base.html"),
    ),
    (
        "page/layouts/single-column.html",
        include_str!("../../templates/page/layouts/single-column.html"),
    ),
    (
        "page/layouts/two-column.html",
        include_str!("../../templates/page/layouts/two-column.html"),
    ),
    (
        "page/layouts/hero-banner.html",
        include_str!("../../templates/page/layouts/hero-banner.html"),
    ),
];

/// Title used when a page is rendered without one.
pub const DEFAULT_TITLE: &str = "Website Preview";

/// Theme engine for rendering pages.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
}

impl ThemeEngine {
    /// Create a new theme engine loading templates from the given directory.
    pub fn new(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;

        let template_names: Vec<_> = tera.get_template_names().collect();
        debug!(count = template_names.len(), "loaded templates");

        Ok(Self { tera })
    }

    /// Create a theme engine from the embedded templates.
    pub fn builtin() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES)
            .context("failed to load built-in templates")?;
        Ok(Self { tera })
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    pub fn resolve_template(&self, suggestions: &[String]) -> Option<String> {
        suggestions
            .iter()
            .map(|s| format!("{s}.html"))
            .find(|name| self.tera.get_template(name).is_ok())
    }

    /// Template suggestions for a layout, most specific first:
    /// - `page/layouts/{layout}--{theme}`
    /// - `page/layouts/{layout}`
    pub fn layout_suggestions(layout: Layout, theme: &str) -> Vec<String> {
        vec![
            format!("page/layouts/{}--{theme}", layout.name()),
            format!("page/layouts/{}", layout.name()),
        ]
    }

    /// Render a page as a complete HTML document.
    pub fn render_page(&self, page: &Page, title: &str) -> Result<String> {
        self.render_with_meta(page, title, None)
    }

    /// Render a page, adding a meta description to the document head.
    pub fn render_with_meta(
        &self,
        page: &Page,
        title: &str,
        meta_description: Option<&str>,
    ) -> Result<String> {
        let layout = Layout::from_name(&page.layout);
        let arrangement = arrange(layout, &page.components);

        let regions: HashMap<&str, String> = arrangement
            .regions
            .iter()
            .map(|region| (region.name, render_blocks(region.blocks.iter().copied())))
            .collect();

        let template = self
            .resolve_template(&Self::layout_suggestions(layout, &page.theme))
            .with_context(|| format!("no template for layout {layout}"))?;

        let mut context = tera::Context::new();
        context.insert("title", title);
        context.insert("meta_description", &meta_description.filter(|d| !d.is_empty()));
        context.insert("theme", &page.theme);
        context.insert("layout", layout.name());
        context.insert("page_style", &resolve_theme(&page.theme).inline_css());
        context.insert("regions", &regions);

        self.tera
            .render(&template, &context)
            .context("failed to render page template")
    }

    /// Render the sample content of a layout under a theme.
    pub fn render_preview(&self, layout: &str, theme: &str) -> Result<String> {
        let layout = Layout::from_name(layout);
        let page = Page::new(layout.name(), theme, sample_components(layout));
        self.render_page(&page, DEFAULT_TITLE)
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}
