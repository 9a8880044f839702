//! Built-in theme and layout catalogue.
//!
//! Themes are static style records; layouts list the themes they were
//! designed for. Compatibility is advisory and never blocks a selection.

use std::collections::BTreeMap;

use serde::Serialize;

/// Style attributes a theme applies to the page body.
///
/// Every field is optional: an unknown theme resolves to an empty style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    pub font_family: Option<&'static str>,
    pub primary_color: Option<&'static str>,
    pub secondary_color: Option<&'static str>,
    pub background_color: Option<&'static str>,
    pub text_color: Option<&'static str>,
}

impl ThemeStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Inline `style` attribute value for the page body, `None` when unstyled.
    pub fn inline_css(&self) -> Option<String> {
        let declarations: Vec<String> = [
            ("font-family", self.font_family),
            ("background-color", self.background_color),
            ("color", self.text_color),
            ("--primary-color", self.primary_color),
            ("--secondary-color", self.secondary_color),
        ]
        .into_iter()
        .filter_map(|(property, value)| value.map(|v| format!("{property}: {v}")))
        .collect();

        if declarations.is_empty() {
            None
        } else {
            Some(declarations.join("; "))
        }
    }

    /// CSS custom properties published with a generated site.
    pub fn css_variables(&self) -> BTreeMap<&'static str, &'static str> {
        [
            ("--font-family", self.font_family),
            ("--primary-color", self.primary_color),
            ("--secondary-color", self.secondary_color),
            ("--background-color", self.background_color),
            ("--text-color", self.text_color),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    pub id: i64,
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub preview_image_url: &'static str,
    pub style: ThemeStyle,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDefinition {
    pub id: i64,
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub preview_image_url: &'static str,
    pub compatible_themes: &'static [i64],
}

impl LayoutDefinition {
    /// True when no theme is selected or the layout lists the theme.
    pub fn is_compatible_with(&self, theme_id: Option<i64>) -> bool {
        theme_id.is_none_or(|id| self.compatible_themes.contains(&id))
    }
}

static THEMES: [ThemeDefinition; 3] = [
    ThemeDefinition {
        id: 1,
        name: "modern-business",
        label: "Modern Business",
        description: "A clean, professional theme for business websites",
        preview_image_url: "/themes/modern-business.jpg",
        style: ThemeStyle {
            font_family: Some("Arial, sans-serif"),
            primary_color: Some("#3b82f6"),
            secondary_color: Some("#1e3a8a"),
            background_color: Some("#ffffff"),
            text_color: Some("#333333"),
        },
    },
    ThemeDefinition {
        id: 2,
        name: "creative-portfolio",
        label: "Creative Portfolio",
        description: "Showcase your work with this artistic theme",
        preview_image_url: "/themes/creative-portfolio.jpg",
        style: ThemeStyle {
            font_family: Some("Georgia, serif"),
            primary_color: Some("#8b5cf6"),
            secondary_color: Some("#4c1d95"),
            background_color: Some("#f9fafb"),
            text_color: Some("#1f2937"),
        },
    },
    ThemeDefinition {
        id: 3,
        name: "e-commerce-store",
        label: "E-commerce Store",
        description: "Perfect for online shops and product catalogs",
        preview_image_url: "/themes/ecommerce-store.jpg",
        style: ThemeStyle {
            font_family: Some("Helvetica, sans-serif"),
            primary_color: Some("#10b981"),
            secondary_color: Some("#064e3b"),
            background_color: Some("#ffffff"),
            text_color: Some("#111827"),
        },
    },
];

static LAYOUTS: [LayoutDefinition; 3] = [
    LayoutDefinition {
        id: 1,
        name: "single-column",
        label: "Single Column",
        description: "Simple one-column layout for content-focused pages",
        preview_image_url: "/layouts/single-column.jpg",
        compatible_themes: &[1, 2, 3],
    },
    LayoutDefinition {
        id: 2,
        name: "two-column",
        label: "Two Column",
        description: "Two-column layout with sidebar",
        preview_image_url: "/layouts/two-column.jpg",
        compatible_themes: &[1, 3],
    },
    LayoutDefinition {
        id: 3,
        name: "hero-banner",
        label: "Hero Banner",
        description: "Large hero image with content sections below",
        preview_image_url: "/layouts/hero-banner.jpg",
        compatible_themes: &[1, 2],
    },
];

pub fn themes() -> &'static [ThemeDefinition] {
    &THEMES
}

pub fn layouts() -> &'static [LayoutDefinition] {
    &LAYOUTS
}

pub fn find_theme(name: &str) -> Option<&'static ThemeDefinition> {
    THEMES.iter().find(|t| t.name == name)
}

pub fn find_theme_by_id(id: i64) -> Option<&'static ThemeDefinition> {
    THEMES.iter().find(|t| t.id == id)
}

pub fn find_layout(name: &str) -> Option<&'static LayoutDefinition> {
    LAYOUTS.iter().find(|l| l.name == name)
}

/// Style record for a theme name. Unknown names yield an empty style.
pub fn resolve_theme(name: &str) -> ThemeStyle {
    find_theme(name).map(|t| t.style).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn resolves_builtin_palettes() {
        let style = resolve_theme("creative-portfolio");
        assert_eq!(style.font_family, Some("Georgia, serif"));
        assert_eq!(style.primary_color, Some("#8b5cf6"));
        assert_eq!(resolve_theme("modern-business").text_color, Some("#333333"));
        assert_eq!(resolve_theme("e-commerce-store").secondary_color, Some("#064e3b"));
    }

    #[test]
    fn unknown_theme_is_unstyled() {
        let style = resolve_theme("brutalist");
        assert!(style.is_empty());
        assert_eq!(style.inline_css(), None);
        assert!(style.css_variables().is_empty());
    }

    #[test]
    fn inline_css_lists_declarations() {
        let css = resolve_theme("modern-business").inline_css().unwrap();
        assert!(css.contains("font-family: Arial, sans-serif"));
        assert!(css.contains("background-color: #ffffff"));
        assert!(css.contains("color: #333333"));
        assert!(css.contains("--primary-color: #3b82f6"));
    }

    #[test]
    fn css_variables_cover_every_attribute() {
        let vars = resolve_theme("e-commerce-store").css_variables();
        assert_eq!(vars.len(), 5);
        assert_eq!(vars["--primary-color"], "#10b981");
        assert_eq!(vars["--font-family"], "Helvetica, sans-serif");
    }

    #[test]
    fn lookup_by_id_and_name_agree() {
        for theme in themes() {
            assert_eq!(find_theme_by_id(theme.id).unwrap().name, theme.name);
        }
        assert!(find_theme_by_id(99).is_none());
    }

    #[test]
    fn layout_compatibility_is_advisory() {
        let two_column = find_layout("two-column").unwrap();
        assert!(two_column.is_compatible_with(None));
        assert!(two_column.is_compatible_with(Some(1)));
        assert!(!two_column.is_compatible_with(Some(2)));

        let hero = find_layout("hero-banner").unwrap();
        assert!(!hero.is_compatible_with(Some(3)));
        assert!(find_layout("single-column").unwrap().is_compatible_with(Some(2)));
    }

    #[test]
    fn catalogue_serializes_camel_case() {
        let value = serde_json::to_value(layouts()[0]).unwrap();
        assert_eq!(value["previewImageUrl"], "/layouts/single-column.jpg");
        assert_eq!(value["compatibleThemes"], serde_json::json!([1, 2, 3]));
    }
}
