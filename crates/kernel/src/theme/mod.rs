//! Themes, layouts and page rendering.
//!
//! Provides the static theme catalogue, layout arrangement of content
//! blocks, and Tera-based rendering of whole pages.

mod catalog;
mod engine;
mod layout;

pub use catalog::{
    LayoutDefinition, ThemeDefinition, ThemeStyle, find_layout, find_theme, find_theme_by_id,
    layouts, resolve_theme, themes,
};
pub use engine::{DEFAULT_TITLE, ThemeEngine};
pub use layout::{Arrangement, Layout, Region, arrange};
