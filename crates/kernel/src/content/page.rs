//! Page definition: a layout, a theme, and the blocks placed on it.

use serde::{Deserialize, Serialize};

use super::block_types::ContentBlock;
use super::editor::ContentEditor;

/// Theme a new page starts with.
pub const DEFAULT_THEME: &str = "modern-business";

/// Layout a new page starts with.
pub const DEFAULT_LAYOUT: &str = "single-column";

/// A page as edited, previewed and exported.
///
/// `layout` and `theme` are kept as names: an unknown layout renders as
/// single-column and an unknown theme renders unstyled, neither is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub layout: String,
    pub theme: String,
    #[serde(default)]
    pub components: Vec<ContentBlock>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.to_string(),
            theme: DEFAULT_THEME.to_string(),
            components: Vec::new(),
        }
    }
}

impl Page {
    pub fn new(layout: &str, theme: &str, components: Vec<ContentBlock>) -> Self {
        Self {
            layout: layout.to_string(),
            theme: theme.to_string(),
            components,
        }
    }

    /// Run an editor operation against this page's components.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut ContentEditor) -> R) -> R {
        let mut editor = ContentEditor::new(std::mem::take(&mut self.components));
        let result = f(&mut editor);
        self.components = editor.into_components();
        result
    }
}
