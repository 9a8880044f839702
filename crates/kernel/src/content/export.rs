//! Page export artifact.
//!
//! The export is the one externally meaningful shape a page has:
//! `{ theme, layout, components, exportDate }`, written as pretty JSON and
//! offered as a download.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::block_types::ContentBlock;
use super::editor::{ContentEditor, EditorError};
use super::page::Page;

/// File name offered for the download.
pub const EXPORT_FILE_NAME: &str = "website-export.json";

/// Serialized page definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageExport {
    pub theme: String,
    pub layout: String,
    pub components: Vec<ContentBlock>,
    pub export_date: DateTime<Utc>,
}

impl PageExport {
    /// Snapshot a page at `now`.
    pub fn from_page(page: &Page, now: DateTime<Utc>) -> Self {
        Self {
            theme: page.theme.clone(),
            layout: page.layout.clone(),
            components: page.components.clone(),
            export_date: now,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The page this artifact describes. Component ids must be unique.
    pub fn into_page(self) -> Result<Page, EditorError> {
        let components = ContentEditor::try_new(self.components)?.into_components();
        Ok(Page {
            layout: self.layout,
            theme: self.theme,
            components,
        })
    }
}
