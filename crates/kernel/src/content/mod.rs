//! Page content.
//!
//! This module provides:
//! - Block types: the typed content blocks a page is assembled from
//! - BlockRenderer: server-side HTML for each block
//! - ContentEditor: add, replace, delete and reorder blocks
//! - Page and its export artifact
//! - Sample content for layout previews

pub mod block_render;
pub mod block_types;
pub mod editor;
pub mod export;
pub mod page;
pub mod samples;

pub use block_render::{render_block, render_blocks};
pub use block_types::{BlockContent, BlockParseError, BlockType, ContentBlock, Position};
pub use editor::{ContentEditor, Direction, EditorError};
pub use export::{EXPORT_FILE_NAME, PageExport};
pub use page::{DEFAULT_LAYOUT, DEFAULT_THEME, Page};
pub use samples::sample_components;
