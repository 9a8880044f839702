//! Content block model.
//!
//! Provides:
//! - `BlockType` / `Position`: the fixed block types and layout slots
//! - `BlockContent`: one variant per block type, each carrying exactly its fields
//! - `ContentBlock`: a positioned block as stored in a page
//!
//! Blocks whose type tag is not recognised parse into
//! [`BlockContent::Unknown`] so they survive a round trip and still reach the
//! renderer's fallback.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Placeholder used by default image content.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x400";

/// Placeholder used by default hero backgrounds.
pub const PLACEHOLDER_HERO: &str = "https://via.placeholder.com/1920x600";

/// Placeholder used by default gallery images.
pub const PLACEHOLDER_GALLERY: &str = "https://via.placeholder.com/400x300";

/// Errors raised while building a block from its wire form.
#[derive(Debug, Error, PartialEq)]
pub enum BlockParseError {
    #[error("unknown block type '{0}'")]
    UnknownType(String),

    #[error("unknown position '{0}'")]
    UnknownPosition(String),

    #[error("invalid {block_type} content: {message}")]
    InvalidContent {
        block_type: BlockType,
        message: String,
    },
}

/// The block types an operator can place on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Header,
    Paragraph,
    Image,
    Button,
    Hero,
    Gallery,
    Contact,
}

impl BlockType {
    /// Every block type, in editor menu order.
    pub const ALL: [BlockType; 7] = [
        BlockType::Header,
        BlockType::Paragraph,
        BlockType::Image,
        BlockType::Button,
        BlockType::Hero,
        BlockType::Gallery,
        BlockType::Contact,
    ];

    /// Machine name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Paragraph => "paragraph",
            BlockType::Image => "image",
            BlockType::Button => "button",
            BlockType::Hero => "hero",
            BlockType::Gallery => "gallery",
            BlockType::Contact => "contact",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BlockType::Header => "Header",
            BlockType::Paragraph => "Paragraph",
            BlockType::Image => "Image",
            BlockType::Button => "Button",
            BlockType::Hero => "Hero Section",
            BlockType::Gallery => "Image Gallery",
            BlockType::Contact => "Contact Form",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = BlockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| BlockParseError::UnknownType(s.to_string()))
    }
}

/// Slot tag naming the layout region a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Header,
    Hero,
    Main,
    Sidebar,
    Content,
    Footer,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Header,
        Position::Hero,
        Position::Main,
        Position::Sidebar,
        Position::Content,
        Position::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Header => "header",
            Position::Hero => "hero",
            Position::Main => "main",
            Position::Sidebar => "sidebar",
            Position::Content => "content",
            Position::Footer => "footer",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = BlockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| BlockParseError::UnknownPosition(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Per-type payloads
// ---------------------------------------------------------------------------

/// Data: `{ "title": "...", "subtitle": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Data: `{ "text": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParagraphContent {
    pub text: String,
}

/// Data: `{ "src": "...", "alt": "...", "caption": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageContent {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Data: `{ "text": "...", "primary": true }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonContent {
    pub text: String,
    pub primary: bool,
}

/// Data: `{ "title", "subtitle", "buttonText", "backgroundImage" }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

/// One entry of a gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Data: `{ "title": "...", "images": [{ "src", "alt", "caption" }, ...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub images: Vec<GalleryImage>,
}

impl GalleryContent {
    /// Append a blank image for the operator to fill in.
    pub fn add_image(&mut self) {
        self.images.push(GalleryImage {
            src: String::new(),
            alt: Some(String::new()),
            caption: Some(String::new()),
        });
    }

    /// Remove the image at `index`, if there is one.
    pub fn remove_image(&mut self, index: usize) -> Option<GalleryImage> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }
}

/// Data: `{ "title": "...", "buttonText": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
}

/// Type-specific payload of a block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Header(HeaderContent),
    Paragraph(ParagraphContent),
    Image(ImageContent),
    Button(ButtonContent),
    Hero(HeroContent),
    Gallery(GalleryContent),
    Contact(ContactContent),
    /// A block whose type tag matched none of the known types.
    Unknown { type_name: String, content: Value },
}

impl BlockContent {
    /// Content a freshly added block of `block_type` starts with.
    pub fn default_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Header => BlockContent::Header(HeaderContent {
                title: "New Header".to_string(),
                subtitle: Some(String::new()),
            }),
            BlockType::Paragraph => BlockContent::Paragraph(ParagraphContent {
                text: "New paragraph text goes here.".to_string(),
            }),
            BlockType::Image => BlockContent::Image(ImageContent {
                src: PLACEHOLDER_IMAGE.to_string(),
                alt: Some("New image".to_string()),
                caption: Some(String::new()),
            }),
            BlockType::Button => BlockContent::Button(ButtonContent {
                text: "New Button".to_string(),
                primary: true,
            }),
            BlockType::Hero => BlockContent::Hero(HeroContent {
                title: "New Hero Section".to_string(),
                subtitle: Some("Add a subtitle here".to_string()),
                button_text: Some("Click Me".to_string()),
                background_image: Some(PLACEHOLDER_HERO.to_string()),
            }),
            BlockType::Gallery => BlockContent::Gallery(GalleryContent {
                title: Some("New Gallery".to_string()),
                images: (1..=2)
                    .map(|n| GalleryImage {
                        src: PLACEHOLDER_GALLERY.to_string(),
                        alt: Some(format!("Gallery image {n}")),
                        caption: Some(format!("Image {n}")),
                    })
                    .collect(),
            }),
            BlockType::Contact => BlockContent::Contact(ContactContent {
                title: Some("Contact Us".to_string()),
                button_text: Some("Send Message".to_string()),
            }),
        }
    }

    /// Build content from a type tag and its raw payload.
    ///
    /// Unrecognised tags become [`BlockContent::Unknown`]. A missing payload
    /// is treated as an empty object so every field falls back to its default.
    pub fn from_parts(type_name: &str, content: Value) -> Result<Self, BlockParseError> {
        let content = match content {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };

        let Ok(block_type) = type_name.parse::<BlockType>() else {
            return Ok(BlockContent::Unknown {
                type_name: type_name.to_string(),
                content,
            });
        };

        Ok(match block_type {
            BlockType::Header => BlockContent::Header(typed(block_type, content)?),
            BlockType::Paragraph => BlockContent::Paragraph(typed(block_type, content)?),
            BlockType::Image => BlockContent::Image(typed(block_type, content)?),
            BlockType::Button => BlockContent::Button(typed(block_type, content)?),
            BlockType::Hero => BlockContent::Hero(typed(block_type, content)?),
            BlockType::Gallery => BlockContent::Gallery(typed(block_type, content)?),
            BlockType::Contact => BlockContent::Contact(typed(block_type, content)?),
        })
    }

    /// The block type, or `None` for unknown content.
    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            BlockContent::Header(_) => Some(BlockType::Header),
            BlockContent::Paragraph(_) => Some(BlockType::Paragraph),
            BlockContent::Image(_) => Some(BlockType::Image),
            BlockContent::Button(_) => Some(BlockType::Button),
            BlockContent::Hero(_) => Some(BlockType::Hero),
            BlockContent::Gallery(_) => Some(BlockType::Gallery),
            BlockContent::Contact(_) => Some(BlockType::Contact),
            BlockContent::Unknown { .. } => None,
        }
    }

    /// The type tag as it appears on the wire.
    pub fn type_name(&self) -> &str {
        match self {
            BlockContent::Unknown { type_name, .. } => type_name,
            known => known.block_type().map(BlockType::as_str).unwrap_or_default(),
        }
    }

    /// The payload as raw JSON.
    pub fn to_value(&self) -> Value {
        let value = match self {
            BlockContent::Header(c) => serde_json::to_value(c),
            BlockContent::Paragraph(c) => serde_json::to_value(c),
            BlockContent::Image(c) => serde_json::to_value(c),
            BlockContent::Button(c) => serde_json::to_value(c),
            BlockContent::Hero(c) => serde_json::to_value(c),
            BlockContent::Gallery(c) => serde_json::to_value(c),
            BlockContent::Contact(c) => serde_json::to_value(c),
            BlockContent::Unknown { content, .. } => return content.clone(),
        };
        value.unwrap_or_default()
    }
}

fn typed<T: DeserializeOwned>(block_type: BlockType, content: Value) -> Result<T, BlockParseError> {
    serde_json::from_value(content).map_err(|e| BlockParseError::InvalidContent {
        block_type,
        message: e.to_string(),
    })
}

/// A positioned block on a page.
///
/// Wire form: `{ "id": 1, "type": "header", "position": "header", "content": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub struct ContentBlock {
    pub id: i64,
    pub position: Position,
    pub content: BlockContent,
}

impl ContentBlock {
    pub fn new(id: i64, position: Position, content: BlockContent) -> Self {
        Self {
            id,
            position,
            content,
        }
    }

    pub fn block_type(&self) -> Option<BlockType> {
        self.content.block_type()
    }
}

#[derive(Serialize, Deserialize)]
struct RawBlock {
    id: i64,
    #[serde(rename = "type")]
    block_type: String,
    position: Position,
    #[serde(default)]
    content: Value,
}

impl TryFrom<RawBlock> for ContentBlock {
    type Error = BlockParseError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        Ok(ContentBlock {
            id: raw.id,
            position: raw.position,
            content: BlockContent::from_parts(&raw.block_type, raw.content)?,
        })
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        RawBlock {
            id: block.id,
            block_type: block.content.type_name().to_string(),
            position: block.position,
            content: block.content.to_value(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_header_block() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": 1,
            "type": "header",
            "position": "header",
            "content": { "title": "My Website", "subtitle": "Welcome" }
        }))
        .unwrap();

        assert_eq!(block.id, 1);
        assert_eq!(block.position, Position::Header);
        assert_eq!(
            block.content,
            BlockContent::Header(HeaderContent {
                title: "My Website".to_string(),
                subtitle: Some("Welcome".to_string()),
            })
        );
    }

    #[test]
    fn parse_hero_uses_camel_case_fields() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": 7,
            "type": "hero",
            "position": "hero",
            "content": {
                "title": "Big",
                "buttonText": "Go",
                "backgroundImage": "https://example.com/bg.jpg"
            }
        }))
        .unwrap();

        let BlockContent::Hero(hero) = block.content else {
            panic!("expected hero content");
        };
        assert_eq!(hero.button_text.as_deref(), Some("Go"));
        assert_eq!(
            hero.background_image.as_deref(),
            Some("https://example.com/bg.jpg")
        );
        assert!(hero.subtitle.is_none());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": 2,
            "type": "paragraph",
            "position": "content"
        }))
        .unwrap();
        assert_eq!(
            block.content,
            BlockContent::Paragraph(ParagraphContent::default())
        );
    }

    #[test]
    fn unknown_type_is_preserved() {
        let raw = json!({
            "id": 3,
            "type": "carousel",
            "position": "main",
            "content": { "slides": [1, 2, 3] }
        });
        let block: ContentBlock = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(block.block_type(), None);
        assert_eq!(block.content.type_name(), "carousel");
        assert_eq!(serde_json::to_value(&block).unwrap(), raw);
    }

    #[test]
    fn unknown_type_without_content_gets_empty_object() {
        let block: ContentBlock = serde_json::from_value(json!({
            "id": 5,
            "type": "spacer",
            "position": "content"
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "id": 5,
                "type": "spacer",
                "position": "content",
                "content": {}
            })
        );
    }

    #[test]
    fn unknown_position_is_rejected() {
        let result = serde_json::from_value::<ContentBlock>(json!({
            "id": 1,
            "type": "paragraph",
            "position": "banner",
            "content": { "text": "x" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn non_object_content_is_rejected() {
        let result = serde_json::from_value::<ContentBlock>(json!({
            "id": 1,
            "type": "gallery",
            "position": "content",
            "content": "not an object"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid gallery content"), "got: {err}");
    }

    #[test]
    fn serialized_shape_matches_wire_form() {
        let block = ContentBlock::new(
            4,
            Position::Content,
            BlockContent::Button(ButtonContent {
                text: "Learn More".to_string(),
                primary: true,
            }),
        );
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "id": 4,
                "type": "button",
                "position": "content",
                "content": { "text": "Learn More", "primary": true }
            })
        );
    }

    #[test]
    fn default_content_matches_type() {
        for block_type in BlockType::ALL {
            let content = BlockContent::default_for(block_type);
            assert_eq!(content.block_type(), Some(block_type));
            assert_eq!(content.type_name(), block_type.as_str());
        }
    }

    #[test]
    fn default_gallery_has_two_images() {
        let BlockContent::Gallery(gallery) = BlockContent::default_for(BlockType::Gallery) else {
            panic!("expected gallery");
        };
        assert_eq!(gallery.images.len(), 2);
        assert_eq!(gallery.images[1].caption.as_deref(), Some("Image 2"));
    }

    #[test]
    fn gallery_add_and_remove_images() {
        let mut gallery = GalleryContent::default();
        gallery.add_image();
        gallery.add_image();
        assert_eq!(gallery.images.len(), 2);
        assert_eq!(gallery.images[0].src, "");

        assert!(gallery.remove_image(5).is_none());
        assert!(gallery.remove_image(0).is_some());
        assert_eq!(gallery.images.len(), 1);
    }

    #[test]
    fn block_type_and_position_parse() {
        assert_eq!("gallery".parse::<BlockType>().unwrap(), BlockType::Gallery);
        assert_eq!(
            "slider".parse::<BlockType>(),
            Err(BlockParseError::UnknownType("slider".to_string()))
        );
        assert_eq!("sidebar".parse::<Position>().unwrap(), Position::Sidebar);
        assert!("banner".parse::<Position>().is_err());
    }
}
