//! Server-side block rendering.
//!
//! Converts typed block content into HTML fragments:
//! - Header, paragraph, image, button, hero, gallery, contact form
//! - Unknown block types render a visible fallback instead of failing
//!
//! Content shape is never validated here. Optional fields that are absent or
//! empty are left out of the markup; every piece of operator text is escaped.

use crate::content::block_types::{
    BlockContent, ButtonContent, ContactContent, ContentBlock, GalleryContent, HeaderContent,
    HeroContent, ImageContent, ParagraphContent,
};
use crate::routes::helpers::html_escape;

/// Render a list of blocks into a single HTML string, in the given order.
pub fn render_blocks<'a>(blocks: impl IntoIterator<Item = &'a ContentBlock>) -> String {
    blocks
        .into_iter()
        .map(|block| render_block(&block.content))
        .collect()
}

/// Render one block's content.
pub fn render_block(content: &BlockContent) -> String {
    match content {
        BlockContent::Header(c) => render_header(c),
        BlockContent::Paragraph(c) => render_paragraph(c),
        BlockContent::Image(c) => render_image(c),
        BlockContent::Button(c) => render_button(c),
        BlockContent::Hero(c) => render_hero(c),
        BlockContent::Gallery(c) => render_gallery(c),
        BlockContent::Contact(c) => render_contact(c),
        BlockContent::Unknown { type_name, .. } => render_unknown(type_name),
    }
}

/// `Some` only for a present, non-empty value.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Individual block renderers
// ---------------------------------------------------------------------------

fn render_header(c: &HeaderContent) -> String {
    let mut html = format!(
        "<header class=\"block block--header\"><h1>{}</h1>",
        html_escape(&c.title)
    );
    if let Some(subtitle) = present(&c.subtitle) {
        html.push_str(&format!("<p class=\"subtitle\">{}</p>", html_escape(subtitle)));
    }
    html.push_str("</header>");
    html
}

fn render_paragraph(c: &ParagraphContent) -> String {
    format!(
        "<div class=\"block block--paragraph\"><p>{}</p></div>",
        html_escape(&c.text)
    )
}

fn render_image(c: &ImageContent) -> String {
    let mut html = format!(
        "<div class=\"block block--image\"><img src=\"{}\" alt=\"{}\">",
        html_escape(&c.src),
        html_escape(c.alt.as_deref().unwrap_or_default())
    );
    if let Some(caption) = present(&c.caption) {
        html.push_str(&format!("<p class=\"caption\">{}</p>", html_escape(caption)));
    }
    html.push_str("</div>");
    html
}

fn render_button(c: &ButtonContent) -> String {
    let variant = if c.primary {
        "button--primary"
    } else {
        "button--secondary"
    };
    format!(
        "<div class=\"block block--button\"><button type=\"button\" class=\"button {variant}\">{}</button></div>",
        html_escape(&c.text)
    )
}

fn render_hero(c: &HeroContent) -> String {
    let style = present(&c.background_image)
        .map(|url| format!(" style=\"background-image: url('{}')\"", html_escape(url)))
        .unwrap_or_default();

    let mut html = format!(
        "<section class=\"block block--hero\"{style}><div class=\"container\"><h1>{}</h1>",
        html_escape(&c.title)
    );
    if let Some(subtitle) = present(&c.subtitle) {
        html.push_str(&format!("<p class=\"subtitle\">{}</p>", html_escape(subtitle)));
    }
    if let Some(button_text) = present(&c.button_text) {
        html.push_str(&format!(
            "<button type=\"button\" class=\"button button--primary\">{}</button>",
            html_escape(button_text)
        ));
    }
    html.push_str("</div></section>");
    html
}

/// Images are rendered in the given order; no dedup, no limit.
fn render_gallery(c: &GalleryContent) -> String {
    let mut html = String::from("<div class=\"block block--gallery\">");
    if let Some(title) = present(&c.title) {
        html.push_str(&format!("<h2>{}</h2>", html_escape(title)));
    }
    html.push_str("<div class=\"gallery-grid\">");
    for image in &c.images {
        html.push_str(&format!(
            "<figure><img src=\"{}\" alt=\"{}\">",
            html_escape(&image.src),
            html_escape(image.alt.as_deref().unwrap_or_default())
        ));
        if let Some(caption) = present(&image.caption) {
            html.push_str(&format!("<figcaption>{}</figcaption>", html_escape(caption)));
        }
        html.push_str("</figure>");
    }
    html.push_str("</div></div>");
    html
}

fn render_contact(c: &ContactContent) -> String {
    let title = present(&c.title).unwrap_or("Contact Us");
    let button_text = present(&c.button_text).unwrap_or("Send Message");
    format!(
        "<div class=\"block block--contact\"><h2>{}</h2>\
         <form class=\"contact-form\">\
         <label>Name<input type=\"text\" name=\"name\"></label>\
         <label>Email<input type=\"email\" name=\"email\"></label>\
         <label>Message<textarea name=\"message\" rows=\"4\"></textarea></label>\
         <button type=\"button\" class=\"button button--primary\">{}</button>\
         </form></div>",
        html_escape(title),
        html_escape(button_text)
    )
}

fn render_unknown(type_name: &str) -> String {
    format!(
        "<div class=\"block block--unknown\">Unknown component type: {}</div>",
        html_escape(type_name)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
