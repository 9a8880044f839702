//! Sample content shown when previewing a layout before any editing.

use super::block_types::{
    BlockContent, ButtonContent, ContactContent, ContentBlock, GalleryContent, GalleryImage,
    HeaderContent, HeroContent, ImageContent, PLACEHOLDER_GALLERY, PLACEHOLDER_HERO,
    ParagraphContent, Position,
};
use crate::theme::Layout;

/// Sample components for `layout`, numbered from 1.
pub fn sample_components(layout: Layout) -> Vec<ContentBlock> {
    let parts = match layout {
        Layout::SingleColumn => vec![
            (
                Position::Header,
                header("My Website", "Welcome to my professional website"),
            ),
            (
                Position::Content,
                paragraph(
                    "This is a sample paragraph for the single column layout. Here you can add \
                     your main content that will be displayed to visitors.",
                ),
            ),
            (
                Position::Content,
                image(
                    "https://via.placeholder.com/800x400",
                    "Sample image",
                    "This is a sample image",
                ),
            ),
            (Position::Content, button("Learn More")),
        ],
        Layout::TwoColumn => vec![
            (
                Position::Header,
                header("Two Column Layout", "Main content and sidebar"),
            ),
            (
                Position::Main,
                paragraph(
                    "This is the main content area in a two-column layout. It takes up more \
                     space and is ideal for your primary content.",
                ),
            ),
            (
                Position::Main,
                image(
                    "https://via.placeholder.com/600x300",
                    "Main content image",
                    "Main content image",
                ),
            ),
            (
                Position::Sidebar,
                paragraph(
                    "This is the sidebar content. It's great for secondary information, \
                     navigation, or calls to action.",
                ),
            ),
            (Position::Sidebar, button("Contact Us")),
        ],
        Layout::HeroBanner => vec![
            (
                Position::Hero,
                BlockContent::Hero(HeroContent {
                    title: "Welcome to My Website".to_string(),
                    subtitle: Some("A beautiful hero banner layout".to_string()),
                    button_text: Some("Get Started".to_string()),
                    background_image: Some(PLACEHOLDER_HERO.to_string()),
                }),
            ),
            (
                Position::Content,
                paragraph(
                    "This layout features a prominent hero banner at the top, followed by your \
                     main content. It's perfect for making a strong first impression.",
                ),
            ),
            (
                Position::Content,
                BlockContent::Gallery(GalleryContent {
                    title: Some("Image Gallery".to_string()),
                    images: (1..=3)
                        .map(|n| GalleryImage {
                            src: PLACEHOLDER_GALLERY.to_string(),
                            alt: Some(format!("Gallery image {n}")),
                            caption: Some(format!("Image {n}")),
                        })
                        .collect(),
                }),
            ),
            (
                Position::Footer,
                BlockContent::Contact(ContactContent {
                    title: Some("Get In Touch".to_string()),
                    button_text: Some("Send".to_string()),
                }),
            ),
        ],
    };

    parts
        .into_iter()
        .zip(1..)
        .map(|((position, content), id)| ContentBlock::new(id, position, content))
        .collect()
}

fn header(title: &str, subtitle: &str) -> BlockContent {
    BlockContent::Header(HeaderContent {
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
    })
}

fn paragraph(text: &str) -> BlockContent {
    BlockContent::Paragraph(ParagraphContent {
        text: text.to_string(),
    })
}

fn image(src: &str, alt: &str, caption: &str) -> BlockContent {
    BlockContent::Image(ImageContent {
        src: src.to_string(),
        alt: Some(alt.to_string()),
        caption: Some(caption.to_string()),
    })
}

fn button(text: &str) -> BlockContent {
    BlockContent::Button(ButtonContent {
        text: text.to_string(),
        primary: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::arrange;

    #[test]
    fn every_sample_block_is_shown_by_its_layout() {
        for layout in Layout::ALL {
            let components = sample_components(layout);
            let shown: usize = arrange(layout, &components)
                .regions
                .iter()
                .map(|r| r.blocks.len())
                .sum();
            assert_eq!(shown, components.len(), "{layout:?} drops sample content");
        }
    }

    #[test]
    fn sample_ids_are_sequential() {
        let ids: Vec<i64> = sample_components(Layout::HeroBanner)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
