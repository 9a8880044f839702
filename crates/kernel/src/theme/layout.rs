//! Layout arrangement.
//!
//! A layout decides which block positions it shows and in which region. The
//! arrangement is pure: same layout and components, same regions.

use std::fmt;

use crate::content::{ContentBlock, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    SingleColumn,
    TwoColumn,
    HeroBanner,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::SingleColumn, Layout::TwoColumn, Layout::HeroBanner];

    /// Layout for a name; unrecognised names render as single-column.
    pub fn from_name(name: &str) -> Self {
        match name {
            "two-column" => Layout::TwoColumn,
            "hero-banner" => Layout::HeroBanner,
            _ => Layout::SingleColumn,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layout::SingleColumn => "single-column",
            Layout::TwoColumn => "two-column",
            Layout::HeroBanner => "hero-banner",
        }
    }

    /// Region names in template order.
    pub fn regions(self) -> &'static [&'static str] {
        match self {
            Layout::SingleColumn => &["stream"],
            Layout::TwoColumn => &["header", "hero", "main", "sidebar", "footer"],
            Layout::HeroBanner => &["hero", "header", "content", "footer"],
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named region and the blocks placed in it, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Region<'a> {
    pub name: &'static str,
    pub blocks: Vec<&'a ContentBlock>,
}

/// Blocks of a page distributed over a layout's regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement<'a> {
    pub layout: Layout,
    pub regions: Vec<Region<'a>>,
}

impl<'a> Arrangement<'a> {
    pub fn region(&self, name: &str) -> Option<&Region<'a>> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Ids in display order across all regions.
    pub fn ids(&self) -> Vec<i64> {
        self.regions
            .iter()
            .flat_map(|r| r.blocks.iter().map(|b| b.id))
            .collect()
    }
}

/// Single-column ordering. Positions without a slot sort last.
fn stream_priority(position: Position) -> u8 {
    match position {
        Position::Header => 1,
        Position::Hero => 2,
        Position::Content => 3,
        Position::Footer => 4,
        Position::Main | Position::Sidebar => 5,
    }
}

/// Region name a position lands in, `None` when the layout drops it.
fn region_for(layout: Layout, position: Position) -> Option<&'static str> {
    match (layout, position) {
        (Layout::SingleColumn, _) => Some("stream"),
        (Layout::TwoColumn, Position::Content) => None,
        (Layout::HeroBanner, Position::Main | Position::Sidebar) => None,
        (_, position) => Some(position.as_str()),
    }
}

/// Distribute `components` over the regions of `layout`.
pub fn arrange(layout: Layout, components: &[ContentBlock]) -> Arrangement<'_> {
    let mut regions: Vec<Region<'_>> = layout
        .regions()
        .iter()
        .map(|&name| Region {
            name,
            blocks: Vec::new(),
        })
        .collect();

    for block in components {
        let Some(target) = region_for(layout, block.position) else {
            continue;
        };
        if let Some(region) = regions.iter_mut().find(|r| r.name == target) {
            region.blocks.push(block);
        }
    }

    if layout == Layout::SingleColumn {
        for region in &mut regions {
            // sort_by_key is stable, so equal priorities keep list order
            region.blocks.sort_by_key(|b| stream_priority(b.position));
        }
    }

    Arrangement { layout, regions }
}
