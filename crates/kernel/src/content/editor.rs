//! In-memory page editing.
//!
//! The editor owns the ordered component list of one page and applies the
//! operator's actions to it: add, replace content, delete, and move by one
//! slot. Every operation is synchronous and touches only the list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::block_types::{BlockContent, BlockType, ContentBlock, Position};

/// Errors raised by editor operations.
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("component {0} not found")]
    UnknownComponent(i64),

    #[error("component id {0} is used more than once")]
    DuplicateComponent(i64),

    #[error("no component id left after {0}")]
    IdExhausted(i64),

    #[error("component {id} is a {expected} block, got {actual} content")]
    TypeMismatch {
        id: i64,
        expected: String,
        actual: String,
    },
}

/// Direction of a single-slot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Ordered component list of the page being edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentEditor {
    components: Vec<ContentBlock>,
}

impl ContentEditor {
    pub fn new(components: Vec<ContentBlock>) -> Self {
        Self { components }
    }

    /// Build an editor over components whose ids must be unique.
    pub fn try_new(components: Vec<ContentBlock>) -> Result<Self, EditorError> {
        let mut seen = HashSet::with_capacity(components.len());
        if let Some(duplicate) = components.iter().find(|c| !seen.insert(c.id)) {
            return Err(EditorError::DuplicateComponent(duplicate.id));
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[ContentBlock] {
        &self.components
    }

    pub fn into_components(self) -> Vec<ContentBlock> {
        self.components
    }

    pub fn get(&self, id: i64) -> Option<&ContentBlock> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Id the next added component receives: one past the largest id in use.
    ///
    /// Ids of deleted components at the end of the list are handed out again;
    /// ids are only monotonic while nothing is removed.
    pub fn next_id(&self) -> Result<i64, EditorError> {
        let max = self.components.iter().map(|c| c.id).max().unwrap_or(0).max(0);
        max.checked_add(1).ok_or(EditorError::IdExhausted(max))
    }

    /// Append a component of `block_type` with its default content.
    pub fn add_component(
        &mut self,
        block_type: BlockType,
        position: Position,
    ) -> Result<&ContentBlock, EditorError> {
        let block = ContentBlock::new(
            self.next_id()?,
            position,
            BlockContent::default_for(block_type),
        );
        let index = self.components.len();
        self.components.push(block);
        Ok(&self.components[index])
    }

    /// Replace a component's content wholesale.
    ///
    /// The replacement must be of the same block type as the component.
    pub fn update_component(&mut self, id: i64, content: BlockContent) -> Result<(), EditorError> {
        let block = self
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(EditorError::UnknownComponent(id))?;

        if block.content.type_name() != content.type_name() {
            return Err(EditorError::TypeMismatch {
                id,
                expected: block.content.type_name().to_string(),
                actual: content.type_name().to_string(),
            });
        }

        block.content = content;
        Ok(())
    }

    /// Remove a component. Absent ids are a no-op.
    pub fn delete_component(&mut self, id: i64) -> Option<ContentBlock> {
        let index = self.components.iter().position(|c| c.id == id)?;
        Some(self.components.remove(index))
    }

    /// Swap a component with its neighbour in list order.
    ///
    /// Returns `false` without changing anything when the component is
    /// already at that end of the list or does not exist.
    pub fn move_component(&mut self, id: i64, direction: Direction) -> bool {
        let Some(index) = self.components.iter().position(|c| c.id == id) else {
            return false;
        };

        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|t| *t < self.components.len()),
        };

        match target {
            Some(target) => {
                self.components.swap(index, target);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::content::block_types::{HeaderContent, ParagraphContent};

    fn ids(editor: &ContentEditor) -> Vec<i64> {
        editor.components().iter().map(|c| c.id).collect()
    }

    fn editor_with(count: i64) -> ContentEditor {
        let mut editor = ContentEditor::default();
        for _ in 0..count {
            editor
                .add_component(BlockType::Paragraph, Position::Content)
                .unwrap();
        }
        editor
    }

    #[test]
    fn add_assigns_next_id() {
        let mut editor = ContentEditor::default();
        assert_eq!(
            editor
                .add_component(BlockType::Header, Position::Header)
                .unwrap()
                .id,
            1
        );
        assert_eq!(
            editor
                .add_component(BlockType::Image, Position::Content)
                .unwrap()
                .id,
            2
        );
        assert_eq!(ids(&editor), vec![1, 2]);
    }

    #[test]
    fn add_id_exceeds_every_existing_id() {
        let mut editor = ContentEditor::new(vec![
            ContentBlock::new(7, Position::Header, BlockContent::default_for(BlockType::Header)),
            ContentBlock::new(3, Position::Content, BlockContent::default_for(BlockType::Paragraph)),
        ]);
        let added = editor
            .add_component(BlockType::Button, Position::Footer)
            .unwrap()
            .id;
        assert_eq!(added, 8);
        assert!(editor.components().iter().filter(|c| c.id != added).all(|c| c.id < added));
    }

    #[test]
    fn add_uses_default_content_and_position() {
        let mut editor = ContentEditor::default();
        let block = editor
            .add_component(BlockType::Hero, Position::Hero)
            .unwrap()
            .clone();
        assert_eq!(block.position, Position::Hero);
        assert_eq!(block.content, BlockContent::default_for(BlockType::Hero));
    }

    #[test]
    fn add_after_largest_id_fails_without_change() {
        let mut editor = ContentEditor::new(vec![ContentBlock::new(
            i64::MAX,
            Position::Content,
            BlockContent::default_for(BlockType::Paragraph),
        )]);
        let result = editor
            .add_component(BlockType::Paragraph, Position::Content)
            .map(|block| block.id);
        assert_eq!(result, Err(EditorError::IdExhausted(i64::MAX)));
        assert_eq!(ids(&editor), vec![i64::MAX]);
    }

    #[test]
    fn try_new_rejects_duplicate_ids() {
        let paragraph = |id| {
            ContentBlock::new(
                id,
                Position::Content,
                BlockContent::default_for(BlockType::Paragraph),
            )
        };
        let result = ContentEditor::try_new(vec![paragraph(1), paragraph(2), paragraph(1)]);
        assert_eq!(result, Err(EditorError::DuplicateComponent(1)));

        let editor = ContentEditor::try_new(vec![paragraph(1), paragraph(2)]).unwrap();
        assert_eq!(ids(&editor), vec![1, 2]);
    }

    #[test]
    fn update_replaces_content() {
        let mut editor = editor_with(1);
        let content = BlockContent::Paragraph(ParagraphContent {
            text: "Edited".to_string(),
        });
        editor.update_component(1, content.clone()).unwrap();
        assert_eq!(editor.get(1).unwrap().content, content);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut editor = editor_with(1);
        let result = editor.update_component(
            9,
            BlockContent::Paragraph(ParagraphContent::default()),
        );
        assert_eq!(result, Err(EditorError::UnknownComponent(9)));
    }

    #[test]
    fn update_with_other_type_fails() {
        let mut editor = editor_with(1);
        let result = editor.update_component(1, BlockContent::Header(HeaderContent::default()));
        assert!(matches!(result, Err(EditorError::TypeMismatch { id: 1, .. })));
        assert_eq!(
            editor.get(1).unwrap().content,
            BlockContent::default_for(BlockType::Paragraph)
        );
    }

    #[test]
    fn delete_removes_only_that_component() {
        let mut editor = editor_with(3);
        let removed = editor.delete_component(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(ids(&editor), vec![1, 3]);
        assert!(editor.delete_component(2).is_none());
    }

    #[test]
    fn move_up_on_first_is_noop() {
        let mut editor = editor_with(3);
        assert!(!editor.move_component(1, Direction::Up));
        assert_eq!(ids(&editor), vec![1, 2, 3]);
    }

    #[test]
    fn move_down_on_last_is_noop() {
        let mut editor = editor_with(3);
        assert!(!editor.move_component(3, Direction::Down));
        assert_eq!(ids(&editor), vec![1, 2, 3]);
    }

    #[test]
    fn move_on_single_element_is_noop() {
        let mut editor = editor_with(1);
        assert!(!editor.move_component(1, Direction::Up));
        assert!(!editor.move_component(1, Direction::Down));
        assert_eq!(ids(&editor), vec![1]);
    }

    #[test]
    fn move_missing_id_is_noop() {
        let mut editor = editor_with(2);
        assert!(!editor.move_component(42, Direction::Down));
        assert_eq!(ids(&editor), vec![1, 2]);
    }

    #[test]
    fn move_swaps_neighbours() {
        let mut editor = editor_with(3);
        assert!(editor.move_component(2, Direction::Up));
        assert_eq!(ids(&editor), vec![2, 1, 3]);
        assert!(editor.move_component(2, Direction::Down));
        assert_eq!(ids(&editor), vec![1, 2, 3]);
    }

    #[test]
    fn move_down_then_up_restores_order() {
        let mut editor = editor_with(4);
        let before = ids(&editor);
        assert!(editor.move_component(2, Direction::Down));
        assert!(editor.move_component(2, Direction::Up));
        assert_eq!(ids(&editor), before);
    }

    #[test]
    fn serializes_as_plain_list() {
        let editor = editor_with(1);
        let value = serde_json::to_value(&editor).unwrap();
        assert!(value.is_array());
        let back: ContentEditor = serde_json::from_value(value).unwrap();
        assert_eq!(back, editor);
    }
}
