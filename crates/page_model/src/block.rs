//! Block: one positioned content unit within a page

use crate::{BlockContent, BlockType, StyleDescriptor};
use serde::{Deserialize, Serialize};

/// A typed, ordered, styled content unit.
///
/// `id` is unique within the owning page. `order` equals the block's
/// zero-based position in the page's block list; the assembler assigns it
/// and validation rejects any drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub content: BlockContent,
    pub order: usize,
    pub styles: StyleDescriptor,
}

impl Block {
    pub fn new(
        id: impl Into<String>,
        content: BlockContent,
        order: usize,
        styles: StyleDescriptor,
    ) -> Self {
        Self {
            id: id.into(),
            content,
            order,
            styles,
        }
    }

    /// The type tag of this block's content
    pub fn block_type(&self) -> BlockType {
        self.content.block_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeroContent;

    fn hero_block() -> Block {
        Block::new(
            "hero-1",
            BlockContent::Hero(HeroContent {
                title: "Welcome to Our School".to_string(),
                ..Default::default()
            }),
            0,
            StyleDescriptor::default(),
        )
    }

    #[test]
    fn test_block_type() {
        assert_eq!(hero_block().block_type(), BlockType::Hero);
    }

    #[test]
    fn test_wire_shape_keeps_type_and_content_siblings() {
        let json = serde_json::to_value(hero_block()).unwrap();
        assert_eq!(json["id"], "hero-1");
        assert_eq!(json["type"], "hero");
        assert_eq!(json["order"], 0);
        assert_eq!(json["content"]["title"], "Welcome to Our School");
        assert!(json["styles"].is_object());
    }

    #[test]
    fn test_block_round_trip() {
        let block = hero_block();
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }
}
