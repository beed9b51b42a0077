//! Block type registry
//!
//! Declares, per block type, which content fields are translatable copy and
//! which are opaque data (identifiers, URLs, icon names, numeric ratings),
//! plus which fields the authoring dashboard must fill before a block is
//! accepted. This is the single source of truth for the copy/opaque split;
//! the overlay engine's per-variant match is cross-checked against it in
//! tests so the two can never silently drift apart.

use crate::{Block, BlockType, PageModelError, Result};

/// Field classification for the elements of a list-valued payload
#[derive(Debug, Clone, Copy)]
pub struct ItemSchema {
    /// Wire name of the list field ("items" or "images")
    pub list_field: &'static str,
    pub required: &'static [&'static str],
    pub translatable: &'static [&'static str],
    pub opaque: &'static [&'static str],
}

/// Field classification for one block type
#[derive(Debug, Clone, Copy)]
pub struct BlockSchema {
    pub block_type: BlockType,
    /// Scalar fields that must be non-empty in the canonical authoring language
    pub required: &'static [&'static str],
    /// Scalar fields holding user-facing copy
    pub translatable: &'static [&'static str],
    /// Scalar fields that must pass through translation byte-identical
    pub opaque: &'static [&'static str],
    pub items: Option<ItemSchema>,
}

const HERO: BlockSchema = BlockSchema {
    block_type: BlockType::Hero,
    required: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
        "image", "ctaText", "ctaTextAr", "ctaLink",
    ],
    translatable: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
        "ctaText", "ctaTextAr",
    ],
    opaque: &["image", "ctaLink"],
    items: None,
};

const FEATURES: BlockSchema = BlockSchema {
    block_type: BlockType::Features,
    required: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
        "image",
    ],
    translatable: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
    ],
    opaque: &["image"],
    items: Some(ItemSchema {
        list_field: "items",
        required: &["title", "titleAr", "description", "descriptionAr", "icon"],
        translatable: &["title", "titleAr", "description", "descriptionAr"],
        opaque: &["icon"],
    }),
};

const CARDS: BlockSchema = BlockSchema {
    block_type: BlockType::Cards,
    required: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
    ],
    translatable: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
    ],
    opaque: &[],
    items: Some(ItemSchema {
        list_field: "items",
        required: &["title", "titleAr", "description", "descriptionAr", "image", "link"],
        translatable: &["title", "titleAr", "description", "descriptionAr"],
        opaque: &["image", "link"],
    }),
};

const GALLERY: BlockSchema = BlockSchema {
    block_type: BlockType::Gallery,
    required: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
    ],
    translatable: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
    ],
    opaque: &[],
    items: Some(ItemSchema {
        list_field: "images",
        required: &["url", "title", "titleAr", "description", "descriptionAr", "category"],
        translatable: &["title", "titleAr", "description", "descriptionAr"],
        opaque: &["url", "category"],
    }),
};

const TESTIMONIALS: BlockSchema = BlockSchema {
    block_type: BlockType::Testimonials,
    required: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
    ],
    translatable: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
    ],
    opaque: &[],
    items: Some(ItemSchema {
        list_field: "items",
        required: &["name", "nameAr", "image", "comment", "commentAr"],
        translatable: &["name", "nameAr", "comment", "commentAr"],
        // rating is numeric and never enters the translation map
        opaque: &["image", "rating"],
    }),
};

const CTA: BlockSchema = BlockSchema {
    block_type: BlockType::Cta,
    required: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
        "ctaText", "ctaTextAr", "ctaLink", "image",
    ],
    translatable: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
        "ctaText", "ctaTextAr",
    ],
    opaque: &["ctaLink", "image"],
    items: None,
};

const CONTACT: BlockSchema = BlockSchema {
    block_type: BlockType::Contact,
    required: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
        "phone", "email", "address", "addressAr", "hours", "hoursAr",
    ],
    // phone and email are copy: authors register them in the map, usually
    // mapped to themselves, so formatting stays an authoring decision
    translatable: &[
        "title", "titleAr", "subtitle", "subtitleAr", "description", "descriptionAr",
        "phone", "email", "address", "addressAr", "hours", "hoursAr",
    ],
    opaque: &[],
    items: None,
};

/// Schema for a block type
pub fn schema_for(block_type: BlockType) -> &'static BlockSchema {
    match block_type {
        BlockType::Hero => &HERO,
        BlockType::Features => &FEATURES,
        BlockType::Cards => &CARDS,
        BlockType::Gallery => &GALLERY,
        BlockType::Testimonials => &TESTIMONIALS,
        BlockType::Cta => &CTA,
        BlockType::Contact => &CONTACT,
    }
}

/// Check that every field required by the block's declared type is present
/// and non-empty, including each element of list-valued content.
///
/// `block_index` is the block's position in the page, used only for error
/// reporting.
pub fn validate_block(block: &Block, block_index: usize) -> Result<()> {
    let schema = schema_for(block.block_type());

    for &field in schema.required {
        let missing = block
            .content
            .scalar(field)
            .map_or(true, |value| value.is_empty());
        if missing {
            return Err(PageModelError::MissingField {
                block_index,
                field: field.to_string(),
            });
        }
    }

    if let Some(item_schema) = &schema.items {
        for index in 0..block.content.item_count() {
            for &field in item_schema.required {
                let missing = block
                    .content
                    .item_scalar(index, field)
                    .map_or(true, |value| value.is_empty());
                if missing {
                    return Err(PageModelError::MissingField {
                        block_index,
                        field: format!("{}[{}].{}", item_schema.list_field, index, field),
                    });
                }
            }
        }
    }

    Ok(())
}
