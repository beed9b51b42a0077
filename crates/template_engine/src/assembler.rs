//! Template assembler: ordered block specs in, a draft page out

use crate::Result;
use chrono::{DateTime, Utc};
use page_model::{
    validate_block, Block, BlockContent, Page, PageMetadata, PageStatus, StyleDescriptor,
};
use serde::{Deserialize, Serialize};

/// One authored block, before position and identity are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpec {
    /// Explicit id; generated from the block type and position when absent
    pub id: Option<String>,
    #[serde(flatten)]
    pub content: BlockContent,
    pub styles: StyleDescriptor,
}

impl BlockSpec {
    pub fn new(content: BlockContent, styles: StyleDescriptor) -> Self {
        Self {
            id: None,
            content,
            styles,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Composes an ordered list of block specs into a draft [`Page`].
///
/// Assembly is pure: no I/O, and with an explicit [`Assembler::at`]
/// timestamp the same inputs always produce the same page.
#[derive(Debug, Clone)]
pub struct Assembler {
    meta: PageMetadata,
    page_id: Option<String>,
    timestamp: Option<DateTime<Utc>>,
}

impl Assembler {
    pub fn new(meta: PageMetadata) -> Self {
        Self {
            meta,
            page_id: None,
            timestamp: None,
        }
    }

    /// Override the generated page id
    pub fn with_page_id(mut self, id: impl Into<String>) -> Self {
        self.page_id = Some(id.into());
        self
    }

    /// Pin the creation timestamp instead of reading the clock
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build the page: each block gets `order` equal to its index, an id
    /// when the spec did not supply one, and is checked against its type's
    /// schema. The page starts life as a draft.
    pub fn assemble(&self, specs: Vec<BlockSpec>) -> Result<Page> {
        self.meta.validate()?;

        let timestamp = self.timestamp.unwrap_or_else(Utc::now);
        let mut blocks = Vec::with_capacity(specs.len());
        for (index, spec) in specs.into_iter().enumerate() {
            let BlockSpec { id, content, styles } = spec;
            let id = id.unwrap_or_else(|| format!("{}-{}", content.block_type(), index + 1));
            let block = Block::new(id, content, index, styles);
            validate_block(&block, index)?;
            blocks.push(block);
        }

        let page = Page {
            id: self
                .page_id
                .clone()
                .unwrap_or_else(|| format!("{}-{}", self.meta.slug, timestamp.timestamp())),
            title: self.meta.title.clone(),
            title_ar: self.meta.title_ar.clone(),
            title_en: self.meta.title_en.clone(),
            slug: self.meta.slug.clone(),
            status: PageStatus::Draft,
            created_at: timestamp,
            updated_at: timestamp,
            blocks,
        };
        page.validate()?;
        Ok(page)
    }
}
