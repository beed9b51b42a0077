//! Page aggregate: ordered blocks plus page-level metadata

use crate::{Block, PageModelError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Publication state of a page.
///
/// The core only ever creates pages as `Draft`; moving a page forward is a
/// dashboard action, and no transform in this workspace reads the status to
/// change its own behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
    Archived,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
            PageStatus::Archived => "archived",
        }
    }

    /// Whether the dashboard may move a page from this status to `next`.
    ///
    /// Pure predicate; the transition itself happens outside the core.
    pub fn can_transition_to(self, next: PageStatus) -> bool {
        matches!(
            (self, next),
            (PageStatus::Draft, PageStatus::Published)
                | (PageStatus::Published, PageStatus::Archived)
                | (PageStatus::Draft, PageStatus::Archived)
        )
    }
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Page-level copy and routing metadata supplied by the author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub title_ar: String,
    pub title_en: String,
    pub slug: String,
}

impl PageMetadata {
    pub fn new(
        title: impl Into<String>,
        title_ar: impl Into<String>,
        title_en: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            title_ar: title_ar.into(),
            title_en: title_en.into(),
            slug: slug.into(),
        }
    }

    /// Check that the slug is a routable URL path segment
    pub fn validate(&self) -> Result<()> {
        match regex_lite::Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$") {
            Ok(re) if re.is_match(&self.slug) => Ok(()),
            _ => Err(PageModelError::InvalidSlug(self.slug.clone())),
        }
    }
}

/// A page template: ordered, versioned container of blocks.
///
/// The canonical exchange format is a single UTF-8 JSON document, produced
/// by [`Page::to_json`] and re-hydrated loss-free by [`Page::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub title_ar: String,
    pub title_en: String,
    pub slug: String,
    pub status: PageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub blocks: Vec<Block>,
}

impl Page {
    /// Number of blocks on the page
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Find a block by id
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Check the structural invariants: block ids unique across the page,
    /// and every block's `order` equal to its position in the list.
    ///
    /// Violations are reported, never auto-corrected.
    pub fn validate(&self) -> Result<()> {
        let mut seen_ids = HashSet::new();
        let mut seen_orders = HashSet::new();
        for (index, block) in self.blocks.iter().enumerate() {
            if !seen_ids.insert(block.id.as_str()) {
                return Err(PageModelError::DuplicateId(block.id.clone()));
            }
            if !seen_orders.insert(block.order) {
                return Err(PageModelError::DuplicateOrder(block.order));
            }
            if block.order != index {
                return Err(PageModelError::OrderOutOfSequence {
                    index,
                    order: block.order,
                });
            }
        }
        Ok(())
    }

    /// Serialize to the canonical single-document JSON form.
    ///
    /// Non-ASCII copy (Arabic text in particular) is emitted literally,
    /// not `\u`-escaped, so stored documents stay readable.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Re-hydrate a page from its canonical JSON document
    pub fn from_json(json: &str) -> Result<Page> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockContent, HeroContent, StyleDescriptor};
    use chrono::TimeZone;

    fn hero(id: &str, order: usize) -> Block {
        Block::new(
            id,
            BlockContent::Hero(HeroContent {
                title: "Welcome to Our School".to_string(),
                title_ar: "مرحباً بكم في مدرستنا".to_string(),
                ..Default::default()
            }),
            order,
            StyleDescriptor::default(),
        )
    }

    fn sample_page(blocks: Vec<Block>) -> Page {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Page {
            id: "home-template-1709283600".to_string(),
            title: "Home Page Template".to_string(),
            title_ar: "قالب الصفحة الرئيسية".to_string(),
            title_en: "Home Page Template".to_string(),
            slug: "home-template".to_string(),
            status: PageStatus::Draft,
            created_at: ts,
            updated_at: ts,
            blocks,
        }
    }

    #[test]
    fn test_validate_ok() {
        let page = sample_page(vec![hero("hero-1", 0), hero("hero-2", 1)]);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_id() {
        let page = sample_page(vec![hero("hero-1", 0), hero("hero-1", 1)]);
        assert!(matches!(
            page.validate(),
            Err(PageModelError::DuplicateId(id)) if id == "hero-1"
        ));
    }

    #[test]
    fn test_validate_duplicate_order() {
        let page = sample_page(vec![hero("hero-1", 0), hero("hero-2", 0)]);
        assert!(matches!(
            page.validate(),
            Err(PageModelError::DuplicateOrder(0))
        ));
    }

    #[test]
    fn test_validate_order_gap() {
        let page = sample_page(vec![hero("hero-1", 0), hero("hero-2", 2)]);
        assert!(matches!(
            page.validate(),
            Err(PageModelError::OrderOutOfSequence { index: 1, order: 2 })
        ));
    }

    #[test]
    fn test_status_transitions() {
        assert!(PageStatus::Draft.can_transition_to(PageStatus::Published));
        assert!(PageStatus::Draft.can_transition_to(PageStatus::Archived));
        assert!(PageStatus::Published.can_transition_to(PageStatus::Archived));
        assert!(!PageStatus::Archived.can_transition_to(PageStatus::Draft));
        assert!(!PageStatus::Published.can_transition_to(PageStatus::Draft));
    }

    #[test]
    fn test_slug_validation() {
        assert!(PageMetadata::new("t", "t", "t", "home-template").validate().is_ok());
        assert!(PageMetadata::new("t", "t", "t", "Home Template").validate().is_err());
        assert!(PageMetadata::new("t", "t", "t", "-leading").validate().is_err());
        assert!(PageMetadata::new("t", "t", "t", "").validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let page = sample_page(vec![hero("hero-1", 0)]);
        let json = page.to_json().unwrap();
        let back = Page::from_json(&json).unwrap();
        assert_eq!(page, back);
    }

    #[test]
    fn test_json_emits_arabic_literally() {
        let page = sample_page(vec![hero("hero-1", 0)]);
        let json = page.to_json().unwrap();
        assert!(json.contains("مرحباً بكم في مدرستنا"));
        assert!(!json.contains("\\u0645"));
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!(
            serde_json::to_string(&PageStatus::Draft).unwrap(),
            "\"draft\""
        );
    }

    mod slug_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_kebab_slugs_validate(slug in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}") {
                let meta = PageMetadata::new("t", "t", "t", slug);
                prop_assert!(meta.validate().is_ok());
            }

            #[test]
            fn prop_slugs_with_uppercase_or_spaces_fail(bad in "[A-Z ]{1,8}") {
                let meta = PageMetadata::new("t", "t", "t", bad);
                prop_assert!(meta.validate().is_err());
            }
        }
    }
}
