//! Typed content payloads for every block type
//!
//! Each block type gets its own payload struct and a variant in the closed
//! [`BlockContent`] union, so a transform that walks content has to account
//! for every field of every type in an exhaustive match instead of relying
//! on field-name conventions. Wire names are camelCase to match the stored
//! page documents (`titleAr`, `ctaText`, ...).

use serde::{Deserialize, Serialize};

// =============================================================================
// Block Type
// =============================================================================

/// Enumeration of all block types a page can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Hero,
    Features,
    Cards,
    Gallery,
    Testimonials,
    Cta,
    Contact,
}

impl BlockType {
    /// All block types, in registry order
    pub const ALL: [BlockType; 7] = [
        BlockType::Hero,
        BlockType::Features,
        BlockType::Cards,
        BlockType::Gallery,
        BlockType::Testimonials,
        BlockType::Cta,
        BlockType::Contact,
    ];

    /// The wire tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Features => "features",
            BlockType::Cards => "cards",
            BlockType::Gallery => "gallery",
            BlockType::Testimonials => "testimonials",
            BlockType::Cta => "cta",
            BlockType::Contact => "contact",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Item records for list-valued content
// =============================================================================

/// One feature entry (mission/vision style tile with an icon)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub title_ar: String,
    pub description: String,
    pub description_ar: String,
    /// Icon name from the dashboard's icon set ("target", "heart", ...)
    pub icon: String,
}

/// One linked card (a department, a program, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardItem {
    pub title: String,
    pub title_ar: String,
    pub description: String,
    pub description_ar: String,
    pub image: String,
    pub link: String,
}

/// One gallery image with localized caption
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub title: String,
    pub title_ar: String,
    pub description: String,
    pub description_ar: String,
    /// Grouping label shown as a filter chip ("Facilities", "Activities")
    pub category: String,
}

/// One testimonial with a numeric star rating
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialItem {
    pub name: String,
    pub name_ar: String,
    pub image: String,
    pub rating: u8,
    pub comment: String,
    pub comment_ar: String,
}

// =============================================================================
// Content payloads
// =============================================================================

/// Full-bleed hero banner with a call to action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub description: String,
    pub description_ar: String,
    pub image: String,
    pub cta_text: String,
    pub cta_text_ar: String,
    pub cta_link: String,
}

/// Section header plus a grid of icon features
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesContent {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub description: String,
    pub description_ar: String,
    pub image: String,
    pub items: Vec<FeatureItem>,
}

/// Section header plus a row of linked cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsContent {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub description: String,
    pub description_ar: String,
    pub items: Vec<CardItem>,
}

/// Section header plus a filterable image grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryContent {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub description: String,
    pub description_ar: String,
    pub images: Vec<GalleryImage>,
}

/// Section header plus a carousel of testimonials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub description: String,
    pub description_ar: String,
    pub items: Vec<TestimonialItem>,
}

/// Call-to-action banner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub description: String,
    pub description_ar: String,
    pub cta_text: String,
    pub cta_text_ar: String,
    pub cta_link: String,
    pub image: String,
}

/// Contact details section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub title: String,
    pub title_ar: String,
    pub subtitle: String,
    pub subtitle_ar: String,
    pub description: String,
    pub description_ar: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub address_ar: String,
    pub hours: String,
    pub hours_ar: String,
}

// =============================================================================
// Closed content union
// =============================================================================

/// The content payload of a block, keyed by block type.
///
/// Serialized adjacently so the wire shape keeps `type` and `content` as
/// sibling keys inside the block object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum BlockContent {
    Hero(HeroContent),
    Features(FeaturesContent),
    Cards(CardsContent),
    Gallery(GalleryContent),
    Testimonials(TestimonialsContent),
    Cta(CtaContent),
    Contact(ContactContent),
}

impl BlockContent {
    /// The type tag of this payload
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockContent::Hero(_) => BlockType::Hero,
            BlockContent::Features(_) => BlockType::Features,
            BlockContent::Cards(_) => BlockType::Cards,
            BlockContent::Gallery(_) => BlockType::Gallery,
            BlockContent::Testimonials(_) => BlockType::Testimonials,
            BlockContent::Cta(_) => BlockType::Cta,
            BlockContent::Contact(_) => BlockType::Contact,
        }
    }

    /// Look up a top-level string field by its wire name.
    ///
    /// Returns `None` when the field does not exist for this block type.
    /// Numeric fields (testimonial ratings) are not addressable here.
    pub fn scalar(&self, field: &str) -> Option<&str> {
        match self {
            BlockContent::Hero(c) => match field {
                "title" => Some(&c.title),
                "titleAr" => Some(&c.title_ar),
                "subtitle" => Some(&c.subtitle),
                "subtitleAr" => Some(&c.subtitle_ar),
                "description" => Some(&c.description),
                "descriptionAr" => Some(&c.description_ar),
                "image" => Some(&c.image),
                "ctaText" => Some(&c.cta_text),
                "ctaTextAr" => Some(&c.cta_text_ar),
                "ctaLink" => Some(&c.cta_link),
                _ => None,
            },
            BlockContent::Features(c) => match field {
                "title" => Some(&c.title),
                "titleAr" => Some(&c.title_ar),
                "subtitle" => Some(&c.subtitle),
                "subtitleAr" => Some(&c.subtitle_ar),
                "description" => Some(&c.description),
                "descriptionAr" => Some(&c.description_ar),
                "image" => Some(&c.image),
                _ => None,
            },
            BlockContent::Cards(c) => match field {
                "title" => Some(&c.title),
                "titleAr" => Some(&c.title_ar),
                "subtitle" => Some(&c.subtitle),
                "subtitleAr" => Some(&c.subtitle_ar),
                "description" => Some(&c.description),
                "descriptionAr" => Some(&c.description_ar),
                _ => None,
            },
            BlockContent::Gallery(c) => match field {
                "title" => Some(&c.title),
                "titleAr" => Some(&c.title_ar),
                "subtitle" => Some(&c.subtitle),
                "subtitleAr" => Some(&c.subtitle_ar),
                "description" => Some(&c.description),
                "descriptionAr" => Some(&c.description_ar),
                _ => None,
            },
            BlockContent::Testimonials(c) => match field {
                "title" => Some(&c.title),
                "titleAr" => Some(&c.title_ar),
                "subtitle" => Some(&c.subtitle),
                "subtitleAr" => Some(&c.subtitle_ar),
                "description" => Some(&c.description),
                "descriptionAr" => Some(&c.description_ar),
                _ => None,
            },
            BlockContent::Cta(c) => match field {
                "title" => Some(&c.title),
                "titleAr" => Some(&c.title_ar),
                "subtitle" => Some(&c.subtitle),
                "subtitleAr" => Some(&c.subtitle_ar),
                "description" => Some(&c.description),
                "descriptionAr" => Some(&c.description_ar),
                "ctaText" => Some(&c.cta_text),
                "ctaTextAr" => Some(&c.cta_text_ar),
                "ctaLink" => Some(&c.cta_link),
                "image" => Some(&c.image),
                _ => None,
            },
            BlockContent::Contact(c) => match field {
                "title" => Some(&c.title),
                "titleAr" => Some(&c.title_ar),
                "subtitle" => Some(&c.subtitle),
                "subtitleAr" => Some(&c.subtitle_ar),
                "description" => Some(&c.description),
                "descriptionAr" => Some(&c.description_ar),
                "phone" => Some(&c.phone),
                "email" => Some(&c.email),
                "address" => Some(&c.address),
                "addressAr" => Some(&c.address_ar),
                "hours" => Some(&c.hours),
                "hoursAr" => Some(&c.hours_ar),
                _ => None,
            },
        }
    }

    /// Number of list elements carried by this payload (0 for list-less types)
    pub fn item_count(&self) -> usize {
        match self {
            BlockContent::Features(c) => c.items.len(),
            BlockContent::Cards(c) => c.items.len(),
            BlockContent::Gallery(c) => c.images.len(),
            BlockContent::Testimonials(c) => c.items.len(),
            _ => 0,
        }
    }

    /// Look up a string field of the list element at `index` by wire name
    pub fn item_scalar(&self, index: usize, field: &str) -> Option<&str> {
        match self {
            BlockContent::Features(c) => {
                let item = c.items.get(index)?;
                match field {
                    "title" => Some(&item.title),
                    "titleAr" => Some(&item.title_ar),
                    "description" => Some(&item.description),
                    "descriptionAr" => Some(&item.description_ar),
                    "icon" => Some(&item.icon),
                    _ => None,
                }
            }
            BlockContent::Cards(c) => {
                let item = c.items.get(index)?;
                match field {
                    "title" => Some(&item.title),
                    "titleAr" => Some(&item.title_ar),
                    "description" => Some(&item.description),
                    "descriptionAr" => Some(&item.description_ar),
                    "image" => Some(&item.image),
                    "link" => Some(&item.link),
                    _ => None,
                }
            }
            BlockContent::Gallery(c) => {
                let image = c.images.get(index)?;
                match field {
                    "url" => Some(&image.url),
                    "title" => Some(&image.title),
                    "titleAr" => Some(&image.title_ar),
                    "description" => Some(&image.description),
                    "descriptionAr" => Some(&image.description_ar),
                    "category" => Some(&image.category),
                    _ => None,
                }
            }
            BlockContent::Testimonials(c) => {
                let item = c.items.get(index)?;
                match field {
                    "name" => Some(&item.name),
                    "nameAr" => Some(&item.name_ar),
                    "image" => Some(&item.image),
                    "comment" => Some(&item.comment),
                    "commentAr" => Some(&item.comment_ar),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
