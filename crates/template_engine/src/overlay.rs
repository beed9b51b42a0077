//! Translation overlay engine
//!
//! Walks a source page and produces a structurally identical page in a
//! second language. Every content field is classified at the type level:
//! the match below names each field of each payload explicitly, so adding a
//! field to any block type forces a decision here about whether it is copy
//! or opaque data. Styles, ids, order, links, image URLs, icons, categories
//! and ratings pass through byte-identical; copy is looked up verbatim in
//! the [`TranslationMap`].

use crate::{Result, TemplateEngineError, TranslationMap};
use chrono::{DateTime, Utc};
use page_model::{
    Block, BlockContent, CardItem, CardsContent, ContactContent, CtaContent, FeatureItem,
    FeaturesContent, GalleryContent, GalleryImage, HeroContent, Page, PageStatus,
    TestimonialItem, TestimonialsContent,
};
use serde::{Deserialize, Serialize};

/// Policy for translatable leaves absent from the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnMissing {
    /// Copy the source string through unchanged (lossy but non-fatal)
    KeepOriginal,
    /// Abort with [`TemplateEngineError::TranslationGap`]
    Fail,
}

impl Default for OnMissing {
    fn default() -> Self {
        OnMissing::KeepOriginal
    }
}

/// Options for [`translate`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateOptions {
    pub on_missing: OnMissing,
    /// Override the derived id of the translated page
    pub page_id: Option<String>,
    /// Pin the translated page's timestamps instead of reading the clock
    pub timestamp: Option<DateTime<Utc>>,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat every missing key as an error
    pub fn strict() -> Self {
        Self {
            on_missing: OnMissing::Fail,
            ..Default::default()
        }
    }

    pub fn with_page_id(mut self, id: impl Into<String>) -> Self {
        self.page_id = Some(id.into());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Derive a new page from `page` with every translatable leaf substituted
/// through `map`.
///
/// The result is an independent draft aggregate: fresh id and timestamps,
/// the same block ids, ordering and styles, and content transformed
/// element-wise (lists keep their length and order). The source page is
/// checked against the structural invariants first; a malformed source is
/// reported, never patched up. With a pinned timestamp and page id the
/// function is pure: identical inputs produce identical output.
pub fn translate(page: &Page, map: &TranslationMap, options: &TranslateOptions) -> Result<Page> {
    page.validate().map_err(TemplateEngineError::Schema)?;

    let overlay = Overlay {
        map,
        on_missing: options.on_missing,
    };

    let mut blocks = Vec::with_capacity(page.blocks.len());
    for (index, block) in page.blocks.iter().enumerate() {
        let path = format!("blocks[{}].content", index);
        blocks.push(Block::new(
            block.id.clone(),
            overlay.content(&block.content, &path)?,
            block.order,
            block.styles.clone(),
        ));
    }

    let timestamp = options.timestamp.unwrap_or_else(Utc::now);
    Ok(Page {
        id: options
            .page_id
            .clone()
            .unwrap_or_else(|| format!("{}-translated", page.id)),
        title: overlay.leaf("title", &page.title)?,
        title_ar: overlay.leaf("titleAr", &page.title_ar)?,
        title_en: overlay.leaf("titleEn", &page.title_en)?,
        slug: page.slug.clone(),
        status: PageStatus::Draft,
        created_at: timestamp,
        updated_at: timestamp,
        blocks,
    })
}

struct Overlay<'a> {
    map: &'a TranslationMap,
    on_missing: OnMissing,
}

impl Overlay<'_> {
    /// Substitute one translatable leaf
    fn leaf(&self, path: &str, source: &str) -> Result<String> {
        match self.map.lookup(source) {
            Some(target) => Ok(target.to_string()),
            None => match self.on_missing {
                OnMissing::KeepOriginal => {
                    tracing::debug!(field = path, "no translation entry, keeping source text");
                    Ok(source.to_string())
                }
                OnMissing::Fail => Err(TemplateEngineError::TranslationGap {
                    field_path: path.to_string(),
                    missing_key: source.to_string(),
                }),
            },
        }
    }

    /// Transform one block payload. Exhaustive over both the block types
    /// and every field of every payload; opaque fields are cloned, copy
    /// fields go through [`Overlay::leaf`].
    fn content(&self, content: &BlockContent, path: &str) -> Result<BlockContent> {
        match content {
            BlockContent::Hero(c) => Ok(BlockContent::Hero(HeroContent {
                title: self.leaf(&format!("{path}.title"), &c.title)?,
                title_ar: self.leaf(&format!("{path}.titleAr"), &c.title_ar)?,
                subtitle: self.leaf(&format!("{path}.subtitle"), &c.subtitle)?,
                subtitle_ar: self.leaf(&format!("{path}.subtitleAr"), &c.subtitle_ar)?,
                description: self.leaf(&format!("{path}.description"), &c.description)?,
                description_ar: self.leaf(&format!("{path}.descriptionAr"), &c.description_ar)?,
                image: c.image.clone(),
                cta_text: self.leaf(&format!("{path}.ctaText"), &c.cta_text)?,
                cta_text_ar: self.leaf(&format!("{path}.ctaTextAr"), &c.cta_text_ar)?,
                cta_link: c.cta_link.clone(),
            })),
            BlockContent::Features(c) => {
                let mut items = Vec::with_capacity(c.items.len());
                for (i, item) in c.items.iter().enumerate() {
                    let p = format!("{path}.items[{i}]");
                    items.push(FeatureItem {
                        title: self.leaf(&format!("{p}.title"), &item.title)?,
                        title_ar: self.leaf(&format!("{p}.titleAr"), &item.title_ar)?,
                        description: self.leaf(&format!("{p}.description"), &item.description)?,
                        description_ar: self
                            .leaf(&format!("{p}.descriptionAr"), &item.description_ar)?,
                        icon: item.icon.clone(),
                    });
                }
                Ok(BlockContent::Features(FeaturesContent {
                    title: self.leaf(&format!("{path}.title"), &c.title)?,
                    title_ar: self.leaf(&format!("{path}.titleAr"), &c.title_ar)?,
                    subtitle: self.leaf(&format!("{path}.subtitle"), &c.subtitle)?,
                    subtitle_ar: self.leaf(&format!("{path}.subtitleAr"), &c.subtitle_ar)?,
                    description: self.leaf(&format!("{path}.description"), &c.description)?,
                    description_ar: self
                        .leaf(&format!("{path}.descriptionAr"), &c.description_ar)?,
                    image: c.image.clone(),
                    items,
                }))
            }
            BlockContent::Cards(c) => {
                let mut items = Vec::with_capacity(c.items.len());
                for (i, item) in c.items.iter().enumerate() {
                    let p = format!("{path}.items[{i}]");
                    items.push(CardItem {
                        title: self.leaf(&format!("{p}.title"), &item.title)?,
                        title_ar: self.leaf(&format!("{p}.titleAr"), &item.title_ar)?,
                        description: self.leaf(&format!("{p}.description"), &item.description)?,
                        description_ar: self
                            .leaf(&format!("{p}.descriptionAr"), &item.description_ar)?,
                        image: item.image.clone(),
                        link: item.link.clone(),
                    });
                }
                Ok(BlockContent::Cards(CardsContent {
                    title: self.leaf(&format!("{path}.title"), &c.title)?,
                    title_ar: self.leaf(&format!("{path}.titleAr"), &c.title_ar)?,
                    subtitle: self.leaf(&format!("{path}.subtitle"), &c.subtitle)?,
                    subtitle_ar: self.leaf(&format!("{path}.subtitleAr"), &c.subtitle_ar)?,
                    description: self.leaf(&format!("{path}.description"), &c.description)?,
                    description_ar: self
                        .leaf(&format!("{path}.descriptionAr"), &c.description_ar)?,
                    items,
                }))
            }
            BlockContent::Gallery(c) => {
                let mut images = Vec::with_capacity(c.images.len());
                for (i, image) in c.images.iter().enumerate() {
                    let p = format!("{path}.images[{i}]");
                    images.push(GalleryImage {
                        url: image.url.clone(),
                        title: self.leaf(&format!("{p}.title"), &image.title)?,
                        title_ar: self.leaf(&format!("{p}.titleAr"), &image.title_ar)?,
                        description: self.leaf(&format!("{p}.description"), &image.description)?,
                        description_ar: self
                            .leaf(&format!("{p}.descriptionAr"), &image.description_ar)?,
                        category: image.category.clone(),
                    });
                }
                Ok(BlockContent::Gallery(GalleryContent {
                    title: self.leaf(&format!("{path}.title"), &c.title)?,
                    title_ar: self.leaf(&format!("{path}.titleAr"), &c.title_ar)?,
                    subtitle: self.leaf(&format!("{path}.subtitle"), &c.subtitle)?,
                    subtitle_ar: self.leaf(&format!("{path}.subtitleAr"), &c.subtitle_ar)?,
                    description: self.leaf(&format!("{path}.description"), &c.description)?,
                    description_ar: self
                        .leaf(&format!("{path}.descriptionAr"), &c.description_ar)?,
                    images,
                }))
            }
            BlockContent::Testimonials(c) => {
                let mut items = Vec::with_capacity(c.items.len());
                for (i, item) in c.items.iter().enumerate() {
                    let p = format!("{path}.items[{i}]");
                    items.push(TestimonialItem {
                        name: self.leaf(&format!("{p}.name"), &item.name)?,
                        name_ar: self.leaf(&format!("{p}.nameAr"), &item.name_ar)?,
                        image: item.image.clone(),
                        rating: item.rating,
                        comment: self.leaf(&format!("{p}.comment"), &item.comment)?,
                        comment_ar: self.leaf(&format!("{p}.commentAr"), &item.comment_ar)?,
                    });
                }
                Ok(BlockContent::Testimonials(TestimonialsContent {
                    title: self.leaf(&format!("{path}.title"), &c.title)?,
                    title_ar: self.leaf(&format!("{path}.titleAr"), &c.title_ar)?,
                    subtitle: self.leaf(&format!("{path}.subtitle"), &c.subtitle)?,
                    subtitle_ar: self.leaf(&format!("{path}.subtitleAr"), &c.subtitle_ar)?,
                    description: self.leaf(&format!("{path}.description"), &c.description)?,
                    description_ar: self
                        .leaf(&format!("{path}.descriptionAr"), &c.description_ar)?,
                    items,
                }))
            }
            BlockContent::Cta(c) => Ok(BlockContent::Cta(CtaContent {
                title: self.leaf(&format!("{path}.title"), &c.title)?,
                title_ar: self.leaf(&format!("{path}.titleAr"), &c.title_ar)?,
                subtitle: self.leaf(&format!("{path}.subtitle"), &c.subtitle)?,
                subtitle_ar: self.leaf(&format!("{path}.subtitleAr"), &c.subtitle_ar)?,
                description: self.leaf(&format!("{path}.description"), &c.description)?,
                description_ar: self.leaf(&format!("{path}.descriptionAr"), &c.description_ar)?,
                cta_text: self.leaf(&format!("{path}.ctaText"), &c.cta_text)?,
                cta_text_ar: self.leaf(&format!("{path}.ctaTextAr"), &c.cta_text_ar)?,
                cta_link: c.cta_link.clone(),
                image: c.image.clone(),
            })),
            BlockContent::Contact(c) => Ok(BlockContent::Contact(ContactContent {
                title: self.leaf(&format!("{path}.title"), &c.title)?,
                title_ar: self.leaf(&format!("{path}.titleAr"), &c.title_ar)?,
                subtitle: self.leaf(&format!("{path}.subtitle"), &c.subtitle)?,
                subtitle_ar: self.leaf(&format!("{path}.subtitleAr"), &c.subtitle_ar)?,
                description: self.leaf(&format!("{path}.description"), &c.description)?,
                description_ar: self.leaf(&format!("{path}.descriptionAr"), &c.description_ar)?,
                phone: self.leaf(&format!("{path}.phone"), &c.phone)?,
                email: self.leaf(&format!("{path}.email"), &c.email)?,
                address: self.leaf(&format!("{path}.address"), &c.address)?,
                address_ar: self.leaf(&format!("{path}.addressAr"), &c.address_ar)?,
                hours: self.leaf(&format!("{path}.hours"), &c.hours)?,
                hours_ar: self.leaf(&format!("{path}.hoursAr"), &c.hours_ar)?,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Assembler, BlockSpec};
    use chrono::TimeZone;
    use page_model::{schema_for, BlockType, PageMetadata, StyleDescriptor};

    fn fixed_ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn hero_styles() -> StyleDescriptor {
        StyleDescriptor {
            background_color: "gradient".to_string(),
            background_gradient: "from-primary/80 via-background/70 to-background/90".to_string(),
            animation: "fade-in".to_string(),
            animation_duration: "1000".to_string(),
            text_align: "center".to_string(),
            ..Default::default()
        }
    }

    fn hero_page() -> Page {
        let content = BlockContent::Hero(HeroContent {
            title: "Welcome to Our School".to_string(),
            title_ar: "مرحباً بكم في مدرستنا".to_string(),
            subtitle: "Excellence in Education".to_string(),
            subtitle_ar: "التميز في التعليم".to_string(),
            description: "Building tomorrow's leaders today".to_string(),
            description_ar: "بناء قادة الغد اليوم".to_string(),
            image: "/placeholder.svg?height=800&width=1600".to_string(),
            cta_text: "Explore More".to_string(),
            cta_text_ar: "استكشف المزيد".to_string(),
            cta_link: "#about".to_string(),
        });
        Assembler::new(PageMetadata::new(
            "Home Page Template",
            "قالب الصفحة الرئيسية",
            "Home Page Template",
            "home-template",
        ))
        .at(fixed_ts())
        .assemble(vec![BlockSpec::new(content, hero_styles()).with_id("hero-slider-1")])
        .unwrap()
    }

    #[test]
    fn test_hero_title_translated_opaque_untouched() {
        let page = hero_page();
        let map = TranslationMap::from_pairs([(
            "Welcome to Our School",
            "مرحباً بكم في مدرستنا",
        )]);
        let translated = translate(&page, &map, &TranslateOptions::new()).unwrap();

        let BlockContent::Hero(c) = &translated.blocks[0].content else {
            panic!("block type changed");
        };
        assert_eq!(c.title, "مرحباً بكم في مدرستنا");
        assert_eq!(c.image, "/placeholder.svg?height=800&width=1600");
        assert_eq!(c.cta_link, "#about");
        assert_eq!(translated.blocks[0].styles.animation, "fade-in");
        assert_eq!(translated.blocks[0].styles, page.blocks[0].styles);
        assert_eq!(translated.blocks[0].id, page.blocks[0].id);
        assert_eq!(translated.blocks[0].order, page.blocks[0].order);
    }

    #[test]
    fn test_missing_key_keeps_original_by_default() {
        let page = hero_page();
        let translated = translate(&page, &TranslationMap::new(), &TranslateOptions::new()).unwrap();
        let BlockContent::Hero(c) = &translated.blocks[0].content else {
            panic!("block type changed");
        };
        assert_eq!(c.title, "Welcome to Our School");
        assert_eq!(c.subtitle, "Excellence in Education");
    }

    #[test]
    fn test_missing_key_fails_in_strict_mode() {
        let page = hero_page();
        let map = TranslationMap::from_pairs([(
            "Welcome to Our School",
            "مرحباً بكم في مدرستنا",
        )]);
        let err = translate(&page, &map, &TranslateOptions::strict()).unwrap_err();
        match err {
            TemplateEngineError::TranslationGap {
                field_path,
                missing_key,
            } => {
                assert_eq!(field_path, "blocks[0].content.titleAr");
                assert_eq!(missing_key, "مرحباً بكم في مدرستنا");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_translated_page_is_a_fresh_draft_aggregate() {
        let page = hero_page();
        let translated = translate(
            &page,
            &TranslationMap::new(),
            &TranslateOptions::new().at(fixed_ts()),
        )
        .unwrap();
        assert_ne!(translated.id, page.id);
        assert_eq!(translated.id, format!("{}-translated", page.id));
        assert_eq!(translated.status, PageStatus::Draft);
        assert_eq!(translated.slug, page.slug);
        assert!(translated.validate().is_ok());
    }

    #[test]
    fn test_translate_is_deterministic_with_pinned_inputs() {
        let page = hero_page();
        let map = TranslationMap::from_pairs([("Explore More", "استكشف المزيد")]);
        let options = TranslateOptions::new().at(fixed_ts()).with_page_id("home-ar");
        let a = translate(&page, &map, &options).unwrap();
        let b = translate(&page, &map, &options).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.id, "home-ar");
    }

    #[test]
    fn test_translate_rejects_malformed_source() {
        let mut page = hero_page();
        page.blocks[0].order = 7;
        let result = translate(&page, &TranslationMap::new(), &TranslateOptions::new());
        assert!(matches!(result, Err(TemplateEngineError::Schema(_))));
    }

    #[test]
    fn test_gallery_items_translated_element_wise() {
        let facilities = [
            ("Modern Classrooms", "فصول دراسية حديثة"),
            ("Library", "المكتبة"),
            ("Sports Facilities", "المرافق الرياضية"),
            ("Science Labs", "المختبرات العلمية"),
            ("Cafeteria", "الكافتيريا"),
            ("Playground", "الملعب"),
        ];
        let images = facilities
            .iter()
            .enumerate()
            .map(|(i, (title, title_ar))| GalleryImage {
                url: format!("/placeholder.svg?img={i}"),
                title: title.to_string(),
                title_ar: title_ar.to_string(),
                description: format!("About {title}"),
                description_ar: format!("حول {title_ar}"),
                category: if i % 2 == 0 { "Facilities" } else { "Activities" }.to_string(),
            })
            .collect::<Vec<_>>();
        let content = BlockContent::Gallery(GalleryContent {
            title: "Photo Gallery".to_string(),
            title_ar: "معرض الصور".to_string(),
            subtitle: "Explore Our Facilities".to_string(),
            subtitle_ar: "استكشف مرافقنا".to_string(),
            description: "A visual tour".to_string(),
            description_ar: "جولة مصورة".to_string(),
            images: images.clone(),
        });
        let page = Assembler::new(PageMetadata::new("G", "G", "G", "gallery"))
            .at(fixed_ts())
            .assemble(vec![BlockSpec::new(content, StyleDescriptor::default())])
            .unwrap();

        let map = TranslationMap::from_pairs(
            facilities.iter().map(|(en, ar)| (ar.to_string(), en.to_string())),
        );
        let translated = translate(&page, &map, &TranslateOptions::new()).unwrap();

        let BlockContent::Gallery(c) = &translated.blocks[0].content else {
            panic!("block type changed");
        };
        assert_eq!(c.images.len(), 6);
        for (i, image) in c.images.iter().enumerate() {
            // opaque leaves byte-identical, order preserved
            assert_eq!(image.url, images[i].url);
            assert_eq!(image.category, images[i].category);
            // the Arabic caption was mapped back to English
            assert_eq!(image.title_ar, images[i].title);
            // the English caption had no entry and passed through
            assert_eq!(image.title, images[i].title);
        }
    }

    /// The exhaustive match above and the registry's field classification
    /// must agree: every field the registry calls translatable is rewritten
    /// when the map covers it, and every opaque field survives unchanged.
    #[test]
    fn test_overlay_agrees_with_registry() {
        let specs = BlockType::ALL
            .iter()
            .map(|bt| BlockSpec::new(sample_content(*bt), StyleDescriptor::default()))
            .collect();
        let page = Assembler::new(PageMetadata::new("P", "P", "P", "all-types"))
            .at(fixed_ts())
            .assemble(specs)
            .unwrap();

        // map every translatable leaf to a marked target
        let mut map = TranslationMap::new();
        for block in &page.blocks {
            let schema = schema_for(block.block_type());
            for &field in schema.translatable {
                let value = block.content.scalar(field).unwrap();
                map.insert(value, format!("{value} [x]"));
            }
            if let Some(items) = &schema.items {
                for i in 0..block.content.item_count() {
                    for &field in items.translatable {
                        let value = block.content.item_scalar(i, field).unwrap();
                        map.insert(value, format!("{value} [x]"));
                    }
                }
            }
        }

        let translated = translate(&page, &map, &TranslateOptions::new()).unwrap();
        for (source, result) in page.blocks.iter().zip(&translated.blocks) {
            let schema = schema_for(source.block_type());
            for &field in schema.translatable {
                let before = source.content.scalar(field).unwrap();
                let after = result.content.scalar(field).unwrap();
                assert_eq!(after, format!("{before} [x]"), "{field} not rewritten");
            }
            for &field in schema.opaque {
                assert_eq!(
                    source.content.scalar(field),
                    result.content.scalar(field),
                    "{field} was rewritten"
                );
            }
            if let Some(items) = &schema.items {
                assert_eq!(source.content.item_count(), result.content.item_count());
                for i in 0..source.content.item_count() {
                    for &field in items.translatable {
                        let before = source.content.item_scalar(i, field).unwrap();
                        let after = result.content.item_scalar(i, field).unwrap();
                        assert_eq!(after, format!("{before} [x]"));
                    }
                    for &field in items.opaque {
                        assert_eq!(
                            source.content.item_scalar(i, field),
                            result.content.item_scalar(i, field)
                        );
                    }
                }
            }
        }
    }

    /// A payload of the given type with every field set to a unique value
    fn sample_content(block_type: BlockType) -> BlockContent {
        let v = |field: &str| format!("{block_type} {field}");
        let item = |i: usize, field: &str| format!("{block_type} item{i} {field}");
        match block_type {
            BlockType::Hero => BlockContent::Hero(HeroContent {
                title: v("title"),
                title_ar: v("titleAr"),
                subtitle: v("subtitle"),
                subtitle_ar: v("subtitleAr"),
                description: v("description"),
                description_ar: v("descriptionAr"),
                image: v("image"),
                cta_text: v("ctaText"),
                cta_text_ar: v("ctaTextAr"),
                cta_link: v("ctaLink"),
            }),
            BlockType::Features => BlockContent::Features(FeaturesContent {
                title: v("title"),
                title_ar: v("titleAr"),
                subtitle: v("subtitle"),
                subtitle_ar: v("subtitleAr"),
                description: v("description"),
                description_ar: v("descriptionAr"),
                image: v("image"),
                items: (0..2)
                    .map(|i| FeatureItem {
                        title: item(i, "title"),
                        title_ar: item(i, "titleAr"),
                        description: item(i, "description"),
                        description_ar: item(i, "descriptionAr"),
                        icon: item(i, "icon"),
                    })
                    .collect(),
            }),
            BlockType::Cards => BlockContent::Cards(CardsContent {
                title: v("title"),
                title_ar: v("titleAr"),
                subtitle: v("subtitle"),
                subtitle_ar: v("subtitleAr"),
                description: v("description"),
                description_ar: v("descriptionAr"),
                items: (0..2)
                    .map(|i| CardItem {
                        title: item(i, "title"),
                        title_ar: item(i, "titleAr"),
                        description: item(i, "description"),
                        description_ar: item(i, "descriptionAr"),
                        image: item(i, "image"),
                        link: item(i, "link"),
                    })
                    .collect(),
            }),
            BlockType::Gallery => BlockContent::Gallery(GalleryContent {
                title: v("title"),
                title_ar: v("titleAr"),
                subtitle: v("subtitle"),
                subtitle_ar: v("subtitleAr"),
                description: v("description"),
                description_ar: v("descriptionAr"),
                images: (0..2)
                    .map(|i| GalleryImage {
                        url: item(i, "url"),
                        title: item(i, "title"),
                        title_ar: item(i, "titleAr"),
                        description: item(i, "description"),
                        description_ar: item(i, "descriptionAr"),
                        category: item(i, "category"),
                    })
                    .collect(),
            }),
            BlockType::Testimonials => BlockContent::Testimonials(TestimonialsContent {
                title: v("title"),
                title_ar: v("titleAr"),
                subtitle: v("subtitle"),
                subtitle_ar: v("subtitleAr"),
                description: v("description"),
                description_ar: v("descriptionAr"),
                items: (0..2)
                    .map(|i| TestimonialItem {
                        name: item(i, "name"),
                        name_ar: item(i, "nameAr"),
                        image: item(i, "image"),
                        rating: 5,
                        comment: item(i, "comment"),
                        comment_ar: item(i, "commentAr"),
                    })
                    .collect(),
            }),
            BlockType::Cta => BlockContent::Cta(CtaContent {
                title: v("title"),
                title_ar: v("titleAr"),
                subtitle: v("subtitle"),
                subtitle_ar: v("subtitleAr"),
                description: v("description"),
                description_ar: v("descriptionAr"),
                cta_text: v("ctaText"),
                cta_text_ar: v("ctaTextAr"),
                cta_link: v("ctaLink"),
                image: v("image"),
            }),
            BlockType::Contact => BlockContent::Contact(ContactContent {
                title: v("title"),
                title_ar: v("titleAr"),
                subtitle: v("subtitle"),
                subtitle_ar: v("subtitleAr"),
                description: v("description"),
                description_ar: v("descriptionAr"),
                phone: v("phone"),
                email: v("email"),
                address: v("address"),
                address_ar: v("addressAr"),
                hours: v("hours"),
                hours_ar: v("hoursAr"),
            }),
        }
    }
}
