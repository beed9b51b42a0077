use crate::{
    arabic_to_english, builtin_templates, catalog::templates_in_category, home_page,
    BlockTemplate, TemplateCategory, TemplateStats,
};
use chrono::{DateTime, TimeZone, Utc};
use page_model::{BlockContent, Page, PageMetadata, PageStatus};
use template_engine::{translate, TranslateOptions};

fn fixed_ts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

#[test]
fn test_home_page_structure() {
    let page = home_page(fixed_ts()).unwrap();

    assert_eq!(page.id, "home-template-1709283600");
    assert_eq!(page.slug, "home-template");
    assert_eq!(page.status, PageStatus::Draft);
    assert_eq!(page.block_count(), 7);
    assert!(page.validate().is_ok());

    let ids: Vec<_> = page.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "hero-slider-1",
            "about-section-1",
            "departments-section-1",
            "gallery-section-1",
            "testimonials-section-1",
            "jobs-section-1",
            "contact-section-1",
        ]
    );
    for (i, block) in page.blocks.iter().enumerate() {
        assert_eq!(block.order, i);
    }
}

#[test]
fn test_home_page_stats() {
    let page = home_page(fixed_ts()).unwrap();
    let stats = TemplateStats::for_page(&page);
    assert_eq!(stats.block_count, 7);
    assert_eq!(stats.animated, 7);
    assert_eq!(stats.hover_effects, 6);
    assert_eq!(stats.gradients, 7);
    assert_eq!(
        stats.summary(),
        "7 blocks (7 animated, 6 with hover effects, 7 with gradients)"
    );
}

#[test]
fn test_home_page_round_trips_through_json() {
    let page = home_page(fixed_ts()).unwrap();
    let json = page.to_json().unwrap();
    assert!(json.contains("قالب الصفحة الرئيسية"));
    assert_eq!(Page::from_json(&json).unwrap(), page);
}

#[test]
fn test_english_duplicate_of_home_page() {
    let page = home_page(fixed_ts()).unwrap();
    let map = arabic_to_english();
    let options = TranslateOptions::new().at(fixed_ts());
    let translated = translate(&page, &map, &options).unwrap();

    assert_eq!(translated.id, "home-template-1709283600-translated");
    assert_eq!(translated.block_count(), 7);

    // Arabic copy mapped to English, English copy passed through
    let BlockContent::Hero(hero) = &translated.blocks[0].content else {
        panic!("hero block changed type");
    };
    assert_eq!(hero.title, "Welcome to Our School");
    assert_eq!(hero.title_ar, "Welcome to Our School");
    assert_eq!(hero.subtitle_ar, "Excellence in Education");
    assert_eq!(hero.image, "/placeholder.svg?height=800&width=1600");

    let BlockContent::Contact(contact) = &translated.blocks[6].content else {
        panic!("contact block changed type");
    };
    assert_eq!(contact.title_ar, "Contact Us");
    // identity-mapped contact details survive a covering map
    assert_eq!(contact.phone, "+962 6 4122002");
    assert_eq!(contact.email, "info@namothajia.com");

    let BlockContent::Gallery(gallery) = &translated.blocks[3].content else {
        panic!("gallery block changed type");
    };
    assert_eq!(gallery.images.len(), 6);
    assert_eq!(gallery.images[1].title_ar, "Library");
    for (before, after) in page.blocks.iter().zip(&translated.blocks) {
        assert_eq!(before.styles, after.styles);
        assert_eq!(before.id, after.id);
    }
}

#[test]
fn test_builtin_templates_instantiate() {
    let templates = builtin_templates();
    assert_eq!(templates.len(), 4);
    for template in &templates {
        let meta = PageMetadata::new(
            template.name_en.clone(),
            template.name_ar.clone(),
            template.name_en.clone(),
            template.id.clone(),
        );
        let page = template.instantiate(meta, fixed_ts()).unwrap();
        assert_eq!(page.block_count(), template.specs.len());
        assert!(page.validate().is_ok());
    }
}

#[test]
fn test_templates_filter_by_category() {
    let templates = builtin_templates();
    let heroes = templates_in_category(&templates, &TemplateCategory::Hero);
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].id, "hero-banner-premium");
    assert!(templates_in_category(&templates, &TemplateCategory::Stats).is_empty());
}

#[test]
fn test_template_tags() {
    let templates = builtin_templates();
    let hero: &BlockTemplate = &templates[0];
    assert!(hero.matches_tag("animated"));
    assert!(!hero.matches_tag("gallery"));
}

#[test]
fn test_template_wire_shape() {
    let json = serde_json::to_value(&builtin_templates()[0]).unwrap();
    assert_eq!(json["id"], "hero-banner-premium");
    assert_eq!(json["nameAr"], "بانر رئيسي متميز");
    assert_eq!(json["category"], "hero");
    assert_eq!(json["specs"][0]["type"], "hero");
}
