//! Template Engine - Assembly and translation overlay for page templates
//!
//! This crate turns authored block specs into [`page_model::Page`]
//! aggregates and derives localized copies of them. The two operations are
//! pure transformations: [`Assembler::assemble`] composes an ordered block
//! list into a draft page, and [`translate`] overlays a
//! [`TranslationMap`] onto a page, substituting translatable copy and
//! carrying opaque data through byte-identical.
//!
//! # Example
//!
//! ```rust
//! use page_model::{BlockContent, HeroContent, PageMetadata, StyleDescriptor};
//! use template_engine::{translate, Assembler, BlockSpec, TranslateOptions, TranslationMap};
//!
//! let hero = HeroContent {
//!     title: "Welcome to Our School".into(),
//!     title_ar: "مرحباً بكم في مدرستنا".into(),
//!     subtitle: "Excellence in Education".into(),
//!     subtitle_ar: "التميز في التعليم".into(),
//!     description: "Quality education".into(),
//!     description_ar: "تعليم عالي الجودة".into(),
//!     image: "/placeholder.svg?height=800&width=1600".into(),
//!     cta_text: "Explore More".into(),
//!     cta_text_ar: "استكشف المزيد".into(),
//!     cta_link: "#about".into(),
//! };
//!
//! let page = Assembler::new(PageMetadata::new("Home", "الرئيسية", "Home", "home"))
//!     .assemble(vec![BlockSpec::new(
//!         BlockContent::Hero(hero),
//!         StyleDescriptor::default(),
//!     )])
//!     .unwrap();
//!
//! let map = TranslationMap::from_pairs([("Welcome to Our School", "مرحباً بكم في مدرستنا")]);
//! let translated = translate(&page, &map, &TranslateOptions::new()).unwrap();
//!
//! assert_eq!(
//!     translated.blocks[0].content.scalar("title"),
//!     Some("مرحباً بكم في مدرستنا"),
//! );
//! // opaque data is untouched
//! assert_eq!(translated.blocks[0].styles, page.blocks[0].styles);
//! ```

mod assembler;
mod error;
mod overlay;
mod translation_map;

pub use assembler::{Assembler, BlockSpec};
pub use error::{Result, TemplateEngineError};
pub use overlay::{translate, OnMissing, TranslateOptions};
pub use translation_map::TranslationMap;
