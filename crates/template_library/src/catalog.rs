//! Catalog of reusable block templates

use chrono::{DateTime, Utc};
use page_model::{
    BlockContent, CtaContent, FeatureItem, FeaturesContent, HeroContent, Page, PageMetadata,
    StyleDescriptor, TestimonialItem, TestimonialsContent,
};
use serde::{Deserialize, Serialize};
use template_engine::{Assembler, BlockSpec, Result};

/// Dashboard grouping for block templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Hero,
    About,
    Features,
    Testimonials,
    Cta,
    Stats,
    Complex,
    Custom(String),
}

impl Default for TemplateCategory {
    fn default() -> Self {
        Self::Complex
    }
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::About => write!(f, "about"),
            Self::Features => write!(f, "features"),
            Self::Testimonials => write!(f, "testimonials"),
            Self::Cta => write!(f, "cta"),
            Self::Stats => write!(f, "stats"),
            Self::Complex => write!(f, "complex"),
            Self::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for TemplateCategory {
    fn from(s: &str) -> Self {
        match s {
            "hero" => Self::Hero,
            "about" => Self::About,
            "features" => Self::Features,
            "testimonials" => Self::Testimonials,
            "cta" => Self::Cta,
            "stats" => Self::Stats,
            "complex" => Self::Complex,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// A reusable, named group of block specs the dashboard can drop into a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTemplate {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub category: TemplateCategory,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub specs: Vec<BlockSpec>,
}

impl BlockTemplate {
    /// Assemble this template's blocks into a standalone draft page
    pub fn instantiate(&self, meta: PageMetadata, at: DateTime<Utc>) -> Result<Page> {
        Assembler::new(meta).at(at).assemble(self.specs.clone())
    }

    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Templates from `templates` matching the given category
pub fn templates_in_category<'a>(
    templates: &'a [BlockTemplate],
    category: &TemplateCategory,
) -> Vec<&'a BlockTemplate> {
    templates.iter().filter(|t| &t.category == category).collect()
}

/// The stock block templates shipped with the dashboard
pub fn builtin_templates() -> Vec<BlockTemplate> {
    vec![hero_banner(), why_choose_us(), parent_testimonials(), apply_cta()]
}

fn hero_banner() -> BlockTemplate {
    BlockTemplate {
        id: "hero-banner-premium".to_string(),
        name_en: "Premium Hero Banner".to_string(),
        name_ar: "بانر رئيسي متميز".to_string(),
        description_en: "Full-screen hero banner with animation, like the home page".to_string(),
        description_ar: "بانر بملء الشاشة مع رسوم متحركة، مثل الصفحة الرئيسية".to_string(),
        category: TemplateCategory::Hero,
        thumbnail: "/modern-school-exterior.png".to_string(),
        tags: vec!["hero".to_string(), "animated".to_string(), "full-screen".to_string()],
        specs: vec![BlockSpec::new(
            BlockContent::Hero(HeroContent {
                title: "Welcome to Al Namothajia School".to_string(),
                title_ar: "مرحباً بكم في المدرسة النموذجية".to_string(),
                subtitle: "Excellence in Education".to_string(),
                subtitle_ar: "التميز في التعليم".to_string(),
                description:
                    "Providing high-quality education and nurturing future leaders since 1990"
                        .to_string(),
                description_ar: "نقدم تعليماً عالي الجودة ونُنشئ قادة المستقبل منذ عام 1990"
                    .to_string(),
                image: "/modern-school-exterior.png".to_string(),
                cta_text: "Learn More".to_string(),
                cta_text_ar: "اعرف المزيد".to_string(),
                cta_link: "#about".to_string(),
            }),
            StyleDescriptor {
                background_color: "gradient".to_string(),
                background_gradient: "from-primary/80 via-background/70 to-background/90"
                    .to_string(),
                animation: "fade-in".to_string(),
                animation_duration: "1000".to_string(),
                text_align: "center".to_string(),
                ..Default::default()
            },
        )],
    }
}

fn why_choose_us() -> BlockTemplate {
    BlockTemplate {
        id: "why-choose-us".to_string(),
        name_en: "Why Choose Us".to_string(),
        name_ar: "لماذا تختارنا".to_string(),
        description_en: "Icon feature grid highlighting the school's strengths".to_string(),
        description_ar: "شبكة مميزات بأيقونات تبرز نقاط قوة المدرسة".to_string(),
        category: TemplateCategory::Features,
        thumbnail: "/modern-school-classroom-with-students.jpg".to_string(),
        tags: vec!["features".to_string(), "icons".to_string()],
        specs: vec![BlockSpec::new(
            BlockContent::Features(FeaturesContent {
                title: "Why Choose Us".to_string(),
                title_ar: "لماذا تختارنا".to_string(),
                subtitle: "What Makes Us Special".to_string(),
                subtitle_ar: "ما يجعلنا مميزين".to_string(),
                description: "Discover what makes our school special".to_string(),
                description_ar: "اكتشف ما يجعل مدرستنا مميزة".to_string(),
                image: "/modern-school-classroom-with-students.jpg".to_string(),
                items: vec![
                    FeatureItem {
                        title: "Accredited Curriculum".to_string(),
                        title_ar: "منهج معتمد".to_string(),
                        description: "Internationally recognized educational programs"
                            .to_string(),
                        description_ar: "برامج تعليمية معترف بها دولياً".to_string(),
                        icon: "graduation-cap".to_string(),
                    },
                    FeatureItem {
                        title: "Expert Teachers".to_string(),
                        title_ar: "معلمون خبراء".to_string(),
                        description: "Highly qualified and experienced educators".to_string(),
                        description_ar: "مربون مؤهلون وذوو خبرة عالية".to_string(),
                        icon: "users".to_string(),
                    },
                    FeatureItem {
                        title: "Award-Winning".to_string(),
                        title_ar: "حائزة على جوائز".to_string(),
                        description: "Recognized for excellence in education".to_string(),
                        description_ar: "معترف بها للتميز في التعليم".to_string(),
                        icon: "trophy".to_string(),
                    },
                ],
            }),
            StyleDescriptor {
                background_color: "gradient".to_string(),
                background_gradient: "from-primary/5 via-accent/5 to-secondary/5".to_string(),
                padding: "24".to_string(),
                border_radius: "2xl".to_string(),
                shadow: "2xl".to_string(),
                animation: "fade-in-up".to_string(),
                animation_duration: "700".to_string(),
                text_align: "center".to_string(),
                max_width: "6xl".to_string(),
                ..Default::default()
            },
        )],
    }
}

fn parent_testimonials() -> BlockTemplate {
    let item = |name: &str, name_ar: &str, comment: &str, comment_ar: &str| TestimonialItem {
        name: name.to_string(),
        name_ar: name_ar.to_string(),
        image: "/placeholder.svg?height=100&width=100".to_string(),
        rating: 5,
        comment: comment.to_string(),
        comment_ar: comment_ar.to_string(),
    };
    BlockTemplate {
        id: "parent-testimonials".to_string(),
        name_en: "Parent Testimonials".to_string(),
        name_ar: "آراء أولياء الأمور".to_string(),
        description_en: "Carousel of parent reviews with star ratings".to_string(),
        description_ar: "عرض متحرك لتقييمات أولياء الأمور مع نجوم التقييم".to_string(),
        category: TemplateCategory::Testimonials,
        thumbnail: "/happy-students-learning-together.jpg".to_string(),
        tags: vec!["testimonials".to_string(), "reviews".to_string()],
        specs: vec![BlockSpec::new(
            BlockContent::Testimonials(TestimonialsContent {
                title: "Parent Testimonials".to_string(),
                title_ar: "آراء أولياء الأمور".to_string(),
                subtitle: "Families Trust in Our Community".to_string(),
                subtitle_ar: "ثقة العائلات في مجتمعنا".to_string(),
                description: "What families say about us".to_string(),
                description_ar: "ماذا تقول العائلات عنا".to_string(),
                items: vec![
                    item(
                        "Sarah Ahmed",
                        "سارة أحمد",
                        "My children have thrived at Al Namothajia School. The teachers are \
                         incredibly supportive and the curriculum is excellent.",
                        "لقد ازدهر أطفالي في المدرسة النموذجية. المعلمون داعمون للغاية والمنهج ممتاز.",
                    ),
                    item(
                        "Mohammed Ali",
                        "محمد علي",
                        "Best educational investment we've made for our children. They love \
                         going to school every day!",
                        "أفضل استثمار تعليمي قمنا به لأطفالنا. يحبون الذهاب إلى المدرسة كل يوم!",
                    ),
                    item(
                        "Fatima Hassan",
                        "فاطمة حسن",
                        "Outstanding facilities and nurturing environment. Highly recommend!",
                        "مرافق متميزة وبيئة رعاية. أنصح بها بشدة!",
                    ),
                ],
            }),
            StyleDescriptor {
                background_color: "gradient".to_string(),
                background_gradient: "from-primary/5 via-accent/5 to-secondary/5".to_string(),
                padding: "24".to_string(),
                border_radius: "2xl".to_string(),
                shadow: "2xl".to_string(),
                animation: "fade-in-up".to_string(),
                animation_duration: "300".to_string(),
                hover_scale: "105".to_string(),
                text_align: "center".to_string(),
                max_width: "6xl".to_string(),
                ..Default::default()
            },
        )],
    }
}

fn apply_cta() -> BlockTemplate {
    BlockTemplate {
        id: "apply-cta".to_string(),
        name_en: "Apply Now Banner".to_string(),
        name_ar: "بانر قدم الآن".to_string(),
        description_en: "Admissions call-to-action banner".to_string(),
        description_ar: "بانر دعوة للتقديم على القبول".to_string(),
        category: TemplateCategory::Cta,
        thumbnail: "/placeholder.svg?height=300&width=600".to_string(),
        tags: vec!["cta".to_string(), "admissions".to_string()],
        specs: vec![BlockSpec::new(
            BlockContent::Cta(CtaContent {
                title: "Ready to Join Our Community?".to_string(),
                title_ar: "هل أنت مستعد للانضمام إلى مجتمعنا؟".to_string(),
                subtitle: "Schedule a Visit".to_string(),
                subtitle_ar: "حدد موعد زيارة".to_string(),
                description: "Apply today and secure a bright future for your child".to_string(),
                description_ar: "قدم اليوم واضمن مستقبلاً مشرقاً لطفلك".to_string(),
                cta_text: "Apply Now".to_string(),
                cta_text_ar: "قدم الآن".to_string(),
                cta_link: "/admissions".to_string(),
                image: "/placeholder.svg?height=500&width=800".to_string(),
            }),
            StyleDescriptor {
                background_color: "gradient".to_string(),
                background_gradient: "from-background via-muted/30 to-background".to_string(),
                padding: "24".to_string(),
                border_radius: "2xl".to_string(),
                shadow: "xl".to_string(),
                animation: "fade-in-up".to_string(),
                animation_duration: "500".to_string(),
                hover_scale: "105".to_string(),
                hover_shadow: "xl".to_string(),
                text_align: "center".to_string(),
                max_width: "5xl".to_string(),
                ..Default::default()
            },
        )],
    }
}
