//! The stock bilingual home page template

use chrono::{DateTime, Utc};
use page_model::{
    BlockContent, CardItem, CardsContent, ContactContent, CtaContent, FeatureItem,
    FeaturesContent, GalleryContent, GalleryImage, HeroContent, Page, PageMetadata,
    StyleDescriptor, TestimonialItem, TestimonialsContent,
};
use template_engine::{Assembler, BlockSpec, Result};

/// Build the seven-block home page template at the given timestamp.
///
/// The page id derives from the slug and the timestamp
/// (`home-template-{unix}`), so pinning the timestamp makes the whole
/// template reproducible.
pub fn home_page(at: DateTime<Utc>) -> Result<Page> {
    let meta = PageMetadata::new(
        "Home Page Template",
        "قالب الصفحة الرئيسية",
        "Home Page Template",
        "home-template",
    );
    Assembler::new(meta).at(at).assemble(vec![
        BlockSpec::new(hero(), hero_styles()).with_id("hero-slider-1"),
        BlockSpec::new(about(), about_styles()).with_id("about-section-1"),
        BlockSpec::new(departments(), departments_styles()).with_id("departments-section-1"),
        BlockSpec::new(gallery(), gallery_styles()).with_id("gallery-section-1"),
        BlockSpec::new(testimonials(), testimonials_styles()).with_id("testimonials-section-1"),
        BlockSpec::new(jobs(), jobs_styles()).with_id("jobs-section-1"),
        BlockSpec::new(contact(), contact_styles()).with_id("contact-section-1"),
    ])
}

fn hero() -> BlockContent {
    BlockContent::Hero(HeroContent {
        title: "Welcome to Our School".to_string(),
        title_ar: "مرحباً بكم في مدرستنا".to_string(),
        subtitle: "Excellence in Education".to_string(),
        subtitle_ar: "التميز في التعليم".to_string(),
        description: "Building tomorrow's leaders today with quality education".to_string(),
        description_ar: "بناء قادة الغد اليوم من خلال تعليم عالي الجودة".to_string(),
        image: "/placeholder.svg?height=800&width=1600".to_string(),
        cta_text: "Explore More".to_string(),
        cta_text_ar: "استكشف المزيد".to_string(),
        cta_link: "#about".to_string(),
    })
}

fn about() -> BlockContent {
    BlockContent::Features(FeaturesContent {
        title: "About Us".to_string(),
        title_ar: "من نحن".to_string(),
        subtitle: "Excellence in Education".to_string(),
        subtitle_ar: "التميز في التعليم".to_string(),
        description: "We are committed to providing the highest quality education".to_string(),
        description_ar: "نحن ملتزمون بتقديم أعلى مستويات الجودة في التعليم".to_string(),
        image: "/placeholder.svg?height=600&width=800".to_string(),
        items: vec![
            FeatureItem {
                title: "Our Mission".to_string(),
                title_ar: "مهمتنا".to_string(),
                description: "To provide excellent education and nurture future leaders"
                    .to_string(),
                description_ar: "تقديم تعليم متميز ورعاية قادة المستقبل".to_string(),
                icon: "target".to_string(),
            },
            FeatureItem {
                title: "Our Vision".to_string(),
                title_ar: "رؤيتنا".to_string(),
                description: "To be the leading educational institution in the region"
                    .to_string(),
                description_ar: "أن نكون المؤسسة التعليمية الرائدة في المنطقة".to_string(),
                icon: "heart".to_string(),
            },
            FeatureItem {
                title: "Our Values".to_string(),
                title_ar: "قيمنا".to_string(),
                description: "Excellence, integrity, and innovation in everything we do"
                    .to_string(),
                description_ar: "التميز والنزاهة والابتكار في كل ما نقوم به".to_string(),
                icon: "award".to_string(),
            },
            FeatureItem {
                title: "Our Community".to_string(),
                title_ar: "مجتمعنا".to_string(),
                description: "A diverse and inclusive learning environment".to_string(),
                description_ar: "بيئة تعليمية متنوعة وشاملة".to_string(),
                icon: "users".to_string(),
            },
        ],
    })
}

fn departments() -> BlockContent {
    BlockContent::Cards(CardsContent {
        title: "Our Departments".to_string(),
        title_ar: "أقسامنا".to_string(),
        subtitle: "Specialized Excellence".to_string(),
        subtitle_ar: "التميز المتخصص".to_string(),
        description: "Explore our specialized departments offering comprehensive services"
            .to_string(),
        description_ar: "استكشف أقسامنا المتخصصة التي تقدم خدمات شاملة".to_string(),
        items: vec![
            CardItem {
                title: "Medical Department".to_string(),
                title_ar: "القسم الطبي".to_string(),
                description: "Complete healthcare services for students".to_string(),
                description_ar: "خدمات رعاية صحية كاملة للطلاب".to_string(),
                image: "/placeholder.svg?height=400&width=600".to_string(),
                link: "/departments/medical".to_string(),
            },
            CardItem {
                title: "Science Department".to_string(),
                title_ar: "القسم العلمي".to_string(),
                description: "Advanced scientific education and labs".to_string(),
                description_ar: "تعليم علمي متقدم ومختبرات حديثة".to_string(),
                image: "/placeholder.svg?height=400&width=600".to_string(),
                link: "/departments/science".to_string(),
            },
            CardItem {
                title: "Experimental Department".to_string(),
                title_ar: "القسم التجريبي".to_string(),
                description: "Innovation and experimentation".to_string(),
                description_ar: "الابتكار والتجربة".to_string(),
                image: "/placeholder.svg?height=400&width=600".to_string(),
                link: "/departments/experimental".to_string(),
            },
        ],
    })
}

fn gallery() -> BlockContent {
    let image = |title: &str, title_ar: &str, description: &str, description_ar: &str,
                 category: &str| GalleryImage {
        url: "/placeholder.svg?height=400&width=600".to_string(),
        title: title.to_string(),
        title_ar: title_ar.to_string(),
        description: description.to_string(),
        description_ar: description_ar.to_string(),
        category: category.to_string(),
    };
    BlockContent::Gallery(GalleryContent {
        title: "Photo Gallery".to_string(),
        title_ar: "معرض الصور".to_string(),
        subtitle: "Explore Our Facilities".to_string(),
        subtitle_ar: "استكشف مرافقنا".to_string(),
        description: "A visual tour of our school facilities and activities".to_string(),
        description_ar: "جولة مصورة في مرافق المدرسة وأنشطتها".to_string(),
        images: vec![
            image(
                "Modern Classrooms",
                "فصول دراسية حديثة",
                "State-of-the-art learning spaces",
                "مساحات تعليمية حديثة",
                "Facilities",
            ),
            image(
                "Library",
                "المكتبة",
                "Extensive collection of books and resources",
                "مجموعة واسعة من الكتب والموارد",
                "Facilities",
            ),
            image(
                "Sports Facilities",
                "المرافق الرياضية",
                "Modern sports and recreation areas",
                "مناطق رياضية وترفيهية حديثة",
                "Activities",
            ),
            image(
                "Science Labs",
                "المختبرات العلمية",
                "Fully equipped laboratories",
                "مختبرات مجهزة بالكامل",
                "Facilities",
            ),
            image(
                "Cafeteria",
                "الكافتيريا",
                "Healthy and delicious meals",
                "وجبات صحية ولذيذة",
                "Facilities",
            ),
            image(
                "Playground",
                "الملعب",
                "Safe and fun play areas",
                "مناطق لعب آمنة وممتعة",
                "Activities",
            ),
        ],
    })
}

fn testimonials() -> BlockContent {
    BlockContent::Testimonials(TestimonialsContent {
        title: "What Parents Say".to_string(),
        title_ar: "آراء أولياء الأمور".to_string(),
        subtitle: "Parent Reviews".to_string(),
        subtitle_ar: "تقييمات أولياء الأمور".to_string(),
        description: "We are proud of the trust and satisfaction of parents".to_string(),
        description_ar: "نفخر بثقة أولياء الأمور ورضاهم".to_string(),
        items: vec![
            TestimonialItem {
                name: "Ahmed Al-Mansouri".to_string(),
                name_ar: "أحمد المنصوري".to_string(),
                image: "/placeholder.svg?height=100&width=100".to_string(),
                rating: 5,
                comment: "Excellent school with dedicated teachers and modern facilities"
                    .to_string(),
                comment_ar: "مدرسة ممتازة مع معلمين متفانين ومرافق حديثة".to_string(),
            },
            TestimonialItem {
                name: "Fatima Al-Khatib".to_string(),
                name_ar: "فاطمة الخطيب".to_string(),
                image: "/placeholder.svg?height=100&width=100".to_string(),
                rating: 5,
                comment: "My children love going to school every day".to_string(),
                comment_ar: "أطفالي يحبون الذهاب إلى المدرسة كل يوم".to_string(),
            },
            TestimonialItem {
                name: "Omar Al-Rashid".to_string(),
                name_ar: "عمر الراشد".to_string(),
                image: "/placeholder.svg?height=100&width=100".to_string(),
                rating: 5,
                comment: "Great communication and excellent academic results".to_string(),
                comment_ar: "تواصل رائع ونتائج أكاديمية ممتازة".to_string(),
            },
        ],
    })
}

fn jobs() -> BlockContent {
    BlockContent::Cta(CtaContent {
        title: "Career Opportunities".to_string(),
        title_ar: "فرص العمل".to_string(),
        subtitle: "Join Our Team".to_string(),
        subtitle_ar: "انضم إلى فريقنا".to_string(),
        description: "Explore our job openings and service requests".to_string(),
        description_ar: "استكشف فرص العمل وطلبات الخدمة المتاحة".to_string(),
        cta_text: "View Opportunities".to_string(),
        cta_text_ar: "عرض الفرص".to_string(),
        cta_link: "/jobs".to_string(),
        image: "/placeholder.svg?height=500&width=800".to_string(),
    })
}

fn contact() -> BlockContent {
    BlockContent::Contact(ContactContent {
        title: "Contact Us".to_string(),
        title_ar: "تواصل معنا".to_string(),
        subtitle: "We're Here to Help".to_string(),
        subtitle_ar: "نحن هنا لمساعدتك".to_string(),
        description: "Get in touch with us for any inquiries or questions".to_string(),
        description_ar: "تواصل معنا لأي استفسارات أو أسئلة".to_string(),
        phone: "+962 6 4122002".to_string(),
        email: "info@namothajia.com".to_string(),
        address: "Amman - Airport Road".to_string(),
        address_ar: "عمان - طريق المطار".to_string(),
        hours: "Sunday - Thursday: 7:00 AM - 3:00 PM".to_string(),
        hours_ar: "الأحد - الخميس: 7:00 صباحاً - 3:00 مساءً".to_string(),
    })
}

// Every section shares the gradient band look; the per-block bags below
// only override what differs.
fn gradient_section() -> StyleDescriptor {
    StyleDescriptor {
        background_color: "gradient".to_string(),
        text_color: "foreground".to_string(),
        shadow: "2xl".to_string(),
        animation: "fade-in-up".to_string(),
        hover_shadow: "2xl".to_string(),
        text_align: "center".to_string(),
        backdrop_blur: "sm".to_string(),
        ..Default::default()
    }
}

fn hero_styles() -> StyleDescriptor {
    StyleDescriptor {
        background_gradient: "from-primary/80 via-background/70 to-background/90".to_string(),
        padding: "none".to_string(),
        margin: "none".to_string(),
        shadow: "none".to_string(),
        animation: "fade-in".to_string(),
        animation_duration: "1000".to_string(),
        hover_shadow: "none".to_string(),
        backdrop_blur: "none".to_string(),
        ..gradient_section()
    }
}

fn about_styles() -> StyleDescriptor {
    StyleDescriptor {
        background_gradient: "from-primary/5 via-accent/5 to-secondary/5".to_string(),
        padding: "32".to_string(),
        border_radius: "3xl".to_string(),
        animation_duration: "700".to_string(),
        animation_delay: "200".to_string(),
        hover_scale: "105".to_string(),
        hover_translate_y: "-4".to_string(),
        text_align: "left".to_string(),
        max_width: "7xl".to_string(),
        ..gradient_section()
    }
}

fn departments_styles() -> StyleDescriptor {
    StyleDescriptor {
        background_gradient: "from-background via-muted/30 to-background".to_string(),
        padding: "32".to_string(),
        border_radius: "2xl".to_string(),
        border_width: "2".to_string(),
        border_color: "primary/30".to_string(),
        animation_duration: "700".to_string(),
        animation_delay: "150".to_string(),
        hover_scale: "105".to_string(),
        hover_translate_y: "-16".to_string(),
        max_width: "6xl".to_string(),
        ..gradient_section()
    }
}

fn gallery_styles() -> StyleDescriptor {
    StyleDescriptor {
        background_gradient: "from-background via-muted/20 to-background".to_string(),
        padding: "24".to_string(),
        border_radius: "2xl".to_string(),
        border_width: "1".to_string(),
        border_color: "border/50".to_string(),
        animation_duration: "500".to_string(),
        animation_delay: "100".to_string(),
        hover_scale: "102".to_string(),
        hover_translate_y: "-12".to_string(),
        ..gradient_section()
    }
}

fn testimonials_styles() -> StyleDescriptor {
    StyleDescriptor {
        background_gradient: "from-primary/5 via-accent/5 to-secondary/5".to_string(),
        padding: "24".to_string(),
        border_radius: "2xl".to_string(),
        animation_duration: "300".to_string(),
        animation_delay: "100".to_string(),
        hover_scale: "105".to_string(),
        hover_translate_y: "-8".to_string(),
        max_width: "6xl".to_string(),
        ..gradient_section()
    }
}

fn jobs_styles() -> StyleDescriptor {
    StyleDescriptor {
        background_gradient: "from-background via-muted/30 to-background".to_string(),
        padding: "24".to_string(),
        border_radius: "2xl".to_string(),
        border_width: "1".to_string(),
        border_color: "border/50".to_string(),
        shadow: "xl".to_string(),
        animation_duration: "500".to_string(),
        animation_delay: "150".to_string(),
        hover_scale: "105".to_string(),
        hover_shadow: "xl".to_string(),
        max_width: "5xl".to_string(),
        backdrop_blur: "none".to_string(),
        ..gradient_section()
    }
}

fn contact_styles() -> StyleDescriptor {
    StyleDescriptor {
        background_gradient: "from-slate-50 via-blue-50/30 to-purple-50/20".to_string(),
        padding: "32".to_string(),
        border_radius: "3xl".to_string(),
        border_width: "2".to_string(),
        border_color: "blue-500/20".to_string(),
        animation_duration: "500".to_string(),
        hover_scale: "103".to_string(),
        text_align: "left".to_string(),
        max_width: "7xl".to_string(),
        backdrop_blur: "xl".to_string(),
        ..gradient_section()
    }
}
