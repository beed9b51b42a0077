//! Stock Arabic-to-English translation catalog
//!
//! The flat map the dashboard uses to derive English duplicates of the
//! Arabic-authored block templates. Keys are the exact Arabic strings as
//! they appear in template copy; phone numbers, email addresses and plain
//! figures are registered mapped to themselves so a covering map stays
//! covering.

use template_engine::TranslationMap;

/// The built-in Arabic → English map for the stock templates
pub fn arabic_to_english() -> TranslationMap {
    let mut map = TranslationMap::new();

    // Hero
    map.insert("مرحباً بكم في المدرسة النموذجية", "Welcome to Al Namothajia School");
    map.insert("مرحباً بكم في مدرستنا", "Welcome to Our School");
    map.insert("التميز في التعليم", "Excellence in Education");
    map.insert(
        "نقدم تعليماً عالي الجودة ونُنشئ قادة المستقبل منذ عام 1990",
        "Providing high-quality education and nurturing future leaders since 1990",
    );
    map.insert("مرافق حديثة", "Modern Facilities");
    map.insert("تعلم متطور", "Advanced Learning");
    map.insert(
        "مجهزة بأحدث التقنيات والموارد لتجارب تعليمية محسّنة",
        "Equipped with cutting-edge technology and resources for enhanced learning experiences",
    );
    map.insert("كادر مؤهل", "Qualified Staff");
    map.insert("معلمون خبراء", "Expert Teachers");
    map.insert("استكشف المزيد", "Explore More");

    // About
    map.insert("عن المدرسة النموذجية", "About Al Namothajia School");
    map.insert("قصتنا ورؤيتنا", "Our Story and Vision");
    map.insert("من نحن", "About Us");
    map.insert("مميزاتنا", "Our Features");
    map.insert("ما يجعلنا مميزين", "What Makes Us Special");
    map.insert("التميز الأكاديمي", "Academic Excellence");
    map.insert("منهج صارم مصمم لتحدي وإلهام الطلاب", "Rigorous curriculum designed to challenge and inspire students");
    map.insert("تطوير الشخصية", "Character Development");
    map.insert("بناء القيم والأخلاق ومهارات القيادة", "Building values, ethics, and leadership skills");
    map.insert("هيئة تدريس متخصصة", "Dedicated Faculty");
    map.insert("معلمون مؤهلون وذوو خبرة عالية", "Highly qualified and experienced educators");
    map.insert("تعليم شامل", "Holistic Education");
    map.insert("نهج متوازن للأكاديميات والفنون والرياضة", "Balanced approach to academics, arts, and sports");
    map.insert("منظور عالمي", "Global Perspective");
    map.insert("إعداد الطلاب لعالم مترابط", "Preparing students for an interconnected world");

    // Stats
    map.insert("إنجازاتنا", "Our Achievements");
    map.insert("أرقام تتحدث عن نفسها", "Numbers That Speak for Themselves");
    map.insert("30+", "30+");
    map.insert("سنة من التميز", "Years of Excellence");
    map.insert("أقسام متخصصة", "Specialized Departments");
    map.insert("كادر متخصص", "Specialized Staff");
    map.insert("التزام بالجودة", "Commitment to Quality");
    map.insert("طالب سعيد", "Happy Students");
    map.insert("معدل النجاح", "Success Rate");

    // Features
    map.insert("لماذا تختارنا", "Why Choose Us");
    map.insert("اكتشف ما يجعل مدرستنا مميزة", "Discover what makes our school special");
    map.insert("منهج معتمد", "Accredited Curriculum");
    map.insert("برامج تعليمية معترف بها دولياً", "Internationally recognized educational programs");
    map.insert("مربون مؤهلون وذوو خبرة عالية", "Highly qualified and experienced educators");
    map.insert("حائزة على جوائز", "Award-Winning");
    map.insert("معترف بها للتميز في التعليم", "Recognized for excellence in education");

    // Testimonials
    map.insert("آراء أولياء الأمور", "Parent Testimonials");
    map.insert("ثقة العائلات في مجتمعنا", "Families Trust in Our Community");
    map.insert("سارة أحمد", "Sarah Ahmed");
    map.insert("ولي أمر", "Parent");
    map.insert(
        "لقد ازدهر أطفالي في المدرسة النموذجية. المعلمون داعمون للغاية والمنهج ممتاز.",
        "My children have thrived at Al Namothajia School. The teachers are incredibly supportive and the curriculum is excellent.",
    );
    map.insert("محمد علي", "Mohammed Ali");
    map.insert(
        "أفضل استثمار تعليمي قمنا به لأطفالنا. يحبون الذهاب إلى المدرسة كل يوم!",
        "Best educational investment we've made for our children. They love going to school every day!",
    );
    map.insert("فاطمة حسن", "Fatima Hassan");
    map.insert("مرافق متميزة وبيئة رعاية. أنصح بها بشدة!", "Outstanding facilities and nurturing environment. Highly recommend!");

    // CTA
    map.insert("هل أنت مستعد للانضمام إلى مجتمعنا؟", "Ready to Join Our Community?");
    map.insert("قدم اليوم واضمن مستقبلاً مشرقاً لطفلك", "Apply today and secure a bright future for your child");
    map.insert("قدم الآن", "Apply Now");
    map.insert("حدد موعد زيارة", "Schedule a Visit");
    map.insert("اعرف المزيد", "Learn More");
    map.insert("لم تجد ما تبحث عنه؟", "Didn't Find What You're Looking For?");
    map.insert(
        "يمكنك التواصل معنا وسنساعدك في إيجاد ما تحتاجه",
        "You can contact us and we'll help you find what you need",
    );

    // Jobs
    map.insert("فرص التوظيف", "Employment Opportunities");
    map.insert("انضم إلى فريقنا", "Join Our Team");
    map.insert("تصفح الوظائف", "Browse Jobs");
    map.insert("فرص العمل", "Career Opportunities");

    // Contact
    map.insert("تواصل معنا", "Contact Us");
    map.insert("عمان - طريق المطار - ضاحية الأمير علي", "Amman - Airport Road - Prince Ali District");
    map.insert("عمان - طريق المطار", "Amman - Airport Road");
    map.insert("+962 6 4122002", "+962 6 4122002");
    map.insert("info@namothajia.com", "info@namothajia.com");
    map.insert(
        "الأحد - الخميس: 7:00 صباحاً - 3:00 مساءً",
        "Sunday - Thursday: 7:00 AM - 3:00 PM",
    );

    // Gallery
    map.insert("معرض الصور", "Photo Gallery");
    map.insert("مبنى المدرسة", "School Building");
    map.insert("مبنى المدرسة الحديث", "Modern School Building");
    map.insert("المرافق التقنية", "Technology Facilities");
    map.insert("مختبرات الحاسوب والتكنولوجيا", "Computer and Technology Labs");
    map.insert("البيئة الصفية", "Classroom Environment");
    map.insert("فصول دراسية حديثة ومجهزة", "Modern and Equipped Classrooms");
    map.insert("فصول دراسية حديثة", "Modern Classrooms");
    map.insert("المختبرات العلمية", "Science Labs");
    map.insert("تجارب علمية في المختبرات", "Scientific Experiments in Labs");
    map.insert("المكتبة", "Library");
    map.insert("المرافق الرياضية", "Sports Facilities");
    map.insert("الكافتيريا", "Cafeteria");
    map.insert("الملعب", "Playground");

    // Services
    map.insert("خدماتنا", "Our Services");
    map.insert("التوظيف", "Employment");
    map.insert("فرص عمل متميزة في بيئة تعليمية احترافية", "Excellent job opportunities in a professional educational environment");
    map.insert("التدريب", "Training");
    map.insert("برامج تدريبية متخصصة لتطوير المهارات", "Specialized training programs for skill development");

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_nonempty() {
        let map = arabic_to_english();
        assert!(map.len() > 60);
        assert_eq!(map.lookup("تواصل معنا"), Some("Contact Us"));
    }

    #[test]
    fn test_identity_entries_for_contact_details() {
        let map = arabic_to_english();
        assert_eq!(map.lookup("+962 6 4122002"), Some("+962 6 4122002"));
        assert_eq!(map.lookup("info@namothajia.com"), Some("info@namothajia.com"));
    }
}
