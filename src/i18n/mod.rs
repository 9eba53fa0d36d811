//! i18n - Internationalization Module
//!
//! Provides translation lookups using a HashMap built from a single
//! `key -> (en, ru)` table, so both languages always share one key set.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Russian
    Ru,
}

impl Language {
    /// Persisted code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Parse a persisted code; anything unrecognized yields `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    /// Short label for the language toggle
    pub fn short_label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ru => "RU",
        }
    }

    /// The other language. Binary flip: revisit when a third language lands.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}

/// Flip between the two supported languages
pub fn toggle_language(current: Language) -> Language {
    current.toggled()
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Translation table (key, en, ru)
const TABLE: &[(&str, &str, &str)] = &[
    // App
    ("app.title", "Online Learning", "Онлайн Обучение"),
    ("app.brand", "ONLINE LEARNING", "ONLINE LEARNING"),

    // Navigation
    ("nav.home", "Home", "Главная"),
    ("nav.schedule", "Schedule", "Расписание"),
    ("nav.reviews", "Reviews", "Отзывы"),
    ("nav.courses", "Courses", "Курсы"),
    ("nav.getStarted", "Get Started", "Начать"),

    // Hero
    ("hero.title", "Learn Without Limits", "Учись Без Границ"),
    (
        "hero.subtitle",
        "Master new skills with interactive video lessons from world-class instructors",
        "Осваивай новые навыки с интерактивными видеоуроками от лучших инструкторов",
    ),
    ("hero.exploreCourses", "Explore Courses", "Все курсы"),
    ("hero.watchDemo", "Watch Demo", "Смотреть демо"),

    // Features
    ("features.videoTitle", "HD Video Lessons", "HD Видеоуроки"),
    (
        "features.videoDesc",
        "Watch high-quality video content anytime, anywhere",
        "Смотрите качественный контент в любое время и в любом месте",
    ),
    ("features.scheduleTitle", "Flexible Schedule", "Гибкое Расписание"),
    (
        "features.scheduleDesc",
        "Learn at your own pace with our convenient timetable",
        "Учитесь в своем темпе с удобным графиком",
    ),
    ("features.certificateTitle", "Certificate", "Сертификат"),
    (
        "features.certificateDesc",
        "Get recognized with industry-standard certificates",
        "Получите признанный в индустрии сертификат",
    ),

    // Courses
    ("courses.title", "Our Courses", "Наши Курсы"),
    (
        "courses.subtitle",
        "Choose from our selection of expert-led courses",
        "Выберите из нашей подборки курсов от экспертов",
    ),
    ("courses.beginner", "Beginner", "Начальный"),
    ("courses.intermediate", "Intermediate", "Средний"),
    ("courses.advanced", "Advanced", "Продвинутый"),
    ("courses.watchIntro", "Watch Intro", "Смотреть введение"),
    ("courses.enrollNow", "Enroll Now", "Записаться"),
    ("courses.webDev", "Web Development Basics", "Основы Веб-Разработки"),
    (
        "courses.webDevDesc",
        "Learn HTML, CSS, and JavaScript from scratch",
        "Изучите HTML, CSS и JavaScript с нуля",
    ),
    ("courses.reactAdv", "React Advanced Patterns", "Продвинутые Паттерны React"),
    (
        "courses.reactAdvDesc",
        "Master modern React development techniques",
        "Освойте современные техники разработки на React",
    ),
    ("courses.uiux", "UI/UX Design Principles", "Принципы UI/UX Дизайна"),
    (
        "courses.uiuxDesc",
        "Create beautiful and functional user interfaces",
        "Создавайте красивые и функциональные интерфейсы",
    ),
    ("courses.students", "{count} students", "{count} студентов"),
    ("courses.weeks", "{count} weeks", "{count} нед."),
    ("courses.introTitle", "Course Intro", "Введение в курс"),
    ("courses.introVideo", "Intro video", "Вводное видео"),

    // Schedule
    ("schedule.title", "Weekly Schedule", "Недельное Расписание"),
    (
        "schedule.subtitle",
        "Plan your learning journey with our live sessions",
        "Планируйте свое обучение с нашими живыми сессиями",
    ),
    ("schedule.day", "Day", "День"),
    ("schedule.time", "Time", "Время"),
    ("schedule.course", "Course", "Курс"),
    ("schedule.instructor", "Instructor", "Инструктор"),
    ("schedule.monday", "Monday", "Понедельник"),
    ("schedule.tuesday", "Tuesday", "Вторник"),
    ("schedule.wednesday", "Wednesday", "Среда"),
    ("schedule.thursday", "Thursday", "Четверг"),
    ("schedule.friday", "Friday", "Пятница"),

    // Reviews
    ("reviews.title", "Student Reviews", "Отзывы Студентов"),
    (
        "reviews.subtitle",
        "See what our students say about their experience",
        "Узнайте, что говорят наши студенты о своем опыте",
    ),
    (
        "reviews.review1",
        "Amazing courses! The instructors are very professional and the material is well-structured.",
        "Потрясающие курсы! Преподаватели очень профессиональные, а материал хорошо структурирован.",
    ),
    (
        "reviews.review2",
        "I learned so much in just a few weeks. Highly recommend to anyone starting their coding journey!",
        "Я так многому научился всего за несколько недель. Всем рекомендую, кто начинает путь в программировании!",
    ),
    (
        "reviews.review3",
        "Great platform with excellent video quality. The schedule is flexible and convenient.",
        "Отличная платформа с превосходным качеством видео. Расписание гибкое и удобное.",
    ),

    // Enrollment
    ("enrollment.dialogTitle", "Enroll in {course}", "Запись на курс: {course}"),
    ("enrollment.name", "Full Name", "Полное имя"),
    ("enrollment.email", "Email", "Email"),
    ("enrollment.phone", "Phone (optional)", "Телефон (необязательно)"),
    ("enrollment.enroll", "Enroll", "Записаться"),
    ("enrollment.cancel", "Cancel", "Отмена"),
    ("enrollment.submitting", "Submitting...", "Отправка..."),
    ("enrollment.successTitle", "Success!", "Успех!"),
    ("enrollment.successDesc", "You have been enrolled in", "Вы записались на курс"),
    ("enrollment.errorTitle", "Error", "Ошибка"),
    (
        "enrollment.errorFields",
        "Please fill in all required fields",
        "Пожалуйста, заполните все обязательные поля",
    ),
    (
        "enrollment.errorFailed",
        "Failed to enroll. Please try again.",
        "Не удалось записаться. Попробуйте еще раз.",
    ),
    (
        "enrollment.errorBusy",
        "Your enrollment is already being submitted",
        "Заявка уже отправляется",
    ),

    // Footer
    (
        "footer.tagline",
        "Empowering learners worldwide with quality education",
        "Расширяем возможности учащихся по всему миру с качественным образованием",
    ),
    ("footer.courses", "Courses", "Курсы"),
    ("footer.webDev", "Web Development", "Веб-разработка"),
    ("footer.design", "Design", "Дизайн"),
    ("footer.business", "Business", "Бизнес"),
    ("footer.marketing", "Marketing", "Маркетинг"),
    ("footer.company", "Company", "Компания"),
    ("footer.about", "About Us", "О нас"),
    ("footer.careers", "Careers", "Карьера"),
    ("footer.blog", "Blog", "Блог"),
    ("footer.contact", "Contact", "Контакты"),
    ("footer.connect", "Connect", "Связаться"),
    (
        "footer.copyright",
        "© 2024 Online Learning. All rights reserved.",
        "© 2024 Online Learning. Все права защищены.",
    ),
];

/// Initialize translations (key -> (en, ru))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    TABLE.iter().map(|&(key, en, ru)| (key, (en, ru))).collect()
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// The full set of display strings for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary {
    language: Language,
}

impl Dictionary {
    /// Language this dictionary renders
    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a key. Unknown keys render as "???".
    pub fn get(&self, key: &str) -> &'static str {
        match translations().get(key) {
            Some(&(en, ru)) => match self.language {
                Language::En => en,
                Language::Ru => ru,
            },
            None => {
                tracing::warn!(key, "Missing translation key");
                "???"
            }
        }
    }

    /// Whether the key exists
    pub fn contains(&self, key: &str) -> bool {
        translations().contains_key(key)
    }

    /// All keys, in table order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|&(key, _, _)| key)
    }

    /// Translate and substitute `{name}` placeholders
    ///
    /// # Example
    /// ```
    /// use online_learning::i18n::{get_dictionary, Language};
    /// let dict = get_dictionary(Language::En);
    /// assert_eq!(dict.format("courses.students", &[("count", "42")]), "42 students");
    /// ```
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.get(key).to_string();
        for (name, value) in args {
            result = result.replace(&format!("{{{name}}}"), value);
        }
        result
    }
}

/// Dictionary for a language
pub fn get_dictionary(language: Language) -> Dictionary {
    Dictionary { language }
}

/// Translate a key
pub fn t(language: Language, key: &str) -> &'static str {
    get_dictionary(language).get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_dictionaries_share_key_set() {
        let en: BTreeSet<_> = get_dictionary(Language::En).keys().collect();
        let ru: BTreeSet<_> = get_dictionary(Language::Ru).keys().collect();
        assert_eq!(en, ru);
        assert_eq!(en.len(), TABLE.len(), "duplicate key in translation table");
    }

    #[test]
    fn test_every_key_translated() {
        for key in get_dictionary(Language::En).keys() {
            assert!(!t(Language::En, key).is_empty(), "English missing for '{key}'");
            assert!(!t(Language::Ru, key).is_empty(), "Russian missing for '{key}'");
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(t(Language::En, "nav.home"), "Home");
        assert_eq!(t(Language::Ru, "nav.home"), "Главная");
        assert_eq!(
            t(Language::En, "enrollment.errorFields"),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn test_unknown_key_is_visible() {
        assert_eq!(t(Language::En, "nav.nope"), "???");
        assert!(!get_dictionary(Language::Ru).contains("nav.nope"));
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(toggle_language(Language::En), Language::Ru);
        assert_eq!(toggle_language(Language::Ru), Language::En);
        for lang in [Language::En, Language::Ru] {
            assert_eq!(toggle_language(toggle_language(lang)), lang);
        }
    }

    #[test]
    fn test_code_roundtrip_and_rejects() {
        assert_eq!(Language::from_code("ru"), Some(Language::Ru));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_format_placeholders() {
        let ru = get_dictionary(Language::Ru);
        assert_eq!(
            ru.format("enrollment.dialogTitle", &[("course", "React")]),
            "Запись на курс: React"
        );
    }
}
