//! Course - Catalog Entry

/// Course difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    /// Get the translation key for the level badge
    pub fn label_key(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "courses.beginner",
            CourseLevel::Intermediate => "courses.intermediate",
            CourseLevel::Advanced => "courses.advanced",
        }
    }
}

/// A course offered in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Stable unique identifier, sent as `course_id`
    pub id: u32,
    /// Canonical (English) title, sent as `course_title`
    pub title: &'static str,
    /// Translation key for the displayed title
    pub title_key: &'static str,
    /// Translation key for the description
    pub description_key: &'static str,
    /// Cover image reference
    pub image: &'static str,
    pub level: CourseLevel,
    /// Course length in weeks
    pub duration_weeks: u8,
    pub rating: f32,
    pub student_count: u32,
    /// Embeddable intro video
    pub intro_video_url: &'static str,
}

impl Course {
    /// Rating rounded to one decimal for display
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}
